//! Magic-bitboard sliding piece attack tables.

pub mod attacks;
pub mod loader;
pub mod precompute;
pub mod search;
pub mod structs;

pub use attacks::{get_king_attacks, get_knight_attacks};
pub use loader::load_magic_tables;
pub use structs::MagicTables;
