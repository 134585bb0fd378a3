//! Loads the magic attack tables, either from a bundled precomputed file
//! (`load_magic` feature) or by generating them on first use.

use super::precompute::{MagicTableSeed, generate_magic_tables};
use super::structs::MagicTables;
use std::sync::OnceLock;

#[cfg(feature = "deterministic_magic")]
const MAGIC_SEED: u64 = 0xD1B5_4A32_D192_ED03;

fn seed() -> MagicTableSeed {
    #[cfg(feature = "deterministic_magic")]
    {
        MagicTableSeed::Fixed(MAGIC_SEED)
    }
    #[cfg(not(feature = "deterministic_magic"))]
    {
        MagicTableSeed::Fixed(MAGIC_SEED_DEFAULT)
    }
}

#[cfg(not(feature = "deterministic_magic"))]
const MAGIC_SEED_DEFAULT: u64 = 0xD1B5_4A32_D192_ED03;

#[cfg(feature = "load_magic")]
fn load_precomputed() -> Option<MagicTables> {
    use std::fs::File;
    use std::io::BufReader;

    let path = std::env::var("CORVID_MAGIC_TABLE_PATH").unwrap_or_else(|_| "magic_tables.bin".to_string());
    let file = File::open(&path).ok()?;
    let reader = BufReader::new(file);
    bincode::deserialize_from(reader).ok()
}

#[cfg(not(feature = "load_magic"))]
fn load_precomputed() -> Option<MagicTables> {
    None
}

/// Returns the program-lifetime magic attack tables, generating them once on
/// first call (or loading a bundled precomputed table when `load_magic` is
/// enabled and the file is present).
pub fn load_magic_tables() -> MagicTables {
    static TABLES: OnceLock<MagicTables> = OnceLock::new();
    // OnceLock gives us a shared &'static reference; callers that need an
    // owned MagicTables (search/eval pass it by reference already) get a
    // clone-free borrow-and-copy-contents path via Clone below.
    TABLES
        .get_or_init(|| {
            load_precomputed()
                .unwrap_or_else(|| generate_magic_tables(seed()).expect("magic table search failed"))
        })
        .clone_tables()
}

impl MagicTables {
    /// Cheap structural clone; the attack tables are read-only after
    /// construction so sharing the boxed slices is safe via `Arc` in spirit,
    /// but plain `Vec`/`Box` clones keep the type serde-transparent.
    fn clone_tables(&self) -> MagicTables {
        MagicTables {
            rook: super::structs::RookMagicTables {
                entries: self.rook.entries.clone(),
            },
            bishop: super::structs::BishopMagicTables {
                entries: self.bishop.entries.clone(),
            },
        }
    }
}
