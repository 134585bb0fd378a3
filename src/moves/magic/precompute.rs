//! Magic number search and magic-table construction.
//!
//! Builds, for every square and each of the two slider families, a blocker
//! mask, magic multiplier, shift, and a dense attack table indexed by
//! `((occupancy & mask) * magic) >> shift`.

use super::attacks::{bishop_attacks_per_square, rook_attacks_per_square};
use super::search::find_magic_number_for_square;
use super::structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};
use rand::{SeedableRng, rngs::StdRng};

/// How to seed the magic-number search. `Fixed` gives reproducible tables
/// (used under `deterministic_magic` and in tests); `Random` draws fresh
/// entropy each run, which still works since any valid magic number is as
/// good as any other at runtime.
#[derive(Debug, Clone, Copy)]
pub enum MagicTableSeed {
    Fixed(u64),
    Random,
}

fn rng_for(seed: MagicTableSeed) -> StdRng {
    match seed {
        MagicTableSeed::Fixed(s) => StdRng::seed_from_u64(s),
        MagicTableSeed::Random => {
            let mut bytes = [0u8; 32];
            rand::RngCore::fill_bytes(&mut rand::rng(), &mut bytes);
            StdRng::from_seed(bytes)
        }
    }
}

fn ray_mask(rank: isize, file: isize, dr: isize, df: isize) -> u64 {
    let mut mask = 0u64;
    let mut r = rank + dr;
    let mut f = file + df;
    while (0..8).contains(&r) && (0..8).contains(&f) {
        let next_r = r + dr;
        let next_f = f + df;
        if !(0..8).contains(&next_r) || !(0..8).contains(&next_f) {
            break; // (r, f) sits on the edge; its occupancy never matters
        }
        mask |= 1u64 << (r * 8 + f);
        r = next_r;
        f = next_f;
    }
    mask
}

fn rook_mask(square: usize) -> u64 {
    let rank = (square / 8) as isize;
    let file = (square % 8) as isize;
    ray_mask(rank, file, 1, 0)
        | ray_mask(rank, file, -1, 0)
        | ray_mask(rank, file, 0, 1)
        | ray_mask(rank, file, 0, -1)
}

fn bishop_mask(square: usize) -> u64 {
    let rank = (square / 8) as isize;
    let file = (square % 8) as isize;
    ray_mask(rank, file, 1, 1)
        | ray_mask(rank, file, -1, -1)
        | ray_mask(rank, file, 1, -1)
        | ray_mask(rank, file, -1, 1)
}

/// Enumerates every subset of `mask`'s set bits via the carry-rippler trick.
fn subsets_of(mask: u64) -> Vec<u64> {
    let mut out = Vec::with_capacity(1 << mask.count_ones());
    let mut sub: u64 = 0;
    loop {
        out.push(sub);
        sub = sub.wrapping_sub(mask) & mask;
        if sub == 0 {
            break;
        }
    }
    out
}

fn build_entry<R: rand::RngCore>(
    square: usize,
    mask: u64,
    attacks_for: impl Fn(usize, u64) -> u64,
    rng: &mut R,
) -> Result<MagicEntry, String> {
    let shift = 64 - mask.count_ones();
    let blockers = subsets_of(mask);
    let attacks: Vec<u64> = blockers.iter().map(|&b| attacks_for(square, b)).collect();

    let magic = find_magic_number_for_square(&blockers, &attacks, shift, rng)?;

    let table_size = 1usize << mask.count_ones();
    let mut table = vec![0u64; table_size];
    for (b, a) in blockers.iter().zip(attacks.iter()) {
        let index = (b.wrapping_mul(magic) >> shift) as usize;
        table[index] = *a;
    }

    Ok(MagicEntry {
        magic,
        shift,
        mask,
        table: table.into_boxed_slice(),
    })
}

pub fn generate_magic_tables(seed: MagicTableSeed) -> Result<MagicTables, String> {
    let mut rng = rng_for(seed);

    let mut rook_entries = Vec::with_capacity(64);
    let mut bishop_entries = Vec::with_capacity(64);

    for square in 0..64 {
        rook_entries.push(build_entry(
            square,
            rook_mask(square),
            rook_attacks_per_square,
            &mut rng,
        )?);
        bishop_entries.push(build_entry(
            square,
            bishop_mask(square),
            bishop_attacks_per_square,
            &mut rng,
        )?);
    }

    Ok(MagicTables {
        rook: RookMagicTables {
            entries: rook_entries,
        },
        bishop: BishopMagicTables {
            entries: bishop_entries,
        },
    })
}
