//! Rotation and permutation tables for the three Threefish widths.
//!
//! These are the published Skein constants and must be used exactly; they
//! are not derived from anything, only transcribed.

use super::Variant;

/// Threefish-256: 4 words, 72 rounds.
pub struct Variant256;

/// Threefish-512: 8 words, 72 rounds.
pub struct Variant512;

/// Threefish-1024: 16 words, 80 rounds.
pub struct Variant1024;

// Row `d` holds the rotation amounts for round index `d mod 8`, one per word
// pair. Flattened row-major since `WORDS / 2` differs per width.
#[rustfmt::skip]
const ROTATION_256: [u32; 8 * 2] = [
    14, 16,
    52, 57,
    23, 40,
     5, 37,
    25, 33,
    46, 12,
    58, 22,
    32, 32,
];

#[rustfmt::skip]
const ROTATION_512: [u32; 8 * 4] = [
    46, 36, 19, 37,
    33, 27, 14, 42,
    17, 49, 36, 39,
    44,  9, 54, 56,
    39, 30, 34, 24,
    13, 50, 10, 17,
    25, 29, 39, 43,
     8, 35, 56, 22,
];

#[rustfmt::skip]
const ROTATION_1024: [u32; 8 * 8] = [
    24, 13,  8, 47,  8, 17, 22, 37,
    38, 19, 10, 55, 49, 18, 23, 52,
    33,  4, 51, 13, 34, 41, 59, 17,
     5, 20, 48, 41, 47, 28, 16, 25,
    41,  9, 37, 31, 12, 47, 44, 30,
    16, 34, 56, 51,  4, 53, 42, 41,
    31, 44, 47, 46, 19, 42, 44, 25,
     9, 48, 35, 52, 23, 31, 37, 20,
];

/// Destination slot for each of the 4 mix outputs, one round's worth.
const PERMUTATION_256: [usize; 4] = [0, 3, 2, 1];

/// Destination slot for each of the 8 mix outputs, one round's worth.
const PERMUTATION_512: [usize; 8] = [6, 1, 0, 7, 2, 5, 4, 3];

/// Destination slot for each of the 16 mix outputs, one round's worth.
#[rustfmt::skip]
const PERMUTATION_1024: [usize; 16] = [
    0, 15, 2, 11, 6, 13, 4, 9,
    14, 1, 8, 5, 10, 3, 12, 7,
];

impl Variant for Variant256 {
    const WORDS: usize = 4;
    const ROUNDS: usize = 72;
    const ROTATION: &'static [u32] = &ROTATION_256;
    const PERMUTATION: &'static [usize] = &PERMUTATION_256;
}

impl Variant for Variant512 {
    const WORDS: usize = 8;
    const ROUNDS: usize = 72;
    const ROTATION: &'static [u32] = &ROTATION_512;
    const PERMUTATION: &'static [usize] = &PERMUTATION_512;
}

impl Variant for Variant1024 {
    const WORDS: usize = 16;
    const ROUNDS: usize = 80;
    const ROTATION: &'static [u32] = &ROTATION_1024;
    const PERMUTATION: &'static [usize] = &PERMUTATION_1024;
}
