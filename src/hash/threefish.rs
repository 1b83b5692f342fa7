//! The Threefish tweakable block cipher.
//!
//! Threefish is the permutation underlying [Skein](super::skein). It comes in
//! three widths — 256, 512, and 1024 bits — which all share the same round
//! structure and differ only in word count, round count, and the rotation and
//! permutation tables. Rather than hand-unroll three near-identical
//! permutations (as the reference C implementation does with a preprocessor),
//! this module expresses the shared structure once as a function generic over
//! [`Variant`], and lets each width supply only its tables.

use docext::docext;

mod tables;

pub use tables::{Variant256, Variant512, Variant1024};

/// The parity constant mixed into the final word of every key schedule.
///
/// Chosen by the Skein designers so that an all-zero key does not produce an
/// all-zero (or otherwise degenerate) key schedule.
pub const C240: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// A Threefish width: the word count, round count, and the two tables that
/// together determine the permutation for that width.
///
/// `ROTATION` is laid out as 8 rows (round index modulo 8) of `WORDS / 2`
/// rotation amounts each, flattened row-major. `PERMUTATION` has `WORDS`
/// entries: entry `i` is the state slot that receives the `i`-th mix output
/// (mix outputs are produced in pairs, `(2j, 2j+1)`, for `j` in `0..WORDS/2`).
pub trait Variant {
    /// Number of 64-bit words in the state (4, 8, or 16).
    const WORDS: usize;
    /// Total round count (72 for `WORDS` in {4, 8}; 80 for `WORDS` = 16).
    const ROUNDS: usize;
    /// Flattened `[round % 8][pair]` rotation table.
    const ROTATION: &'static [u32];
    /// Flat pair-output-slot permutation table, `WORDS` entries.
    const PERMUTATION: &'static [usize];
}

/// Encrypt one plaintext block under a Threefish key and tweak.
///
/// `key` and `block` must each have exactly `V::WORDS` words; the result does
/// too. This is the raw permutation — [`skein`](super::skein) is responsible
/// for turning it into a one-way compression function via feed-forward.
pub fn encrypt<V: Variant>(block: &[u64], key: &[u64]) -> Vec<u64> {
    encrypt_with_tweak::<V>(block, key, [0, 0])
}

/// Encrypt one plaintext block under a Threefish key and an explicit tweak.
///
/// $$
/// E_{K,T}(P) = \pi_R \circ \sigma_{s_R} \circ \dots \circ \pi_1 \circ
/// \sigma_{s_0}(P)
/// $$
///
/// where $\sigma_s$ injects subkey $s$ and $\pi_r$ is the mix-and-permute step
/// of round $r$.
#[docext]
pub fn encrypt_with_tweak<V: Variant>(block: &[u64], key: &[u64], tweak: [u64; 2]) -> Vec<u64> {
    debug_assert_eq!(block.len(), V::WORDS);
    debug_assert_eq!(key.len(), V::WORDS);

    let w = V::WORDS;
    let ts = [tweak[0], tweak[1], tweak[0] ^ tweak[1]];

    // ks[W] is the parity word; the rest mirror the key directly (Section
    // 4.3's "key schedule" construction).
    let mut ks = vec![0u64; w + 1];
    ks[..w].copy_from_slice(key);
    ks[w] = key.iter().fold(C240, |parity, k| parity ^ k);

    let mut x = block.to_vec();
    inject::<V>(&mut x, &ks, &ts, 0);

    for round in 0..V::ROUNDS {
        mix_and_permute::<V>(&mut x, round);
        if (round + 1) % 4 == 0 {
            inject::<V>(&mut x, &ks, &ts, (round + 1) / 4);
        }
    }

    x
}

/// Add subkey `s` into the working state.
///
/// With `s = 0` this is exactly the "initial key whitening" of Section
/// 4.1 step 1: the general injection formula already reduces to it, since
/// `ts[0 % 3] = ts[0]`, `ts[1 % 3] = ts[1]`, and `+= 0` is a no-op on the last
/// word. Expressing both as one function is what lets the round loop below
/// treat every injection uniformly.
fn inject<V: Variant>(x: &mut [u64], ks: &[u64], ts: &[u64; 3], s: usize) {
    let w = V::WORDS;
    for (i, xi) in x.iter_mut().enumerate() {
        *xi = xi.wrapping_add(ks[(s + i) % (w + 1)]);
    }
    x[w - 3] = x[w - 3].wrapping_add(ts[s % 3]);
    x[w - 2] = x[w - 2].wrapping_add(ts[(s + 1) % 3]);
    x[w - 1] = x[w - 1].wrapping_add(s as u64);
}

/// One MIX round: add/rotate/xor each of the `W/2` pairs, then scatter the
/// results according to the permutation table.
fn mix_and_permute<V: Variant>(x: &mut [u64], round: usize) {
    let pairs = V::WORDS / 2;
    let rot_row = (round % 8) * pairs;

    let before = x.to_vec();
    for j in 0..pairs {
        let r = V::ROTATION[rot_row + j];
        let (f0, f1) = mix(r, before[2 * j], before[2 * j + 1]);
        x[V::PERMUTATION[2 * j]] = f0;
        x[V::PERMUTATION[2 * j + 1]] = f1;
    }
}

/// The MIX function: $a \gets a + b$, $b \gets \mathrm{RotL}(b, r) \oplus a$.
///
/// Note the rotation uses the *old* value of `b`, not the freshly-updated
/// `a` — both outputs are computed from the pre-mix pair.
#[docext]
fn mix(r: u32, a: u64, b: u64) -> (u64, u64) {
    let a = a.wrapping_add(b);
    let b = b.rotate_left(r) ^ a;
    (a, b)
}
