pub mod skein;
pub mod threefish;

pub use skein::{Engine as SkeinEngine, Error as SkeinError, Skein1024, Skein256, Skein512};
pub use threefish::{Variant, Variant1024, Variant256, Variant512};

/// A cryptographic hash function.
///
/// One-shot convenience composition over a streaming context — see
/// [`skein::Engine`] for the incremental `update`/`finalize` contract this
/// wraps.
pub trait Hash {
    type Output;

    fn hash(&self, input: &[u8]) -> Self::Output;
}
