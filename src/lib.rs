#[cfg(test)]
mod test;

mod hash;

pub use hash::{
    skein, threefish, Hash, SkeinEngine, SkeinError, Skein1024, Skein256, Skein512, Variant,
    Variant1024, Variant256, Variant512,
};
