//! Skein: a hash function family built by wrapping [Threefish](super::threefish)
//! in UBI (Unique Block Iteration) chaining.
//!
//! UBI's job is to make sure every call into the Threefish permutation sees a
//! unique (key, tweak) pair: the chaining value plays the role of the key,
//! and the tweak records how many message bytes have been absorbed so far,
//! what *kind* of block this is (configuration, message, or output), and
//! whether it's the first or last block of its kind. A message is hashed by
//! running its configuration block, then its padded body, through the
//! permutation with feed-forward, and a digest of any length is produced
//! afterwards by treating counter values `0, 1, 2, ...` as synthetic "output"
//! blocks fed through the same construction (see [`ubi_block`]).

use {
    super::threefish::{self, Variant, Variant1024, Variant256, Variant512},
    crate::Hash,
    docext::docext,
    std::{fmt, marker::PhantomData},
};

/// Byte-width of the schema/version/output-length prefix of a configuration
/// block. The remaining bytes of the block (up to the state's full block
/// size) are zero.
const CONFIG_BYTES: usize = 32;

/// ASCII `"SHA3"` read as a little-endian `u32`, reused verbatim from the
/// published Skein configuration-string identifier.
const SCHEMA_ID: u32 = 0x3341_4853;
const SCHEMA_VERSION: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum BlockType {
    Config = 4,
    Message = 48,
    Output = 63,
}

const FIRST_BIT: u64 = 1 << 62;
const FINAL_BIT: u64 = 1 << 63;
const BIT_PAD_SHIFT: u32 = 48;
const TYPE_SHIFT: u32 = 56;

fn tweak(byte_count: u64, block_type: BlockType, first: bool, last: bool, bit_pad: u8) -> [u64; 2] {
    let mut t1 = (block_type as u64) << TYPE_SHIFT;
    t1 |= (bit_pad as u64) << BIT_PAD_SHIFT;
    if first {
        t1 |= FIRST_BIT;
    }
    if last {
        t1 |= FINAL_BIT;
    }
    [byte_count, t1]
}

/// Requesting a hash this crate cannot produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `output_bits` was zero; there is no meaningful empty digest to derive
    /// from the output transform (it would issue zero output blocks).
    ZeroOutputLength,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroOutputLength => write!(f, "Skein output length must be at least 1 bit"),
        }
    }
}

impl std::error::Error for Error {}

/// A Skein hashing context, generic over the Threefish width `V`.
///
/// Use [`Skein256`], [`Skein512`], or [`Skein1024`] rather than this type
/// directly; they fix `V` to the three supported widths.
pub struct Engine<V> {
    h: Vec<u64>,
    buf: Vec<u8>,
    t0: u64,
    started_message: bool,
    _variant: PhantomData<V>,
}

impl<V: Variant> Engine<V> {
    /// Build a fresh context for a digest of `output_bits` bits.
    pub fn new(output_bits: u64) -> Result<Self, Error> {
        if output_bits == 0 {
            return Err(Error::ZeroOutputLength);
        }

        let block_bytes = V::WORDS * 8;
        let mut config = vec![0u8; block_bytes];
        config[0..4].copy_from_slice(&SCHEMA_ID.to_le_bytes());
        config[4..6].copy_from_slice(&(SCHEMA_VERSION as u16).to_le_bytes());
        config[8..16].copy_from_slice(&output_bits.to_le_bytes());
        // Bytes 16..32 (tree-hashing leaf/node/max-level parameters) are left
        // zero: tree hashing is a non-goal here (see SPEC_FULL.md §1).
        debug_assert!(CONFIG_BYTES <= block_bytes);

        let zero_state = vec![0u64; V::WORDS];
        let h = ubi_block::<V>(
            &zero_state,
            &load_le(&config),
            tweak(CONFIG_BYTES as u64, BlockType::Config, true, true, 0),
        );

        Ok(Self {
            h,
            buf: Vec::with_capacity(block_bytes),
            t0: 0,
            started_message: false,
            _variant: PhantomData,
        })
    }

    fn block_bytes(&self) -> usize {
        V::WORDS * 8
    }

    /// Absorb more message bytes.
    ///
    /// Internally buffers a single block; a buffered block is only run
    /// through the permutation once we know more data follows it, since the
    /// last block must be tagged with the final-block flag and we can't know
    /// which block that is until `finalize` is called.
    pub fn update(&mut self, mut data: &[u8]) {
        let block_bytes = self.block_bytes();
        while !data.is_empty() {
            if self.buf.len() == block_bytes {
                self.flush_buffered_block(false, 0);
            }
            let take = (block_bytes - self.buf.len()).min(data.len());
            self.buf.extend_from_slice(&data[..take]);
            data = &data[take..];
        }
    }

    fn flush_buffered_block(&mut self, last: bool, bit_pad: u8) {
        let block_bytes = self.block_bytes();
        debug_assert!(self.buf.len() <= block_bytes);

        self.t0 += self.buf.len() as u64;
        let mut block = self.buf.clone();
        block.resize(block_bytes, 0);

        let first = !self.started_message;
        self.h = ubi_block::<V>(
            &self.h,
            &load_le(&block),
            tweak(self.t0, BlockType::Message, first, last, bit_pad),
        );
        self.started_message = true;
        self.buf.clear();
    }

    /// Finish absorbing a byte-aligned message and produce a digest of
    /// `output_bits` bits.
    pub fn finalize(self, output_bits: u64) -> Vec<u8> {
        self.finalize_with_bit_pad(0, output_bits)
    }

    /// Finish absorbing a message whose last buffered byte only has
    /// `valid_bits` (1..=7) significant bits, left-aligned in that byte's
    /// least-significant positions, and produce a digest of `output_bits`
    /// bits.
    ///
    /// Call [`update`](Self::update) with all preceding full bytes (including
    /// the partial trailing byte itself) first.
    pub fn finalize_with_trailing_bits(mut self, valid_bits: u8, output_bits: u64) -> Vec<u8> {
        debug_assert!((1..=7).contains(&valid_bits));
        debug_assert!(!self.buf.is_empty(), "a partial byte must already be buffered");
        let bit_pad = 8 - valid_bits;
        let last = self.buf.pop().unwrap();
        self.buf.push(last & (0xFFu8 << bit_pad));
        self.finalize_with_bit_pad(bit_pad, output_bits)
    }

    fn finalize_with_bit_pad(mut self, bit_pad: u8, output_bits: u64) -> Vec<u8> {
        self.flush_buffered_block(true, bit_pad);
        output_transform::<V>(&self.h, output_bits)
    }
}

/// Run one UBI step: permute `block` under key `h` and tweak, then
/// feed-forward by XORing the block back in.
///
/// $$
/// H_i = E_{H_{i-1}, T_i}(B_i) \oplus B_i
/// $$
#[docext]
fn ubi_block<V: Variant>(h: &[u64], block: &[u64], tweak: [u64; 2]) -> Vec<u64> {
    let x = threefish::encrypt_with_tweak::<V>(block, h, tweak);
    x.iter().zip(block.iter()).map(|(xi, bi)| xi ^ bi).collect()
}

/// Stretch the post-message chaining value to `output_bits` bits using the
/// counter-mode output transform (Section 4.2).
fn output_transform<V: Variant>(h: &[u64], output_bits: u64) -> Vec<u8> {
    let block_bytes = V::WORDS * 8;
    let digest_bytes = ((output_bits + 7) / 8) as usize;
    let blocks_needed = (digest_bytes + block_bytes - 1) / block_bytes;

    let mut out = Vec::with_capacity(blocks_needed * block_bytes);
    for counter in 0..blocks_needed as u64 {
        let mut block = vec![0u8; block_bytes];
        block[0..8].copy_from_slice(&counter.to_le_bytes());

        let result = ubi_block::<V>(
            h,
            &load_le(&block),
            tweak(
                8,
                BlockType::Output,
                counter == 0,
                counter + 1 == blocks_needed as u64,
                0,
            ),
        );
        out.extend(store_le(&result));
    }

    out.truncate(digest_bytes);
    if output_bits % 8 != 0 {
        let mask = 0xFFu8 << (8 - output_bits % 8);
        if let Some(last) = out.last_mut() {
            *last &= mask;
        }
    }
    out
}

fn load_le(bytes: &[u8]) -> Vec<u64> {
    bytes
        .chunks_exact(8)
        .map(|c| u64::from_le_bytes(c.try_into().unwrap()))
        .collect()
}

fn store_le(words: &[u64]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

macro_rules! define_skein {
    ($name:ident, $variant:ty, $doc:literal) => {
        #[doc = $doc]
        pub struct $name {
            output_bits: u64,
        }

        impl $name {
            /// Construct a one-shot/incremental hasher producing digests of
            /// `output_bits` bits.
            pub fn new(output_bits: u64) -> Result<Self, Error> {
                if output_bits == 0 {
                    return Err(Error::ZeroOutputLength);
                }
                Ok(Self { output_bits })
            }

            /// Start an incremental hashing context.
            pub fn context(&self) -> Engine<$variant> {
                Engine::new(self.output_bits).expect("output_bits already validated")
            }
        }

        impl Hash for $name {
            type Output = Vec<u8>;

            fn hash(&self, input: &[u8]) -> Self::Output {
                let mut ctx = self.context();
                ctx.update(input);
                ctx.finalize(self.output_bits)
            }
        }
    };
}

define_skein!(Skein256, Variant256, "Skein using the 256-bit Threefish state.");
define_skein!(Skein512, Variant512, "Skein using the 512-bit Threefish state.");
define_skein!(Skein1024, Variant1024, "Skein using the 1024-bit Threefish state.");
