use crate::threefish::{encrypt_with_tweak, Variant1024, Variant256, Variant512};

// These vectors come from the Skein NIST submission CD and exercise the
// block cipher directly, independent of the UBI/Skein layer above it.

fn le_words(bytes: &[u8]) -> Vec<u64> {
    bytes
        .chunks_exact(8)
        .map(|c| u64::from_le_bytes(c.try_into().unwrap()))
        .collect()
}

fn le_bytes(words: &[u64]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

#[test]
fn threefish_256_zero_key_zero_tweak() {
    let key = vec![0u64; 4];
    let block = vec![0u64; 4];
    let ct = encrypt_with_tweak::<Variant256>(&block, &key, [0, 0]);
    assert_eq!(
        le_bytes(&ct),
        hex("84DA2A1F8BEAEE94 7066AE3E3103F1AD 536DB1F4A1192495 116B9F3CE6133FD8")
    );
}

#[test]
fn threefish_256_nonzero_key_tweak() {
    let key = le_words(&hex(
        "1011121314151617 18191A1B1C1D1E1F 2021222324252627 28292A2B2C2D2E2F",
    ));
    let tweak = le_words(&hex("0001020304050607 08090A0B0C0D0E0F"));
    let block = le_words(&hex(
        "FFFEFDFCFBFAF9F8 F7F6F5F4F3F2F1F0 EFEEEDECEBEAE9E8 E7E6E5E4E3E2E1E0",
    ));
    let ct = encrypt_with_tweak::<Variant256>(&block, &key, [tweak[0], tweak[1]]);
    assert_eq!(
        le_bytes(&ct),
        hex("E0D091FF0EEA8FDF C98192E62ED80AD5 9D865D08588DF476 657056B5955E97DF")
    );
}

#[test]
fn threefish_512_zero_key_zero_tweak() {
    let key = vec![0u64; 8];
    let block = vec![0u64; 8];
    let ct = encrypt_with_tweak::<Variant512>(&block, &key, [0, 0]);
    assert_eq!(
        le_bytes(&ct),
        hex("B1A2BBC6EF6025BC 40EB3822161F36E3 75D1BB0AEE3186FB D19E47C5D479947B \
             7BC2F8586E35F0CF F7E7F03084B0B7B1 F1AB3961A580A3E9 7EB41EA14A6D7BBE")
    );
}

#[test]
fn threefish_512_nonzero_key_tweak() {
    let key = le_words(&hex(
        "1011121314151617 18191A1B1C1D1E1F 2021222324252627 28292A2B2C2D2E2F \
         3031323334353637 38393A3B3C3D3E3F 4041424344454647 48494A4B4C4D4E4F",
    ));
    let tweak = le_words(&hex("0001020304050607 08090A0B0C0D0E0F"));
    let block = le_words(&hex(
        "FFFEFDFCFBFAF9F8 F7F6F5F4F3F2F1F0 EFEEEDECEBEAE9E8 E7E6E5E4E3E2E1E0 \
         DFDEDDDCDBDAD9D8 D7D6D5D4D3D2D1D0 CFCECDCCCBCAC9C8 C7C6C5C4C3C2C1C0",
    ));
    let ct = encrypt_with_tweak::<Variant512>(&block, &key, [tweak[0], tweak[1]]);
    assert_eq!(
        le_bytes(&ct),
        hex("E304439626D45A2C B401CAD8D636249A 6338330EB06D45DD 8B36B90E97254779 \
             272A0A8D99463504 784420EA18C9A725 AF11DFFEA1016234 8927673D5C1CAF3D")
    );
}

#[test]
fn threefish_1024_zero_key_zero_tweak() {
    let key = vec![0u64; 16];
    let block = vec![0u64; 16];
    let ct = encrypt_with_tweak::<Variant1024>(&block, &key, [0, 0]);
    assert_eq!(
        le_bytes(&ct),
        hex("F05C3D0A3D05B304 F785DDC7D1E03601 5C8AA76E2F217B06 C6E1544C0BC1A90D \
             F0ACCB9473C24E0F D54FEA68057F4332 9CB454761D6DF5CF 7B2E9B3614FBD5A2 \
             0B2E4760B4060354 0D82EABC5482C171 C832AFBE68406BC3 9500367A592943FA \
             9A5B4A43286CA3C4 CF46104B443143D5 60A4B230488311DF 4FEEF7E1DFE8391E")
    );
}

/// Parse a run of hex bytes written with spaces between 8-byte groups
/// (matches how the NIST submission prints them), ignoring whitespace.
fn hex(s: &str) -> Vec<u8> {
    let clean: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(clean.len() % 2, 0, "odd number of hex digits");
    (0..clean.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&clean[i..i + 2], 16).unwrap())
        .collect()
}
