//! Edge case tests for the byte transforms.

use oxiform_core::Transform;
use oxiform_transform::{
    BlockSort, Bwt, Complement, Cube, Delta, Mtf, PairSubstitution, Rle, blocksort, complement,
    pairs,
};

fn all() -> Vec<Box<dyn Transform>> {
    vec![
        Box::new(Delta),
        Box::new(Rle),
        Box::new(Mtf),
        Box::new(Cube),
        Box::new(Complement),
        Box::new(BlockSort),
        Box::new(Bwt),
        Box::new(PairSubstitution),
    ]
}

fn pseudo_random(size: usize, mut seed: u32) -> Vec<u8> {
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            (seed >> 16) as u8
        })
        .collect()
}

fn assert_roundtrip(input: &[u8]) {
    for t in all() {
        let encoded = t.encode(input).unwrap();
        let decoded = t.decode(&encoded).unwrap();
        assert_eq!(decoded, input, "{} failed on {} bytes", t.name(), input.len());
    }
}

#[test]
fn test_empty_input() {
    assert_roundtrip(b"");
}

#[test]
fn test_single_byte() {
    assert_roundtrip(b"A");
    assert_roundtrip(&[0]);
    assert_roundtrip(&[255]);
}

#[test]
fn test_all_same_byte() {
    assert_roundtrip(&vec![0u8; 3000]);
    assert_roundtrip(&vec![255u8; 3000]);
}

#[test]
fn test_longer_than_every_window() {
    // Longer than the 1024-byte key stride, 256-byte sort blocks and
    // 64-byte rotation blocks, with a ragged tail for each.
    let input = pseudo_random(4099, 7);
    assert_roundtrip(&input);
}

#[test]
fn test_text() {
    let input = b"It was the best of times, it was the worst of times, \
                  it was the age of wisdom, it was the age of foolishness";
    assert_roundtrip(input);
}

#[test]
fn test_boundary_lengths() {
    for len in [63, 64, 65, 255, 256, 257, 287, 288, 289, 1023, 1024, 1025] {
        assert_roundtrip(&pseudo_random(len, len as u32));
    }
}

#[test]
fn test_output_sizes() {
    let input = pseudo_random(777, 3);
    assert_eq!(Delta.encode(&input).unwrap().len(), input.len());
    assert_eq!(Mtf.encode(&input).unwrap().len(), input.len());
    assert_eq!(Cube.encode(&input).unwrap().len(), input.len());
    assert_eq!(Bwt.encode(&input).unwrap().len(), input.len() + 4);
    assert_eq!(
        Complement.encode(&input).unwrap().len(),
        input.len() + complement::KEY_SIZE
    );
    assert_eq!(
        PairSubstitution.encode(&input).unwrap().len(),
        input.len() + pairs::TABLE_SIZE
    );
    assert!(Rle.encode(&input).unwrap().len() <= input.len() * 2);
}

#[test]
fn test_bwt_then_mtf_then_rle_shrinks_text() {
    let input: Vec<u8> = b"abracadabra ".iter().copied().cycle().take(6000).collect();
    let sorted = Bwt.encode(&input).unwrap();
    let ranks = Mtf.encode(&sorted).unwrap();
    let runs = Rle.encode(&ranks).unwrap();
    assert!(runs.len() < input.len() / 4);

    let back = Bwt
        .decode(&Mtf.decode(&Rle.decode(&runs).unwrap()).unwrap())
        .unwrap();
    assert_eq!(back, input);
}

#[test]
fn test_blocksort_partial_output_on_truncation() {
    let input = pseudo_random(600, 11);
    let mut encoded = blocksort::encode(&input);
    encoded.truncate(blocksort::UNIT_HEADER + 5);
    let err = BlockSort.decode(&encoded).unwrap_err();
    let recovered = err.into_recovered().unwrap();
    assert!(recovered.is_empty());
}

#[test]
fn test_trailer_errors() {
    assert!(Complement.decode(&[0u8; 1023]).is_err());
    assert!(PairSubstitution.decode(&[0u8; 511]).is_err());
    assert!(Bwt.decode(&[200, 0, 0, 0, 1, 2]).is_err());
}
