use oxibwt_bwts::lyndon::{factorize, is_lyndon};
use oxibwt_bwts::{TransformConfig, decode, encode, encode_with_config};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_roundtrip(data in prop::collection::vec(any::<u8>(), 1..2000)) {
        let encoded = encode(&data).unwrap();
        prop_assert_eq!(encoded.len(), data.len());
        prop_assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_roundtrip_small_alphabet(
        data in prop::collection::vec(0..3u8, 1..3000),
    ) {
        let encoded = encode(&data).unwrap();
        prop_assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_encode_is_permutation(data in prop::collection::vec(any::<u8>(), 0..1000)) {
        let mut encoded = encode(&data).unwrap();
        let mut sorted = data.clone();
        encoded.sort_unstable();
        sorted.sort_unstable();
        prop_assert_eq!(encoded, sorted);
    }

    #[test]
    fn test_decode_preserves_length(data in prop::collection::vec(any::<u8>(), 0..1000)) {
        prop_assert_eq!(decode(&data).unwrap().len(), data.len());
    }

    #[test]
    fn test_config_does_not_change_output(
        data in prop::collection::vec(0..4u8, 1..1500),
        threshold in 2..64usize,
        parallel in any::<bool>(),
    ) {
        let expected = encode(&data).unwrap();
        let config = TransformConfig::new(threshold, parallel);
        prop_assert_eq!(encode_with_config(&data, config).unwrap(), expected);
    }

    #[test]
    fn test_factorization_invariants(data in prop::collection::vec(0..4u8, 1..300)) {
        let words = factorize(&data);

        let joined: Vec<u8> = words.iter().flat_map(|w| w.bytes(&data).iter().copied()).collect();
        prop_assert_eq!(&joined, &data);

        for w in &words {
            prop_assert!(is_lyndon(w.bytes(&data)));
        }
        for pair in words.windows(2) {
            prop_assert!(pair[0].bytes(&data) >= pair[1].bytes(&data));
        }
    }
}
