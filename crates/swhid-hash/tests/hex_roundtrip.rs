use proptest::prelude::*;
use swhid_hash::hex::{decode, encode, is_lower_hex};
use swhid_hash::{Hasher, ObjectId};

proptest! {
    #[test]
    fn encode_decode_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let hex = encode(&bytes);
        let mut decoded = vec![0u8; bytes.len()];
        decode(&hex, &mut decoded).unwrap();
        prop_assert_eq!(&decoded, &bytes);
    }

    #[test]
    fn encode_is_always_lower_hex(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
        prop_assert!(is_lower_hex(&encode(&bytes)));
    }

    #[test]
    fn encode_length_is_double(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(encode(&bytes).len(), bytes.len() * 2);
    }

    #[test]
    fn oid_hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 20..=20)) {
        let oid = ObjectId::from_bytes(&bytes).unwrap();
        let parsed: ObjectId = oid.to_hex().parse().unwrap();
        prop_assert_eq!(oid, parsed);
    }

    #[test]
    fn digest_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(
            Hasher::hash_object("blob", &data),
            Hasher::hash_object("blob", &data)
        );
    }
}
