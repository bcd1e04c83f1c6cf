use proptest::prelude::*;
use swhid_identifier::Identifier;
use swhid_object::ObjectType;

fn object_type() -> impl Strategy<Value = ObjectType> {
    prop_oneof![
        Just(ObjectType::Content),
        Just(ObjectType::Directory),
        Just(ObjectType::Revision),
        Just(ObjectType::Release),
        Just(ObjectType::Snapshot),
    ]
}

proptest! {
    #[test]
    fn valid_hashes_construct(hash in "[0-9a-f]{40}", ty in object_type()) {
        let id = Identifier::new(ty, hash.clone()).unwrap();
        prop_assert_eq!(id.hash(), hash.as_str());
        prop_assert_eq!(id.object_type(), ty);
    }

    #[test]
    fn format_parse_roundtrip(
        hash in "[0-9a-f]{40}",
        ty in object_type(),
        qualifiers in proptest::collection::btree_map(
            "[a-z][a-z0-9_]{0,7}",
            "[ -~]{0,16}",
            0..4,
        ),
    ) {
        let id = Identifier::new(ty, hash)
            .unwrap()
            .with_qualifiers(qualifiers);
        let reparsed = Identifier::parse(&id.to_string()).unwrap();
        prop_assert_eq!(&reparsed, &id);
        // Canonical output is a fixed point of parse-then-format.
        prop_assert_eq!(reparsed.to_string(), id.to_string());
    }

    #[test]
    fn qualifier_values_survive_escaping(
        value in "[ -~]{0,32}",
        hash in "[0-9a-f]{40}",
    ) {
        let id = Identifier::new(ObjectType::Content, hash)
            .unwrap()
            .with_qualifier("path", value.clone());
        let reparsed = Identifier::parse(&id.to_string()).unwrap();
        prop_assert_eq!(reparsed.qualifier("path"), Some(value.as_str()));
    }

    #[test]
    fn uppercase_hashes_rejected(hash in "[0-9A-F]*[A-F][0-9A-F]*") {
        prop_assert!(Identifier::new(ObjectType::Content, hash).is_err());
    }
}
