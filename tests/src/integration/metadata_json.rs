//! # Token Metadata JSON Surface
//!
//! The fungible-token metadata document travels two ways: the binary layout
//! for the connector, and JSON for host-side tooling. Both must carry the
//! same fields.

#[cfg(test)]
mod tests {
    use engine_codec::prelude::*;

    fn sample_metadata() -> FungibleTokenMetadata {
        FungibleTokenMetadata {
            spec: "ft-1.0.0".to_string(),
            name: "Engine Wrapped Token".to_string(),
            symbol: "EWT".to_string(),
            icon: Some("data:image/png;base64,iVBORw0KGgo=".to_string()),
            reference: None,
            reference_hash: Some(Hash::new([0x5A; 32])),
            decimals: 18,
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let metadata = sample_metadata();
        let json = serde_json::to_string(&metadata).unwrap();
        let back: FungibleTokenMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metadata);
    }

    #[test]
    fn test_json_field_names_are_stable() {
        let json = serde_json::to_value(sample_metadata()).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "spec",
            "name",
            "symbol",
            "icon",
            "reference",
            "reference_hash",
            "decimals",
        ] {
            assert!(object.contains_key(key), "missing JSON field {key}");
        }
        assert_eq!(object["decimals"], 18);
        assert!(object["reference"].is_null());
    }

    #[test]
    fn test_binary_and_json_agree() {
        let metadata = sample_metadata();

        let wire = metadata.encode().unwrap();
        let from_wire = FungibleTokenMetadata::decode(&wire).unwrap();

        let json = serde_json::to_string(&metadata).unwrap();
        let from_json: FungibleTokenMetadata = serde_json::from_str(&json).unwrap();

        assert_eq!(from_wire, from_json);
    }
}
