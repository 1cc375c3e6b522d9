//! # Request Encoding Flows
//!
//! Drives the argument structures through the full encode/decode path the
//! way a host would: build typed arguments, encode, hand the bytes over, and
//! decode them back on the far side.

#[cfg(test)]
mod tests {
    use engine_codec::prelude::*;
    use primitive_types::U256;
    use rand::rngs::StdRng;
    use rand::{Rng, RngCore, SeedableRng};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5EED)
    }

    fn random_address(rng: &mut StdRng) -> Address {
        let mut bytes = [0u8; 20];
        rng.fill_bytes(&mut bytes);
        Address::new(bytes)
    }

    fn random_hash(rng: &mut StdRng) -> Hash {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Hash::new(bytes)
    }

    fn random_input(rng: &mut StdRng) -> Bytes {
        let len = rng.gen_range(0..512);
        let mut bytes = vec![0u8; len];
        rng.fill_bytes(&mut bytes);
        Bytes::from_vec(bytes)
    }

    // =============================================================================
    // LIFECYCLE FLOW
    // =============================================================================

    #[test]
    fn test_engine_bootstrap_flow() {
        let mut rng = rng();
        let chain_id = random_hash(&mut rng);

        // Host initializes the engine, then announces the chain and a block.
        let init = InitEngineArgs::new(chain_id, "engine.owner", "bridge.prover", 19);
        let begin_chain = BeginChainArgs::new(chain_id);
        let begin_block = BeginBlockArgs {
            hash: random_hash(&mut rng),
            coinbase: random_address(&mut rng),
            timestamp: RawU256::from(1_756_000_000u64),
            number: RawU256::from(1u64),
            difficulty: RawU256::ZERO,
            gas_limit: RawU256::from(30_000_000u64),
        };

        let init_wire = init.encode().unwrap();
        let chain_wire = begin_chain.encode().unwrap();
        let block_wire = begin_block.encode().unwrap();

        assert_eq!(InitEngineArgs::decode(&init_wire).unwrap(), init);
        assert_eq!(BeginChainArgs::decode(&chain_wire).unwrap(), begin_chain);
        assert_eq!(BeginBlockArgs::decode(&block_wire).unwrap(), begin_block);

        // Both lifecycle messages agree on the chain id after the roundtrip.
        assert_eq!(
            InitEngineArgs::decode(&init_wire).unwrap().chain_id,
            BeginChainArgs::decode(&chain_wire).unwrap().chain_id
        );
    }

    // =============================================================================
    // CALL FLOWS
    // =============================================================================

    #[test]
    fn test_call_args_wrapper_flow() {
        let mut rng = rng();
        for _ in 0..32 {
            let inner = FunctionCallArgsV2::new(
                random_address(&mut rng),
                RawU256::from(rng.gen::<u64>()),
                random_input(&mut rng),
            );
            let call = CallArgs::V2(inner.clone());
            let wire = call.encode().unwrap();

            // Wrapper discriminant, then the inner layout unchanged.
            assert_eq!(wire[0], 0);
            assert_eq!(&wire[1..], inner.encode().unwrap().as_slice());
            assert_eq!(CallArgs::decode(&wire).unwrap(), call);
        }
    }

    #[test]
    fn test_legacy_call_wire_is_not_confusable_with_current() {
        let mut rng = rng();
        let address = random_address(&mut rng);
        let input = random_input(&mut rng);

        let v1 = CallArgs::V1(FunctionCallArgsV1::new(address, input.clone()));
        let v2 = CallArgs::V2(FunctionCallArgsV2::new(address, RawU256::ZERO, input));

        let v1_wire = v1.encode().unwrap();
        let v2_wire = v2.encode().unwrap();
        assert_ne!(v1_wire, v2_wire);

        // Each decodes back to its own revision, never the sibling's.
        assert!(matches!(CallArgs::decode(&v1_wire).unwrap(), CallArgs::V1(_)));
        assert!(matches!(CallArgs::decode(&v2_wire).unwrap(), CallArgs::V2(_)));
    }

    #[test]
    fn test_view_and_query_flow() {
        let mut rng = rng();
        let contract = random_address(&mut rng);

        let view = ViewCallArgs {
            sender: random_address(&mut rng),
            address: contract,
            amount: RawU256::from(10u64),
            input: random_input(&mut rng),
        };
        let storage = GetStorageAtArgs::new(contract, random_hash(&mut rng));
        let balance = GetBalanceArgs { address: contract };

        assert_eq!(ViewCallArgs::decode(&view.encode().unwrap()).unwrap(), view);
        assert_eq!(
            GetStorageAtArgs::decode(&storage.encode().unwrap()).unwrap(),
            storage
        );
        assert_eq!(
            GetBalanceArgs::decode(&balance.encode().unwrap()).unwrap(),
            balance
        );
    }

    #[test]
    fn test_meta_call_flow() {
        let mut rng = rng();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        rng.fill_bytes(&mut r);
        rng.fill_bytes(&mut s);

        let args = MetaCallArgs {
            signature: Signature::new(r, s),
            v: 28,
            nonce: RawU256::from(3u64),
            fee_amount: RawU256::from(1_000u64),
            fee_address: Address::ZERO,
            contract_address: random_address(&mut rng),
            value: RawU256::from(5u64),
            method_def: "adopt(uint256 petId)".to_string(),
            args: random_input(&mut rng),
        };

        let wire = args.encode().unwrap();
        // Signature body leads the layout, r then s, no framing.
        assert_eq!(&wire[..32], &r);
        assert_eq!(&wire[32..64], &s);
        assert_eq!(wire[64], 28);
        assert_eq!(MetaCallArgs::decode(&wire).unwrap(), args);
    }

    #[test]
    fn test_transfer_and_connector_flow() {
        let mut rng = rng();
        let transfer = TransferEthArgs {
            address: random_address(&mut rng),
            amount: RawU256::from(u64::MAX),
        };
        let connector = ConnectorInitArgs {
            prover_account: "prover.bridge".to_string(),
            custodian_address: random_address(&mut rng),
        };

        let transfer_back = TransferEthArgs::decode(&transfer.encode().unwrap()).unwrap();
        assert_eq!(transfer_back, transfer);
        assert_eq!(transfer_back.amount.to_u256(), U256::from(u64::MAX));
        assert_eq!(
            ConnectorInitArgs::decode(&connector.encode().unwrap()).unwrap(),
            connector
        );
    }

    // =============================================================================
    // MALFORMED INPUT
    // =============================================================================

    #[test]
    fn test_corrupted_length_prefix_is_rejected() {
        let mut rng = rng();
        let args = FunctionCallArgsV2::new(
            random_address(&mut rng),
            RawU256::ZERO,
            Bytes::from_slice(&[1, 2, 3, 4]),
        );
        let mut wire = args.encode().unwrap();

        // Inflate the input length prefix past the buffer end.
        wire[52] = 0xFF;
        let err = FunctionCallArgsV2::decode(&wire).unwrap_err();
        assert!(matches!(err, CodecError::UnexpectedEnd { .. }));
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_every_argument_rejects_empty_input() {
        assert!(InitEngineArgs::decode(&[]).is_err());
        assert!(BeginChainArgs::decode(&[]).is_err());
        assert!(BeginBlockArgs::decode(&[]).is_err());
        assert!(CallArgs::decode(&[]).is_err());
        assert!(ViewCallArgs::decode(&[]).is_err());
        assert!(GetStorageAtArgs::decode(&[]).is_err());
        assert!(MetaCallArgs::decode(&[]).is_err());
        assert!(GetBalanceArgs::decode(&[]).is_err());
        assert!(TransferEthArgs::decode(&[]).is_err());
        assert!(ConnectorInitArgs::decode(&[]).is_err());
        assert!(FungibleTokenMetadata::decode(&[]).is_err());
    }

    #[test]
    fn test_decode_reports_hex_dumpable_errors() {
        // A host logging a rejected payload needs a displayable error and the
        // offending bytes; neither panics on garbage.
        let garbage = hex::decode("deadbeef").unwrap();
        let err = ViewCallArgs::decode(&garbage).unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
