//! # Registry Sharing Under Concurrency
//!
//! The schema registry is built once and shared by reference; parallel
//! encoders must observe the same table and produce byte-identical output
//! for equal inputs.

#[cfg(test)]
mod tests {
    use engine_codec::prelude::*;
    use std::thread;

    #[test]
    fn test_registry_built_once_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let registry = SchemaRegistry::global() as *const SchemaRegistry as usize;
                    registry
                })
            })
            .collect();

        let pointers: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(pointers.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_parallel_encoding_is_deterministic() {
        let args = FunctionCallArgsV2::new(
            Address::new([0x77; 20]),
            RawU256::from(1_234_567u64),
            Bytes::from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]),
        );
        let expected = args.encode().unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let args = args.clone();
                thread::spawn(move || args.encode().unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_parallel_mixed_decode() {
        let v2_wire = SubmitResultV2::new(
            ExecutionStatus::Success(Bytes::from_slice(&[1])),
            10,
            vec![],
        )
        .encode()
        .unwrap();
        let legacy_wire = LegacyExecutionResult {
            status: true,
            gas_used: 10,
            output: Bytes::from_slice(&[2]),
            logs: vec![],
        }
        .encode()
        .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let wire = if i % 2 == 0 {
                    v2_wire.clone()
                } else {
                    legacy_wire.clone()
                };
                thread::spawn(move || SubmitResult::decode_versioned(&wire).unwrap())
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let decoded = handle.join().unwrap();
            if i % 2 == 0 {
                assert!(matches!(decoded, SubmitResult::V2(_)));
            } else {
                assert!(matches!(decoded, SubmitResult::Legacy(_)));
            }
        }
    }
}
