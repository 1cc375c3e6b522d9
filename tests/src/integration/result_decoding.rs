//! # Versioned Result Decoding Matrix
//!
//! Exercises the three result layouts through the single
//! [`SubmitResult::decode_versioned`] entry point: every layout must decode
//! as itself, never as a sibling, and malformed input must fail loudly.

#[cfg(test)]
mod tests {
    use engine_codec::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, RngCore, SeedableRng};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn addressed_log(seed: u8) -> AddressedLogEvent {
        AddressedLogEvent {
            address: Address::new([seed; 20]),
            topics: vec![Hash::new([seed.wrapping_add(1); 32])],
            data: Bytes::from_slice(&[seed, seed, seed]),
        }
    }

    fn plain_log(seed: u8) -> LogEvent {
        LogEvent {
            topics: vec![Hash::new([seed; 32]), Hash::new([seed.wrapping_add(1); 32])],
            data: Bytes::from_slice(&[seed]),
        }
    }

    fn statuses() -> Vec<ExecutionStatus> {
        vec![
            ExecutionStatus::Success(Bytes::from_slice(&[0x01, 0x02])),
            ExecutionStatus::Revert(Bytes::from_slice(&[0x08, 0xC3, 0x79, 0xA0])),
            ExecutionStatus::OutOfGas,
            ExecutionStatus::OutOfFund,
            ExecutionStatus::OutOfOffset,
            ExecutionStatus::CallTooDeep,
        ]
    }

    // =============================================================================
    // LAYOUT SELF-IDENTIFICATION
    // =============================================================================

    #[test]
    fn test_every_versioned_result_decodes_as_versioned() {
        for status in statuses() {
            let result = SubmitResultV2::new(status, 53_000, vec![addressed_log(0x10)]);
            let wire = result.encode().unwrap();
            assert_eq!(wire[0], SUBMIT_RESULT_VERSION);
            assert_eq!(
                SubmitResult::decode_versioned(&wire).unwrap(),
                SubmitResult::V2(result)
            );
        }
    }

    #[test]
    fn test_every_status_first_result_decodes_as_status_first() {
        for status in statuses() {
            let result = SubmitResultV1 {
                status,
                gas_used: 21_000,
                logs: vec![plain_log(0x20), plain_log(0x30)],
            };
            let wire = result.encode().unwrap();
            assert!(wire[0] < 6);
            assert_eq!(
                SubmitResult::decode_versioned(&wire).unwrap(),
                SubmitResult::V1(result)
            );
        }
    }

    #[test]
    fn test_legacy_results_fall_through_to_legacy() {
        crate::init_test_logging();
        for status in [true, false] {
            let result = LegacyExecutionResult {
                status,
                gas_used: 90_000,
                output: Bytes::from_slice(&[0xAB; 16]),
                logs: vec![plain_log(0x40)],
            };
            let wire = result.encode().unwrap();
            assert_eq!(
                SubmitResult::decode_versioned(&wire).unwrap(),
                SubmitResult::Legacy(result)
            );
        }
    }

    #[test]
    fn test_version_tag_never_falls_back() {
        // A buffer that opens with the version tag but is otherwise broken
        // must fail as a versioned decode, not silently reparse as legacy.
        let truncated = [SUBMIT_RESULT_VERSION, 0x00];
        assert!(matches!(
            SubmitResult::decode_versioned(&truncated),
            Err(CodecError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn test_trailing_bytes_disqualify_a_trial() {
        // A valid status-first wire with junk appended: the strict trial
        // rejects it, and the legacy trial cannot parse it either.
        let result = SubmitResultV1 {
            status: ExecutionStatus::OutOfGas,
            gas_used: 1,
            logs: vec![],
        };
        let mut wire = result.encode().unwrap();
        wire.extend_from_slice(&[0xEE; 3]);
        assert!(SubmitResult::decode_versioned(&wire).is_err());
    }

    // =============================================================================
    // OUTCOME EXTRACTION
    // =============================================================================

    #[test]
    fn test_outcome_matrix() {
        let revert_data = Bytes::from_slice(&[0x08, 0xC3]);

        let cases: Vec<(SubmitResult, Result<Bytes, ExecutionError>)> = vec![
            (
                SubmitResult::V2(SubmitResultV2::new(
                    ExecutionStatus::Success(Bytes::from_slice(&[1])),
                    10,
                    vec![],
                )),
                Ok(Bytes::from_slice(&[1])),
            ),
            (
                SubmitResult::V1(SubmitResultV1 {
                    status: ExecutionStatus::Revert(revert_data.clone()),
                    gas_used: 10,
                    logs: vec![],
                }),
                Err(ExecutionError::Revert(revert_data)),
            ),
            (
                SubmitResult::V1(SubmitResultV1 {
                    status: ExecutionStatus::OutOfFund,
                    gas_used: 10,
                    logs: vec![],
                }),
                Err(ExecutionError::OutOfFund),
            ),
            (
                SubmitResult::Legacy(LegacyExecutionResult {
                    status: true,
                    gas_used: 10,
                    output: Bytes::from_slice(&[7]),
                    logs: vec![],
                }),
                Ok(Bytes::from_slice(&[7])),
            ),
            (
                SubmitResult::Legacy(LegacyExecutionResult {
                    status: false,
                    gas_used: 10,
                    output: Bytes::from_slice(&[7]),
                    logs: vec![],
                }),
                Err(ExecutionError::LegacyStatusFalse),
            ),
        ];

        for (result, expected) in cases {
            assert_eq!(result.into_outcome(), expected);
        }
    }

    #[test]
    fn test_revert_output_survives_the_full_path() {
        let revert_data = Bytes::from_slice(b"insufficient allowance");
        let result = SubmitResultV2::new(ExecutionStatus::Revert(revert_data.clone()), 31_000, vec![]);
        let wire = result.encode().unwrap();

        let decoded = SubmitResult::decode_versioned(&wire).unwrap();
        let err = decoded.into_outcome().unwrap_err();
        assert_eq!(err.revert_output(), Some(&revert_data));
    }

    #[test]
    fn test_logs_survive_the_full_path() {
        let logs = vec![addressed_log(0x01), addressed_log(0x02), addressed_log(0x03)];
        let result = SubmitResultV2::new(
            ExecutionStatus::Success(Bytes::new()),
            60_000,
            logs.clone(),
        );
        let wire = result.encode().unwrap();

        let SubmitResult::V2(decoded) = SubmitResult::decode_versioned(&wire).unwrap() else {
            panic!("versioned wire must decode as versioned");
        };
        assert_eq!(decoded.logs, logs);
        assert_eq!(decoded.gas_used, 60_000);
    }

    // =============================================================================
    // GARBAGE INPUT
    // =============================================================================

    #[test]
    fn test_garbage_never_panics() {
        let inputs: &[&[u8]] = &[
            &[],
            &[0x06],
            &[0xFF],
            &[0xFF; 64],
            &[SUBMIT_RESULT_VERSION],
            &[0x00, 0x00, 0x00],
            b"not a result at all",
        ];
        for input in inputs {
            // Any of these may error; none may panic.
            let _ = SubmitResult::decode_versioned(input);
        }
    }

    #[test]
    fn test_random_buffers_decode_or_error_cleanly() {
        let mut rng = StdRng::seed_from_u64(0xF422);
        for _ in 0..2_000 {
            let len = rng.gen_range(0..128);
            let mut buf = vec![0u8; len];
            rng.fill_bytes(&mut buf);

            // Whatever the outcome, a successful parse must re-encode to the
            // input: the trial chain may pick a layout, never invent or drop
            // bytes.
            if let Ok(result) = SubmitResult::decode_versioned(&buf) {
                match result {
                    SubmitResult::V2(r) => assert_eq!(r.encode().unwrap(), buf),
                    SubmitResult::V1(r) => assert_eq!(r.encode().unwrap(), buf),
                    SubmitResult::Legacy(r) => {
                        // The status byte canonicalizes to 0/1 on re-encode;
                        // everything after it must match byte for byte.
                        let reencoded = r.encode().unwrap();
                        assert_eq!(reencoded.len(), buf.len());
                        assert_eq!(&reencoded[1..], &buf[1..]);
                    }
                }
            }
        }
    }
}
