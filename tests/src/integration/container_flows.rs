//! # Container Flow Tests
//!
//! Drives a deployed container through every mutator and reader, asserting
//! initial values, round-trips, both rejection conditions, and the
//! aggregate `details()` snapshot.
//!
//! Mutations that exercise rejection behavior go through the call surface
//! (`handle_call`), since that is where the caller observes a failed
//! transaction; round-trips use the typed API.

#[cfg(test)]
mod tests {
    use rand::RngCore;
    use uuid::Uuid;
    use vault_container::prelude::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Recipient supplied at construction.
    fn recipient() -> Address {
        Address::new([0xbb; 20])
    }

    /// A distinct wallet for set_wallet flows.
    fn new_wallet() -> Address {
        Address::new([0xcc; 20])
    }

    fn deploy() -> ContainerService<InMemoryLedger> {
        create_test_service(recipient())
    }

    // =============================================================================
    // INITIAL VALUES
    // =============================================================================

    #[tokio::test]
    async fn initial_integer_values() {
        let service = deploy();
        let details = service.details().await;

        assert_eq!(details.positive_number, 100);
        assert_eq!(details.negative_number, -50);
    }

    #[tokio::test]
    async fn initial_boolean_and_state() {
        let service = deploy();
        let details = service.details().await;

        assert!(details.is_active);
        assert_eq!(details.current_state, LifecycleState::Active);
        assert_eq!(details.current_state.ordinal(), 1);
    }

    #[tokio::test]
    async fn initial_addresses() {
        let service = deploy();
        let details = service.details().await;

        assert_eq!(details.wallet, Address::ZERO);
        assert_eq!(details.recipient, recipient());
    }

    #[tokio::test]
    async fn initial_fixed_data_is_the_padded_literal() {
        let service = deploy();
        let details = service.details().await;

        // ASCII "0xabcdef123456", right-padded with zero bytes to 32.
        let expected = Bytes32::from_hex(
            "0x3078616263646566313233343536000000000000000000000000000000000000",
        )
        .unwrap();
        assert_eq!(details.fixed_data, expected);
    }

    #[tokio::test]
    async fn initial_dynamic_data_is_empty() {
        let service = deploy();

        assert!(service.details().await.dynamic_data.is_empty());
        assert_eq!(service.dynamic_data_length().await, 0);
    }

    // =============================================================================
    // INTEGER MUTATORS
    // =============================================================================

    #[tokio::test]
    async fn set_positive_number_round_trip() {
        let service = deploy();

        service.set_positive_number(500).await;
        assert_eq!(service.details().await.positive_number, 500);
    }

    #[tokio::test]
    async fn set_negative_number_round_trip() {
        let service = deploy();

        service.set_negative_number(-200).await;
        assert_eq!(service.details().await.negative_number, -200);
    }

    // =============================================================================
    // BOOLEAN MUTATOR
    // =============================================================================

    #[tokio::test]
    async fn toggle_active_flips_once() {
        let service = deploy();

        service.toggle_active().await;
        assert!(!service.details().await.is_active);
    }

    #[tokio::test]
    async fn toggle_active_twice_is_identity() {
        let service = deploy();

        service.toggle_active().await;
        service.toggle_active().await;
        assert!(service.details().await.is_active);
    }

    #[tokio::test]
    async fn toggle_active_odd_count_flips_exactly_once() {
        let service = deploy();

        for _ in 0..5 {
            service.toggle_active().await;
        }
        assert!(!service.details().await.is_active);
    }

    // =============================================================================
    // ADDRESS MUTATOR
    // =============================================================================

    #[tokio::test]
    async fn set_wallet_updates_wallet_and_recipient() {
        let service = deploy();

        service.set_wallet(new_wallet()).await;

        let details = service.details().await;
        assert_eq!(details.wallet, new_wallet());
        assert_eq!(details.recipient, new_wallet());
    }

    #[tokio::test]
    async fn set_wallet_accepts_zero_address() {
        let service = deploy();

        service.set_wallet(Address::ZERO).await;

        let details = service.details().await;
        assert_eq!(details.wallet, Address::ZERO);
        assert_eq!(details.recipient, Address::ZERO);
    }

    // =============================================================================
    // FIXED DATA
    // =============================================================================

    #[tokio::test]
    async fn set_fixed_data_full_width_round_trip() {
        let service = deploy();
        let blob = Bytes32::from_hex(
            "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
        )
        .unwrap();

        service
            .set_fixed_data(Bytes::from_slice(blob.as_bytes()))
            .await
            .unwrap();
        assert_eq!(service.details().await.fixed_data, blob);
    }

    #[tokio::test]
    async fn set_fixed_data_pads_short_input_with_zero_bytes() {
        let service = deploy();

        service
            .set_fixed_data(Bytes::from_slice(&[0xde, 0xad]))
            .await
            .unwrap();

        let stored = service.details().await.fixed_data;
        assert_eq!(&stored.as_bytes()[..2], &[0xde, 0xad]);
        assert!(stored.as_bytes()[2..].iter().all(|&b| b == 0));
    }

    #[tokio::test]
    async fn set_fixed_data_rejects_33_random_bytes() {
        let service = deploy();
        let before = service.details().await.fixed_data;

        let mut too_long = vec![0u8; 33];
        rand::thread_rng().fill_bytes(&mut too_long);

        let receipt = service
            .handle_call(Uuid::new_v4(), Call::SetFixedData(Bytes::from_vec(too_long)))
            .await;

        assert!(!receipt.success);
        assert!(receipt
            .revert_reason
            .as_deref()
            .unwrap()
            .contains("fixed data too long"));
        assert_eq!(service.details().await.fixed_data, before);
    }

    // =============================================================================
    // DYNAMIC DATA
    // =============================================================================

    #[tokio::test]
    async fn set_dynamic_data_round_trip_is_lossless() {
        let service = deploy();
        let payload = Bytes::from_slice(&[0x12, 0x34, 0x56, 0x78, 0x90, 0xab, 0xcd, 0xef]);

        service.set_dynamic_data(payload.clone()).await;

        assert_eq!(service.details().await.dynamic_data, payload);
        assert_eq!(service.dynamic_data_length().await, 8);
    }

    #[tokio::test]
    async fn dynamic_data_as_string_decodes_text() {
        let service = deploy();

        // Text padded to a fixed 32-byte frame, as the original harness
        // produced it. The reader passes the padding through; the caller
        // strips it.
        let mut framed = b"Hello, Vault!".to_vec();
        framed.resize(32, 0);
        service.set_dynamic_data(Bytes::from_vec(framed)).await;

        let raw = service.dynamic_data_as_string().await;
        assert_eq!(raw.trim_end_matches('\0'), "Hello, Vault!");
    }

    #[tokio::test]
    async fn dynamic_data_as_string_gives_no_encoding_guarantees() {
        let service = deploy();

        // Not valid UTF-8; the reader still returns text without failing.
        service
            .set_dynamic_data(Bytes::from_slice(&[0xff, 0xfe, 0x41]))
            .await;

        let raw = service.dynamic_data_as_string().await;
        assert!(raw.ends_with('A'));
    }

    // =============================================================================
    // LIFECYCLE STATE
    // =============================================================================

    #[tokio::test]
    async fn set_state_reaches_every_member_from_every_member() {
        let service = deploy();

        // Fully connected transition graph.
        for ordinal in [0u8, 2, 1, 0, 1, 2, 0] {
            service.set_state(ordinal).await.unwrap();
            assert_eq!(
                service.details().await.current_state.ordinal(),
                ordinal
            );
        }
    }

    #[tokio::test]
    async fn set_state_rejects_out_of_range_ordinal() {
        let service = deploy();

        let receipt = service.handle_call(Uuid::new_v4(), Call::SetState(3)).await;

        assert!(!receipt.success);
        assert_eq!(
            receipt.revert_reason.as_deref(),
            Some("invalid state ordinal: 3")
        );
        assert_eq!(
            service.details().await.current_state,
            LifecycleState::Active
        );
    }

    // =============================================================================
    // AGGREGATE SNAPSHOT
    // =============================================================================

    #[tokio::test]
    async fn get_details_end_to_end_scenario() {
        let service = deploy();
        let fixed = Bytes32::from_hex(
            "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
        )
        .unwrap();

        let calls = [
            Call::SetPositiveNumber(500),
            Call::SetNegativeNumber(-200),
            Call::ToggleActive,
            Call::SetWallet(new_wallet()),
            Call::SetFixedData(Bytes::from_slice(fixed.as_bytes())),
            Call::SetDynamicData(Bytes::from_slice(b"Hello, Vault!")),
            Call::SetState(2),
        ];
        for call in calls {
            let receipt = service.handle_call(Uuid::new_v4(), call).await;
            assert!(receipt.success, "unexpected rejection: {receipt:?}");
        }

        let details = service.details().await;
        assert_eq!(details.positive_number, 500);
        assert_eq!(details.negative_number, -200);
        assert!(!details.is_active);
        assert_eq!(details.wallet, new_wallet());
        assert_eq!(details.recipient, new_wallet());
        assert_eq!(details.fixed_data, fixed);
        assert_eq!(details.dynamic_data, Bytes::from_slice(b"Hello, Vault!"));
        assert_eq!(details.current_state, LifecycleState::Inactive);
        assert_eq!(details.current_state.ordinal(), 2);
    }

    #[tokio::test]
    async fn record_stays_internally_consistent() {
        let service = deploy();

        service.set_wallet(new_wallet()).await;
        service.set_state(0).await.unwrap();
        service
            .set_fixed_data(Bytes::from_slice(b"consistency"))
            .await
            .unwrap();

        let details = service.details().await;
        let record = ContainerRecord {
            positive_number: details.positive_number,
            negative_number: details.negative_number,
            is_active: details.is_active,
            wallet: details.wallet,
            recipient: details.recipient,
            fixed_data: details.fixed_data,
            dynamic_data: details.dynamic_data,
            current_state: details.current_state,
        };
        assert!(check_all_invariants(&record).is_valid());
    }
}
