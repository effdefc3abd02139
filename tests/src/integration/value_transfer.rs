//! # Value Transfer Tests
//!
//! The container holds identifiers, not balances: native value accounting
//! belongs to the hosting environment's ledger. These tests confirm that
//! `recipient` and `wallet` are receivable through the standard transfer
//! mechanism and that the container never intercepts or redirects value.

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use vault_container::prelude::*;

    /// Funded account standing in for an external caller.
    fn funder() -> Address {
        Address::new([0x11; 20])
    }

    fn recipient() -> Address {
        Address::new([0xbb; 20])
    }

    fn deploy_funded() -> ContainerService<InMemoryLedger> {
        ContainerService::deploy(
            funder(),
            0,
            recipient(),
            InMemoryLedger::with_balances([(funder(), U256::from(1_000_000))]),
            ServiceConfig::default(),
        )
    }

    #[tokio::test]
    async fn recipient_receives_native_value() {
        let service = deploy_funded();
        let to = service.details().await.recipient;

        service
            .ledger()
            .transfer(funder(), to, U256::from(1_000))
            .await
            .unwrap();

        assert_eq!(service.ledger().balance(to).await, U256::from(1_000));
    }

    #[tokio::test]
    async fn wallet_receives_native_value_after_set_wallet() {
        let service = deploy_funded();
        let wallet = Address::new([0xcc; 20]);

        service
            .handle_call(Uuid::new_v4(), Call::SetWallet(wallet))
            .await;
        let to = service.details().await.wallet;

        service
            .ledger()
            .transfer(funder(), to, U256::from(500))
            .await
            .unwrap();

        assert_eq!(service.ledger().balance(wallet).await, U256::from(500));
    }

    #[tokio::test]
    async fn transfer_debits_only_the_sender() {
        let service = deploy_funded();
        let to = service.details().await.recipient;

        let before = service.ledger().balance(funder()).await;
        service
            .ledger()
            .transfer(funder(), to, U256::from(250))
            .await
            .unwrap();

        assert_eq!(
            service.ledger().balance(funder()).await,
            before - U256::from(250)
        );
        assert_eq!(service.ledger().balance(to).await, U256::from(250));
    }

    #[tokio::test]
    async fn repeated_transfers_accumulate() {
        let service = deploy_funded();
        let to = service.details().await.recipient;

        for _ in 0..3 {
            service
                .ledger()
                .transfer(funder(), to, U256::from(100))
                .await
                .unwrap();
        }

        assert_eq!(service.ledger().balance(to).await, U256::from(300));
    }

    #[tokio::test]
    async fn container_state_is_untouched_by_transfers() {
        let service = deploy_funded();
        let before = service.details().await;

        service
            .ledger()
            .transfer(funder(), before.recipient, U256::from(42))
            .await
            .unwrap();

        assert_eq!(service.details().await, before);
    }
}
