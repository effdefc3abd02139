//! # Vault Runtime - Deployment Tool
//!
//! Instantiates a TypeVault container over an in-memory ledger and reports
//! the resulting address, then exercises a short call sequence so the
//! deployment log shows the container responding.
//!
//! ```bash
//! # Deploy with the deployer account as recipient (default)
//! cargo run -p vault-runtime
//!
//! # Deploy with an explicit recipient
//! cargo run -p vault-runtime -- 0x00000000000000000000000000000000000000ff
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

use vault_container::prelude::*;

/// Deployer account used by the tool. Stands in for the environment's
/// first funded account.
const DEPLOYER: Address = Address::new([0x11; 20]);

/// Native value the tool seeds the deployer with.
const DEPLOYER_FUNDS: u64 = 1_000_000;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    // Recipient defaults to the deployer account, matching the original
    // deployment flow.
    let recipient = match std::env::args().nth(1) {
        Some(raw) => Address::from_hex(&raw)
            .with_context(|| format!("invalid recipient address: {raw}"))?,
        None => DEPLOYER,
    };

    info!("===========================================");
    info!("  TypeVault Runtime v{}", vault_container::VERSION);
    info!("===========================================");
    info!(deployer = %DEPLOYER, "Deploying container with account");

    let ledger =
        InMemoryLedger::with_balances([(DEPLOYER, U256::from(DEPLOYER_FUNDS))]);
    let service = ContainerService::deploy(
        DEPLOYER,
        0,
        recipient,
        ledger,
        ServiceConfig {
            trace_calls: true,
            check_invariants: true,
        },
    );

    info!(container = ?service.address(), "Container deployed");

    smoke_sequence(&service).await?;

    let stats = service.stats().await;
    info!(
        handled = stats.calls_handled,
        accepted = stats.calls_accepted,
        rejected = stats.calls_rejected,
        "Deployment check complete"
    );

    Ok(())
}

/// Runs one call against each mutator and logs the resulting snapshot.
async fn smoke_sequence(service: &ContainerService<InMemoryLedger>) -> Result<()> {
    let calls = [
        Call::SetPositiveNumber(500),
        Call::SetNegativeNumber(-200),
        Call::ToggleActive,
        Call::SetWallet(Address::new([0x22; 20])),
        Call::SetFixedData(Bytes::from_slice(b"deployment check")),
        Call::SetDynamicData(Bytes::from_slice(b"Hello, Vault!")),
        Call::SetState(2),
    ];

    for call in calls {
        let receipt = service.handle_call(Uuid::new_v4(), call).await;
        anyhow::ensure!(
            receipt.success,
            "smoke call {} rejected: {:?}",
            receipt.operation,
            receipt.revert_reason
        );
    }

    // Fund the recipient to confirm the identifier is receivable.
    let details = service.details().await;
    service
        .ledger()
        .transfer(DEPLOYER, details.recipient, U256::from(1_000))
        .await
        .context("fund recipient")?;

    info!(
        positive = details.positive_number,
        negative = details.negative_number,
        active = details.is_active,
        wallet = %details.wallet,
        state = %details.current_state,
        dynamic_len = details.dynamic_data.len(),
        "Container snapshot after smoke sequence"
    );

    Ok(())
}

/// Initializes the fmt subscriber, honoring `RUST_LOG` when set.
fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("set tracing subscriber")?;
    Ok(())
}
