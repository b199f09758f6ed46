use auction_engine::BidLedger;
use gateway::config::Config;
use gateway::hub::AuctionHub;
use gateway::router::create_router;
use gateway::state::AppState;
use history::HistoryWriter;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_args(std::env::args())?;

    // Restore a prior session before accepting any traffic.
    let ledger = match &config.recovery_path {
        Some(path) => {
            let report = history::load(path)?;
            tracing::info!(
                path = %path.display(),
                replayed = report.replayed,
                skipped = report.skipped,
                "restored session"
            );
            BidLedger::replay(report.records)
        }
        None => BidLedger::new(),
    };

    let start_ms = chrono::Utc::now().timestamp_millis();
    let writer = HistoryWriter::create(&config.history_dir, start_ms, config.port)?;
    tracing::info!(path = %writer.path().display(), "history log open");

    let state = AppState::new(AuctionHub::new(ledger, writer));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "auction server open");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
