//! Boreal Back-Office Console
//!
//! Fetches the program dashboard over the API and prints it: ambassador
//! statistics, program configuration, and pending expense counts.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boreal_client::ApiClient;
use boreal_core::expense::ExpenseStatus;
use boreal_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boreal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    info!(base_url = %config.api.base_url, "Configuration loaded");

    let client = ApiClient::new(&config)?;

    let program_config = client.settings.load_or_default().await;
    info!(
        default_commission = %program_config.default_commission,
        min_payout = %program_config.min_payout_amount,
        cookie_days = program_config.cookie_days,
        "Ambassador program configuration"
    );

    client.ambassadors.list(None).await?;
    let stats = client.ambassadors.stats();
    info!(
        count = stats.ambassador_count,
        active = stats.active_count,
        total_sales = %stats.total_sales,
        total_commissions = %stats.total_commissions,
        program_roi = %stats.program_roi,
        "Ambassador program"
    );
    for performer in &stats.top_performers {
        info!(name = %performer.name, roi = %performer.roi, "Top performer");
    }

    let expenses = client.expenses.list().await?;
    let awaiting_approval = expenses
        .iter()
        .filter(|e| e.status == ExpenseStatus::Submitted)
        .count();
    info!(
        total = expenses.len(),
        awaiting_approval, "Expense overview"
    );

    Ok(())
}
