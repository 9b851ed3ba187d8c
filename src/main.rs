//! `MeshDesk` binary - bootstraps the store and prints the dashboard
//! summary for a standard roll request.

use dotenvy::dotenv;
use meshdesk::config::settings::{self, AppSettings};
use meshdesk::core::cost::{MaterialPricing, MeshSpec, RollDimensions};
use meshdesk::core::material::Material;
use meshdesk::core::{finance, procurement, report};
use meshdesk::db;
use meshdesk::errors::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application settings (config.toml or compiled defaults)
    let settings: AppSettings = settings::load_default_settings()?;
    info!("Loaded application settings");

    // 4. Initialize database and seed demo data on first run
    let connection = meshdesk::config::database::create_connection().await?;
    meshdesk::config::database::create_tables(&connection).await?;
    db::seed::seed_sample_data(&connection).await?;
    info!("Database ready");

    // 5. Quote a standard roll: 25 mm galvanized, 1.2 mm wire, 10 m x 1.5 m,
    //    30% margin, 100 km delivery.
    let spec = MeshSpec {
        cell_size_mm: 25.0,
        wire_thickness_mm: 1.2,
        material: Material::Galvanized,
    };
    let roll = RollDimensions {
        length_m: 10.0,
        height_m: 1.5,
    };
    let pricing = MaterialPricing {
        table: settings.pricing.clone(),
        override_price: None,
    };
    let quote = report::build_quote(
        &spec,
        &roll,
        &pricing,
        30.0,
        100.0,
        &settings.fleet,
        &settings.factors,
    )?;
    print!("{}", report::format_quote_summary(&quote));

    // 6. Reorder recommendations from the live stock snapshot
    let stock = db::warehouse::current_stock(&connection).await?;
    let recommendations = procurement::recommend(&stock, &settings.minimum_stock)?;
    print!("{}", report::format_reorder_summary(&recommendations));

    // 7. Monthly profit/loss from the ledger
    let ledger = db::ledger::get_ledger(&connection).await?;
    let profit_loss = finance::aggregate(&ledger);
    print!("{}", report::format_profit_loss_table(&profit_loss));

    Ok(())
}
