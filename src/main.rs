use defichange_client::config::Config;
use defichange_client::{SessionStore, build_service};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_CONFIG: &str = "config/default.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "debug,reqwest=info,hyper_util=info".into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = Config::from_yaml(&path).await?;
    let service = build_service(&config)?;

    let (assets, fiats, countries) = tokio::try_join!(
        service.get_assets(),
        service.get_fiats(),
        service.get_countries()
    )?;

    tracing::info!(
        assets = assets.len(),
        fiats = fiats.len(),
        countries = countries.len(),
        "Master data loaded"
    );

    let Some(credentials) = config.credentials else {
        tracing::info!("No credentials configured, skipping sign-in");
        return Ok(());
    };

    let sessions = SessionStore::new();
    service.log_in(&credentials, &sessions).await?;

    let home = service.load_home(&sessions).await?;

    tracing::info!(address = %home.user.address, "Signed in");
    for route in &home.routes.buy_routes {
        tracing::info!(
            asset = %route.asset.name,
            iban = %route.iban,
            bank_usage = route.bank_usage.as_deref().unwrap_or("-"),
            "Buy route"
        );
    }
    for route in &home.routes.sell_routes {
        tracing::info!(
            fiat = %route.fiat.name,
            iban = %route.iban,
            deposit_address = route.deposit_address.as_deref().unwrap_or("-"),
            "Sell route"
        );
    }
    if !home.has_routes() {
        tracing::info!("No active payment routes");
    }

    Ok(())
}
