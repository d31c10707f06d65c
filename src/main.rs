use std::sync::Arc;

use demand_intake::config::IntakeConfig;
use demand_intake::forward::Forwarder;
use demand_intake::routes::intake_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = IntakeConfig::from_env();

    eprintln!("📋 Demand Intake v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Submit API: http://0.0.0.0:{}/api/submit-demand", config.port);
    eprintln!("   Health: http://0.0.0.0:{}/health", config.port);
    eprintln!(
        "   Workflow webhook: {}",
        if config.flow_url.is_some() {
            "configured"
        } else {
            "NOT CONFIGURED (submissions will fail with 500)"
        }
    );
    eprintln!("   Forward timeout: {:?}\n", config.forward_timeout);

    let forwarder = Arc::new(Forwarder::new(&config));
    let app = intake_routes(forwarder);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Demand intake server started");
    axum::serve(listener, app).await?;

    Ok(())
}
