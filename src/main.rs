use std::sync::Arc;

use tracing::{error, info, instrument};
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, Registry};
use wedding_rsvp::{
    adapters::{
        config::app_config::{AppConfig, LogConfig},
        http::{router::router, AppState},
        sheets::{sheet_guest_repository::SheetGuestRepository, spreadsheet_manager::SpreadsheetManager},
    },
    application::guest_service::GuestService,
    ports::guest_repository::GuestRepository,
    prettyprint::prettyprint::PrettyFormatter,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().map_err(|report| format!("{:?}", report))?;

    setup_tracing(&config.log)?;
    setup_panic_hook();

    match run(config).await {
        Ok(()) => {
            info!("Server stopped");
            Ok(())
        }
        Err(e) => {
            error!("Server failed: {}", e);
            Err(e)
        }
    }
}

#[instrument(skip(config))]
async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let layout = config.sheets.layout()?;

    let spreadsheet_manager = SpreadsheetManager::new(config.sheets.clone())
        .await
        .map_err(|report| format!("{:?}", report))?;
    let repository: Arc<dyn GuestRepository> = Arc::new(SheetGuestRepository::new(
        Arc::new(spreadsheet_manager),
        &layout.range,
    ));

    let state = AppState {
        guest_service: Arc::new(GuestService::new(repository, layout.schema)),
    };

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on {}", address);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn setup_tracing(log: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let level: tracing::Level = log.level.parse()?;

    let stdout_layer = tracing_subscriber::fmt::layer().event_format(PrettyFormatter::new(true));

    let log_file_layer = match &log.file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .event_format(PrettyFormatter::new(false))
                .with_writer(std::fs::File::create(path.as_ref())?)
                .with_ansi(false),
        ),
        None => None,
    };

    Registry::default()
        .with(
            Targets::new()
                .with_target("wedding_rsvp", level)
                .with_target("tower_http", level),
        )
        .with(log_file_layer)
        .with(stdout_layer)
        .init();

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
