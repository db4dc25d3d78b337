use qibla::app_config::AppConfig;
use qibla::compass::{Platform, SessionController};
use qibla::domain::events::CompassEvent;
use qibla::platform::{ConfiguredPermission, ConsoleView, FixedLocationProvider, LogFeedback, read_frames};
use qibla::session::SessionSettings;
use std::sync::Arc;
use tokio::task;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(target_name = config.target().name(), "✅  Loaded configuration");

    let platform = Platform {
        permissions: Arc::new(ConfiguredPermission::new(config.permissions().motion_granted())),
        location: Arc::new(FixedLocationProvider::new(config.location().origin())),
        view: Arc::new(ConsoleView),
        feedback: Arc::new(LogFeedback),
    };

    let settings = SessionSettings::from(&config);
    let (mut controller, tx) = SessionController::new(platform, settings, config.core().event_buffer_size());
    let listener = task::spawn(async move {
        controller.listen().await;
    });
    info!("✅  Initialized session controller");

    tx.send(CompassEvent::Activate).await?;
    info!("🔥 {} is up and running, reading orientation frames from stdin", env!("CARGO_PKG_NAME"));

    read_frames(tokio::io::stdin(), tx).await?;
    listener.await?;

    Ok(())
}
