use std::sync::Arc;
use std::time::{Duration, Instant};

use storefront_app::config::AppConfig;
use storefront_app::effects::EffectRunner;
use storefront_app::logging::{self, LogDestination};
use storefront_app::router::MemoryRouter;
use storefront_app::sessions::ListSession;
use storefront_core::{Schema, ViewStatus, PRODUCTS, SHIPMENTS};
use storefront_gateway::RestGateway;
use storefront_logging::{store_error, store_info};

/// Headless status check: mounts a list controller per catalog against the
/// configured backend and reports what a hosted list view would render.
fn main() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Both);
    let config = AppConfig::from_env();
    store_info!("storefront console, backend at {}", config.base_url);

    let navigator = Arc::new(MemoryRouter::new());
    for schema in [&SHIPMENTS, &PRODUCTS] {
        report(schema, &config, navigator.clone())?;
    }
    Ok(())
}

fn report(
    schema: &'static Schema,
    config: &AppConfig,
    navigator: Arc<MemoryRouter>,
) -> anyhow::Result<()> {
    let gateway = Arc::new(RestGateway::new(&config.base_url, schema)?);
    let runner = Arc::new(EffectRunner::new(gateway));
    let mut session = ListSession::new(schema, runner, navigator);

    let deadline = Instant::now() + Duration::from_secs(35);
    loop {
        session.pump();
        match session.view().status {
            ViewStatus::Loading => {
                if Instant::now() >= deadline {
                    store_error!("{}: timed out waiting for the backend", schema.plural);
                    return Ok(());
                }
                std::thread::sleep(Duration::from_millis(25));
            }
            ViewStatus::Empty => {
                store_info!("{}: no records", schema.plural);
                return Ok(());
            }
            ViewStatus::Error(message) => {
                store_error!("{}: {message}", schema.plural);
                return Ok(());
            }
            ViewStatus::Ready => {
                store_info!("{}: {} records", schema.plural, session.view().rows.len());
                return Ok(());
            }
        }
    }
}
