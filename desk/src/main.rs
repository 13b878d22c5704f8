use std::error::Error;
use std::sync::Arc;

use bizdesk::core::service::ApiService;
use bizdesk::services::session::{FileStore, KeyValueStore, SessionStore, SystemClock, ThemePreference};
use bizdesk::services::ApiClient;
use bizdesk::utils::runtime::runtime;
use bizdesk::{debug, App, DeskConfig, DeskUi};

fn main() -> Result<(), Box<dyn Error>> {
    // .env first so the logger sees RUST_LOG and BIZDESK_LOG_DIR
    dotenvy::dotenv().ok();
    debug::init();

    let config = DeskConfig::from_env()?;
    tracing::info!(api_url = %config.api_url, storage = %config.storage_path.display(), "Starting BizDesk");

    // Handlers spawn tasks from the UI thread; keep the runtime entered for the window's lifetime
    let _runtime = runtime()?.enter();

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.storage_path.clone()));
    let session = Arc::new(SessionStore::new(store.clone(), Arc::new(SystemClock)));
    let theme = ThemePreference::new(store);
    let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config, session.clone())?);

    let app = App::new(api, session, theme);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("BizDesk")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BizDesk",
        options,
        Box::new(|cc| Ok(Box::new(DeskUi::new(cc, app)))),
    )?;

    tracing::info!("BizDesk closed");
    Ok(())
}
