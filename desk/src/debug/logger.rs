//! File-based logging initialization

use std::fs;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DebugConfig, LogFormat, DEFAULT_LOG_LEVEL, LOG_FILE_PREFIX};

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation under `BIZDESK_LOG_DIR`
/// - Non-blocking writes so the UI thread never waits on disk
/// - Text or JSON lines, per `BIZDESK_LOG_FORMAT`
/// - Panic hook integration for crash logging
///
/// When the log directory cannot be created, logs go to stderr instead.
pub fn init() {
    let config = DebugConfig::from_env();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init();
        setup_panic_hook();
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    let registry = tracing_subscriber::registry().with(env_filter);
    let initialized = match config.format {
        LogFormat::Json => registry.with(layer.json()).try_init(),
        LogFormat::Text => registry.with(layer).try_init(),
    };
    if let Err(e) = initialized {
        eprintln!("Warning: A tracing subscriber is already set: {}", e);
    }

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        format = ?config.format,
        "Logging initialized"
    );

    setup_panic_hook();

    // Keep the writer guard alive for the lifetime of the program
    std::mem::forget(guard);
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!(location = %location, message = %message, "Application panic");
        tracing::error!(backtrace = %backtrace, "Panic backtrace");

        default_panic(panic_info);
    }));
}
