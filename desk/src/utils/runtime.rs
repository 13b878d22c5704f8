//! Global Tokio runtime for async HTTP operations.
//!
//! eframe owns the main thread, reqwest needs a tokio context. `main` builds this
//! runtime and enters it for the lifetime of the window so handlers can `tokio::spawn`
//! straight from the UI thread.

use once_cell::sync::OnceCell;
use tokio::runtime::Runtime;

static TOKIO_RT: OnceCell<Runtime> = OnceCell::new();

/// Shared multi-threaded runtime, built on first use.
pub fn runtime() -> std::io::Result<&'static Runtime> {
    TOKIO_RT.get_or_try_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("bizdesk-worker")
            .build()
    })
}
