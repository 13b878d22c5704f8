//! # NFe Import Handlers

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::NfeImportResult;

use super::failure_message;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, PickedFile, ToastLevel};
use crate::app::tasks::TaskContext;
use crate::core::error::Result;
use crate::domain::files;

/// Read a picked file; anything but `.xml` is refused before upload.
pub(crate) fn pick_file(state: &Arc<RwLock<AppState>>, path: &Path) {
    let mut state = state.write();
    match files::read_xml(path) {
        Ok((name, content)) => {
            tracing::debug!(file = %name, bytes = content.len(), "NFe file picked");
            state.nfe.file = Some(PickedFile { name, content });
            state.nfe.result = None;
        }
        Err(err) => state.toast(ToastLevel::Error, err.user_message("Could not read the file")),
    }
}

pub(crate) fn reset(state: &Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.nfe.file = None;
    state.nfe.result = None;
}

pub(crate) fn upload(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    let file = {
        let mut state = state.write();
        if state.nfe.pending {
            return;
        }
        let Some(file) = state.nfe.file.clone() else {
            state.toast(ToastLevel::Warning, "Pick an XML file first");
            return;
        };
        state.nfe.pending = true;
        file
    };

    ctx.spawn(move |api| async move { AppEvent::NfeImported(api.upload_nfe(file.name, file.content).await) });
}

pub(crate) fn on_imported(state: &mut AppState, result: Result<NfeImportResult>) {
    state.nfe.pending = false;
    match result {
        Ok(result) => {
            state.toast(
                ToastLevel::Success,
                format!(
                    "NFe imported: {} new, {} updated",
                    result.items_imported, result.items_updated
                ),
            );
            state.nfe.result = Some(result);
        }
        Err(err) => state.toast(ToastLevel::Error, failure_message(&err, "Could not import the NFe")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session::ThemeMode;

    #[test]
    fn test_non_xml_is_rejected_before_upload() {
        let dir = tempfile::tempdir().expect("tempdir should succeed in test");
        let path = dir.path().join("invoice.pdf");
        std::fs::write(&path, b"%PDF").expect("write should succeed in test");
        let state = Arc::new(RwLock::new(AppState::new(ThemeMode::Dark)));

        pick_file(&state, &path);

        let state = state.read();
        assert!(state.nfe.file.is_none());
        assert_eq!(state.pending_toasts[0].message, "Only XML files can be imported");
    }

    #[test]
    fn test_xml_is_picked() {
        let dir = tempfile::tempdir().expect("tempdir should succeed in test");
        let path = dir.path().join("nfe-123.xml");
        std::fs::write(&path, b"<nfeProc/>").expect("write should succeed in test");
        let state = Arc::new(RwLock::new(AppState::new(ThemeMode::Dark)));

        pick_file(&state, &path);

        let picked = state.read().nfe.file.clone().expect("file should be picked in test");
        assert_eq!(picked.name, "nfe-123.xml");
        assert_eq!(picked.content, b"<nfeProc/>");
    }
}
