//! # PDF Downloads
//!
//! The save path comes from the dialog on the UI thread; fetching and writing the file
//! happen on the runtime.

use std::path::PathBuf;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, ToastLevel};
use crate::app::tasks::TaskContext;
use crate::core::error::{AppError, Result};

/// Document a PDF can be downloaded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfDocument {
    Quote(i64),
    Sale(i64),
    ServiceOrder(i64),
}

impl PdfDocument {
    /// Suggested file name in the save dialog
    pub fn file_name(&self) -> String {
        match self {
            PdfDocument::Quote(id) => format!("quote-{}.pdf", id),
            PdfDocument::Sale(id) => format!("sale-{}.pdf", id),
            PdfDocument::ServiceOrder(id) => format!("service-order-{}.pdf", id),
        }
    }
}

pub(crate) fn download(ctx: &TaskContext, document: PdfDocument, target: PathBuf) {
    tracing::info!(?document, target = %target.display(), "Downloading PDF");
    ctx.spawn(move |api| async move {
        let bytes = match document {
            PdfDocument::Quote(id) => api.quote_pdf(id).await,
            PdfDocument::Sale(id) => api.sale_pdf(id).await,
            PdfDocument::ServiceOrder(id) => api.service_order_pdf(id).await,
        };
        AppEvent::PdfSaved(write_pdf(bytes, target).await)
    });
}

async fn write_pdf(bytes: Result<Vec<u8>>, target: PathBuf) -> Result<PathBuf> {
    let bytes = bytes?;
    tokio::fs::write(&target, &bytes)
        .await
        .map_err(|e| AppError::FileInput(format!("Could not write {}: {}", target.display(), e)))?;
    Ok(target)
}

pub(crate) fn on_saved(state: &mut AppState, result: Result<PathBuf>) {
    match result {
        Ok(path) => {
            state.toast(ToastLevel::Success, format!("PDF saved to {}", path.display()));
            if let Err(e) = open::that_detached(&path) {
                tracing::warn!(error = %e, path = %path.display(), "Could not open the saved PDF");
            }
        }
        Err(err) => state.toast(ToastLevel::Error, super::failure_message(&err, "Could not download the PDF")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_pdf_creates_file() {
        let dir = tempfile::tempdir().expect("tempdir should succeed in test");
        let target = dir.path().join("sale-7.pdf");

        let written = write_pdf(Ok(b"%PDF-1.7".to_vec()), target.clone())
            .await
            .expect("write should succeed in test");

        assert_eq!(written, target);
        assert_eq!(std::fs::read(&target).expect("read should succeed in test"), b"%PDF-1.7");
    }

    #[tokio::test]
    async fn test_fetch_error_skips_write() {
        let dir = tempfile::tempdir().expect("tempdir should succeed in test");
        let target = dir.path().join("quote-1.pdf");

        let result = write_pdf(Err(AppError::NotFound), target.clone()).await;

        assert_eq!(result, Err(AppError::NotFound));
        assert!(!target.exists());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(PdfDocument::ServiceOrder(3).file_name(), "service-order-3.pdf");
    }
}
