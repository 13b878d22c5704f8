//! Native file dialogs. They block the UI thread until closed, which is what a
//! modal picker should do.

use std::path::PathBuf;

pub fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
        .pick_file()
}

pub fn pick_xml() -> Option<PathBuf> {
    rfd::FileDialog::new().add_filter("NFe XML", &["xml"]).pick_file()
}

/// Save dialog for a PDF named `file_name` by default
pub fn save_pdf(file_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PDF", &["pdf"])
        .set_file_name(file_name)
        .save_file()
}
