use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImportedItemStatus {
    #[default]
    Created,
    Updated,
}

/// Result of `POST /finance/nfe-import/upload`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NfeImportResult {
    pub success: bool,
    pub nfe_number: Option<String>,
    pub nfe_key: Option<String>,
    pub issuer: Option<String>,
    pub total_items: u32,
    pub items_imported: u32,
    pub items_updated: u32,
    pub items: Vec<NfeImportedItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NfeImportedItem {
    pub name: String,
    pub quantity: f64,
    pub status: ImportedItemStatus,
    pub old_stock: Option<f64>,
    pub new_stock: f64,
}
