use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NfeEnvironment {
    #[default]
    Homologation,
    Production,
}

impl NfeEnvironment {
    pub fn all() -> &'static [NfeEnvironment] {
        &[NfeEnvironment::Homologation, NfeEnvironment::Production]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NfeEnvironment::Homologation => "Homologation (testing)",
            NfeEnvironment::Production => "Production",
        }
    }
}

/// System-wide configuration (`GET/POST /settings`).
///
/// Grouped on screen as company, printing, system and NFe tabs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemConfig {
    pub id: Option<i64>,

    // Company
    pub company_name: String,
    pub cnpj: String,
    pub ie: String,
    pub im: String,
    pub address: String,
    pub number: String,
    pub complement: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub logo_base64: Option<String>,

    // Printing
    pub printer_name: String,
    /// Paper width in millimetres
    pub paper_width: u32,
    /// Paper height in millimetres
    pub paper_height: u32,
    pub auto_print: bool,
    pub copies: u32,

    // System
    pub system_name: String,
    pub default_currency: String,
    pub date_format: String,
    pub time_format: String,

    // NFe
    pub nfe_enabled: bool,
    pub nfe_api_url: String,
    pub nfe_api_token: String,
    pub nfe_series: String,
    pub nfe_last_number: u64,
    pub nfe_environment: NfeEnvironment,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            id: None,
            company_name: String::new(),
            cnpj: String::new(),
            ie: String::new(),
            im: String::new(),
            address: String::new(),
            number: String::new(),
            complement: String::new(),
            district: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            logo_base64: None,
            printer_name: String::new(),
            paper_width: 80,
            paper_height: 297,
            auto_print: false,
            copies: 1,
            system_name: "Negócio".to_string(),
            default_currency: "BRL".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
            time_format: "24h".to_string(),
            nfe_enabled: false,
            nfe_api_url: String::new(),
            nfe_api_token: String::new(),
            nfe_series: "1".to_string(),
            nfe_last_number: 0,
            nfe_environment: NfeEnvironment::Homologation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SystemConfig = serde_json::from_str(r#"{"companyName":"Oficina","copies":2}"#).unwrap();
        assert_eq!(config.company_name, "Oficina");
        assert_eq!(config.copies, 2);
        assert_eq!(config.paper_width, 80);
        assert_eq!(config.default_currency, "BRL");
        assert_eq!(config.nfe_environment, NfeEnvironment::Homologation);
    }
}
