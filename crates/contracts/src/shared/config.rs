use crate::shared::record_list::{IdStrategy, InsertPosition};
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub pagination: PaginationConfig,
    pub records: RecordsConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct RecordsConfig {
    #[serde(default)]
    pub insert_position: InsertPosition,
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct UiConfig {
    /// Cosmetic spinner before a save is applied
    #[serde(default)]
    pub save_delay_ms: u32,
    /// QHSE certificates expiring within this many days are flagged
    pub expiry_warning_days: i64,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[pagination]
default_page_size = 10
page_size_options = [5, 10, 25, 50]

[records]
insert_position = "head"
id_strategy = "sequence"

[ui]
save_delay_ms = 300
expiry_warning_days = 30
"#;

static EMBEDDED: Lazy<DashboardConfig> = Lazy::new(|| match load_config(None) {
    Ok(config) => config,
    Err(e) => {
        log::error!("embedded config is invalid: {}", e);
        DashboardConfig::fallback()
    }
});

impl DashboardConfig {
    /// Parsed `DEFAULT_CONFIG`
    pub fn embedded() -> &'static DashboardConfig {
        &EMBEDDED
    }

    fn fallback() -> Self {
        Self {
            pagination: PaginationConfig {
                default_page_size: 10,
                page_size_options: vec![5, 10, 25, 50],
            },
            records: RecordsConfig {
                insert_position: InsertPosition::Head,
                id_strategy: IdStrategy::Sequence,
            },
            ui: UiConfig {
                save_delay_ms: 0,
                expiry_warning_days: 30,
            },
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.pagination.default_page_size == 0 {
            anyhow::bail!("pagination.default_page_size must be greater than zero");
        }
        if self.pagination.page_size_options.is_empty() {
            anyhow::bail!("pagination.page_size_options must not be empty");
        }
        if self.pagination.page_size_options.contains(&0) {
            anyhow::bail!("pagination.page_size_options must not contain zero");
        }
        if self.ui.expiry_warning_days < 0 {
            anyhow::bail!("ui.expiry_warning_days must not be negative");
        }
        Ok(())
    }

    /// Page size options, always including the default size
    pub fn page_size_options(&self) -> Vec<usize> {
        let mut options = self.pagination.page_size_options.clone();
        if !options.contains(&self.pagination.default_page_size) {
            options.push(self.pagination.default_page_size);
        }
        options.sort_unstable();
        options.dedup();
        options
    }
}

/// Load configuration
///
/// Search order:
/// 1. `override_toml`, when given (the host page may inject one)
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<DashboardConfig> {
    let source = match override_toml {
        Some(text) => {
            log::info!("Loading dashboard config override");
            text
        }
        None => DEFAULT_CONFIG,
    };
    let config: DashboardConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
}
