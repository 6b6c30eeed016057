//! Configuration management for sitewatch.
//!
//! The configuration is a small JSON document stored in the per-user data
//! directory (see [`DataStorage`]). Every section is optional; a missing
//! file or section means built-in defaults apply.
//!
//! ```json
//! {
//!   "analytics": {
//!     "default_working_days": 22,
//!     "max_range_months": 6,
//!     "duration_overrides": { "Legal": "0", "Construction": "5" }
//!   },
//!   "ordering": {
//!     "departments": ["Management", "Construction"],
//!     "designations": { "Construction": ["General Manager", "Site Engineer"] }
//!   }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sitewatch::libs::config::Config;
//!
//! let config = Config::read()?;
//! let analytics = config.analytics.clone().unwrap_or_default();
//! println!("default working days: {}", analytics.default_working_days);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::ordering::OrgOrder;
use crate::libs::rules::parse_override_hours;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Settings that feed the report calculations.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalyticsConfig {
    /// Working days used for every employee and month that has no
    /// imported value.
    pub default_working_days: u32,

    /// Longest month span accepted by the trend report.
    pub max_range_months: u32,

    /// Daily target per department in hours (`"5"`, `"4.5"`, `"4:30"`).
    /// `"0"` hides the target while keeping the 4h calculation baseline.
    #[serde(default)]
    pub duration_overrides: BTreeMap<String, String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            default_working_days: 22,
            max_range_months: 6,
            duration_overrides: BTreeMap::new(),
        }
    }
}

/// Root configuration document.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsConfig>,

    /// Replaces the built-in org chart used to order report rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<OrgOrder>,
}

impl Config {
    /// Reads the configuration file, or returns the defaults when none
    /// exists yet.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        tracing::debug!(path = %config_file_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Overrides that do not parse as hours. Reports ignore them.
    pub fn invalid_overrides(&self) -> Vec<String> {
        self.analytics
            .as_ref()
            .map(|a| {
                a.duration_overrides
                    .iter()
                    .filter(|(_, value)| parse_override_hours(value).is_none())
                    .map(|(key, _)| key.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Interactive setup wizard.
    ///
    /// Starts from the stored configuration, lets the user pick which
    /// sections to edit and prompts for each of them. The result is not
    /// saved; call [`Config::save`] on it.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "analytics".to_string(),
                name: Message::ConfigModuleAnalytics.to_string(),
            },
            ConfigModule {
                key: "overrides".to_string(),
                name: Message::ConfigModuleOverrides.to_string(),
            },
            ConfigModule {
                key: "ordering".to_string(),
                name: Message::ConfigModuleOrdering.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "analytics" => {
                    let default = config.analytics.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleAnalytics);
                    config.analytics = Some(AnalyticsConfig {
                        default_working_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultWorkingDays.to_string())
                            .default(default.default_working_days)
                            .interact_text()?,
                        max_range_months: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMaxRangeMonths.to_string())
                            .default(default.max_range_months)
                            .interact_text()?,
                        duration_overrides: default.duration_overrides,
                    });
                }
                "overrides" => {
                    let mut analytics = config.analytics.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleOverrides);
                    loop {
                        let department: String = Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptOverrideKey.to_string())
                            .interact_text()?;
                        let hours: String = Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptOverrideHours.to_string())
                            .validate_with(|input: &String| -> Result<(), String> {
                                match parse_override_hours(input) {
                                    Some(_) => Ok(()),
                                    None => Err(Message::ConfigOverrideIgnored(input.clone()).to_string()),
                                }
                            })
                            .interact_text()?;
                        analytics.duration_overrides.insert(department.trim().to_string(), hours.trim().to_string());

                        let again = Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAddOverride.to_string())
                            .default(false)
                            .interact()?;
                        if !again {
                            break;
                        }
                    }
                    config.analytics = Some(analytics);
                }
                "ordering" => {
                    msg_print!(Message::ConfigModuleOrdering);
                    let keep = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptKeepOrdering.to_string())
                        .default(true)
                        .interact()?;
                    if !keep {
                        config.ordering = Some(OrgOrder::default());
                        msg_warning!(Message::ConfigOrderingReset);
                    }
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
