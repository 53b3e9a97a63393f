//! Handles settings for the demo. Configuration is read from an optional
//! `settings.toml` and from `EXPENSE_DEMO__*` environment variables.
//!
//! See `settings.toml` for the configuration.
use config::{Config, Environment, File};
use engine::{Currency, Money};
use serde::Deserialize;

use crate::error::{AppError, Result};

const SETTINGS_FILE: &str = "settings";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Display {
    pub currency: String,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            currency: Currency::default().code().to_string(),
        }
    }
}

/// Amounts are kept as text here and parsed into `Money` by [`Settings::demo`].
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Demo {
    pub threshold: String,
    pub lookup_threshold: String,
    pub budgets: Vec<String>,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            threshold: "30.00".to_string(),
            lookup_threshold: "100.00".to_string(),
            budgets: vec![
                "200.00".to_string(),
                "250.00".to_string(),
                "500.00".to_string(),
            ],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub display: Display,
    pub demo: Demo,
}

/// Demo parameters after parsing.
#[derive(Debug, Clone)]
pub struct DemoParams {
    pub currency: Currency,
    pub threshold: Money,
    pub lookup_threshold: Money,
    pub budgets: Vec<Money>,
}

impl Settings {
    pub fn new() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix("EXPENSE_DEMO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("demo.budgets")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn demo(&self) -> Result<DemoParams> {
        let money = |key: &str, value: &str| {
            value
                .parse::<Money>()
                .map_err(|err| AppError::Setting(format!("{key}: {err}")))
        };

        Ok(DemoParams {
            currency: Currency::try_from(self.display.currency.as_str())
                .map_err(|err| AppError::Setting(format!("display.currency: {err}")))?,
            threshold: money("demo.threshold", self.demo.threshold.as_str())?,
            lookup_threshold: money("demo.lookup_threshold", self.demo.lookup_threshold.as_str())?,
            budgets: self
                .demo
                .budgets
                .iter()
                .map(|budget| money("demo.budgets", budget.as_str()))
                .collect::<Result<_>>()?,
        })
    }
}
