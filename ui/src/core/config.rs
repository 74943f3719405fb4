//! Panel options and the JSON fixture format used by the demo shells.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::series::Series;
use crate::theme::ThemeMode;

#[derive(Debug, Error)]
pub enum PanelDataError {
    #[error("malformed panel fixture: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("panel size must be positive, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelOptions {
    /// Show the "No Data: N" badge for series without a usable name.
    pub show_unnamed_badge: bool,
    /// Replaces the localized guidance shown when nothing can be grouped.
    pub no_data_hint: Option<String>,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            show_unnamed_badge: true,
            no_data_hint: None,
        }
    }
}

/// Everything a host hands the panel on one render pass, in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelFixture {
    #[serde(default)]
    pub options: PanelOptions,
    #[serde(default)]
    pub theme: ThemeMode,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub series: Vec<Series>,
}

impl PanelFixture {
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            options: PanelOptions::default(),
            theme: ThemeMode::default(),
            width,
            height,
            series: Vec::new(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, PanelDataError> {
        let fixture: PanelFixture = serde_json::from_str(raw)?;
        fixture.validate()?;
        Ok(fixture)
    }

    fn validate(&self) -> Result<(), PanelDataError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(PanelDataError::InvalidSize {
                width: self.width,
                height: self.height,
            })
        }
    }
}

const DEMO_FIXTURE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/demo/panel.json"
));

/// Fixture bundled with the crate for the demo dashboard.
pub fn demo_fixture() -> Result<PanelFixture, PanelDataError> {
    PanelFixture::from_json(DEMO_FIXTURE)
}
