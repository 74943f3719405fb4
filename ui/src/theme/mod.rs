//! Theme tokens consumed by the panel styles.
//!
//! The theme is always passed in explicitly; style functions in [`styles`] are
//! pure and never mutate it.

use serde::{Deserialize, Serialize};

pub mod styles;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Dark => Theme::dark(),
            ThemeMode::Light => Theme::light(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
    pub shadows: ThemeShadows,
    pub typography: ThemeTypography,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub border_weak: String,
    pub border_medium: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub background_primary: String,
    pub background_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeShadows {
    pub z2: String,
    pub z3: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTypography {
    pub font_family: String,
    pub body_small_font_size: String,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: ThemeColors {
                border_weak: "rgba(204, 204, 220, 0.12)".into(),
                border_medium: "rgba(204, 204, 220, 0.2)".into(),
                text_primary: "rgb(204, 204, 220)".into(),
                text_secondary: "rgba(204, 204, 220, 0.65)".into(),
                background_primary: "#181b1f".into(),
                background_secondary: "#22252b".into(),
            },
            shadows: ThemeShadows {
                z2: "0px 4px 8px rgba(1, 4, 9, 0.75)".into(),
                z3: "0px 10px 20px rgb(1, 4, 9)".into(),
            },
            typography: ThemeTypography {
                font_family: "Inter, Helvetica, Arial, sans-serif".into(),
                body_small_font_size: "0.75rem".into(),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: ThemeColors {
                border_weak: "rgba(36, 41, 46, 0.12)".into(),
                border_medium: "rgba(36, 41, 46, 0.3)".into(),
                text_primary: "rgb(36, 41, 46)".into(),
                text_secondary: "rgba(36, 41, 46, 0.75)".into(),
                background_primary: "#ffffff".into(),
                background_secondary: "#f4f5f5".into(),
            },
            shadows: ThemeShadows {
                z2: "0px 4px 8px rgba(24, 26, 27, 0.2)".into(),
                z3: "0px 13px 20px 1px rgba(24, 26, 27, 0.18)".into(),
            },
            typography: ThemeTypography {
                font_family: "Inter, Helvetica, Arial, sans-serif".into(),
                body_small_font_size: "0.75rem".into(),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
