//! Display values and links produced by field callables, plus the config-driven
//! fallbacks used when the host does not supply its own.

use super::format;
use super::series::{DataLink, FieldConfig, Thresholds};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayValue {
    pub text: String,
    pub suffix: Option<String>,
    pub color: Option<String>,
}

impl DisplayValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suffix: None,
            color: None,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Same,
    Blank,
}

impl LinkTarget {
    pub fn as_attr(self) -> &'static str {
        match self {
            LinkTarget::Same => "_self",
            LinkTarget::Blank => "_blank",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkModel {
    pub href: String,
    pub title: String,
    pub target: LinkTarget,
}

impl LinkModel {
    pub fn new(href: impl Into<String>, target: LinkTarget) -> Self {
        Self {
            href: href.into(),
            title: String::new(),
            target,
        }
    }

    /// `rel` attribute for links opening a new browsing context.
    pub fn rel(&self) -> Option<&'static str> {
        match self.target {
            LinkTarget::Blank => Some("noopener noreferrer"),
            LinkTarget::Same => None,
        }
    }
}

/// Formats `value` according to `config`: decimals, unit suffix and threshold
/// color. Non-finite values keep their text but never get a color.
pub fn process_value(config: &FieldConfig, value: f64) -> DisplayValue {
    let text = match config.decimals {
        Some(decimals) => format::format_number(value, decimals as usize),
        None => format::format_adaptive(value),
    };

    DisplayValue {
        text,
        suffix: config.unit.as_deref().and_then(unit_suffix),
        color: if value.is_finite() {
            config
                .thresholds
                .as_ref()
                .and_then(|thresholds| threshold_color(thresholds, value))
        } else {
            None
        },
    }
}

fn unit_suffix(unit: &str) -> Option<String> {
    match unit.trim() {
        "" | "none" => None,
        "percent" | "%" => Some("%".to_string()),
        other => Some(format!(" {other}")),
    }
}

/// Color of the highest step whose lower bound is at or below `value`.
pub fn threshold_color(thresholds: &Thresholds, value: f64) -> Option<String> {
    thresholds
        .steps
        .iter()
        .filter(|step| step.value.map_or(true, |bound| bound <= value))
        .last()
        .map(|step| step.color.clone())
}

/// Expands `${__index}` in every configured link.
pub fn interpolate_links(links: &[DataLink], index: usize) -> Vec<LinkModel> {
    let index = index.to_string();
    links
        .iter()
        .map(|link| LinkModel {
            href: link.url.replace("${__index}", &index),
            title: link.title.clone(),
            target: if link.target_blank {
                LinkTarget::Blank
            } else {
                LinkTarget::Same
            },
        })
        .collect()
}
