//! Inline style declarations derived from a [`Theme`].
//!
//! Structural rules (hover behaviour, screen-reader-only text) live in
//! `assets/theme/main.css`; everything that depends on theme tokens or on the
//! packed layout is computed here.

use super::Theme;
use crate::panel::{GridLayout, TileSize};

pub fn wrapper_style(theme: &Theme, width: f64, height: f64) -> String {
    format!(
        "width: {width}px; height: {height}px; color: {}; font-family: {};",
        theme.colors.text_primary, theme.typography.font_family
    )
}

pub fn grid_style(layout: &GridLayout) -> String {
    let edge = layout.size.width;
    let mut style = format!(
        "grid-template-columns: repeat({}, {edge}px); grid-auto-rows: {edge}px;",
        layout.columns.max(1)
    );
    match (layout.grid_width, layout.grid_height) {
        (Some(width), Some(height)) if !layout.overflow => {
            style.push_str(&format!(" width: {width}px; height: {height}px;"));
        }
        _ => style.push_str(" max-height: 100%; overflow-y: auto;"),
    }
    style
}

pub fn tile_style(theme: &Theme, size: &TileSize, color: Option<&str>) -> String {
    let mut style = format!(
        "width: {edge}px; height: {edge}px; border: 1px solid {border}; border-radius: {radius}px; color: {text};",
        edge = size.width,
        border = theme.colors.border_medium,
        radius = size.radius,
        text = theme.colors.text_primary,
    );
    if let Some(color) = color {
        style.push_str(&format!(" background-color: {color};"));
    }
    style
}

pub fn tooltip_style(theme: &Theme) -> String {
    format!(
        "min-width: 120px; background: {}; border: 1px solid {}; box-shadow: {}; color: {};",
        theme.colors.background_secondary,
        theme.colors.border_weak,
        theme.shadows.z3,
        theme.colors.text_primary
    )
}

pub fn tooltip_header_style(theme: &Theme) -> String {
    format!("border-bottom: 1px solid {};", theme.colors.border_weak)
}

pub fn badge_style(theme: &Theme) -> String {
    format!(
        "font-size: {}; color: {};",
        theme.typography.body_small_font_size, theme.colors.text_secondary
    )
}

pub fn notice_style(theme: &Theme) -> String {
    format!(
        "background: {}; border: 1px solid {}; box-shadow: {};",
        theme.colors.background_secondary, theme.colors.border_medium, theme.shadows.z2
    )
}
