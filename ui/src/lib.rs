//! Shared UI crate for Hostgrid: the status tile panel, its data pipeline and
//! the demo dashboard used by the platform shells.

use dioxus::prelude::*;

pub mod components;
pub mod core;
pub mod i18n;
pub mod panel;
pub mod theme;
pub mod views;

/// Structural panel stylesheet; theme-dependent rules are inlined per render.
pub const PANEL_CSS: Asset = asset!("/assets/theme/main.css");
