use dioxus::prelude::*;

use crate::components::{TileGrid, Tooltip};
use crate::core::config::PanelOptions;
use crate::core::series::Series;
use crate::panel::{build_panel, EmptyReason, PanelView, UnnamedSummary};
use crate::t;
use crate::theme::{styles, Theme};

/// The status tile panel. Everything shown is recomputed from the current
/// `(series, width, height)`; the pipeline result is memoized on those inputs.
#[component]
pub fn StatusPanel(
    series: ReadOnlySignal<Vec<Series>>,
    width: ReadOnlySignal<f64>,
    height: ReadOnlySignal<f64>,
    options: ReadOnlySignal<PanelOptions>,
    theme: Theme,
) -> Element {
    let view = use_memo(move || build_panel(&series.read(), width(), height(), &options.read()));
    let wrapper_style = styles::wrapper_style(&theme, width(), height());

    let content = match view() {
        PanelView::Empty(reason) => {
            let (title, default_hint) = match reason {
                EmptyReason::NoSeries => (t!("panel-no-series-title"), t!("panel-no-series-hint")),
                EmptyReason::NoNamedSeries => (t!("panel-no-data-title"), t!("panel-no-data-hint")),
            };
            let hint = options.read().no_data_hint.clone().unwrap_or(default_hint);
            rsx! {
                NoDataNotice { title, hint, theme: theme.clone() }
            }
        }
        PanelView::Grid {
            layout,
            tiles,
            unnamed,
        } => rsx! {
            TileGrid { layout, tiles, theme: theme.clone() }
            if let Some(summary) = unnamed {
                UnnamedBadge { summary, theme: theme.clone() }
            }
        },
    };

    rsx! {
        div { class: "status-panel", style: "{wrapper_style}", {content} }
    }
}

#[component]
fn NoDataNotice(title: String, hint: String, theme: Theme) -> Element {
    let notice_style = styles::notice_style(&theme);

    rsx! {
        div { class: "panel-notice panel-notice--warning", role: "alert", style: "{notice_style}",
            strong { class: "panel-notice__title", "{title}" }
            p { class: "panel-notice__hint", "{hint}" }
        }
    }
}

/// "No Data: N" marker for series that could not be named.
#[component]
fn UnnamedBadge(summary: UnnamedSummary, theme: Theme) -> Element {
    let badge_style = styles::badge_style(&theme);
    let label = t!("unnamed-badge", count = (summary.count() as u64));

    rsx! {
        Tooltip {
            class: "unnamed-badge__anchor",
            theme: theme.clone(),
            content: rsx! {
                div { class: "unnamed-badge__list",
                    for (index, ref_id) in summary.ref_ids.iter().enumerate() {
                        div { key: "{index}", {t!("unnamed-ref", ref_id = ref_id.as_str())} }
                    }
                }
            },
            div { class: "unnamed-badge", style: "{badge_style}", "{label}" }
        }
    }
}
