use dioxus::prelude::*;
use tracing::warn;

use crate::components::{LocaleSwitcher, StatusPanel};
use crate::core::config::{demo_fixture, PanelFixture};
use crate::t;

const MIN_EXTENT: f64 = 80.0;
const MAX_WIDTH: f64 = 1200.0;
const MAX_HEIGHT: f64 = 800.0;

/// Demo dashboard hosting one status panel over the bundled fixture. The size
/// sliders stand in for the host resizing the panel.
#[component]
pub fn Dashboard() -> Element {
    let fixture = use_hook(|| {
        demo_fixture().unwrap_or_else(|err| {
            warn!(%err, "demo fixture unavailable, rendering an empty panel");
            PanelFixture::empty(480.0, 320.0)
        })
    });

    let mut width = use_signal(|| fixture.width);
    let mut height = use_signal(|| fixture.height);
    let mut mode = use_signal(|| fixture.theme);
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    let theme = mode().theme();

    rsx! {
        section { class: "page dashboard",
            header { class: "dashboard__header",
                h1 { {t!("panel-title")} }
                div { class: "dashboard__controls",
                    label { class: "dashboard__control",
                        span { {t!("control-width")} }
                        input {
                            r#type: "range",
                            min: "{MIN_EXTENT}",
                            max: "{MAX_WIDTH}",
                            value: "{width()}",
                            oninput: move |evt: FormEvent| {
                                if let Some(value) = parse_extent(&evt.value(), MAX_WIDTH) {
                                    width.set(value);
                                }
                            },
                        }
                        span { class: "dashboard__value", "{width()}px" }
                    }
                    label { class: "dashboard__control",
                        span { {t!("control-height")} }
                        input {
                            r#type: "range",
                            min: "{MIN_EXTENT}",
                            max: "{MAX_HEIGHT}",
                            value: "{height()}",
                            oninput: move |evt: FormEvent| {
                                if let Some(value) = parse_extent(&evt.value(), MAX_HEIGHT) {
                                    height.set(value);
                                }
                            },
                        }
                        span { class: "dashboard__value", "{height()}px" }
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| mode.set(mode().toggled()),
                        {t!("control-theme")}
                    }
                    LocaleSwitcher {}
                }
            }

            // Keyed by language so every tile re-renders its localized labels.
            div { key: "{lang_code()}", class: "dashboard__panel",
                StatusPanel {
                    series: fixture.series.clone(),
                    width: width(),
                    height: height(),
                    options: fixture.options.clone(),
                    theme,
                }
            }
        }
    }
}

fn parse_extent(raw: &str, max: f64) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(MIN_EXTENT, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents_are_clamped() {
        assert_eq!(parse_extent("640", MAX_WIDTH), Some(640.0));
        assert_eq!(parse_extent("10", MAX_WIDTH), Some(MIN_EXTENT));
        assert_eq!(parse_extent("99999", MAX_HEIGHT), Some(MAX_HEIGHT));
        assert_eq!(parse_extent("wide", MAX_WIDTH), None);
        assert_eq!(parse_extent("NaN", MAX_WIDTH), None);
    }
}
