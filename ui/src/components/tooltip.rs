use dioxus::prelude::*;

use crate::theme::{styles, Theme};

/// Hover/focus tooltip wrapping `children`; `content` is only mounted while open.
#[component]
pub fn Tooltip(
    content: Element,
    theme: Theme,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let mut open = use_signal(|| false);
    let panel_style = styles::tooltip_style(&theme);

    rsx! {
        div {
            class: "tooltip-anchor {class}",
            onmouseenter: move |_| open.set(true),
            onmouseleave: move |_| open.set(false),
            onfocusin: move |_| open.set(true),
            onfocusout: move |_| open.set(false),

            {children}

            if open() {
                div { class: "tooltip", role: "tooltip", style: "{panel_style}", {content} }
            }
        }
    }
}
