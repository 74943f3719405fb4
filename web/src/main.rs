use dioxus::prelude::*;

use ui::views::Dashboard;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::PANEL_CSS }

        Dashboard {}
    }
}
