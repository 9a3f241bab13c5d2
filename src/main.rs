use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod error;
mod store;
mod utils;

use components::AppShell;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "tunebar" }
        document::Meta { name: "theme-color", content: "#18181b" }

        AppShell {}
    }
}
