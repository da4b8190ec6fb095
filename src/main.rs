use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod controller;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "TuneGrid" }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
