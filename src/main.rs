use dioxus::prelude::*;
use tracing::{info, Level};

mod components;
mod reveal;
mod scroll;
mod theme;
mod views;

use theme::Theme;
use views::{Home, Navbar};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Icon font served as an external stylesheet.
const ICON_FONT_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

fn main() {
    if let Err(error) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to init logger: {error}");
    }
    info!("portfolio starting");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Theme state lives at the root and reaches the navbar as an explicit
    // prop. Reloading the page starts from the default again.
    let theme = use_signal(Theme::default);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: ICON_FONT_CSS }

        div { class: "min-h-screen bg-background text-foreground {theme.read().page_class()}",
            Navbar { theme }
            Home {}
        }
    }
}
