use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::api_credential::ApiCredential;
use crate::routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component: shared context, global styles and the router.
#[component]
pub fn App() -> Element {
    // set by a login flow; requests go out without credentials until then
    use_context_provider(|| ApiCredential { token: Signal::new(None) });

    rsx! {
        Title { "Weave" }
        document::Meta { name: "description", content: "Browse mentor profiles in the Weave directory." }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,100..900;1,100..900&display=swap" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
