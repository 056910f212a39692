use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(#[props(default = "Loading...".to_string())] loading_label: String, children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: move |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator { label: loading_label.clone() }
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "color:#374151; font-size: 20px; border: 1px solid #D1D5DB; background: white; padding: 10px 16px; border-radius: 5px; margin: 15px;",
            "{label}"
        }
    }
}
