//! Error boundary component for rendering failures.

use dioxus::{logger::tracing, prelude::*};

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                tracing::error!("render error caught by boundary {}: {:?}", boundary_name.read(), err);
                rsx! {
                    h1 {
                        style: "color:#B42318; font-size: 40px; border: 1px solid #B42318; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color:darkred; font-size: 20px; padding: 10px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    div {
                        style: "font-size: 20px; margin: 15px;",
                        // may render outside the router
                        a { href: "/", "Return to the Weave home page" }
                    }
                    pre {
                        style: "color:black; border: 1px solid #B42318; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:#1D4ED8; font-size: 20px; border: 1px solid #1D4ED8; background: white; padding: 8px 14px; border-radius: 5px; margin: 15px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

/// Inline failure message with optional actions as children.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "20px",

            h2 {
                style: "color:#B42318; font-size: 26px; margin: 5px;",
                "{error_txt}",
            }

            {children}
        }
    }
}
