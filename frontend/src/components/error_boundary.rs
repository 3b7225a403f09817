//! Error boundaries for pages and for single panels of the search page.

use dioxus::{logger::tracing::error, prelude::*};

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                error!("render error below boundary {}: {:?}", boundary_name.read(), err);
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px; margin: 15px;",
                        h1 {
                            style: "color:darkred; font-size: 40px;",
                            "This page could not be shown"
                        }
                        // may sit above the router, so no router Link here
                        a {
                            href: "/",
                            style: "color:blue; font-size: 22px;",
                            "Back to the home page"
                        }
                        details {
                            summary { "{boundary_name}" }
                            pre {
                                style: "color:black; border: 1px solid red; padding: 10px; border-radius: 5px; text-wrap: auto;",
                                "{err:#?}"
                            }
                        }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing panel from taking the rest of the page down; offers a retry.
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
                            style: "color:blue; font-size: 18px; border: 1px solid blue; padding: 6px 10px; border-radius: 5px; margin: 10px; cursor: pointer;",
                            onclick: move |_| err.clear_errors(),
                            "Try again"
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

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            role: "alert",
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "10px",

            pre {
                style: "color:darkred; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
