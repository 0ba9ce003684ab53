//! Error boundaries for render failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render failure in {boundary_name}: {err:?}");
                rsx! {
                    div {
                        style: "display:flex; flex-direction:column; gap: 12px; padding: 24px;",
                        h1 {
                            style: "color:#B91C1C; font-size: 40px; margin: 0;",
                            "Something went wrong"
                        }
                        p {
                            style: "color:#7F1D1D; font-size: 18px;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color:#0288d1; font-size: 18px;",
                            "Back to the restaurant finder"
                        }
                        pre {
                            style: "color:black; border: 1px solid #B91C1C; padding: 10px; border-radius: 5px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing panel from taking the whole page down.
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
                            style: "color:#0288d1; font-size: 16px; border: 1px solid #0288d1; padding: 6px 12px; border-radius: 5px; background: white; cursor: pointer;",
                            onclick: move |_| err.clear_errors(),
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

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "8px",

            h2 {
                style: "color:#B91C1C; font-size: 24px; margin: 0;",
                "Panel Error",
            }
            pre {
                style: "color:#7F1D1D; border: 1px solid #B91C1C; padding: 10px; border-radius: 5px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }
            {children}
        }
    }
}
