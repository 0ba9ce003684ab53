//! Card layout shared by the login and signup forms.

use dioxus::prelude::*;

pub const GENERIC_FORM_ERROR: &str = "An error occurred. Please try again.";

#[component]
pub fn AuthCard(
    title: String,
    submit_label: String,
    error: ReadSignal<Option<String>>,
    busy: ReadSignal<bool>,
    on_submit: Callback<()>,
    footer: Element,
    children: Element,
) -> Element {
    rsx! {
        div {
            id: "x-auth-container",
            style: "
                display:flex;
                align-items:center;
                justify-content:center;
                width: 100%;
                height: 100%;
                background: #F5F6F8;
            ",
            form {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 14px;
                    width: 360px;
                    padding: 28px;
                    border-radius: 16px;
                    background: white;
                    border: 1px solid #E5E7EB;
                    box-shadow: 0 6px 16px rgba(0,0,0,0.06);
                ",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    if !*busy.read() {
                        on_submit.call(());
                    }
                },

                h2 { style: "margin: 0; color:#01579b;", "{title}" }
                {children}
                if let Some(message) = error.read().clone() {
                    div {
                        id: "x-auth-error",
                        style: "color:#B91C1C; font-size: 14px;",
                        "{message}"
                    }
                }
                button {
                    r#type: "submit",
                    disabled: *busy.read(),
                    style: "
                        height: 38px;
                        border: none;
                        border-radius: 8px;
                        background: #0288d1;
                        color: white;
                        font-size: 16px;
                        cursor: pointer;
                    ",
                    "{submit_label}"
                }
                div { style: "font-size: 14px; color:#374151;", {footer} }
            }
        }
    }
}

#[component]
pub fn AuthInput(label: String, input_type: String, mut value: Signal<String>) -> Element {
    rsx! {
        label {
            style: "display:flex; flex-direction:column; gap: 4px; font-size: 14px; color:#111827;",
            "{label}"
            input {
                r#type: "{input_type}",
                required: true,
                value: "{value}",
                style: "height: 32px; padding: 0 8px; border: 1px solid #D1D5DB; border-radius: 6px; font-size: 14px;",
                oninput: move |e| value.set(e.value()),
            }
        }
    }
}
