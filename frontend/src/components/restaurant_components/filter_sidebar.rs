//! Filter form on the left of the restaurant page.

use std::collections::BTreeMap;

use common::{
    filter_state::{FilterField, FilterFlag, FilterState},
    reference_data::ReferenceEntry,
};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

use crate::pages::restaurants_page::RestaurantsPageState;

/// What the form shows: the parsed filters plus the raw text of each input,
/// so a half-typed number is not wiped out while it fails to parse.
#[derive(Debug, Clone, PartialEq)]
struct FilterDraft {
    state: FilterState,
    raw: BTreeMap<FilterField, String>,
}

impl FilterDraft {
    fn from_state(state: FilterState) -> Self {
        let raw = FilterField::ALL.iter().map(|&f| (f, state.input_value(f))).collect();
        Self { state, raw }
    }

    fn raw(&self, field: FilterField) -> String {
        self.raw.get(&field).cloned().unwrap_or_default()
    }

    fn set_input(&mut self, field: FilterField, raw: String) {
        self.state.set_input(field, &raw);
        self.raw.insert(field, raw);
    }
}

#[component]
pub fn FilterSidebar() -> Element {
    let page = use_context::<RestaurantsPageState>();
    let applied = page.applied_filters;
    let mut draft = use_signal(|| FilterDraft::from_state(applied.read().clone().unwrap_or_default()));
    // navigation does not reset local signals
    use_effect(move || {
        draft.set(FilterDraft::from_state(applied.read().clone().unwrap_or_default()));
    });
    let has_changed = use_memo(move || Some(&draft.read().state) != applied.read().as_ref());
    let apply_color = use_memo(move || if has_changed() { "#01579b" } else { "#0288d1" });

    let cuisines = use_memo(move || page.reference.read().cuisines.clone());
    let ambiences = use_memo(move || page.reference.read().ambiences.clone());

    rsx! {
        form {
            id: "x-filter-sidebar",
            style: "
                display:flex;
                flex-direction: column;
                gap: 10px;
                padding: 16px;
            ",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                page.apply_filters.call(draft.read().state.clone());
            },

            h2 { style: "margin: 0; color:#01579b;", "Filters" }

            FilterTextInput { field: FilterField::Name, draft, placeholder: "Search by name" }
            FilterSelect { field: FilterField::Cuisine, draft, options: cuisines }
            FilterSelect { field: FilterField::Ambience, draft, options: ambiences }
            FilterNumberInput { field: FilterField::MinRating, draft, min: "1", max: "5", step: "0.5" }
            FilterTextInput { field: FilterField::City, draft, placeholder: "" }
            FilterNumberInput { field: FilterField::PriceRange, draft, min: "1", max: "4", step: "1" }

            div {
                id: "x-filter-flags",
                style: "display:flex; flex-wrap: wrap; gap: 6px; margin-top: 6px;",
                for flag in FilterFlag::ALL {
                    FlagToggle { key: "{flag.key()}", flag, draft }
                }
            }

            div {
                style: "display:flex; flex-direction: row; gap: 8px; margin-top: 8px;",
                button {
                    r#type: "button",
                    style: "flex:1; height: 36px; border: 1px solid #0288d1; border-radius: 6px; background: white; color:#0288d1; cursor: pointer;",
                    onclick: move |_| {
                        let mut cleared = draft.read().state.clone();
                        cleared.clear_all();
                        draft.set(FilterDraft::from_state(cleared));
                    },
                    "Clear All"
                }
                button {
                    r#type: "submit",
                    style: "flex:1; height: 36px; border: none; border-radius: 6px; background: {apply_color}; color: white; cursor: pointer;",
                    "Apply Filters"
                }
            }
        }
    }
}

const INPUT_STYLE: &str = "height: 30px; padding: 0 8px; border: 1px solid #B3E5FC; border-radius: 6px; font-size: 14px;";
const LABEL_STYLE: &str = "display:flex; flex-direction: column; gap: 4px; font-size: 14px; color:#111827;";

#[component]
fn FilterTextInput(field: FilterField, mut draft: Signal<FilterDraft>, placeholder: String) -> Element {
    rsx! {
        label {
            style: LABEL_STYLE,
            "{field.label()}:"
            input {
                r#type: "text",
                name: field.key(),
                placeholder: "{placeholder}",
                style: INPUT_STYLE,
                value: "{draft.read().raw(field)}",
                oninput: move |e| draft.write().set_input(field, e.value()),
            }
        }
    }
}

#[component]
fn FilterNumberInput(field: FilterField, mut draft: Signal<FilterDraft>, min: String, max: String, step: String) -> Element {
    rsx! {
        label {
            style: LABEL_STYLE,
            "{field.label()}:"
            input {
                r#type: "number",
                name: field.key(),
                min: "{min}",
                max: "{max}",
                step: "{step}",
                style: INPUT_STYLE,
                value: "{draft.read().raw(field)}",
                oninput: move |e| draft.write().set_input(field, e.value()),
            }
        }
    }
}

/// `<select>` over reference entries; the empty option leaves the field unset.
#[component]
fn FilterSelect(field: FilterField, mut draft: Signal<FilterDraft>, options: ReadSignal<Vec<ReferenceEntry>>) -> Element {
    let current = use_memo(move || draft.read().raw(field));
    rsx! {
        label {
            style: LABEL_STYLE,
            "{field.label()}:"
            select {
                name: field.key(),
                style: INPUT_STYLE,
                value: "{current}",
                onchange: move |e| draft.write().set_input(field, e.value()),
                option { value: "", "Any" }
                for entry in options.read().iter() {
                    option {
                        key: "{entry.id}",
                        value: "{entry.id}",
                        selected: current() == entry.id.to_string(),
                        "{entry.name}"
                    }
                }
            }
        }
    }
}

#[component]
fn FlagToggle(flag: FilterFlag, mut draft: Signal<FilterDraft>) -> Element {
    let is_set = use_memo(move || draft.read().state.is_flag_set(flag));
    let background = use_memo(move || if is_set() { "#0288d1" } else { "#81d4fa" });
    rsx! {
        button {
            r#type: "button",
            style: "
                display:flex;
                align-items:center;
                gap: 4px;
                padding: 4px 8px;
                border: none;
                border-radius: 6px;
                background-color: {background};
                color: white;
                font-size: 13px;
                cursor: pointer;
            ",
            onclick: move |_| draft.write().state.toggle_flag(flag),
            if is_set() {
                Icon { icon: MdCheckBox, style: "width: 16px; height: 16px;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 16px; height: 16px;" }
            }
            "{flag.label()}"
        }
    }
}
