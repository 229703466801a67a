//! Presentational building blocks shared by the dashboard pages.

use dioxus::prelude::*;

/// A dialog over a dimmed backdrop. Clicking the backdrop closes it unless
/// `locked` is set.
#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] locked: bool,
    #[props(default)] small: bool,
    children: Element,
    footer: Element,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !locked { on_close.call(()) },
            div { class: if small { "modal modal-sm" } else { "modal" },
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if !locked {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body", {children} }
                div { class: "modal-footer", {footer} }
            }
        }
    }
}

/// Asks before a record is deleted.
#[component]
pub fn ConfirmDelete(
    noun: String,
    name: String,
    deleting: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            title: "Delete {noun}",
            on_close,
            locked: deleting,
            small: true,
            footer: rsx! {
                button {
                    class: "btn btn-secondary",
                    disabled: deleting,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    disabled: deleting,
                    onclick: move |_| on_confirm.call(()),
                    if deleting { "Deleting..." } else { "Delete" }
                }
            },
            p { "Are you sure you want to delete " strong { "{name}" } "?" }
            p { class: "text-muted", "This action cannot be undone." }
        }
    }
}

#[component]
pub fn Field(id: String, label: String, children: Element) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{label}" }
            {children}
        }
    }
}

#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
) -> Element {
    rsx! {
        Field { id: id.clone(), label,
            input {
                id: "{id}",
                class: "form-input",
                r#type: "{kind}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// A `<select>` over `(value, label)` pairs with an empty first choice.
#[component]
pub fn SelectField(
    id: String,
    label: String,
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        Field { id: id.clone(), label: label.clone(),
            select {
                id: "{id}",
                class: "form-input",
                value: "{value}",
                onchange: move |e| on_change.call(e.value()),
                option { value: "", "Select {label}" }
                for (key, text) in options {
                    option {
                        key: "{key}",
                        value: "{key}",
                        selected: key == value,
                        "{text}"
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A dismissible notice pinned to the top of the content area.
#[component]
pub fn Toast(
    kind: ToastKind,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let class = match kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };

    rsx! {
        div { class, role: "alert",
            div { class: "toast-header",
                span { class: "toast-title", "{title}" }
                button {
                    class: "toast-close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            {children}
        }
    }
}

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] text: String) -> Element {
    rsx! {
        div { class: "loading", "{text}" }
    }
}

/// A single full-width row for tables with nothing in them.
#[component]
pub fn EmptyRow(columns: usize, text: String) -> Element {
    rsx! {
        tr {
            td { class: "table-empty", colspan: "{columns}", "{text}" }
        }
    }
}
