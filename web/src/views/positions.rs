use crate::use_alert;
use dioxus::prelude::*;
use types::{
    Form, FormTarget, PositionId,
    position::{Position, PositionForm},
};
use ui::{ConfirmDelete, EmptyRow, Loading, Modal, TextField};

#[component]
pub fn PositionList() -> Element {
    let mut positions = use_signal(Vec::<Position>::new);
    let mut loading = use_signal(|| true);
    let mut alert = use_alert();
    let mut editing = use_signal(|| None::<(FormTarget<PositionId>, PositionForm)>);
    let mut deleting = use_signal(|| None::<Position>);
    let mut delete_busy = use_signal(|| false);

    let refresh = move || {
        spawn(async move {
            match api::list_positions().await {
                Ok(p) => positions.set(p),
                Err(e) => alert.set_server_error(&e),
            }
            loading.set(false);
        });
    };

    use_effect(move || refresh());

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Positions" }
                    p { class: "page-subtitle", "Job positions that employees can be assigned to." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| editing.set(Some((FormTarget::Create, PositionForm::default()))),
                        "Add Position"
                    }
                }
            }

            if let Some((target, form)) = editing() {
                PositionModal {
                    target,
                    initial: form,
                    on_close: move |_| editing.set(None),
                    on_saved: move |_| {
                        editing.set(None);
                        refresh();
                    },
                }
            }

            if let Some(position) = deleting() {
                {
                    let id = position.id;
                    rsx! {
                        ConfirmDelete {
                            noun: "Position",
                            name: position.name,
                            deleting: delete_busy(),
                            on_close: move |_| deleting.set(None),
                            on_confirm: move |_| {
                                spawn(async move {
                                    delete_busy.set(true);
                                    match api::delete_position(id).await {
                                        Ok(()) => {
                                            alert.success("Deleted", "Position has been deleted.");
                                            refresh();
                                        }
                                        Err(e) => alert.set_server_error(&e),
                                    }
                                    delete_busy.set(false);
                                    deleting.set(None);
                                });
                            },
                        }
                    }
                }
            }

            if loading() {
                Loading { text: "Loading positions..." }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "No" }
                                    th { "ID" }
                                    th { "Name" }
                                    th { class: "col-actions", "Actions" }
                                }
                            }
                            tbody {
                                if positions.read().is_empty() {
                                    EmptyRow { columns: 4, text: "No positions yet." }
                                }
                                for (i, position) in positions.read().iter().enumerate() {
                                    {
                                        let n = i + 1;
                                        let row = position.clone();
                                        let for_delete = position.clone();
                                        rsx! {
                                            tr { key: "{position.id}",
                                                td { "{n}" }
                                                td { "{position.id}" }
                                                td { "{position.name}" }
                                                td { class: "col-actions",
                                                    button {
                                                        class: "btn btn-secondary btn-sm",
                                                        onclick: move |_| {
                                                            editing.set(Some((FormTarget::Edit(row.id), PositionForm::from(&row))));
                                                        },
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-danger btn-sm",
                                                        onclick: move |_| deleting.set(Some(for_delete.clone())),
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PositionModal(
    target: FormTarget<PositionId>,
    initial: PositionForm,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut alert = use_alert();
    let mut form = use_signal(|| initial.clone());
    let mut saving = use_signal(|| false);

    let submit = move |_: MouseEvent| {
        let current = form();
        if let Err(e) = current.validate() {
            alert.error(e.to_string());
            return;
        }

        spawn(async move {
            saving.set(true);
            let result = match target {
                FormTarget::Create => api::create_position(current).await,
                FormTarget::Edit(id) => api::update_position(id, current).await,
            };
            match result {
                Ok(()) => {
                    alert.success(
                        "Saved",
                        if target.is_edit() {
                            "Position has been updated."
                        } else {
                            "Position has been added."
                        },
                    );
                    on_saved.call(());
                }
                Err(e) => alert.set_server_error(&e),
            }
            saving.set(false);
        });
    };

    rsx! {
        Modal {
            title: target.title("Position"),
            on_close,
            locked: saving(),
            footer: rsx! {
                button {
                    class: "btn btn-secondary",
                    disabled: saving(),
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving(),
                    onclick: submit,
                    "{target.submit_label(saving())}"
                }
            },
            TextField {
                id: "position_name",
                label: "Position name",
                value: form.read().name.clone(),
                placeholder: "e.g. Security Officer",
                on_input: move |v| form.write().name = v,
            }
        }
    }
}
