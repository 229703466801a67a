use crate::use_alert;
use dioxus::prelude::*;
use types::{
    Form, FormTarget, ShiftId,
    shift::{Shift, ShiftForm, short_time},
};
use ui::{ConfirmDelete, EmptyRow, Loading, Modal, TextField};

#[component]
pub fn ShiftList() -> Element {
    let mut shifts = use_signal(Vec::<Shift>::new);
    let mut loading = use_signal(|| true);
    let mut alert = use_alert();
    let mut editing = use_signal(|| None::<(FormTarget<ShiftId>, ShiftForm)>);
    let mut deleting = use_signal(|| None::<Shift>);
    let mut delete_busy = use_signal(|| false);

    let refresh = move || {
        spawn(async move {
            match api::list_shifts().await {
                Ok(s) => shifts.set(s),
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
                    h1 { class: "page-title", "Shifts" }
                    p { class: "page-subtitle", "Working hours for patrol staff." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| editing.set(Some((FormTarget::Create, ShiftForm::default()))),
                        "Add Shift"
                    }
                }
            }

            if let Some((target, form)) = editing() {
                ShiftModal {
                    target,
                    initial: form,
                    on_close: move |_| editing.set(None),
                    on_saved: move |_| {
                        editing.set(None);
                        refresh();
                    },
                }
            }

            if let Some(shift) = deleting() {
                {
                    let id = shift.id;
                    rsx! {
                        ConfirmDelete {
                            noun: "Shift",
                            name: shift.name,
                            deleting: delete_busy(),
                            on_close: move |_| deleting.set(None),
                            on_confirm: move |_| {
                                spawn(async move {
                                    delete_busy.set(true);
                                    match api::delete_shift(id).await {
                                        Ok(()) => {
                                            alert.success("Deleted", "Shift has been deleted.");
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
                Loading { text: "Loading shifts..." }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Time in" }
                                    th { "Time out" }
                                    th { class: "col-actions", "Actions" }
                                }
                            }
                            tbody {
                                if shifts.read().is_empty() {
                                    EmptyRow { columns: 4, text: "No shifts yet." }
                                }
                                for shift in shifts.read().iter() {
                                    {
                                        let row = shift.clone();
                                        let for_delete = shift.clone();
                                        let time_in = short_time(&shift.time_in);
                                        let time_out = short_time(&shift.time_out);
                                        rsx! {
                                            tr { key: "{shift.id}",
                                                td { "{shift.name}" }
                                                td { "{time_in}" }
                                                td { "{time_out}" }
                                                td { class: "col-actions",
                                                    button {
                                                        class: "btn btn-secondary btn-sm",
                                                        onclick: move |_| {
                                                            editing.set(Some((FormTarget::Edit(row.id), ShiftForm::from(&row))));
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
fn ShiftModal(
    target: FormTarget<ShiftId>,
    initial: ShiftForm,
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
                FormTarget::Create => api::create_shift(current).await,
                FormTarget::Edit(id) => api::update_shift(id, current).await,
            };
            match result {
                Ok(()) => {
                    alert.success(
                        "Saved",
                        if target.is_edit() {
                            "Shift has been updated."
                        } else {
                            "Shift has been added."
                        },
                    );
                    on_saved.call(());
                }
                Err(e) => alert.set_server_error(&e),
            }
            saving.set(false);
        });
    };

    // `<input type="time">` wants HH:MM.
    let time_in = short_time(&form.read().time_in);
    let time_out = short_time(&form.read().time_out);

    rsx! {
        Modal {
            title: target.title("Shift"),
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
                id: "shift_name",
                label: "Shift name",
                value: form.read().name.clone(),
                placeholder: "e.g. Morning",
                on_input: move |v| form.write().name = v,
            }
            div { class: "form-row",
                TextField {
                    id: "time_in",
                    label: "Time in",
                    kind: "time",
                    value: time_in,
                    on_input: move |v| form.write().time_in = v,
                }
                TextField {
                    id: "time_out",
                    label: "Time out",
                    kind: "time",
                    value: time_out,
                    on_input: move |v| form.write().time_out = v,
                }
            }
        }
    }
}
