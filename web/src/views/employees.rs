use crate::{Route, use_alert};
use dioxus::prelude::*;
use types::{
    EmployeeId, Form, FormTarget, Named, name_of,
    employee::{Employee, EmployeeForm, Photo},
    location::Location,
    position::Position,
    shift::Shift,
};
use ui::{ConfirmDelete, EmptyRow, Field, Loading, SelectField, TextField};

/// Reference data the table and the form pick names from.
#[derive(Clone, Default, PartialEq)]
struct Lookups {
    positions: Vec<Position>,
    shifts: Vec<Shift>,
    locations: Vec<Location>,
}

async fn load_lookups() -> Result<Lookups, ServerFnError> {
    Ok(Lookups {
        positions: api::list_positions().await?,
        shifts: api::list_shifts().await?,
        locations: api::list_locations().await?,
    })
}

/// `(value, label)` pairs for a select.
fn options<T: Named>(items: &[T]) -> Vec<(String, String)>
where
    T::Id: std::fmt::Display,
{
    items
        .iter()
        .map(|item| (item.id().to_string(), item.name().to_string()))
        .collect()
}

/// Select value for an id, empty while nothing is picked.
fn selected(id: impl std::fmt::Display, is_set: bool) -> String {
    if is_set { id.to_string() } else { String::new() }
}

#[component]
pub fn Employees(target: Option<FormTarget<EmployeeId>>) -> Element {
    let mut employees = use_signal(Vec::<Employee>::new);
    let mut lookups = use_signal(Lookups::default);
    let mut loading = use_signal(|| true);
    let mut alert = use_alert();
    let mut deleting = use_signal(|| None::<Employee>);
    let mut delete_busy = use_signal(|| false);

    let refresh = move || {
        spawn(async move {
            match (api::list_employees().await, load_lookups().await) {
                (Ok(e), Ok(l)) => {
                    employees.set(e);
                    lookups.set(l);
                }
                (Err(e), _) | (_, Err(e)) => alert.set_server_error(&e),
            }
            loading.set(false);
        });
    };

    use_effect(move || refresh());

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Employees" }
                    p { class: "page-subtitle", "Patrol staff with their position, shift and placement." }
                }
                div { class: "page-header-actions",
                    if target.is_none() {
                        Link {
                            to: Route::EmployeeNew {},
                            class: "btn btn-primary",
                            "Add Employee"
                        }
                    }
                }
            }

            if let Some(employee) = deleting() {
                {
                    let id = employee.id;
                    rsx! {
                        ConfirmDelete {
                            noun: "Employee",
                            name: employee.name,
                            deleting: delete_busy(),
                            on_close: move |_| deleting.set(None),
                            on_confirm: move |_| {
                                spawn(async move {
                                    delete_busy.set(true);
                                    match api::delete_employee(id).await {
                                        Ok(()) => {
                                            alert.success("Deleted", "Employee has been deleted.");
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
                Loading { text: "Loading employees..." }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "NIP" }
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Position" }
                                    th { "Shift" }
                                    th { "Placement" }
                                    th { class: "col-actions", "Actions" }
                                }
                            }
                            tbody {
                                if employees.read().is_empty() {
                                    EmptyRow { columns: 7, text: "No employees yet." }
                                }
                                for employee in employees.read().iter() {
                                    {
                                        let refs = lookups.read();
                                        let position = name_of(&refs.positions, Some(employee.position_id)).to_string();
                                        let shift = name_of(&refs.shifts, Some(employee.shift_id)).to_string();
                                        let placement = name_of(&refs.locations, employee.location_id).to_string();
                                        let id = employee.id;
                                        let for_delete = employee.clone();
                                        rsx! {
                                            tr { key: "{employee.id}",
                                                td { "{employee.nip}" }
                                                td { "{employee.name}" }
                                                td { "{employee.email}" }
                                                td { "{position}" }
                                                td { "{shift}" }
                                                td { "{placement}" }
                                                td { class: "col-actions",
                                                    Link {
                                                        to: Route::EmployeeEdit { id },
                                                        class: "btn btn-secondary btn-sm",
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

                if let Some(target) = target {
                    EmployeeFormCard { target, lookups: lookups() }
                }
            }
        }
    }
}

#[component]
fn EmployeeFormCard(target: FormTarget<EmployeeId>, lookups: Lookups) -> Element {
    let mut alert = use_alert();
    let mut form = use_signal(EmployeeForm::default);
    let mut photo = use_signal(|| None::<Photo>);
    let mut loading = use_signal(|| target.is_edit());
    let mut saving = use_signal(|| false);

    use_effect(use_reactive!(|(target,)| {
        photo.set(None);
        match target {
            FormTarget::Create => form.set(EmployeeForm::default()),
            FormTarget::Edit(id) => {
                spawn(async move {
                    loading.set(true);
                    match api::get_employee(id).await {
                        Ok(employee) => form.set(EmployeeForm::from(&employee)),
                        Err(e) => alert.set_server_error(&e),
                    }
                    loading.set(false);
                });
            }
        }
    }));

    let on_photo = move |e: FormEvent| {
        let Some(file) = e.files().into_iter().next() else {
            photo.set(None);
            return;
        };

        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => photo.set(Some(Photo {
                    file_name: file.name(),
                    content_type: file.content_type(),
                    bytes: bytes.to_vec(),
                })),
                Err(err) => {
                    tracing::warn!(?err, "could not read photo");
                    alert.error("The selected photo could not be read.");
                }
            }
        });
    };

    let submit = move |_: MouseEvent| {
        let current = form();
        if let Err(e) = current.validate() {
            alert.error(e.to_string());
            return;
        }

        spawn(async move {
            saving.set(true);
            let upload = photo();
            let result = match target {
                FormTarget::Create => api::create_employee(current, upload).await,
                FormTarget::Edit(id) => api::update_employee(id, current, upload).await,
            };
            match result {
                Ok(()) => {
                    alert.success(
                        "Saved",
                        if target.is_edit() {
                            "Employee has been updated."
                        } else {
                            "Employee has been added."
                        },
                    );
                    navigator().push(Route::EmployeeList {});
                }
                Err(e) => alert.set_server_error(&e),
            }
            saving.set(false);
        });
    };

    if loading() {
        return rsx! { Loading { text: "Loading employee..." } };
    }

    let title = target.title("Employee");
    let current = form.read().clone();
    let password_label = if target.is_edit() {
        "Password (leave blank to keep)".to_string()
    } else {
        "Password".to_string()
    };

    rsx! {
        div { class: "card form-card",
            div { class: "card-header",
                h2 { class: "card-title", "{title}" }
            }
            div { class: "card-body",
                div { class: "form-grid",
                    TextField {
                        id: "nip",
                        label: "NIP",
                        value: current.nip,
                        on_input: move |v| form.write().nip = v,
                    }
                    TextField {
                        id: "name",
                        label: "Name",
                        value: current.name,
                        on_input: move |v| form.write().name = v,
                    }
                    TextField {
                        id: "email",
                        label: "Email",
                        kind: "email",
                        value: current.email,
                        placeholder: "e.g. budi@example.com",
                        on_input: move |v| form.write().email = v,
                    }
                    TextField {
                        id: "password",
                        label: password_label,
                        kind: "password",
                        value: current.password,
                        on_input: move |v| form.write().password = v,
                    }
                    SelectField {
                        id: "position_id",
                        label: "Position",
                        value: selected(current.position_id, current.position_id.is_set()),
                        options: options(&lookups.positions),
                        on_change: move |v: String| form.write().position_id = v.parse().unwrap_or_default(),
                    }
                    SelectField {
                        id: "shift_id",
                        label: "Shift",
                        value: selected(current.shift_id, current.shift_id.is_set()),
                        options: options(&lookups.shifts),
                        on_change: move |v: String| form.write().shift_id = v.parse().unwrap_or_default(),
                    }
                    SelectField {
                        id: "location_id",
                        label: "Placement",
                        value: selected(current.location_id, current.location_id.is_set()),
                        options: options(&lookups.locations),
                        on_change: move |v: String| form.write().location_id = v.parse().unwrap_or_default(),
                    }
                    Field { id: "photo", label: "Photo",
                        input {
                            id: "photo",
                            class: "form-input",
                            r#type: "file",
                            accept: "image/*",
                            onchange: on_photo,
                        }
                        if let Some(p) = photo.read().as_ref() {
                            span { class: "text-muted", "{p.file_name}" }
                        }
                    }
                }
            }
            div { class: "card-footer",
                Link {
                    to: Route::EmployeeList {},
                    class: "btn btn-secondary",
                    "Back"
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving(),
                    onclick: submit,
                    "{target.submit_label(saving())}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::PositionId;

    #[test]
    fn options_pair_id_with_name() {
        let positions = vec![Position {
            id: PositionId(3),
            name: "Supervisor".into(),
            created_at: None,
            updated_at: None,
        }];

        assert_eq!(
            options(&positions),
            vec![("3".to_string(), "Supervisor".to_string())]
        );
    }

    #[test]
    fn unset_select_is_empty() {
        assert_eq!(selected(PositionId(0), PositionId(0).is_set()), "");
        assert_eq!(selected(PositionId(7), PositionId(7).is_set()), "7");
    }
}
