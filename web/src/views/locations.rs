use crate::{Route, use_alert};
use dioxus::prelude::*;
use types::{
    Form, FormTarget, LocationId,
    employee::Employee,
    location::{Location, LocationForm},
};
use ui::{ConfirmDelete, EmptyRow, Field, Loading, TextField};

#[component]
pub fn Locations(target: Option<FormTarget<LocationId>>) -> Element {
    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Locations" }
                    p { class: "page-subtitle", "Customer sites, their coordinates and patrol radius." }
                }
                div { class: "page-header-actions",
                    if target.is_none() {
                        Link {
                            to: Route::LocationNew {},
                            class: "btn btn-primary",
                            "Add Location"
                        }
                    }
                }
            }

            if let Some(target) = target {
                LocationFormCard { target }
            } else {
                LocationTable {}
            }
        }
    }
}

#[component]
fn LocationTable() -> Element {
    let mut locations = use_signal(Vec::<Location>::new);
    let mut employees = use_signal(Vec::<Employee>::new);
    let mut loading = use_signal(|| true);
    let mut alert = use_alert();
    let mut deleting = use_signal(|| None::<Location>);
    let mut delete_busy = use_signal(|| false);

    let refresh = move || {
        spawn(async move {
            match (api::list_locations().await, api::list_employees().await) {
                (Ok(l), Ok(e)) => {
                    locations.set(l);
                    employees.set(e);
                }
                (Err(e), _) | (_, Err(e)) => alert.set_server_error(&e),
            }
            loading.set(false);
        });
    };

    use_effect(move || refresh());

    if loading() {
        return rsx! { Loading { text: "Loading locations..." } };
    }

    rsx! {
        if let Some(location) = deleting() {
            {
                let id = location.id;
                rsx! {
                    ConfirmDelete {
                        noun: "Location",
                        name: location.name,
                        deleting: delete_busy(),
                        on_close: move |_| deleting.set(None),
                        on_confirm: move |_| {
                            spawn(async move {
                                delete_busy.set(true);
                                match api::delete_location(id).await {
                                    Ok(()) => {
                                        alert.success("Deleted", "Location has been deleted.");
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

        div { class: "card",
            div { class: "table-container",
                table {
                    thead {
                        tr {
                            th { "No" }
                            th { "ID" }
                            th { "Name" }
                            th { "Address" }
                            th { "Radius" }
                            th { "Employees" }
                            th { class: "col-actions", "Actions" }
                        }
                    }
                    tbody {
                        if locations.read().is_empty() {
                            EmptyRow { columns: 7, text: "No locations yet." }
                        }
                        for (i, location) in locations.read().iter().enumerate() {
                            {
                                let n = i + 1;
                                let staff = location.employee_count(&employees.read());
                                let id = location.id;
                                let for_delete = location.clone();
                                rsx! {
                                    tr { key: "{location.id}",
                                        td { "{n}" }
                                        td { "{location.id}" }
                                        td { "{location.name}" }
                                        td { "{location.address}" }
                                        td { "{location.radius} m" }
                                        td { "{staff}" }
                                        td { class: "col-actions",
                                            Link {
                                                to: Route::LocationEdit { id },
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
    }
}

#[component]
fn LocationFormCard(target: FormTarget<LocationId>) -> Element {
    let mut alert = use_alert();
    let mut form = use_signal(LocationForm::default);
    let mut loading = use_signal(|| target.is_edit());
    let mut saving = use_signal(|| false);

    use_effect(use_reactive!(|(target,)| match target {
        FormTarget::Create => form.set(LocationForm::default()),
        FormTarget::Edit(id) => {
            spawn(async move {
                loading.set(true);
                match api::get_location(id).await {
                    Ok(location) => form.set(LocationForm::from(&location)),
                    Err(e) => alert.set_server_error(&e),
                }
                loading.set(false);
            });
        }
    }));

    let submit = move |_: MouseEvent| {
        let current = form();
        if let Err(e) = current.validate() {
            alert.error(e.to_string());
            return;
        }

        spawn(async move {
            saving.set(true);
            let result = match target {
                FormTarget::Create => api::create_location(current).await,
                FormTarget::Edit(id) => api::update_location(id, current).await,
            };
            match result {
                Ok(()) => {
                    alert.success(
                        "Saved",
                        if target.is_edit() {
                            "Location has been updated."
                        } else {
                            "Location has been added."
                        },
                    );
                    navigator().push(Route::LocationList {});
                }
                Err(e) => alert.set_server_error(&e),
            }
            saving.set(false);
        });
    };

    if loading() {
        return rsx! { Loading { text: "Loading location..." } };
    }

    let title = target.title("Location");
    let current = form.read().clone();

    rsx! {
        div { class: "card form-card",
            div { class: "card-header",
                h2 { class: "card-title", "{title}" }
            }
            div { class: "card-body",
                div { class: "form-grid",
                    TextField {
                        id: "name",
                        label: "Name",
                        value: current.name,
                        on_input: move |v| form.write().name = v,
                    }
                    TextField {
                        id: "code",
                        label: "Code",
                        value: current.code,
                        placeholder: "e.g. CUST-001",
                        on_input: move |v| form.write().code = v,
                    }
                    Field { id: "address", label: "Address",
                        textarea {
                            id: "address",
                            class: "form-input",
                            rows: "3",
                            value: "{current.address}",
                            oninput: move |e| form.write().address = e.value(),
                        }
                    }
                    TextField {
                        id: "latitude",
                        label: "Latitude",
                        value: current.latitude,
                        placeholder: "e.g. -6.200000",
                        on_input: move |v| form.write().latitude = v,
                    }
                    TextField {
                        id: "longitude",
                        label: "Longitude",
                        value: current.longitude,
                        placeholder: "e.g. 106.816666",
                        on_input: move |v| form.write().longitude = v,
                    }
                    TextField {
                        id: "radius",
                        label: "Radius (meters)",
                        kind: "number",
                        value: current.radius,
                        on_input: move |v| form.write().radius = v,
                    }
                }
            }
            div { class: "card-footer",
                Link {
                    to: Route::LocationList {},
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
