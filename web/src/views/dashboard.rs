use crate::{Route, use_alert};
use dioxus::prelude::*;
use types::{CurrentUser, Summary};

#[component]
pub fn Dashboard(signed_in: Option<String>) -> Element {
    let user = use_context::<CurrentUser>();
    let mut alert = use_alert();
    let mut summary = use_signal(|| None::<Summary>);

    // Greet once after login, then drop the query so a reload doesn't repeat it.
    use_effect(use_reactive!(|(signed_in,)| {
        if signed_in.as_deref() == Some("true") {
            alert.success("Signed in", format!("Welcome back, {}!", user.username));
            navigator().replace(Route::dashboard());
        }
    }));

    use_effect(move || {
        spawn(async move {
            match api::dashboard_summary().await {
                Ok(s) => summary.set(Some(s)),
                Err(e) => alert.set_server_error(&e),
            }
        });
    });

    let count = |n: fn(&Summary) -> usize| {
        summary
            .read()
            .as_ref()
            .map_or_else(|| "-".to_string(), |s| n(s).to_string())
    };

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                p { class: "page-subtitle", "Master data of the SIPANDU patrol system." }
            }
            div { class: "dashboard-grid",
                DashboardCard {
                    to: Route::EmployeeList {},
                    title: "Employees",
                    count: count(|s| s.employees),
                    desc: "Patrol staff, their positions, shifts and placements.",
                }
                DashboardCard {
                    to: Route::PositionList {},
                    title: "Positions",
                    count: count(|s| s.positions),
                    desc: "Job positions employees can hold.",
                }
                DashboardCard {
                    to: Route::ShiftList {},
                    title: "Shifts",
                    count: count(|s| s.shifts),
                    desc: "Working hours employees are scheduled on.",
                }
                DashboardCard {
                    to: Route::LocationList {},
                    title: "Locations",
                    count: count(|s| s.locations),
                    desc: "Customer sites with their patrol radius.",
                }
            }
        }
    }
}

#[component]
fn DashboardCard(to: Route, title: String, count: String, desc: String) -> Element {
    rsx! {
        Link {
            to,
            class: "dashboard-card",
            h3 { class: "dashboard-card-title", "{title}" }
            div { class: "dashboard-card-count", "{count}" }
            p { class: "dashboard-card-desc", "{desc}" }
        }
    }
}
