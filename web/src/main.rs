use dioxus::prelude::*;

mod alert;
mod sidebar;
mod views;

use alert::{AlertState, AlertToast};
use sidebar::{Menu, SidebarState};
use types::{EmployeeId, FormTarget, LocationId};
use views::{Dashboard, Employees, Locations, Login, PositionList, ShiftList};

pub use alert::use_alert;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:error")]
    Login { error: Option<String> },
    #[layout(AuthenticatedLayout)]
        #[route("/?:signed_in")]
        Dashboard { signed_in: Option<String> },
        #[nest("/master-data")]
            #[route("/employees")]
            EmployeeList {},
            #[route("/employees/new")]
            EmployeeNew {},
            #[route("/employees/:id/edit")]
            EmployeeEdit { id: EmployeeId },
            #[route("/positions")]
            PositionList {},
            #[route("/shifts")]
            ShiftList {},
            #[route("/locations")]
            LocationList {},
            #[route("/locations/new")]
            LocationNew {},
            #[route("/locations/:id/edit")]
            LocationEdit { id: LocationId },
}

impl Route {
    pub fn dashboard() -> Self {
        Route::Dashboard { signed_in: None }
    }
}

#[component]
fn EmployeeList() -> Element {
    rsx! { Employees { target: None } }
}

#[component]
fn EmployeeNew() -> Element {
    rsx! { Employees { target: Some(FormTarget::Create) } }
}

#[component]
fn EmployeeEdit(id: EmployeeId) -> Element {
    rsx! { Employees { target: Some(FormTarget::Edit(id)) } }
}

#[component]
fn LocationList() -> Element {
    rsx! { Locations { target: None } }
}

#[component]
fn LocationNew() -> Element {
    rsx! { Locations { target: Some(FormTarget::Create) } }
}

#[component]
fn LocationEdit(id: LocationId) -> Element {
    rsx! { Locations { target: Some(FormTarget::Edit(id)) } }
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init()?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "SIPANDU Admin" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = sidebar::is_active(&current_route, &to);

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[component]
fn NavGroup(menu: Menu, sidebar: Signal<SidebarState>, children: Element) -> Element {
    let is_open = sidebar.read().open_menu == Some(menu);

    rsx! {
        div { class: if is_open { "nav-group open" } else { "nav-group" },
            button {
                class: "nav-group-toggle",
                onclick: move |_| sidebar.write().toggle_menu(menu),
                span { "{menu.label()}" }
                span { class: "nav-group-caret", if is_open { "▾" } else { "▸" } }
            }
            if is_open {
                div { class: "nav-group-items", {children} }
            }
        }
    }
}

#[component]
fn AuthenticatedLayout() -> Element {
    let user = use_server_future(api::get_current_user)?;
    let route: Route = use_route();
    let mut sidebar = use_signal(SidebarState::default);
    use_context_provider(AlertState::new);

    // Open the group of whatever page we land on.
    use_effect(use_reactive!(|(route,)| sidebar.write().follow(&route)));

    match &*user.read() {
        Some(Ok(Some(current))) => {
            let current = current.clone();
            use_context_provider(|| current.clone());
            let initial = current.initial();
            let collapsed = sidebar.read().collapsed;

            rsx! {
                div { class: if collapsed { "app-layout sidebar-collapsed" } else { "app-layout" },
                    aside { class: "sidebar",
                        div { class: "sidebar-header",
                            span { class: "sidebar-logo", "SIPANDU" }
                        }
                        nav { class: "sidebar-nav",
                            NavLink { to: Route::dashboard(), "Dashboard" }
                            NavGroup { menu: Menu::MasterData, sidebar,
                                NavLink { to: Route::EmployeeList {}, "Employees" }
                                NavLink { to: Route::PositionList {}, "Positions" }
                                NavLink { to: Route::ShiftList {}, "Shifts" }
                                NavLink { to: Route::LocationList {}, "Locations" }
                            }
                        }
                        div { class: "sidebar-footer",
                            div { class: "sidebar-user",
                                div { class: "sidebar-avatar", "{initial}" }
                                div { class: "sidebar-user-info",
                                    div { class: "sidebar-user-name", "{current.username}" }
                                    div { class: "sidebar-user-role", "Administrator" }
                                }
                            }
                            a { href: "/auth/logout", rel: "external", class: "sidebar-logout", "Sign out" }
                        }
                    }
                    div { class: "main-column",
                        header { class: "topbar",
                            button {
                                class: "topbar-toggle",
                                title: if collapsed { "Show menu" } else { "Hide menu" },
                                onclick: move |_| sidebar.write().toggle_collapsed(),
                                "☰"
                            }
                            span { class: "topbar-user", "{current.username}" }
                        }
                        main { class: "main-content",
                            AlertToast {}
                            Outlet::<Route> {}
                        }
                    }
                }
            }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            let nav = navigator();
            nav.push(Route::Login { error: None });
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        None => {
            rsx! {
                div { class: "loading", "Loading..." }
            }
        }
    }
}
