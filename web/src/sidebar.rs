use crate::Route;

/// A collapsible group of sidebar links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Menu {
    MasterData,
}

impl Menu {
    pub fn label(self) -> &'static str {
        match self {
            Menu::MasterData => "Master Data",
        }
    }

    /// The group a route's link lives in, if any.
    pub fn for_route(route: &Route) -> Option<Menu> {
        match route {
            Route::EmployeeList {}
            | Route::EmployeeNew {}
            | Route::EmployeeEdit { .. }
            | Route::PositionList {}
            | Route::ShiftList {}
            | Route::LocationList {}
            | Route::LocationNew {}
            | Route::LocationEdit { .. } => Some(Menu::MasterData),
            Route::Login { .. } | Route::Dashboard { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub open_menu: Option<Menu>,
    pub collapsed: bool,
}

impl SidebarState {
    /// Open `menu`, or close it if it is already open.
    pub fn toggle_menu(&mut self, menu: Menu) {
        self.open_menu = if self.open_menu == Some(menu) {
            None
        } else {
            Some(menu)
        };
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Open the group holding the current page. Leaves the state alone on
    /// pages outside any group.
    pub fn follow(&mut self, route: &Route) {
        if let Some(menu) = Menu::for_route(route) {
            self.open_menu = Some(menu);
        }
    }
}

/// Whether the link to `to` is highlighted while `current` is shown.
/// Create and edit pages highlight their list.
pub fn is_active(current: &Route, to: &Route) -> bool {
    list_of(current) == list_of(to)
}

fn list_of(route: &Route) -> Route {
    match route {
        Route::EmployeeNew {} | Route::EmployeeEdit { .. } => Route::EmployeeList {},
        Route::LocationNew {} | Route::LocationEdit { .. } => Route::LocationList {},
        Route::Dashboard { .. } => Route::Dashboard { signed_in: None },
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{EmployeeId, LocationId};

    #[test]
    fn toggling_open_menu_closes_it() {
        let mut state = SidebarState::default();

        state.toggle_menu(Menu::MasterData);
        assert_eq!(state.open_menu, Some(Menu::MasterData));

        state.toggle_menu(Menu::MasterData);
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn navigating_into_group_opens_it() {
        let mut state = SidebarState::default();

        state.follow(&Route::EmployeeEdit { id: EmployeeId(4) });
        assert_eq!(state.open_menu, Some(Menu::MasterData));
    }

    #[test]
    fn navigating_outside_groups_keeps_state() {
        let mut state = SidebarState {
            open_menu: Some(Menu::MasterData),
            collapsed: true,
        };

        state.follow(&Route::Dashboard { signed_in: None });
        assert_eq!(state.open_menu, Some(Menu::MasterData));
        assert!(state.collapsed);
    }

    #[test]
    fn collapse_toggles() {
        let mut state = SidebarState::default();
        state.toggle_collapsed();
        assert!(state.collapsed);
        state.toggle_collapsed();
        assert!(!state.collapsed);
    }

    #[test]
    fn form_pages_highlight_their_list() {
        assert!(is_active(
            &Route::LocationEdit { id: LocationId(2) },
            &Route::LocationList {}
        ));
        assert!(is_active(&Route::EmployeeNew {}, &Route::EmployeeList {}));
        assert!(!is_active(&Route::EmployeeNew {}, &Route::LocationList {}));
    }

    #[test]
    fn dashboard_ignores_query() {
        assert!(is_active(
            &Route::Dashboard {
                signed_in: Some("true".into())
            },
            &Route::Dashboard { signed_in: None }
        ));
        assert!(!is_active(&Route::PositionList {}, &Route::ShiftList {}));
    }
}
