//! Application state (Model in TEA pattern)

use sgc_core::Account;

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::notifications::Notifications;
use crate::route::Route;
use crate::views::{
    AccountEditState, AccountListState, JobEditState, JobListState, LogViewState,
    TemplateEditState, TemplateListState,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    /// Page currently shown
    pub route: Route,
    /// Pages to return to with `Back`
    pub history: Vec<Route>,

    pub accounts: AccountListState,
    pub account_edit: AccountEditState,
    pub jobs: JobListState,
    pub job_edit: JobEditState,
    pub templates: TemplateListState,
    pub template_edit: TemplateEditState,
    pub logs: LogViewState,

    pub notifications: Notifications,
    pub confirm_dialog: Option<ConfirmDialogState>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let logs = LogViewState::new(settings.log_max_length);
        Self {
            phase: AppPhase::Running,
            settings,
            route: Route::Jobs,
            history: Vec::new(),
            accounts: AccountListState::default(),
            account_edit: AccountEditState::create(),
            jobs: JobListState::default(),
            job_edit: JobEditState::create(),
            templates: TemplateListState::default(),
            template_edit: TemplateEditState::create(),
            logs,
            notifications: Notifications::default(),
            confirm_dialog: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Switch pages.
    ///
    /// Editors remember the page they were opened from; a menu page starts
    /// a fresh history.
    pub fn go_to(&mut self, route: Route) {
        if !route.is_editor() {
            self.history.clear();
        } else if self.route != route {
            self.history.push(self.route);
        }
        self.route = route;
    }

    /// Pop the page history; `None` at the root
    pub fn go_back(&mut self) -> Option<Route> {
        let previous = self.history.pop()?;
        self.route = previous;
        Some(previous)
    }

    /// Open the account form
    pub fn open_account_editor(&mut self, account: Option<&Account>) {
        self.account_edit = match account {
            Some(account) => AccountEditState::edit(account),
            None => AccountEditState::create(),
        };
        self.go_to(Route::AccountEdit);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history() {
        let mut state = AppState::default();
        assert_eq!(state.route, Route::Jobs);
        state.go_to(Route::JobEdit);
        state.go_to(Route::AccountEdit);
        assert_eq!(state.go_back(), Some(Route::JobEdit));
        assert_eq!(state.go_back(), Some(Route::Jobs));
        assert_eq!(state.go_back(), None);
        assert_eq!(state.route, Route::Jobs);
    }

    #[test]
    fn test_same_route_does_not_grow_history() {
        let mut state = AppState::default();
        state.go_to(Route::Jobs);
        state.go_to(Route::JobEdit);
        state.go_to(Route::JobEdit);
        assert_eq!(state.history, vec![Route::Jobs]);
    }

    #[test]
    fn test_menu_pages_reset_history() {
        let mut state = AppState::default();
        state.go_to(Route::AccountEdit);
        state.go_to(Route::Templates);
        assert!(state.history.is_empty());
        state.go_to(Route::Logs);
        state.go_to(Route::Accounts);
        assert!(state.history.is_empty());
        assert_eq!(state.go_back(), None);
        assert_eq!(state.route, Route::Accounts);
    }

    #[test]
    fn test_log_budget_comes_from_settings() {
        let settings = Settings {
            log_max_length: 64,
            ..Settings::default()
        };
        let state = AppState::new(settings);
        assert_eq!(state.logs.max_chars(), 64);
    }
}
