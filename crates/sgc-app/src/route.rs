//! Pages of the console and the side menu

/// One page of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Jobs,
    JobEdit,
    Accounts,
    AccountEdit,
    Templates,
    TemplateEdit,
    Logs,
}

/// Side menu entries, in display order
pub const MENU: [Route; 4] = [Route::Jobs, Route::Accounts, Route::Templates, Route::Logs];

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Jobs => "Jobs",
            Route::JobEdit => "Edit Job",
            Route::Accounts => "Accounts",
            Route::AccountEdit => "Edit Account",
            Route::Templates => "Templates",
            Route::TemplateEdit => "Edit Template",
            Route::Logs => "Logs",
        }
    }

    /// Menu entry this page belongs to
    pub fn menu_entry(&self) -> Route {
        match self {
            Route::Jobs | Route::JobEdit => Route::Jobs,
            Route::Accounts | Route::AccountEdit => Route::Accounts,
            Route::Templates | Route::TemplateEdit => Route::Templates,
            Route::Logs => Route::Logs,
        }
    }

    pub fn menu_position(&self) -> usize {
        let entry = self.menu_entry();
        MENU.iter().position(|r| *r == entry).unwrap_or(0)
    }

    pub fn is_editor(&self) -> bool {
        matches!(
            self,
            Route::JobEdit | Route::AccountEdit | Route::TemplateEdit
        )
    }

    /// Menu entry after this page's, wrapping
    pub fn next_menu(&self) -> Route {
        MENU[(self.menu_position() + 1) % MENU.len()]
    }

    pub fn prev_menu(&self) -> Route {
        MENU[(self.menu_position() + MENU.len() - 1) % MENU.len()]
    }
}
