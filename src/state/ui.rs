//! Local UI chrome state: the user-menu dropdown and the login modal.
//!
//! DESIGN
//! ======
//! Two independent click-driven flags. Nothing here is timed and nothing here
//! talks to the server; the dispatcher's outcomes drive the close-on-success
//! transitions.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visibility of the dropdown panel and the login dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub user_menu_open: bool,
    pub login_modal_open: bool,
}

impl UiState {
    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    /// Any document click; only clicks outside the menu container close it.
    pub fn document_click(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.user_menu_open = false;
        }
    }

    pub fn open_login(&mut self) {
        self.login_modal_open = true;
    }

    pub fn cancel_login(&mut self) {
        self.login_modal_open = false;
    }

    pub fn login_succeeded(&mut self) {
        self.login_modal_open = false;
        self.user_menu_open = false;
    }

    pub fn logout_succeeded(&mut self) {
        self.user_menu_open = false;
    }
}
