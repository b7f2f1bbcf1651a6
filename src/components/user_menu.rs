//! Header user menu: auth status plus login/logout entry points.

use leptos::html::Div;
use leptos::prelude::*;

use crate::presenter::auth_chrome;
use crate::state::auth::AuthSession;
use crate::state::ui::UiState;

/// Dropdown in the page header. `node_ref` marks the container used for the
/// click-outside test.
#[component]
pub fn UserMenu(node_ref: NodeRef<Div>, on_open_login: Callback<()>, on_logout: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let chrome = move || auth.with(auth_chrome);

    view! {
        <div id="user-menu" class="user-menu" node_ref=node_ref>
            <button
                id="user-menu-toggle"
                class="user-menu__toggle"
                title="Teacher menu"
                on:click=move |_| ui.update(UiState::toggle_user_menu)
            >
                "👤"
            </button>
            <div id="user-menu-panel" class="user-menu__panel" class:hidden=move || !ui.get().user_menu_open>
                <p id="auth-status">{move || chrome().status_text}</p>
                <button
                    id="open-login-btn"
                    class:hidden=move || !chrome().show_login_button
                    on:click=move |_| on_open_login.run(())
                >
                    "Teacher Login"
                </button>
                <button
                    id="logout-btn"
                    class:hidden=move || !chrome().show_logout_button
                    on:click=move |_| on_logout.run(())
                >
                    "Logout"
                </button>
            </div>
        </div>
    }
}
