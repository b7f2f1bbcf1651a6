//! Teacher login dialog.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn LoginModal(
    username: RwSignal<String>,
    password: RwSignal<String>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div id="login-modal" class="modal" class:hidden=move || !ui.get().login_modal_open>
            <div class="modal__content">
                <h3>"Teacher Login"</h3>
                <form id="login-form" on:submit=on_form_submit>
                    <div class="form-group">
                        <label for="username">"Username:"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password:"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="modal__actions">
                        <button type="submit">"Log In"</button>
                        <button type="button" id="close-login-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
