//! Signup form for teachers, with the locked notice shown to everyone else.

use leptos::prelude::*;

use crate::presenter::{SIGNUP_LOCKED_TEXT, activity_options, auth_chrome};
use crate::state::auth::AuthSession;
use crate::state::roster::RosterState;

/// Email + activity form. Field values live in the caller's signals so the
/// caller can clear them after a successful signup.
#[component]
pub fn SignupForm(email: RwSignal<String>, activity: RwSignal<String>, on_submit: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let roster = expect_context::<RwSignal<RosterState>>();

    let chrome = move || auth.with(auth_chrome);
    let options = move || roster.with(|state| activity_options(state.roster()));

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form id="signup-form" class:hidden=move || !chrome().show_signup_form on:submit=on_form_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    prop:value=move || activity.get()
                    on:change=move |ev| activity.set(event_target_value(&ev))
                >
                    {move || {
                        options()
                            .into_iter()
                            .map(|option| view! { <option value=option.value>{option.label}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
        <p id="signup-locked-message" class="info" class:hidden=move || !chrome().show_locked_notice>
            {SIGNUP_LOCKED_TEXT}
        </p>
    }
}
