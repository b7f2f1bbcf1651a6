//! Activities list area: loading text, failure placeholder, or cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-renders whenever the auth or roster signal changes, so removal controls
//! appear and disappear with the session without a refetch.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::activity_card::ActivityCardView;
use crate::presenter::{RemovalControl, RosterView, roster_view};
use crate::state::auth::AuthSession;
use crate::state::roster::RosterState;

#[component]
pub fn ActivityList(on_remove: Callback<RemovalControl>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSession>>();
    let roster = expect_context::<RwSignal<RosterState>>();

    let current = move || auth.with(|auth| roster.with(|state| roster_view(auth, state)));

    view! {
        <div id="activities-list">
            {move || match current() {
                RosterView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card on_remove=on_remove/> })
                    .collect_view()
                    .into_any(),
                placeholder => view! { <p>{placeholder.placeholder().unwrap_or_default()}</p> }.into_any(),
            }}
        </div>
    }
}
