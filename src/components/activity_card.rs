//! Card for one activity: details, availability, and participant list.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::presenter::{ActivityCard, NO_PARTICIPANTS_TEXT, ParticipantRow, ParticipantsView, RemovalControl};

#[component]
pub fn ActivityCardView(card: ActivityCard, on_remove: Callback<RemovalControl>) -> impl IntoView {
    let availability = card.availability_text();
    let participants = match card.participants {
        ParticipantsView::Empty => view! {
            <p>
                <em>{NO_PARTICIPANTS_TEXT}</em>
            </p>
        }
        .into_any(),
        ParticipantsView::List(rows) => view! {
            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">
                    {rows.into_iter().map(|row| participant_row(row, on_remove)).collect_view()}
                </ul>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {card.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-container">{participants}</div>
        </div>
    }
}

fn participant_row(row: ParticipantRow, on_remove: Callback<RemovalControl>) -> impl IntoView {
    let remove_button = row.removal.map(|control| {
        let activity = control.activity.clone();
        let email = control.email.clone();
        view! {
            <button
                class="delete-btn"
                data-activity=activity
                data-email=email
                title="Unregister participant"
                on:click=move |_| on_remove.run(control.clone())
            >
                "❌"
            </button>
        }
    });

    view! {
        <li>
            <span class="participant-email">{row.email}</span>
            {remove_button}
        </li>
    }
}
