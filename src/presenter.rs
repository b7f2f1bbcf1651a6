//! Pure projection of auth + roster snapshots into view models.
//!
//! DESIGN
//! ======
//! Components render whatever these functions return and make no decisions of
//! their own, so every display rule (spots left, removal gating, form
//! visibility, placeholders) is tested here without a DOM.

#[cfg(test)]
#[path = "presenter_test.rs"]
mod presenter_test;

use crate::state::auth::AuthSession;
use crate::state::roster::{Activity, ActivityRoster, LoadStatus, RosterState};

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const ROSTER_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const ROSTER_LOADING_TEXT: &str = "Loading activities...";
pub const ACTIVITY_PLACEHOLDER_LABEL: &str = "-- Select an activity --";
pub const SIGNED_OUT_STATUS_TEXT: &str = "Not logged in";
pub const SIGNUP_LOCKED_TEXT: &str = "Teachers must log in to register or unregister students.";

/// Header and form visibility derived from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthChrome {
    pub status_text: String,
    pub show_login_button: bool,
    pub show_logout_button: bool,
    pub show_signup_form: bool,
    pub show_locked_notice: bool,
}

pub fn auth_chrome(auth: &AuthSession) -> AuthChrome {
    let signed_in = auth.is_authenticated();
    let status_text = if signed_in {
        format!("Logged in as {}", auth.username())
    } else {
        SIGNED_OUT_STATUS_TEXT.to_owned()
    };
    AuthChrome {
        status_text,
        show_login_button: !signed_in,
        show_logout_button: signed_in,
        show_signup_form: signed_in,
        show_locked_notice: !signed_in,
    }
}

/// Data attached to a participant's remove button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalControl {
    pub activity: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    /// Present only for signed-in viewers. Display gate only; the server
    /// authorizes the delete independently.
    pub removal: Option<RemovalControl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParticipantsView {
    /// Render the fixed "no participants yet" placeholder.
    Empty,
    List(Vec<ParticipantRow>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: ParticipantsView,
}

impl ActivityCard {
    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

pub fn activity_card(auth: &AuthSession, activity: &Activity) -> ActivityCard {
    let participants = if activity.participants.is_empty() {
        ParticipantsView::Empty
    } else {
        ParticipantsView::List(
            activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    email: email.clone(),
                    removal: auth
                        .is_authenticated()
                        .then(|| RemovalControl { activity: activity.name.clone(), email: email.clone() }),
                })
                .collect(),
        )
    };
    ActivityCard {
        name: activity.name.clone(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        spots_left: activity.spots_left(),
        participants,
    }
}

/// What the activities list area shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterView {
    Loading,
    Failed,
    Cards(Vec<ActivityCard>),
}

impl RosterView {
    /// Placeholder text for the non-card states.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(ROSTER_LOADING_TEXT),
            Self::Failed => Some(ROSTER_FAILED_TEXT),
            Self::Cards(_) => None,
        }
    }
}

pub fn roster_view(auth: &AuthSession, state: &RosterState) -> RosterView {
    match state.status() {
        LoadStatus::Loading => RosterView::Loading,
        LoadStatus::Failed => RosterView::Failed,
        LoadStatus::Ready => {
            RosterView::Cards(state.roster().iter().map(|activity| activity_card(auth, activity)).collect())
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Options for the signup form's activity selector, placeholder first.
pub fn activity_options(roster: &ActivityRoster) -> Vec<SelectOption> {
    std::iter::once(SelectOption { value: String::new(), label: ACTIVITY_PLACEHOLDER_LABEL.to_owned() })
        .chain(roster.names().map(|name| SelectOption { value: name.to_owned(), label: name.to_owned() }))
        .collect()
}
