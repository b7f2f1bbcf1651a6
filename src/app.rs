//! Root application component: state providers and action wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the four state signals, provides them as context, and is the only
//! place that spawns dispatcher calls. Every call's outcome is routed into the
//! status banner; close/reset transitions run only after success. The roster
//! refresh that follows a success runs last.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::activity_list::ActivityList;
use crate::components::login_modal::LoginModal;
use crate::components::signup_form::SignupForm;
use crate::components::status_banner::StatusBanner;
use crate::components::user_menu::UserMenu;
use crate::config::ClientConfig;
use crate::dispatch::{ActionOutcome, ClientStore, Dispatcher};
use crate::net::api::HttpApi;
use crate::presenter::RemovalControl;
use crate::state::auth::AuthSession;
use crate::state::banner::{Banner, BannerExpiry, BannerState};
use crate::state::roster::{ActivityRoster, RosterState};
use crate::state::ui::UiState;

/// [`ClientStore`] backed by the app's reactive signals.
#[derive(Clone, Copy, Debug)]
pub struct SignalStore {
    pub auth: RwSignal<AuthSession>,
    pub roster: RwSignal<RosterState>,
}

impl ClientStore for SignalStore {
    fn set_auth(&self, auth: AuthSession) {
        self.auth.set(auth);
    }

    fn begin_roster_fetch(&self) -> u64 {
        self.roster.try_update(RosterState::begin_fetch).unwrap_or_default()
    }

    fn apply_roster(&self, ticket: u64, roster: ActivityRoster) -> bool {
        self.roster.try_update(|state| state.apply(ticket, roster)).unwrap_or(false)
    }

    fn fail_roster(&self, ticket: u64) -> bool {
        self.roster.try_update(|state| state.fail(ticket)).unwrap_or(false)
    }
}

type AppDispatcher = Dispatcher<HttpApi, SignalStore>;

/// Show `outcome` in the banner and schedule its expiry.
fn show_outcome(banner: RwSignal<BannerState>, outcome: &ActionOutcome, duration_ms: u64) {
    let Some(expiry) = banner.try_update(|b| b.show_for(Banner::from(outcome.clone()), duration_ms)) else {
        return;
    };
    schedule_expiry(banner, expiry);
}

#[cfg(feature = "csr")]
fn schedule_expiry(banner: RwSignal<BannerState>, expiry: BannerExpiry) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(expiry.delay).await;
        banner.update(|b| {
            b.expire(expiry.token);
        });
    });
}

#[cfg(not(feature = "csr"))]
fn schedule_expiry(_banner: RwSignal<BannerState>, expiry: BannerExpiry) {
    log::debug!("no timer outside the browser; banner {} stays up", expiry.token);
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    let banner_ms = config.banner_duration_ms;

    let auth = RwSignal::new(AuthSession::signed_out());
    let roster = RwSignal::new(RosterState::default());
    let ui = RwSignal::new(UiState::default());
    let banner = RwSignal::new(BannerState::default());

    provide_context(auth);
    provide_context(roster);
    provide_context(ui);
    provide_context(banner);

    let dispatcher: StoredValue<AppDispatcher> =
        StoredValue::new(Dispatcher::new(HttpApi::new(&config), SignalStore { auth, roster }));

    // Form fields, cleared after successful submits.
    let signup_email = RwSignal::new(String::new());
    let signup_activity = RwSignal::new(String::new());
    let login_username = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    let clear_login_form = move || {
        login_username.set(String::new());
        login_password.set(String::new());
    };

    // Startup: status and roster load independently.
    let startup = dispatcher.get_value();
    leptos::task::spawn_local(async move { startup.refresh_auth().await });
    let startup = dispatcher.get_value();
    leptos::task::spawn_local(async move { startup.refresh_roster().await });

    let on_signup = Callback::new(move |()| {
        let activity_name = signup_activity.get_untracked();
        let email = signup_email.get_untracked();
        let d = dispatcher.get_value();
        leptos::task::spawn_local(async move {
            let outcome = d.signup(&activity_name, &email).await;
            if outcome.is_success() {
                signup_email.set(String::new());
                signup_activity.set(String::new());
            }
            show_outcome(banner, &outcome, banner_ms);
            d.follow_up(&outcome).await;
        });
    });

    let on_remove = Callback::new(move |control: RemovalControl| {
        let d = dispatcher.get_value();
        leptos::task::spawn_local(async move {
            let outcome = d.unregister(&control.activity, &control.email).await;
            show_outcome(banner, &outcome, banner_ms);
            d.follow_up(&outcome).await;
        });
    });

    let on_login = Callback::new(move |()| {
        let username = login_username.get_untracked();
        let password = login_password.get_untracked();
        let d = dispatcher.get_value();
        leptos::task::spawn_local(async move {
            let outcome = d.login(&username, &password).await;
            if outcome.is_success() {
                ui.update(UiState::login_succeeded);
                clear_login_form();
            }
            show_outcome(banner, &outcome, banner_ms);
            d.follow_up(&outcome).await;
        });
    });

    let on_login_cancel = Callback::new(move |()| {
        ui.update(UiState::cancel_login);
        clear_login_form();
    });

    let on_open_login = Callback::new(move |()| ui.update(UiState::open_login));

    let on_logout = Callback::new(move |()| {
        let d = dispatcher.get_value();
        leptos::task::spawn_local(async move {
            let outcome = d.logout().await;
            if outcome.is_success() {
                ui.update(UiState::logout_succeeded);
            }
            show_outcome(banner, &outcome, banner_ms);
            d.follow_up(&outcome).await;
        });
    });

    let menu_ref = NodeRef::<leptos::html::Div>::new();

    // Close the dropdown on any click outside its container.
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;

        let handle = window_event_listener(leptos::ev::click, move |ev| {
            if !ui.get_untracked().user_menu_open {
                return;
            }
            let inside = match (menu_ref.get_untracked(), ev.target()) {
                (Some(menu), Some(target)) => {
                    target.dyn_ref::<web_sys::Node>().is_some_and(|node| menu.contains(Some(node)))
                }
                _ => false,
            };
            ui.update(|u| u.document_click(inside));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Title text="Mergington High School Activities"/>
        <header class="app-header">
            <div class="app-header__titles">
                <h1>"Mergington High School"</h1>
                <h2>"Extracurricular Activities"</h2>
            </div>
            <UserMenu node_ref=menu_ref on_open_login=on_open_login on_logout=on_logout/>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList on_remove=on_remove/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm email=signup_email activity=signup_activity on_submit=on_signup/>
                <StatusBanner/>
            </section>
        </main>
        <LoginModal
            username=login_username
            password=login_password
            on_submit=on_login
            on_cancel=on_login_cancel
        />
    }
}
