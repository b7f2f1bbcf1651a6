//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read state from Leptos context and render `presenter` view
//! models. User intents go back to the root component through callbacks.

pub mod activity_card;
pub mod activity_list;
pub mod login_modal;
pub mod signup_form;
pub mod status_banner;
pub mod user_menu;
