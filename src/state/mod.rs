//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `roster`, `ui`, `banner`) so the
//! presenter and components can depend on small focused models. Each lives in
//! its own `RwSignal` provided by the root component.

pub mod auth;
pub mod banner;
pub mod roster;
pub mod ui;
