//! Networking modules for the activities REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and `error`
//! classifies failures for the dispatcher.

pub mod api;
pub mod error;
pub mod types;
