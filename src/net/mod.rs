//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request construction and dispatch (views never build headers or
//! URLs themselves), `error` defines the tagged failure taxonomy, and `types`
//! defines the wire schema shared by every screen.

pub mod api;
pub mod error;
pub mod types;
