//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and list items while reading session and
//! cache state from the Leptos context providers set up in `app`.

pub mod comment_thread;
pub mod confirm_dialog;
pub mod navbar;
pub mod stat_card;
pub mod video_card;
