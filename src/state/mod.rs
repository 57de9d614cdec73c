//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the single holder of authentication state; `cache` is the
//! keyed video store that lets two screens observe one consistent copy of an
//! entity. Both are provided as `RwSignal` contexts from the app root.

pub mod cache;
pub mod session;
