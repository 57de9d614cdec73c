//! Blocking browser dialogs for mutation outcomes.
//!
//! Failed mutations surface as a blocking alert and leave prior state
//! untouched; destructive actions without a dedicated dialog go through
//! `confirm`. Both are inert outside the browser feature.

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// Ask for confirmation; `false` when the user declines or no window exists.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
