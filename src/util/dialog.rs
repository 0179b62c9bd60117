//! Blocking browser dialogs.

/// Show a yes/no `confirm()` prompt. Blocks the event loop until answered.
///
/// Outside the browser nothing can answer, so the prompt counts as declined.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("confirm dialog failed: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("declining confirm without a browser: {message}");
        false
    }
}
