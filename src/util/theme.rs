//! Applies the active theme to the document.
//!
//! The `data-theme` attribute on `<html>` drives styling. Persisting the
//! preference is `UiState`'s job; this module only touches the DOM, and is a
//! no-op outside the browser.

use crate::state::ui::Theme;

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("failed to apply theme {}: {err:?}", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("theme {} selected without a document", theme.as_str());
    }
}
