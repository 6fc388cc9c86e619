//! Dark mode preference: read, apply, toggle.
//!
//! The preference lives in `localStorage`; applying it sets a `data-theme`
//! attribute on `<html>`. SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "busline_dark";

/// Stored preference, falling back to the system color scheme when the user
/// has never toggled.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                return value == "true";
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set the `data-theme` attribute for the current preference.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(element) = element {
            let _ = element.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the preference, apply it, and persist the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
