use leptos::logging;

use crate::controllers::{Acknowledger, DiagnosticSink, FormKind, FormSubmission, SectionScroller};
use crate::models::SectionId;

/// Smooth-scrolls to the element whose id matches the section.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomScroller;

impl SectionScroller for DomScroller {
    fn scroll_to(&self, section: SectionId) -> bool {
        #[cfg(feature = "hydrate")]
        {
            use ::web_sys::{ScrollBehavior, ScrollIntoViewOptions};

            let Some(element) = ::web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(section.as_str()))
            else {
                return false;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = section;
            false
        }
    }
}

/// Writes submissions to the browser console as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn record(&self, kind: FormKind, submission: &FormSubmission) {
        match serde_json::to_string(submission) {
            Ok(json) => logging::log!("{} Form Data: {json}", kind.label()),
            Err(e) => logging::warn!("{} Form Data could not be serialised: {e}", kind.label()),
        }
    }
}

/// Confirms with a blocking `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertAcknowledger;

impl Acknowledger for AlertAcknowledger {
    fn acknowledge(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = ::web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            tracing::info!(message, "acknowledgement outside the browser");
        }
    }
}
