//! Start-up progress and in-flight store requests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use viewer::controller::InitError;
use viewer::doc::QuoteId;

/// Where the viewer is in its start-up sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Document, tags and quotes are being fetched.
    #[default]
    Loading,
    Ready,
    /// Start-up stopped; nothing further happens on this page.
    Failed(InitError),
}

/// Intrinsic pixel size of the last rendered page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

/// Shell state that is not part of the viewer core.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub status: LoadStatus,
    /// Size of the page canvas buffer; the highlight layer's coordinate space.
    pub page_size: Option<PageSize>,
    /// A create request is outstanding.
    pub submitting: bool,
    /// Quote whose delete request is outstanding.
    pub deleting: Option<QuoteId>,
}

impl SessionState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }

    /// Message to show in place of the page, if start-up failed.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        match &self.status {
            LoadStatus::Failed(err) => Some(err.to_string()),
            LoadStatus::Loading | LoadStatus::Ready => None,
        }
    }
}
