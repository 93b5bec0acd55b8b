//! Image request state
//!
//! Tracks the current request of an `<img>` element, which is all the
//! `complete` IDL attribute needs. Fetching and decoding live elsewhere.

/// State of an image element's current request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageRequestState {
    /// Nothing fetched yet (or the source changed)
    #[default]
    Unavailable,
    /// Fully fetched and decoded
    CompletelyAvailable,
    /// Fetch or decode failed
    Broken,
}

impl ImageRequestState {
    /// Request has settled one way or the other
    pub fn is_settled(self) -> bool {
        matches!(self, Self::CompletelyAvailable | Self::Broken)
    }
}

/// Outcome reported by the loading pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded,
    Failed,
}

impl ImageOutcome {
    pub(crate) fn request_state(self) -> ImageRequestState {
        match self {
            ImageOutcome::Loaded => ImageRequestState::CompletelyAvailable,
            ImageOutcome::Failed => ImageRequestState::Broken,
        }
    }
}

/// Attributes that restart the request when they change
pub(crate) fn is_source_attribute(name: &str) -> bool {
    name == "src" || name == "srcset"
}
