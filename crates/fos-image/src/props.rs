//! Image component props

use std::rc::Rc;

use crate::callback::Callback;
use crate::cross_origin::CrossOrigin;
use crate::source_set::ImageDescriptor;

/// Inputs of the image component.
///
/// `PartialEq` is shallow: strings compare by value, the source set and
/// callbacks compare by reference. Two prop values that are equal here
/// render identically, so a re-render can be skipped.
#[derive(Debug, Clone)]
pub struct ImageProps {
    pub alt: String,
    pub source: String,
    pub source_set: Option<Rc<[ImageDescriptor]>>,
    pub cross_origin: Option<CrossOrigin>,
    pub on_load: Option<Callback>,
    pub on_error: Option<Callback>,
    /// Forwarded verbatim, in order
    pub attributes: Vec<(String, String)>,
}

impl ImageProps {
    pub fn new(source: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            source: source.into(),
            source_set: None,
            cross_origin: None,
            on_load: None,
            on_error: None,
            attributes: Vec::new(),
        }
    }

    pub fn source_set(mut self, set: impl Into<Rc<[ImageDescriptor]>>) -> Self {
        self.source_set = Some(set.into());
        self
    }

    pub fn cross_origin(mut self, mode: CrossOrigin) -> Self {
        self.cross_origin = Some(mode);
        self
    }

    pub fn on_load(mut self, callback: impl Into<Callback>) -> Self {
        self.on_load = Some(callback.into());
        self
    }

    pub fn on_error(mut self, callback: impl Into<Callback>) -> Self {
        self.on_error = Some(callback.into());
        self
    }

    /// Add a pass-through attribute (`class`, `width`, `loading`, ...)
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

fn same_source_set(a: &Option<Rc<[ImageDescriptor]>>, b: &Option<Rc<[ImageDescriptor]>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for ImageProps {
    fn eq(&self, other: &Self) -> bool {
        self.alt == other.alt
            && self.source == other.source
            && same_source_set(&self.source_set, &other.source_set)
            && self.cross_origin == other.cross_origin
            && self.on_load == other.on_load
            && self.on_error == other.on_error
            && self.attributes == other.attributes
    }
}
