//! Element data
//!
//! Tag name, attributes, handler slots and (for `<img>`) request state.

use crate::attributes::NamedNodeMap;
use crate::events::{EventHandler, EventType};
use crate::image::{is_source_attribute, ImageRequestState};

/// Element-specific data
#[derive(Debug, Default)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag_name: String,
    attrs: NamedNodeMap,
    on_load: Option<EventHandler>,
    on_error: Option<EventHandler>,
    request: ImageRequestState,
}

impl ElementData {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn is_image(&self) -> bool {
        self.tag_name == "img"
    }

    pub fn attributes(&self) -> &NamedNodeMap {
        &self.attrs
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get_attribute(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.has_attribute(name)
    }

    /// Set an attribute. Touching `src`/`srcset` with a new value restarts
    /// the image request.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let previous = self.attrs.set_attribute(name, value);
        if is_source_attribute(name) && previous.as_deref() != Some(value) {
            self.request = ImageRequestState::Unavailable;
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let removed = self.attrs.remove_attribute(name).is_some();
        if removed && is_source_attribute(name) {
            self.request = ImageRequestState::Unavailable;
        }
        removed
    }

    /// Bind a handler slot, replacing whatever was there
    pub fn set_event_handler(&mut self, event_type: EventType, handler: EventHandler) {
        *self.slot_mut(event_type) = Some(handler);
    }

    pub fn clear_event_handler(&mut self, event_type: EventType) -> Option<EventHandler> {
        self.slot_mut(event_type).take()
    }

    pub fn event_handler(&self, event_type: EventType) -> Option<&EventHandler> {
        match event_type {
            EventType::Load => self.on_load.as_ref(),
            EventType::Error => self.on_error.as_ref(),
        }
    }

    fn slot_mut(&mut self, event_type: EventType) -> &mut Option<EventHandler> {
        match event_type {
            EventType::Load => &mut self.on_load,
            EventType::Error => &mut self.on_error,
        }
    }

    pub fn request_state(&self) -> ImageRequestState {
        self.request
    }

    pub(crate) fn set_request_state(&mut self, state: ImageRequestState) {
        self.request = state;
    }

    /// `HTMLImageElement.complete`
    pub fn is_complete(&self) -> bool {
        let has_source = |name: &str| self.get_attribute(name).is_some_and(|v| !v.is_empty());
        if !has_source("src") && !has_source("srcset") {
            return true;
        }
        self.request.is_settled()
    }
}
