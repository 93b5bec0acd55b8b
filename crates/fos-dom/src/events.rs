//! DOM Events
//!
//! Resource events and the handler type bound to element handler slots.

use std::fmt;
use std::rc::Rc;

use crate::NodeId;

/// Event types fired by the resource loading pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Load,
    Error,
}

impl EventType {
    /// Event name as used by `addEventListener`
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Load => "load",
            EventType::Error => "error",
        }
    }

    /// Name of the matching handler content attribute
    pub fn handler_attribute(&self) -> &'static str {
        match self {
            EventType::Load => "onload",
            EventType::Error => "onerror",
        }
    }

    /// Resource events never bubble
    pub fn bubbles(&self) -> bool {
        false
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DOM event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_type: EventType,
    pub target: NodeId,
}

impl Event {
    pub fn new(event_type: EventType, target: NodeId) -> Self {
        Self { event_type, target }
    }
}

/// Handler bound to an element slot.
///
/// Cloning shares the same closure; `same_handler` compares identity.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&Event)>);

impl EventHandler {
    pub fn new(f: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }

    /// True if both wrap the same closure allocation
    pub fn same_handler(&self, other: &EventHandler) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventHandler")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_event_names() {
        assert_eq!(EventType::Load.as_str(), "load");
        assert_eq!(EventType::Error.handler_attribute(), "onerror");
        assert!(!EventType::Load.bubbles());
    }

    #[test]
    fn test_handler_identity() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let handler = EventHandler::new(move |_| counter.set(counter.get() + 1));
        let clone = handler.clone();
        let other = EventHandler::new(|_| {});

        assert!(handler.same_handler(&clone));
        assert!(!handler.same_handler(&other));

        clone.call(&Event::new(EventType::Load, NodeId(1)));
        assert_eq!(hits.get(), 1);
    }
}
