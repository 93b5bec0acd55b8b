//! Integration tests for fos-dom
//!
//! Handler slot lifetime, image request state and serialization.

use std::cell::Cell;
use std::rc::Rc;

use fos_dom::{Document, DomError, EventHandler, EventType, ImageOutcome, ImageRequestState};

fn counter() -> (Rc<Cell<u32>>, EventHandler) {
    let hits = Rc::new(Cell::new(0));
    let sink = hits.clone();
    (hits, EventHandler::new(move |_| sink.set(sink.get() + 1)))
}

#[test]
fn test_handler_slot_replaced_not_stacked() {
    let mut doc = Document::new();
    let img = doc.create_element("img");
    doc.append_child(doc.body(), img).unwrap();

    let (first, first_handler) = counter();
    let (second, second_handler) = counter();
    doc.set_event_handler(img, EventType::Load, first_handler).unwrap();
    doc.set_event_handler(img, EventType::Load, second_handler).unwrap();

    doc.dispatch_event(img, EventType::Load).unwrap();
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
}

#[test]
fn test_handlers_die_with_subtree() {
    let mut doc = Document::new();
    let wrapper = doc.create_element("div");
    let img = doc.create_element("img");
    doc.append_child(doc.body(), wrapper).unwrap();
    doc.append_child(wrapper, img).unwrap();

    let (hits, handler) = counter();
    doc.set_event_handler(img, EventType::Error, handler).unwrap();
    doc.remove(wrapper).unwrap();

    assert_eq!(
        doc.finish_image_request(img, ImageOutcome::Failed),
        Err(DomError::NodeNotFound(img))
    );
    assert_eq!(hits.get(), 0);
    // Only the counter's own clone is left
    assert_eq!(Rc::strong_count(&hits), 1);
}

#[test]
fn test_cleared_slot_is_silent() {
    let mut doc = Document::new();
    let img = doc.create_element("img");
    let (hits, handler) = counter();
    doc.set_event_handler(img, EventType::Load, handler).unwrap();
    doc.clear_event_handler(img, EventType::Load).unwrap();

    assert!(!doc.dispatch_event(img, EventType::Load).unwrap());
    assert_eq!(hits.get(), 0);
}

#[test]
fn test_complete_lifecycle() {
    let mut doc = Document::new();
    let img = doc.create_element("img");

    // No source at all
    assert!(doc.is_complete(img).unwrap());

    doc.set_attribute(img, "src", "a.png").unwrap();
    assert!(!doc.is_complete(img).unwrap());

    doc.finish_image_request(img, ImageOutcome::Loaded).unwrap();
    assert_eq!(doc.image_request_state(img).unwrap(), ImageRequestState::CompletelyAvailable);
    assert!(doc.is_complete(img).unwrap());

    doc.set_attribute(img, "src", "b.png").unwrap();
    assert!(!doc.is_complete(img).unwrap());

    doc.remove_attribute(img, "src").unwrap();
    assert!(doc.is_complete(img).unwrap());
}

#[test]
fn test_outer_html_escapes_values() {
    let mut doc = Document::new();
    let img = doc.create_element("img");
    doc.set_attribute(img, "src", "a.png?w=1&h=2").unwrap();
    doc.set_attribute(img, "alt", "\"quoted\" <b>").unwrap();

    assert_eq!(
        doc.outer_html(img).unwrap(),
        "<img src=\"a.png?w=1&amp;h=2\" alt=\"&quot;quoted&quot; &lt;b&gt;\">"
    );
}

#[test]
fn test_attribute_ops_on_document_node() {
    let mut doc = Document::new();
    let root = doc.tree().root();
    assert_eq!(doc.set_attribute(root, "src", "a.png"), Err(DomError::NotAnElement(root)));
}
