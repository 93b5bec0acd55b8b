//! Document - High-level document API

use crate::events::{Event, EventHandler, EventType};
use crate::image::{ImageOutcome, ImageRequestState};
use crate::serialize::write_element;
use crate::{DomTree, NodeId, Result};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    tree: DomTree,
    html_element: NodeId,
    body_element: NodeId,
}

impl Document {
    /// Create a document with `<html><head></head><body></body></html>`
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh detached nodes under a live root: cannot fail
        let root = tree.root();
        for (parent, child) in [(root, html), (html, head), (html, body)] {
            if let Err(e) = tree.append_child(parent, child) {
                tracing::error!("failed to build document skeleton: {e}");
            }
        }

        Self {
            tree,
            html_element: html,
            body_element: body,
        }
    }

    /// `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// `<body>` element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.tree.create_element(tag_name)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.tree.append_child(parent, child)
    }

    /// Remove a node and its subtree. Handler slots are dropped with it.
    pub fn remove(&mut self, node: NodeId) -> Result<()> {
        self.tree.remove(node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.tree.contains(node)
    }

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Result<Option<&str>> {
        Ok(self.tree.element(node)?.get_attribute(name))
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.tree.element_mut(node)?.set_attribute(name, value);
        Ok(())
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<bool> {
        Ok(self.tree.element_mut(node)?.remove_attribute(name))
    }

    pub fn set_event_handler(
        &mut self,
        node: NodeId,
        event_type: EventType,
        handler: EventHandler,
    ) -> Result<()> {
        self.tree.element_mut(node)?.set_event_handler(event_type, handler);
        Ok(())
    }

    pub fn clear_event_handler(&mut self, node: NodeId, event_type: EventType) -> Result<()> {
        self.tree.element_mut(node)?.clear_event_handler(event_type);
        Ok(())
    }

    /// Fire an event at `target`. Returns whether a handler ran.
    pub fn dispatch_event(&mut self, target: NodeId, event_type: EventType) -> Result<bool> {
        let handler = self.tree.element(target)?.event_handler(event_type).cloned();
        tracing::trace!(node = %target, event = %event_type, bound = handler.is_some(), "dispatch");

        match handler {
            Some(handler) => {
                handler.call(&Event::new(event_type, target));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// `HTMLImageElement.complete`
    pub fn is_complete(&self, node: NodeId) -> Result<bool> {
        Ok(self.tree.element(node)?.is_complete())
    }

    pub fn image_request_state(&self, node: NodeId) -> Result<ImageRequestState> {
        Ok(self.tree.element(node)?.request_state())
    }

    /// Settle the element's current request and fire `load` or `error`,
    /// the way the loading pipeline reports a finished fetch.
    pub fn finish_image_request(&mut self, node: NodeId, outcome: ImageOutcome) -> Result<bool> {
        self.tree
            .element_mut(node)?
            .set_request_state(outcome.request_state());
        let event_type = match outcome {
            ImageOutcome::Loaded => EventType::Load,
            ImageOutcome::Failed => EventType::Error,
        };
        self.dispatch_event(node, event_type)
    }

    /// Serialize an element and its descendants
    pub fn outer_html(&self, node: NodeId) -> Result<String> {
        let mut out = String::new();
        write_element(&mut out, &self.tree, node)?;
        Ok(out)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomError;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_document_skeleton() {
        let doc = Document::new();
        let html = doc.document_element();
        assert_eq!(doc.tree().children(NodeId::ROOT).unwrap(), &[html]);
        assert_eq!(doc.tree().parent(doc.body()).unwrap(), Some(html));
        assert_eq!(doc.outer_html(html).unwrap(), "<html><head></head><body></body></html>");
    }

    #[test]
    fn test_dispatch_runs_bound_handler() {
        let mut doc = Document::new();
        let img = doc.create_element("img");
        doc.append_child(doc.body(), img).unwrap();

        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        doc.set_event_handler(img, EventType::Error, EventHandler::new(move |e| sink.set(Some(e.target))))
            .unwrap();

        assert!(!doc.dispatch_event(img, EventType::Load).unwrap());
        assert!(doc.dispatch_event(img, EventType::Error).unwrap());
        assert_eq!(seen.get(), Some(img));
    }

    #[test]
    fn test_finish_image_request() {
        let mut doc = Document::new();
        let img = doc.create_element("img");
        doc.set_attribute(img, "src", "a.png").unwrap();
        assert!(!doc.is_complete(img).unwrap());

        assert!(!doc.finish_image_request(img, ImageOutcome::Failed).unwrap());
        assert_eq!(doc.image_request_state(img).unwrap(), ImageRequestState::Broken);
        assert!(doc.is_complete(img).unwrap());
    }

    #[test]
    fn test_dispatch_to_removed_node() {
        let mut doc = Document::new();
        let img = doc.create_element("img");
        doc.append_child(doc.body(), img).unwrap();
        doc.remove(img).unwrap();

        assert_eq!(doc.dispatch_event(img, EventType::Load), Err(DomError::NodeNotFound(img)));
    }
}
