//! fOS DOM - Document Object Model
//!
//! Minimal host tree for mounting components: arena-allocated nodes,
//! ordered attributes, declarative event handler slots and the image
//! request state behind `HTMLImageElement.complete`.

mod attributes;
mod document;
mod element;
mod events;
mod image;
mod serialize;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::Document;
pub use element::ElementData;
pub use events::{Event, EventHandler, EventType};
pub use image::{ImageOutcome, ImageRequestState};
pub use serialize::escape_attribute;
pub use tree::{DomTree, Node, NodeData};

use std::fmt;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// DOM errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Node is not an element: {0}")]
    NotAnElement(NodeId),

    #[error("Cannot insert {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("The document node cannot be removed")]
    RootRemoval,
}

/// DOM result type
pub type Result<T> = std::result::Result<T, DomError>;
