//! DOM Tree (arena-based allocation)
//!
//! Removed nodes leave a tombstone; slots are never reused, so a stale
//! `NodeId` keeps failing with `NodeNotFound` instead of aliasing a new node.

use crate::element::ElementData;
use crate::{DomError, NodeId, Result};

/// DOM Node
#[derive(Debug)]
pub struct Node {
    /// Parent node (None if detached or root)
    pub parent: Option<NodeId>,
    /// Children in document order
    pub children: Vec<NodeId>,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            NodeData::Document => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            NodeData::Document => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
}

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Option<Node>>,
    live: usize,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Node::new(NodeData::Document))],
            live: 1,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(Node::new(NodeData::Element(ElementData::new(tag_name)))));
        self.live += 1;
        tracing::debug!(node = %id, tag = tag_name, "created element");
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index()).and_then(Option::as_mut)
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.get(id).ok_or(DomError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.get_mut(id).ok_or(DomError::NodeNotFound(id))
    }

    pub fn element(&self, id: NodeId) -> Result<&ElementData> {
        self.node(id)?.as_element().ok_or(DomError::NotAnElement(id))
    }

    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        self.node(child)?;
        if child == self.root() || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child);
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Remove a node and its whole subtree from the arena
    pub fn remove(&mut self, id: NodeId) -> Result<()> {
        self.node(id)?;
        if id == self.root() {
            return Err(DomError::RootRemoval);
        }

        self.detach(id);
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current.index()).and_then(Option::take) {
                stack.extend(node.children);
                self.live -= 1;
            }
        }
        tracing::debug!(node = %id, "removed subtree");
        Ok(())
    }

    /// Number of live nodes (including the document)
    pub fn len(&self) -> usize {
        self.live
    }

    /// Only the document node is left
    pub fn is_empty(&self) -> bool {
        self.live <= 1
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.get(id).and_then(|n| n.parent) else {
            return;
        };
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.retain(|&c| c != id);
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = None;
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.get(node).and_then(|n| n.parent) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_children() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let img = tree.create_element("img");

        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, img).unwrap();

        assert_eq!(tree.children(div).unwrap(), &[img]);
        assert_eq!(tree.parent(img).unwrap(), Some(div));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_cycle_rejected() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(outer, inner).unwrap();

        assert_eq!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest { parent: inner, child: outer })
        );
        assert!(tree.append_child(outer, tree.root()).is_err());
    }

    #[test]
    fn test_remove_subtree_tombstones() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let img = tree.create_element("img");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, img).unwrap();

        tree.remove(div).unwrap();

        assert!(!tree.contains(div));
        assert!(!tree.contains(img));
        assert!(tree.children(tree.root()).unwrap().is_empty());
        assert_eq!(tree.element(img).unwrap_err(), DomError::NodeNotFound(img));
        assert!(tree.is_empty());

        // Slots are not reused
        let next = tree.create_element("img");
        assert_ne!(next, img);
    }

    #[test]
    fn test_root_is_not_an_element() {
        let mut tree = DomTree::new();
        assert_eq!(tree.element(NodeId::ROOT).unwrap_err(), DomError::NotAnElement(NodeId::ROOT));
        assert_eq!(tree.remove(NodeId::ROOT), Err(DomError::RootRemoval));
    }
}
