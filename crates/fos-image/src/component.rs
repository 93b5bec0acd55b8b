//! Image component lifecycle
//!
//! `ImageElement` is a mounted instance: it exists from `mount` until
//! `unmount` consumes it. Load/error handlers are bound to the element's
//! handler slots, so removing the element is all the teardown there is.

use fos_dom::{Document, DomError, EventType, NodeId};

use crate::memo::Memo;
use crate::props::ImageProps;
use crate::render::{render, ImageNode, IMG_TAG};
use crate::{ImageError, Result};

/// Narrow, single-owner view of the mounted `<img>`
#[derive(Debug)]
pub struct ElementHandle {
    node: NodeId,
}

impl ElementHandle {
    /// Whether the element reports its current request as finished
    pub fn is_complete(&self, doc: &Document) -> Result<bool> {
        doc.is_complete(self.node).map_err(|e| detached(e, self.node))
    }
}

fn detached(err: DomError, node: NodeId) -> ImageError {
    match err {
        DomError::NodeNotFound(id) if id == node => ImageError::Detached(node),
        other => ImageError::Dom(other),
    }
}

/// Mounted image component
#[derive(Debug)]
pub struct ImageElement {
    handle: ElementHandle,
    memo: Memo<ImageProps, ImageNode>,
}

impl ImageElement {
    /// Render `props`, create the `<img>` and append it to `parent`.
    pub fn mount(doc: &mut Document, parent: NodeId, props: ImageProps) -> Result<Self> {
        let mut memo = Memo::<ImageProps, ImageNode>::new(render);
        let (node, _) = memo.render(props);

        let id = doc.create_element(IMG_TAG);
        apply(doc, id, node, None)?;
        if let Err(e) = doc.append_child(parent, id) {
            // Drop the orphan along with its bound handlers
            let _ = doc.remove(id);
            return Err(e.into());
        }

        let handle = ElementHandle { node: id };

        // Cached images may already be complete here. The flag is read and
        // logged only; no callback is fired from it.
        let complete = handle.is_complete(doc)?;
        tracing::trace!(node = %id, complete, "mount-time complete check");

        tracing::debug!(node = %id, parent = %parent, "image mounted");
        Ok(Self { handle, memo })
    }

    /// Re-render with new props and patch the element.
    ///
    /// Returns `false` when the props were shallow-equal and nothing ran.
    pub fn update(&mut self, doc: &mut Document, props: ImageProps) -> Result<bool> {
        let id = self.handle.node;
        if !doc.contains(id) {
            return Err(ImageError::Detached(id));
        }

        let previous: Vec<String> = self
            .memo
            .current()
            .map(|n| n.attributes().iter().map(|a| a.name.clone()).collect())
            .unwrap_or_default();

        let (node, rendered) = self.memo.render(props);
        if !rendered {
            return Ok(false);
        }

        apply(doc, id, node, Some(previous.as_slice()))?;
        tracing::debug!(node = %id, "image updated");
        Ok(true)
    }

    pub fn handle(&self) -> &ElementHandle {
        &self.handle
    }

    /// Node of the mounted `<img>` in the host document
    pub fn node_id(&self) -> NodeId {
        self.handle.node
    }

    /// Output of the latest render
    pub fn rendered(&self) -> Option<&ImageNode> {
        self.memo.current()
    }

    pub fn props(&self) -> Option<&ImageProps> {
        self.memo.props()
    }

    /// Remove the element. Its handler slots go with it.
    pub fn unmount(self, doc: &mut Document) -> Result<()> {
        let id = self.handle.node;
        doc.remove(id).map_err(|e| detached(e, id))?;
        tracing::debug!(node = %id, "image unmounted");
        Ok(())
    }
}

/// Write a render onto the element. With `previous`, attributes that are
/// no longer rendered are removed first.
fn apply(
    doc: &mut Document,
    id: NodeId,
    node: &ImageNode,
    previous: Option<&[String]>,
) -> Result<()> {
    for name in previous.unwrap_or_default() {
        if !node.attributes().has_attribute(name) {
            doc.remove_attribute(id, name)?;
        }
    }
    for attr in node.attributes().iter() {
        doc.set_attribute(id, &attr.name, &attr.value)?;
    }

    doc.set_event_handler(id, EventType::Load, node.on_load.to_handler())?;
    doc.set_event_handler(id, EventType::Error, node.on_error.to_handler())?;
    Ok(())
}
