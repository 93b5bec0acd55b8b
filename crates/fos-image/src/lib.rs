//! fOS Image
//!
//! `<img>` component for the fOS DOM.
//!
//! Features:
//! - `srcset` composition from `(source, descriptor)` candidates
//! - `crossorigin` and arbitrary attribute pass-through
//! - `load`/`error` forwarded to owner callbacks via handler slots
//! - Memoized re-render on shallow-equal props
//!
//! ```
//! use fos_dom::{Document, ImageOutcome};
//! use fos_image::{ImageDescriptor, ImageElement, ImageProps};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let props = ImageProps::new("a.png", "Logo").source_set(vec![
//!     ImageDescriptor::new("a-2x.png", "2x"),
//!     ImageDescriptor::new("a-3x.png", "3x"),
//! ]);
//! let image = ImageElement::mount(&mut doc, body, props).unwrap();
//!
//! assert_eq!(
//!     doc.get_attribute(image.node_id(), "srcset").unwrap(),
//!     Some("a-2x.png 2x,a-3x.png 3x")
//! );
//! doc.finish_image_request(image.node_id(), ImageOutcome::Loaded).unwrap();
//! assert!(image.handle().is_complete(&doc).unwrap());
//! ```

mod callback;
mod component;
mod cross_origin;
mod memo;
mod props;
mod render;
mod source_set;

pub use callback::Callback;
pub use component::{ElementHandle, ImageElement};
pub use cross_origin::CrossOrigin;
pub use memo::Memo;
pub use props::ImageProps;
pub use render::{render, ImageNode};
pub use source_set::{format_source_set, ImageDescriptor};

use fos_dom::{DomError, NodeId};

/// Image component error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    #[error("Image element {0} is no longer in the document")]
    Detached(NodeId),
}

pub type Result<T> = std::result::Result<T, ImageError>;
