//! Pure render of the image component

use fos_dom::{escape_attribute, NamedNodeMap};

use crate::callback::Callback;
use crate::props::ImageProps;
use crate::source_set::format_source_set;

pub const IMG_TAG: &str = "img";

/// Rendered `<img>`: attributes in application order plus handler bindings
#[derive(Debug, Clone)]
pub struct ImageNode {
    attributes: NamedNodeMap,
    pub on_load: Callback,
    pub on_error: Callback,
}

impl ImageNode {
    pub fn attributes(&self) -> &NamedNodeMap {
        &self.attributes
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get_attribute(name)
    }

    /// The `srcset` value, if one was rendered
    pub fn source_set(&self) -> Option<&str> {
        self.get_attribute("srcset")
    }

    /// Serialize as an HTML start tag (`img` is a void element)
    pub fn to_html(&self) -> String {
        let mut out = String::from("<");
        out.push_str(IMG_TAG);
        for attr in self.attributes.iter() {
            out.push(' ');
            out.push_str(&attr.name);
            out.push_str("=\"");
            out.push_str(&escape_attribute(&attr.value));
            out.push('"');
        }
        out.push('>');
        out
    }
}

/// Render props into an `<img>` description.
///
/// Order is `srcset`, `src`, `crossorigin`, `alt`, then pass-through
/// attributes. A repeated name overwrites the earlier value in place.
pub fn render(props: &ImageProps) -> ImageNode {
    let mut attributes = NamedNodeMap::new();

    if let Some(srcset) = props.source_set.as_deref().and_then(format_source_set) {
        attributes.set_attribute("srcset", &srcset);
    }
    attributes.set_attribute("src", &props.source);
    if let Some(mode) = props.cross_origin {
        attributes.set_attribute("crossorigin", mode.as_str());
    }
    attributes.set_attribute("alt", &props.alt);
    for (name, value) in &props.attributes {
        attributes.set_attribute(name, value);
    }

    ImageNode {
        attributes,
        on_load: props.on_load.clone().unwrap_or_else(Callback::noop),
        on_error: props.on_error.clone().unwrap_or_else(Callback::noop),
    }
}
