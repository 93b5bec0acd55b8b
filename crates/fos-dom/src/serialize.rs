//! HTML serialization of elements

use std::borrow::Cow;
use std::fmt::Write;

use crate::element::ElementData;
use crate::{DomTree, NodeId, Result};

/// Elements that never have an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Escape an attribute value for use inside double quotes
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub(crate) fn write_start_tag(out: &mut String, elem: &ElementData) {
    out.push('<');
    out.push_str(&elem.tag_name);
    for attr in elem.attributes().iter() {
        // Writing into a String cannot fail
        let _ = write!(out, " {}=\"{}\"", attr.name, escape_attribute(&attr.value));
    }
    out.push('>');
}

pub(crate) fn write_element(out: &mut String, tree: &DomTree, id: NodeId) -> Result<()> {
    let elem = tree.element(id)?;
    write_start_tag(out, elem);
    if VOID_ELEMENTS.contains(&elem.tag_name.as_str()) {
        return Ok(());
    }
    for &child in tree.children(id)? {
        write_element(out, tree, child)?;
    }
    let _ = write!(out, "</{}>", elem.tag_name);
    Ok(())
}
