//! Source Set
//!
//! Candidate image resources and the `srcset` string built from them.

/// One candidate resource and its selection hint (`2x`, `480w`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageDescriptor {
    pub source: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub descriptor: Option<String>,
}

impl ImageDescriptor {
    pub fn new(source: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            descriptor: Some(descriptor.into()),
        }
    }

    /// Candidate without a descriptor
    pub fn bare(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            descriptor: None,
        }
    }

    fn write_candidate(&self, out: &mut String) {
        out.push_str(&self.source);
        out.push(' ');
        if let Some(descriptor) = &self.descriptor {
            out.push_str(descriptor);
        }
    }
}

/// Build the `srcset` value: `"<source> <descriptor>"` per entry, joined
/// with `,`. A missing descriptor still leaves the separating space.
///
/// Returns `None` for an empty list so callers omit the attribute.
pub fn format_source_set(descriptors: &[ImageDescriptor]) -> Option<String> {
    if descriptors.is_empty() {
        return None;
    }

    let mut out = String::new();
    for (i, candidate) in descriptors.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        candidate.write_candidate(&mut out);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_descriptors() {
        let set = [
            ImageDescriptor::new("a-2x.png", "2x"),
            ImageDescriptor::new("a-3x.png", "3x"),
        ];
        assert_eq!(format_source_set(&set).as_deref(), Some("a-2x.png 2x,a-3x.png 3x"));
    }

    #[test]
    fn test_single_width_descriptor() {
        let set = [ImageDescriptor::new("small.jpg", "480w")];
        assert_eq!(format_source_set(&set).as_deref(), Some("small.jpg 480w"));
    }

    #[test]
    fn test_missing_descriptor_keeps_separator() {
        let set = [ImageDescriptor::bare("a.png"), ImageDescriptor::new("b.png", "2x")];
        assert_eq!(format_source_set(&set).as_deref(), Some("a.png ,b.png 2x"));
    }

    #[test]
    fn test_empty_set_has_no_value() {
        assert_eq!(format_source_set(&[]), None);
    }
}
