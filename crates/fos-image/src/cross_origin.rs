//! CORS settings attribute values

use std::fmt;

/// Value of the `crossorigin` attribute.
///
/// `Option<CrossOrigin>::None` leaves the attribute off entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossOrigin {
    #[cfg_attr(feature = "serde", serde(rename = "anonymous"))]
    Anonymous,
    #[cfg_attr(feature = "serde", serde(rename = "use-credentials"))]
    UseCredentials,
    /// Present but empty; browsers treat it like `anonymous`
    #[cfg_attr(feature = "serde", serde(rename = ""))]
    Empty,
}

impl CrossOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrossOrigin::Anonymous => "anonymous",
            CrossOrigin::UseCredentials => "use-credentials",
            CrossOrigin::Empty => "",
        }
    }
}

impl fmt::Display for CrossOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
