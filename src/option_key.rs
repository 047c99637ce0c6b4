use std::borrow::{Borrow, Cow};
use std::fmt;

/// Unique identifier of one option within an option set.
///
/// Keys compare by their string value. They can be built from any string-like
/// type, and lookups accept a plain `&str`.
///
/// ```rust
/// use typed_options::OptionKey;
///
/// let key = OptionKey::new("timeout");
/// assert_eq!(key, OptionKey::from("timeout".to_string()));
/// assert_eq!(key.as_str(), "timeout");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionKey(String);

impl OptionKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OptionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash of a String newtype matches the hash of the borrowed str.
impl Borrow<str> for OptionKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OptionKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for OptionKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for OptionKey {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<Cow<'_, str>> for OptionKey {
    fn from(value: Cow<'_, str>) -> Self {
        Self(value.into_owned())
    }
}

impl From<&OptionKey> for OptionKey {
    fn from(value: &OptionKey) -> Self {
        value.clone()
    }
}
