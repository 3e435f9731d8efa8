//! Player and club tag normalization.
//!
//! Brawl Stars identifies players and clubs by a short tag, written with a
//! leading `#` in game and percent-encoded as `%23` on API paths. [`Tag`]
//! owns the normalized form: one leading `#` stripped, remaining
//! characters upper-cased.

/// A normalized player or club tag.
///
/// Construct via [`Tag::parse`], which normalizes and validates raw client
/// input. The inner string never contains the `#` marker and is always
/// upper-case, so it can be appended directly after the percent-encoded
/// marker in an upstream resource path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(String);

/// Validation errors for raw tag input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TagError {
    /// Nothing left after stripping the marker.
    #[error("tag must not be empty")]
    Empty,

    /// A character outside `[0-9A-Za-z]` survived normalization.
    #[error("tag contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Tag {
    /// Parse a raw tag as sent by clients (e.g. `"#abc123"`).
    ///
    /// Strips one leading `#`, upper-cases the rest, and requires the
    /// result to be non-empty ASCII alphanumeric. Parsing an
    /// already-normalized tag yields the same value.
    ///
    /// # Examples
    ///
    /// ```
    /// use brawlgate_core::tag::Tag;
    ///
    /// let tag = Tag::parse("#abc123").unwrap();
    /// assert_eq!(tag.as_str(), "ABC123");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, TagError> {
        let stripped = raw.strip_prefix('#').unwrap_or(raw);
        let normalized = stripped.to_ascii_uppercase();

        if normalized.is_empty() {
            return Err(TagError::Empty);
        }
        if let Some(bad) = normalized.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(TagError::InvalidCharacter(bad));
        }

        Ok(Self(normalized))
    }

    /// The normalized tag without the `#` marker.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
