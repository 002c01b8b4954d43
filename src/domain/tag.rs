use semver::Version;

/// Outcome of matching a single raw tag against the configured prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMatch {
    /// Tag carries the prefix and the remainder is a semantic version
    Version(Version),
    /// Tag does not start with the prefix
    PrefixMismatch,
    /// Tag carries the prefix but the remainder does not parse
    Unparsable,
}

/// Picks the latest release tag among raw tag names.
///
/// Tags are filtered by an exact, case-sensitive literal prefix. Tags that
/// don't match or don't parse are skipped, never reported as errors.
#[derive(Debug, Clone, Default)]
pub struct TagSelector {
    prefix: String,
}

impl TagSelector {
    /// Create a selector for tags of the form `<prefix><semver>`
    pub fn new(prefix: impl Into<String>) -> Self {
        TagSelector {
            prefix: prefix.into(),
        }
    }

    /// Classify one tag name
    pub fn classify(&self, tag: &str) -> TagMatch {
        match tag.strip_prefix(self.prefix.as_str()) {
            None => TagMatch::PrefixMismatch,
            Some(rest) => match Version::parse(rest) {
                Ok(version) => TagMatch::Version(version),
                Err(_) => TagMatch::Unparsable,
            },
        }
    }

    /// Return the greatest version among matching tags, or `None` if no tag matches
    pub fn select_latest<I, S>(&self, tags: I) -> Option<Version>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .filter_map(|tag| match self.classify(tag.as_ref()) {
                TagMatch::Version(version) => Some(version),
                TagMatch::PrefixMismatch | TagMatch::Unparsable => None,
            })
            .max()
    }
}
