use crate::error::Result;
use crate::git::TagSource;

/// Mock tag source for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    tags: Vec<String>,
}

impl MockRepository {
    /// Create a new mock repository with no tags
    pub fn new() -> Self {
        MockRepository { tags: Vec::new() }
    }

    /// Create a mock repository holding `tags`
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockRepository {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl TagSource for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}
