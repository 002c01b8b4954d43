use crate::error::Result;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository exposing its tags
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::TagSource for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::TagSource;
    use tempfile::TempDir;

    fn repo_with_tags(tags: &[&str]) -> (TempDir, Git2Repo) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        {
            let sig = git2::Signature::now("Test", "test@test.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            let commit = repo
                .commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
                .unwrap();
            let object = repo.find_object(commit, None).unwrap();
            for tag in tags {
                repo.tag_lightweight(tag, &object, false).unwrap();
            }
        }
        (dir, repo)
    }

    #[test]
    fn test_list_tags() {
        let (_dir, repo) = repo_with_tags(&["1.0.0+1", "v2.0.0"]);
        let mut tags = Git2Repository::from_git2(repo).list_tags().unwrap();
        tags.sort();
        assert_eq!(tags, vec!["1.0.0+1".to_string(), "v2.0.0".to_string()]);
    }

    #[test]
    fn test_open_discovers_from_subdirectory() {
        let (dir, _repo) = repo_with_tags(&["1.0.0"]);
        let nested = dir.path().join("app");
        std::fs::create_dir_all(&nested).unwrap();

        let tags = Git2Repository::open(&nested).unwrap().list_tags().unwrap();
        assert_eq!(tags, vec!["1.0.0".to_string()]);
    }

    #[test]
    fn test_repository_without_tags() {
        let (_dir, repo) = repo_with_tags(&[]);
        assert!(Git2Repository::from_git2(repo).list_tags().unwrap().is_empty());
    }
}
