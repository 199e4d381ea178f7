use crate::error::{ReleaserError, Result};
use crate::git::TagSource;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Discover the repository containing `path`
    ///
    /// # Returns
    /// * `Ok(Git2Repository)` - Repository found at `path` or a parent
    /// * `Err(NoRecognizedTag)` - If `path` is not inside a git repository
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            tracing::error!(path = %path.display(), "not a git repository");
            ReleaserError::no_recognized_tag(format!(
                "'{}' is not inside a git repository: {}",
                path.display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl TagSource for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo_with_tags(tags: &[&str]) -> (TempDir, Git2Repo) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        {
            let sig = git2::Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            let oid = repo
                .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
                .unwrap();
            let object = repo.find_object(oid, None).unwrap();
            for tag in tags {
                repo.tag_lightweight(tag, &object, false).unwrap();
            }
        }
        (dir, repo)
    }

    #[test]
    fn test_list_tags() {
        let (_dir, repo) = repo_with_tags(&["v0.1.0", "v0.2.0"]);
        let repo = Git2Repository::from_git2(repo);

        let mut tags = repo.list_tags().unwrap();
        tags.sort();
        assert_eq!(tags, vec!["v0.1.0", "v0.2.0"]);
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (dir, _repo) = repo_with_tags(&["1.0.0"]);
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();

        let repo = Git2Repository::discover(&nested).unwrap();
        assert_eq!(repo.list_tags().unwrap(), vec!["1.0.0"]);
    }
}
