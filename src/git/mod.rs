//! Git tag queries
//!
//! The [TagSource] trait abstracts where tag names come from, so the
//! selection logic in [latest_tag] can run against a real repository or a mock.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use releaser::git::{latest_tag, MockRepository};
//! let repo = MockRepository::with_tags(["v0.9.0", "v0.10.0"]);
//! assert_eq!(latest_tag(&repo).unwrap(), "v0.10.0");
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::cmp::Ordering;

use crate::error::{ReleaserError, Result};

/// Source of tag names
pub trait TagSource {
    /// Get all tag names, in no particular order
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, possibly empty
    /// * `Err` - If the underlying repository cannot be read
    fn list_tags(&self) -> Result<Vec<String>>;
}

/// Highest tag in `source`, sorted as versions.
///
/// # Returns
/// * `Ok(String)` - The highest tag name
/// * `Err(NoRecognizedTag)` - If there are no tags at all
pub fn latest_tag<S: TagSource + ?Sized>(source: &S) -> Result<String> {
    let tags = source.list_tags()?;
    tracing::debug!(count = tags.len(), "listed tags");

    tags.into_iter().max_by(|a, b| compare_tags(a, b)).ok_or_else(|| {
        tracing::error!("repository has no tags");
        ReleaserError::no_recognized_tag("repository has no tags")
    })
}

/// Order tag names as versions.
///
/// Tags parsing as semver (after an optional `v`/`V`) compare by semver
/// precedence and rank above the rest; the rest compare as plain strings.
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    match (semver_of(a), semver_of(b)) {
        (Some(va), Some(vb)) => va.cmp(&vb).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

fn semver_of(tag: &str) -> Option<semver::Version> {
    let clean = tag.strip_prefix(['v', 'V']).unwrap_or(tag);
    semver::Version::parse(clean).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(tags: &[&str]) -> Vec<String> {
        let mut tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        tags.sort_by(|a, b| compare_tags(a, b));
        tags
    }

    #[test]
    fn test_numeric_not_lexical() {
        assert_eq!(
            sorted(&["v0.10.0", "v0.9.0", "v0.2.1"]),
            vec!["v0.2.1", "v0.9.0", "v0.10.0"]
        );
    }

    #[test]
    fn test_prerelease_below_release() {
        assert_eq!(
            sorted(&["1.0.0", "1.0.0-rc.1"]),
            vec!["1.0.0-rc.1", "1.0.0"]
        );
    }

    #[test]
    fn test_non_version_tags_rank_lowest() {
        assert_eq!(
            sorted(&["nightly", "v0.0.1", "alpha"]),
            vec!["alpha", "nightly", "v0.0.1"]
        );
    }

    #[test]
    fn test_latest_tag_empty() {
        let repo = MockRepository::default();
        assert!(matches!(
            latest_tag(&repo),
            Err(ReleaserError::NoRecognizedTag(_))
        ));
    }

    #[test]
    fn test_latest_tag_only_non_versions() {
        let repo = MockRepository::with_tags(["beta", "alpha"]);
        assert_eq!(latest_tag(&repo).unwrap(), "beta");
    }
}
