//! Destination path filters.
//!
//! A filter decides, per candidate destination path, whether a file is
//! written. Any `Fn(&Path) -> bool` closure is a filter; [`PatternFilter`]
//! covers the common "skip these names" case.

use std::path::Path;
use std::path::PathBuf;

/// Predicate over candidate destination paths.
///
/// # Examples
///
/// ```
/// use resdeploy_core::PathFilter;
/// use std::path::Path;
///
/// let only_css = |path: &Path| path.extension().is_some_and(|ext| ext == "css");
/// assert!(only_css.accept(Path::new("out/style.css")));
/// assert!(!only_css.accept(Path::new("out/index.html")));
/// ```
pub trait PathFilter {
    /// Returns `true` if the file at `path` should be written.
    fn accept(&self, path: &Path) -> bool;
}

impl<F> PathFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn accept(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Returns `true` when there is no filter or the filter accepts `path`.
pub(crate) fn accepts(filter: Option<&dyn PathFilter>, path: &Path) -> bool {
    filter.is_none_or(|f| f.accept(path))
}

/// Rejects destination paths that match any of a set of glob-style patterns.
///
/// Supported patterns:
/// - Exact match: `".git"` matches a component named `.git`
/// - Extension wildcard: `"*.map"` matches names ending with `.map`
/// - Prefix wildcard: `"draft*"` matches names starting with `draft`
///
/// Patterns are checked against every path component and the whole path.
/// With [`relative_to`](Self::relative_to) only the part of the path below
/// the destination root is checked, so the root's own ancestors never match.
///
/// # Examples
///
/// ```
/// use resdeploy_core::PathFilter;
/// use resdeploy_core::PatternFilter;
/// use std::path::Path;
///
/// let filter = PatternFilter::new(["*.map", ".DS_Store"]);
/// assert!(filter.accept(Path::new("out/app.js")));
/// assert!(!filter.accept(Path::new("out/app.js.map")));
/// assert!(!filter.accept(Path::new("out/img/.DS_Store")));
///
/// let drafts = PatternFilter::new(["drafts"]).relative_to("/home/me/drafts/site");
/// assert!(drafts.accept(Path::new("/home/me/drafts/site/index.html")));
/// assert!(!drafts.accept(Path::new("/home/me/drafts/site/drafts/wip.html")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternFilter {
    excluded: Vec<String>,
    root: Option<PathBuf>,
}

impl PatternFilter {
    /// Creates a filter rejecting paths that match any pattern.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: patterns.into_iter().map(Into::into).collect(),
            root: None,
        }
    }

    /// Matches only the part of each path below `root`.
    ///
    /// Paths outside `root` are matched whole.
    #[must_use]
    pub fn relative_to(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// The destination root set with [`relative_to`](Self::relative_to).
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Returns the configured patterns.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.excluded
    }

    /// Returns `true` if no patterns are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}

impl PathFilter for PatternFilter {
    fn accept(&self, path: &Path) -> bool {
        let path = self
            .root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);
        !self
            .excluded
            .iter()
            .any(|pattern| matches_pattern(path, pattern))
    }
}

/// Matches a path against a glob-style pattern.
///
/// # Examples
///
/// ```
/// use resdeploy_core::filter::matches_pattern;
/// use std::path::Path;
///
/// assert!(matches_pattern(Path::new("dir/.git"), ".git"));
/// assert!(matches_pattern(Path::new("dir/test.tmp"), "*.tmp"));
/// assert!(matches_pattern(Path::new("temp_file"), "temp*"));
/// assert!(!matches_pattern(Path::new("file_temp"), "temp*"));
/// ```
#[must_use]
pub fn matches_pattern(path: &Path, pattern: &str) -> bool {
    let component_match = path.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .is_some_and(|s| pattern_matches(s, pattern))
    });

    component_match || path.to_str().is_some_and(|s| pattern_matches(s, pattern))
}

fn pattern_matches(s: &str, pattern: &str) -> bool {
    if pattern == s {
        return true;
    }

    if let Some(prefix) = pattern.strip_suffix('*') {
        return s.starts_with(prefix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        return s.ends_with(suffix);
    }

    false
}
