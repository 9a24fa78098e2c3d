//! # Path Utility
//!
//! Pure decomposition of virtual path strings.
//!
//! ## Responsibility
//! - Detect the root prefix and the separator of a path
//! - Compute `dirname`, `basename` and the ancestor chain of a path
//!
//! Nothing here touches a real filesystem. All operations work on the
//! string as given: no case folding, no `.`/`..` handling, and no trailing
//! separator normalization beyond collapsing separator runs.
//!
//! ## Supported Roots
//!
//! | Form | Example | Root |
//! |------|---------|------|
//! | Unix absolute | `/srv/data` | `/` |
//! | UNC | `\\server\share` | `\\` |
//! | URL | `https://host/a/b` | `https://host/` |
//! | Drive letter | `C:\Users`, `C:/Users` | `C:\`, `C:/` |
//!
//! ## Usage
//!
//! ```rust
//! use extfs_nav::path::{basename, dirname, generate_parents, ParentOrder};
//!
//! assert_eq!(dirname("/srv/data/photos", Default::default())?, "/srv/data");
//! assert_eq!(basename("/srv/data/photos", Default::default())?, "photos");
//! assert_eq!(
//!     generate_parents("/srv/data/photos", ParentOrder::RootFirst)?,
//!     vec!["/", "/srv", "/srv/data"],
//! );
//! # Ok::<(), extfs_nav::NavError>(())
//! ```

use std::borrow::Cow;
use std::fmt;

use url::Url;

use crate::NavError;

// ============================================================================
// Types
// ============================================================================

/// Separator between the segments of a path below its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Separator {
    /// `/`
    Slash,
    /// `\`
    Backslash,
}

impl Separator {
    /// The separator as a `char`.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Separator::Slash => '/',
            Separator::Backslash => '\\',
        }
    }

    /// The separator as a string slice.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Separator::Slash => "/",
            Separator::Backslash => "\\",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order of the chain returned by [`generate_parents`].
///
/// The chain is root-inclusive in both orders; only the direction differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentOrder {
    /// Root first, nearest ancestor last.
    #[default]
    RootFirst,
    /// Nearest ancestor first, root last.
    LeafFirst,
}

/// Precomputed values for [`dirname`].
///
/// Fields left as `None` are detected from the path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirnameOptions<'a> {
    /// Separator to split on.
    pub separator: Option<Separator>,
    /// Root prefix of the path.
    pub root: Option<&'a str>,
}

impl<'a> DirnameOptions<'a> {
    /// Detect everything from the path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `separator` instead of detecting it.
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Use `root` instead of detecting it.
    pub fn with_root(mut self, root: &'a str) -> Self {
        self.root = Some(root);
        self
    }
}

/// Precomputed values for [`basename`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BasenameOptions<'a> {
    /// Separator to split on.
    pub separator: Option<Separator>,
    /// Root prefix of the path.
    pub root: Option<&'a str>,
    /// Already computed dirname of the path.
    pub dirname: Option<&'a str>,
}

impl<'a> BasenameOptions<'a> {
    /// Detect everything from the path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `separator` instead of detecting it.
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Use `root` instead of detecting it.
    pub fn with_root(mut self, root: &'a str) -> Self {
        self.root = Some(root);
        self
    }

    /// Skip the dirname computation.
    pub fn with_dirname(mut self, dirname: &'a str) -> Self {
        self.dirname = Some(dirname);
        self
    }
}

// ============================================================================
// Detection
// ============================================================================

/// Detect the separator of `path`.
///
/// `/` wins whenever present. Otherwise a `\` past the first character
/// selects [`Separator::Backslash`], which covers `C:\` and `\\server\share`.
///
/// # Errors
///
/// [`NavError::UnknownSeparator`] when neither rule matches.
///
/// ```rust
/// use extfs_nav::path::{detect_separator, Separator};
///
/// assert_eq!(detect_separator("/srv")?, Separator::Slash);
/// assert_eq!(detect_separator(r"C:\")?, Separator::Backslash);
/// assert!(detect_separator("plain").is_err());
/// # Ok::<(), extfs_nav::NavError>(())
/// ```
pub fn detect_separator(path: &str) -> Result<Separator, NavError> {
    if path.contains('/') {
        return Ok(Separator::Slash);
    }
    if path.rfind('\\').is_some_and(|idx| idx > 0) {
        return Ok(Separator::Backslash);
    }
    Err(NavError::UnknownSeparator {
        path: path.to_owned(),
    })
}

/// Detect the root prefix of `path`.
///
/// Rules are tried in order: Unix `/`, UNC `\\`, hierarchical URL
/// (`scheme://...`, scheme longer than one character), then a drive prefix
/// made of word characters followed by one or more `:`. The drive root ends
/// in `\` when the character after the colons is `\`, otherwise in `/`.
///
/// URL roots are normalized by the `url` crate, so a URL written with an
/// upper-case scheme or host yields a root that is not a prefix of the
/// input.
///
/// # Errors
///
/// [`NavError::UnknownRoot`] when no rule matches.
///
/// ```rust
/// use extfs_nav::path::detect_root;
///
/// assert_eq!(detect_root("/srv/data")?, "/");
/// assert_eq!(detect_root(r"C:\Users\me")?, r"C:\");
/// assert_eq!(detect_root("https://peer.local:8443/share/a")?, "https://peer.local:8443/");
/// # Ok::<(), extfs_nav::NavError>(())
/// ```
pub fn detect_root(path: &str) -> Result<String, NavError> {
    if path.starts_with('/') {
        return Ok("/".to_owned());
    }
    if path.starts_with("\\\\") {
        return Ok("\\\\".to_owned());
    }
    if let Some(root) = url_root(path) {
        return Ok(root);
    }
    if let Some(root) = drive_root(path) {
        return Ok(root);
    }
    Err(NavError::UnknownRoot {
        path: path.to_owned(),
    })
}

fn url_root(path: &str) -> Option<String> {
    let scheme_len = path.find("://")?;
    // Single letters are drive names, not schemes.
    if scheme_len < 2 {
        return None;
    }
    let url = Url::parse(path).ok()?;
    if url.cannot_be_a_base() {
        return None;
    }
    url.join("/").ok().map(|root| root.to_string())
}

fn drive_root(path: &str) -> Option<String> {
    let word_len = path
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(path.len());
    if word_len == 0 {
        return None;
    }
    let colons = path[word_len..].bytes().take_while(|&b| b == b':').count();
    if colons == 0 {
        return None;
    }
    let prefix = &path[..word_len + colons];
    let separator = if path[prefix.len()..].starts_with('\\') {
        Separator::Backslash
    } else {
        Separator::Slash
    };
    Some(format!("{prefix}{separator}"))
}

// ============================================================================
// Decomposition
// ============================================================================

/// Parent of `path` below `root`.
///
/// `root` when the separator occurs only inside the root itself.
fn parent_of<'p>(path: &'p str, root: &str, separator: Separator) -> Result<&'p str, NavError> {
    let below = path
        .strip_prefix(root)
        .ok_or_else(|| NavError::invalid_path(path, "path is not under its root"))?;
    let sep = separator.as_char();
    let Some(last) = below.rfind(sep) else {
        if !path.contains(sep) {
            return Err(NavError::invalid_path(path, "separator not found"));
        }
        return Ok(&path[..root.len()]);
    };
    let kept = below[..last].trim_end_matches(sep).len();
    Ok(&path[..root.len() + kept])
}

/// Strip the last segment of `path`.
///
/// A root is its own dirname. A run of separators before the last segment
/// collapses, so `/a//b` and `/a/b` share the dirname `/a`. A trailing
/// separator counts as an empty last segment: `dirname("/a/b/")` is `/a/b`.
///
/// # Errors
///
/// - [`NavError::UnknownRoot`] / [`NavError::UnknownSeparator`] when
///   detection is needed and fails
/// - [`NavError::InvalidPath`] when `path` does not start with the root,
///   or when the separator occurs nowhere in `path`
pub fn dirname(path: &str, opts: DirnameOptions<'_>) -> Result<String, NavError> {
    let root = match opts.root {
        Some(root) => Cow::Borrowed(root),
        None => Cow::Owned(detect_root(path)?),
    };
    if path == root {
        return Ok(path.to_owned());
    }
    let separator = match opts.separator {
        Some(separator) => separator,
        None => detect_separator(path)?,
    };
    parent_of(path, &root, separator).map(str::to_owned)
}

/// The last segment of `path`.
///
/// Everything after the dirname and the separators that follow it. The
/// basename of a root is empty.
///
/// # Errors
///
/// As [`dirname`], plus [`NavError::InvalidPath`] when a supplied dirname
/// is not a prefix of `path`.
///
/// ```rust
/// use extfs_nav::path::{basename, BasenameOptions};
///
/// assert_eq!(basename(r"C:\Users\me", BasenameOptions::new())?, "me");
/// assert_eq!(
///     basename("/srv/data", BasenameOptions::new().with_dirname("/srv"))?,
///     "data",
/// );
/// # Ok::<(), extfs_nav::NavError>(())
/// ```
pub fn basename(path: &str, opts: BasenameOptions<'_>) -> Result<String, NavError> {
    let separator = match opts.separator {
        Some(separator) => separator,
        None => detect_separator(path)?,
    };
    let dir = match opts.dirname {
        Some(dir) => Cow::Borrowed(dir),
        None => {
            let dirname_opts = DirnameOptions {
                separator: Some(separator),
                root: opts.root,
            };
            Cow::Owned(dirname(path, dirname_opts)?)
        }
    };
    let rest = path
        .strip_prefix(dir.as_ref())
        .ok_or_else(|| NavError::invalid_path(path, "dirname is not a prefix of the path"))?;
    Ok(rest.trim_start_matches(separator.as_char()).to_owned())
}

/// Every ancestor of `path`, root included.
///
/// A path with `k` segments below its root has `k` ancestors. A path that
/// is its own root yields `[root]`.
///
/// ```rust
/// use extfs_nav::path::{generate_parents, ParentOrder};
///
/// assert_eq!(
///     generate_parents("/srv/data/photos", ParentOrder::LeafFirst)?,
///     vec!["/srv/data", "/srv", "/"],
/// );
/// assert_eq!(generate_parents("/", ParentOrder::RootFirst)?, vec!["/"]);
/// # Ok::<(), extfs_nav::NavError>(())
/// ```
pub fn generate_parents(path: &str, order: ParentOrder) -> Result<Vec<String>, NavError> {
    let parts = PathParts::parse(path)?;
    if parts.is_root() {
        return Ok(vec![parts.root().to_owned()]);
    }
    Ok(parts.parents(order).into_iter().map(str::to_owned).collect())
}

// ============================================================================
// PathParts
// ============================================================================

/// A path with its root and separator detected once.
///
/// The root is always a prefix of the path, so every derived value borrows
/// from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParts<'a> {
    path: &'a str,
    root_len: usize,
    separator: Separator,
}

impl<'a> PathParts<'a> {
    /// Detect root and separator of `path`.
    ///
    /// # Errors
    ///
    /// Detection errors, or [`NavError::InvalidPath`] when the detected
    /// root is not a prefix of the path.
    pub fn parse(path: &'a str) -> Result<Self, NavError> {
        let root = detect_root(path)?;
        if !path.starts_with(root.as_str()) {
            return Err(NavError::invalid_path(path, "path is not under its root"));
        }
        let separator = detect_separator(path)?;
        Ok(Self {
            path,
            root_len: root.len(),
            separator,
        })
    }

    /// The full path.
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// The root prefix.
    pub fn root(&self) -> &'a str {
        &self.path[..self.root_len]
    }

    /// The separator used below the root.
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Returns `true` if the path is nothing but its root.
    pub fn is_root(&self) -> bool {
        self.path.len() == self.root_len
    }

    /// See [`dirname`].
    pub fn dirname(&self) -> &'a str {
        if self.is_root() {
            return self.path;
        }
        // The root is a verified prefix, so this cannot fail.
        parent_of(self.path, self.root(), self.separator).unwrap_or(self.root())
    }

    /// See [`basename`].
    pub fn basename(&self) -> &'a str {
        self.path[self.dirname().len()..].trim_start_matches(self.separator.as_char())
    }

    /// Proper ancestors, nearest first, ending with the root.
    ///
    /// Empty for a root path.
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors {
            current: (!self.is_root()).then_some(self.path),
            root: self.root(),
            separator: self.separator,
        }
    }

    /// Proper ancestors in the requested order.
    pub fn parents(&self, order: ParentOrder) -> Vec<&'a str> {
        let mut parents: Vec<&'a str> = self.ancestors().collect();
        if order == ParentOrder::RootFirst {
            parents.reverse();
        }
        parents
    }
}

/// Iterator over the ancestors of a path, nearest first.
///
/// Created by [`PathParts::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    current: Option<&'a str>,
    root: &'a str,
    separator: Separator,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let parent = parent_of(current, self.root, self.separator).ok()?;
        self.current = (parent.len() > self.root.len()).then_some(parent);
        Some(parent)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(path: &str) -> String {
        dirname(path, DirnameOptions::new()).unwrap()
    }

    fn base(path: &str) -> String {
        basename(path, BasenameOptions::new()).unwrap()
    }

    #[test]
    fn separator_prefers_slash() {
        assert_eq!(detect_separator("/a/b").unwrap(), Separator::Slash);
        assert_eq!(detect_separator(r"C:\a/b").unwrap(), Separator::Slash);
    }

    #[test]
    fn separator_backslash_for_drive_and_unc() {
        assert_eq!(detect_separator(r"C:\").unwrap(), Separator::Backslash);
        assert_eq!(
            detect_separator(r"\\server\share").unwrap(),
            Separator::Backslash
        );
    }

    #[test]
    fn separator_unknown() {
        assert!(matches!(
            detect_separator("name"),
            Err(NavError::UnknownSeparator { .. })
        ));
        assert!(matches!(
            detect_separator("\\"),
            Err(NavError::UnknownSeparator { .. })
        ));
    }

    #[test]
    fn root_unix_and_unc() {
        assert_eq!(detect_root("/").unwrap(), "/");
        assert_eq!(detect_root("/srv/data").unwrap(), "/");
        assert_eq!(detect_root(r"\\server\share").unwrap(), r"\\");
    }

    #[test]
    fn root_url() {
        assert_eq!(
            detect_root("https://example.com/a/b").unwrap(),
            "https://example.com/"
        );
        assert_eq!(detect_root("file:///tmp/x").unwrap(), "file:///");
    }

    #[test]
    fn root_drive() {
        assert_eq!(detect_root(r"C:\Users\me").unwrap(), r"C:\");
        assert_eq!(detect_root("C:/Users/me").unwrap(), "C:/");
        assert_eq!(detect_root("D:").unwrap(), "D:/");
        assert_eq!(detect_root(r"vol1::\data").unwrap(), r"vol1::\");
    }

    #[test]
    fn root_drive_with_spaces() {
        assert_eq!(detect_root(r"C:\My Documents\a").unwrap(), r"C:\");
    }

    #[test]
    fn root_unknown() {
        assert!(matches!(
            detect_root("relative/path"),
            Err(NavError::UnknownRoot { .. })
        ));
        assert!(matches!(detect_root(""), Err(NavError::UnknownRoot { .. })));
    }

    #[test]
    fn dirname_unix() {
        assert_eq!(dir("/srv/data/photos"), "/srv/data");
        assert_eq!(dir("/srv"), "/");
    }

    #[test]
    fn dirname_is_idempotent_at_root() {
        for root in ["/", r"\\", r"C:\", "C:/", "https://example.com/"] {
            assert_eq!(dir(root), root, "root {root}");
        }
    }

    #[test]
    fn dirname_collapses_separator_runs() {
        assert_eq!(dir("/a//b"), dir("/a/b"));
        assert_eq!(dir("/a///b"), "/a");
        assert_eq!(dir("//a"), "/");
    }

    #[test]
    fn dirname_collapses_backslash_runs() {
        assert_eq!(dir(r"C:\a\\b"), r"C:\a");
        assert_eq!(base(r"C:\a\\b"), "b");
    }

    #[test]
    fn dirname_trailing_separator() {
        assert_eq!(dir("/a/b/"), "/a/b");
    }

    #[test]
    fn dirname_drive() {
        assert_eq!(dir(r"C:\Users\me"), r"C:\Users");
        assert_eq!(dir(r"C:\Users"), r"C:\");
        assert_eq!(dir("C:/Users"), "C:/");
    }

    #[test]
    fn dirname_unc_and_url() {
        assert_eq!(dir(r"\\server\share\dir"), r"\\server\share");
        assert_eq!(dir(r"\\server"), r"\\");
        assert_eq!(dir("https://example.com/a/b"), "https://example.com/a");
        assert_eq!(dir("https://example.com/a"), "https://example.com/");
    }

    #[test]
    fn dirname_with_explicit_root_outside_path() {
        let opts = DirnameOptions::new().with_root("/srv");
        assert!(matches!(
            dirname("/opt/x", opts),
            Err(NavError::InvalidPath { .. })
        ));
    }

    #[test]
    fn dirname_with_explicit_separator() {
        let opts = DirnameOptions::new()
            .with_root("/")
            .with_separator(Separator::Slash);
        assert_eq!(dirname("/a/b", opts).unwrap(), "/a");
    }

    #[test]
    fn dirname_rejects_separator_absent_from_path() {
        let unix = DirnameOptions::new()
            .with_root("/")
            .with_separator(Separator::Backslash);
        assert!(matches!(
            dirname("/a/b", unix),
            Err(NavError::InvalidPath { .. })
        ));

        let drive = DirnameOptions::new().with_separator(Separator::Slash);
        assert!(matches!(
            dirname(r"C:\a\b", drive),
            Err(NavError::InvalidPath { .. })
        ));

        let base_opts = BasenameOptions::new().with_separator(Separator::Backslash);
        assert!(matches!(
            basename("/a/b", base_opts),
            Err(NavError::InvalidPath { .. })
        ));
    }

    #[test]
    fn dirname_separator_only_in_root_yields_root() {
        let opts = DirnameOptions::new().with_separator(Separator::Backslash);
        assert_eq!(dirname(r"C:\Users", opts).unwrap(), r"C:\");
    }

    #[test]
    fn basename_common_forms() {
        assert_eq!(base("/srv/data/photos"), "photos");
        assert_eq!(base(r"C:\Users\me"), "me");
        assert_eq!(base("//a"), "a");
        assert_eq!(base("/a/b/"), "");
        assert_eq!(base("/"), "");
    }

    #[test]
    fn basename_url() {
        assert_eq!(base("https://host/a/b"), "b");
        assert_eq!(base("https://host/a"), "a");
    }

    #[test]
    fn basename_with_supplied_dirname() {
        let opts = BasenameOptions::new().with_dirname("/srv");
        assert_eq!(basename("/srv//data", opts).unwrap(), "data");

        let wrong = BasenameOptions::new().with_dirname("/opt");
        assert!(matches!(
            basename("/srv/data", wrong),
            Err(NavError::InvalidPath { .. })
        ));
    }

    #[test]
    fn basename_reconstruction_round_trip() {
        for path in ["/srv/data/photos", "/a", r"C:\Users\me", r"\\host\share\x"] {
            let parts = PathParts::parse(path).unwrap();
            let rebuilt = format!("{}{}{}", dir(path), parts.separator(), base(path));
            assert_eq!(base(&rebuilt), base(path), "path {path}");
        }
    }

    #[test]
    fn parents_root_first_and_leaf_first() {
        assert_eq!(
            generate_parents("/srv/data/photos", ParentOrder::RootFirst).unwrap(),
            vec!["/", "/srv", "/srv/data"]
        );
        assert_eq!(
            generate_parents("/srv/data/photos", ParentOrder::LeafFirst).unwrap(),
            vec!["/srv/data", "/srv", "/"]
        );
    }

    #[test]
    fn parents_length_matches_segment_count() {
        for (path, segments) in [("/a", 1), ("/a/b", 2), ("/a/b/c/d", 4)] {
            let parents = generate_parents(path, ParentOrder::default()).unwrap();
            assert_eq!(parents.len(), segments, "path {path}");
        }
    }

    #[test]
    fn parents_of_root_is_singleton() {
        assert_eq!(
            generate_parents("/", ParentOrder::RootFirst).unwrap(),
            vec!["/"]
        );
        assert_eq!(
            generate_parents(r"C:\", ParentOrder::LeafFirst).unwrap(),
            vec![r"C:\"]
        );
    }

    #[test]
    fn parents_drive() {
        assert_eq!(
            generate_parents(r"C:\Users\me\docs", ParentOrder::RootFirst).unwrap(),
            vec![r"C:\", r"C:\Users", r"C:\Users\me"]
        );
    }

    #[test]
    fn parents_url() {
        assert_eq!(
            generate_parents("https://example.com/a/b", ParentOrder::RootFirst).unwrap(),
            vec!["https://example.com/", "https://example.com/a"]
        );
    }

    #[test]
    fn parents_reject_non_prefix_url_root() {
        assert!(matches!(
            generate_parents("HTTPS://Example.com/a", ParentOrder::RootFirst),
            Err(NavError::InvalidPath { .. })
        ));
    }

    #[test]
    fn path_parts_accessors() {
        let parts = PathParts::parse("/srv/data").unwrap();
        assert_eq!(parts.path(), "/srv/data");
        assert_eq!(parts.root(), "/");
        assert_eq!(parts.separator(), Separator::Slash);
        assert!(!parts.is_root());
        assert_eq!(parts.dirname(), "/srv");
        assert_eq!(parts.basename(), "data");
        assert_eq!(parts.ancestors().collect::<Vec<_>>(), vec!["/srv", "/"]);
    }

    #[test]
    fn path_parts_root_has_no_ancestors() {
        let parts = PathParts::parse(r"\\").unwrap();
        assert!(parts.is_root());
        assert_eq!(parts.dirname(), r"\\");
        assert_eq!(parts.basename(), "");
        assert_eq!(parts.ancestors().count(), 0);
    }
}
