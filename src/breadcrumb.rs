//! # Breadcrumbs
//!
//! Projection of navigation state, or of a path string, into a displayable
//! ancestor chain.
//!
//! ## Stack Breadcrumbs
//!
//! ```text
//! [root] > first > (… middle entries …) > parent > current
//! ```
//!
//! The first ancestor and the immediate parent are always shown. The
//! entries between them collapse into one menu once there are more than
//! [`BreadcrumbConfig::collapse_after`] of them. The current leaf is not
//! clickable. Clicking a crumb maps to [`NavigationState::go_to_ancestor`]
//! (or [`NavigationState::go_home`] for the root); breadcrumbs never fetch.
//!
//! ## Path Breadcrumbs
//!
//! [`PathBreadcrumbs`] drives the disk path picker: one crumb per directory
//! of a path string, each targeting the directory it names.

use crate::path::{PathParts, ParentOrder};
use crate::{NavError, NavigationState};

/// Default label of the root crumb.
pub const DEFAULT_ROOT_LABEL: &str = "ExtFS";

/// Breadcrumb rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct BreadcrumbConfig {
    /// Label of the root crumb.
    pub root_label: String,
    /// Largest number of middle entries still shown inline.
    pub collapse_after: usize,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_owned(),
            collapse_after: 1,
        }
    }
}

impl BreadcrumbConfig {
    /// Set the root crumb label.
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    /// Set how many middle entries stay inline.
    pub fn with_collapse_after(mut self, collapse_after: usize) -> Self {
        self.collapse_after = collapse_after;
        self
    }
}

/// Click target of a crumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrumbTarget {
    /// Back to the home screen.
    Home,
    /// Back to a breadcrumb stack index.
    Ancestor(usize),
}

impl CrumbTarget {
    /// Apply the click to `state`.
    ///
    /// # Errors
    ///
    /// [`NavError::IndexOutOfRange`] for an ancestor index not on the stack.
    pub fn apply(self, state: &NavigationState) -> Result<NavigationState, NavError> {
        match self {
            CrumbTarget::Home => Ok(state.go_home()),
            CrumbTarget::Ancestor(index) => state.go_to_ancestor(index),
        }
    }
}

/// A clickable crumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// Display label.
    pub label: String,
    /// What clicking it does.
    pub target: CrumbTarget,
}

/// One rendered element of a stack breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A clickable crumb.
    Link(&'a Crumb),
    /// The collapsed "…" menu.
    Collapsed(&'a [Crumb]),
    /// The current, non-clickable leaf.
    Current(&'a str),
}

/// Displayable chain for a [`NavigationState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumbs {
    /// Root crumb, always present.
    pub root: Crumb,
    /// First ancestor below the root.
    pub first: Option<Crumb>,
    /// Entries between the first ancestor and the parent, shown inline.
    pub middle: Vec<Crumb>,
    /// Entries between the first ancestor and the parent, collapsed.
    pub collapsed: Vec<Crumb>,
    /// Immediate parent of the current leaf.
    pub parent: Option<Crumb>,
    /// Current leaf name; `None` at home.
    pub current: Option<String>,
}

impl Breadcrumbs {
    /// Derive the chain for `state`.
    ///
    /// ```rust
    /// use extfs_nav::{BreadcrumbConfig, Breadcrumbs, Mode, NavigationState};
    ///
    /// let state = NavigationState::new()
    ///     .enter("NodeA", Mode::Node)
    ///     .enter("docs", Mode::file(1))
    ///     .enter("a", Mode::file(1).with_parent_path("/a"))
    ///     .enter("b", Mode::file(1).with_parent_path("/a/b"))
    ///     .enter("c", Mode::file(1).with_parent_path("/a/b/c"));
    ///
    /// let crumbs = Breadcrumbs::from_state(&state, &BreadcrumbConfig::default());
    /// assert_eq!(crumbs.first.unwrap().label, "NodeA");
    /// assert_eq!(crumbs.collapsed.len(), 2);
    /// assert_eq!(crumbs.parent.unwrap().label, "b");
    /// assert_eq!(crumbs.current.as_deref(), Some("c"));
    /// ```
    pub fn from_state(state: &NavigationState, config: &BreadcrumbConfig) -> Self {
        let root = Crumb {
            label: config.root_label.clone(),
            target: CrumbTarget::Home,
        };
        let items = state.parent_items();
        let Some((leaf, ancestors)) = items.split_last() else {
            return Self {
                root,
                first: None,
                middle: Vec::new(),
                collapsed: Vec::new(),
                parent: None,
                current: None,
            };
        };

        let mut crumbs = ancestors.iter().enumerate().map(|(index, item)| Crumb {
            label: item.name.clone(),
            target: CrumbTarget::Ancestor(index),
        });
        let first = crumbs.next();
        let parent = crumbs.next_back();
        let between: Vec<Crumb> = crumbs.collect();
        let (middle, collapsed) = if between.len() > config.collapse_after {
            (Vec::new(), between)
        } else {
            (between, Vec::new())
        };

        Self {
            root,
            first,
            middle,
            collapsed,
            parent,
            current: Some(leaf.name.clone()),
        }
    }

    /// Flatten the chain in display order.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = vec![Segment::Link(&self.root)];
        segments.extend(self.first.iter().map(Segment::Link));
        segments.extend(self.middle.iter().map(Segment::Link));
        if !self.collapsed.is_empty() {
            segments.push(Segment::Collapsed(&self.collapsed));
        }
        segments.extend(self.parent.iter().map(Segment::Link));
        segments.extend(self.current.as_deref().map(Segment::Current));
        segments
    }

    /// Every clickable crumb, collapsed ones included, in stack order.
    pub fn links(&self) -> impl Iterator<Item = &Crumb> {
        std::iter::once(&self.root)
            .chain(self.first.iter())
            .chain(self.middle.iter())
            .chain(self.collapsed.iter())
            .chain(self.parent.iter())
    }
}

/// A crumb of a path breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCrumb {
    /// Directory name.
    pub label: String,
    /// Directory path selected by clicking.
    pub path: String,
}

/// Displayable chain for a path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBreadcrumbs {
    /// Root prefix; empty when no path was given.
    pub root: String,
    /// Directories between the root and the current name.
    pub crumbs: Vec<PathCrumb>,
    /// Last segment; `None` when the value is its own root.
    pub current: Option<String>,
}

impl PathBreadcrumbs {
    /// Decompose `value` into root, directories and file name.
    ///
    /// An empty value yields a root-only breadcrumb with an empty root.
    ///
    /// # Errors
    ///
    /// Path detection errors for a malformed value.
    ///
    /// ```rust
    /// use extfs_nav::PathBreadcrumbs;
    ///
    /// let crumbs = PathBreadcrumbs::from_path(r"C:\Users\me\notes.txt")?;
    /// assert_eq!(crumbs.root, r"C:\");
    /// let labels: Vec<_> = crumbs.crumbs.iter().map(|c| c.label.as_str()).collect();
    /// assert_eq!(labels, ["Users", "me"]);
    /// assert_eq!(crumbs.crumbs[1].path, r"C:\Users\me");
    /// assert_eq!(crumbs.current.as_deref(), Some("notes.txt"));
    /// # Ok::<(), extfs_nav::NavError>(())
    /// ```
    pub fn from_path(value: &str) -> Result<Self, NavError> {
        if value.is_empty() {
            return Ok(Self {
                root: String::new(),
                crumbs: Vec::new(),
                current: None,
            });
        }
        let parts = PathParts::parse(value)?;
        if parts.is_root() {
            return Ok(Self {
                root: parts.root().to_owned(),
                crumbs: Vec::new(),
                current: None,
            });
        }
        let separator = parts.separator().as_char();
        // Each ancestor is a prefix of the next one.
        let crumbs = parts
            .parents(ParentOrder::RootFirst)
            .windows(2)
            .map(|pair| PathCrumb {
                label: pair[1][pair[0].len()..]
                    .trim_start_matches(separator)
                    .to_owned(),
                path: pair[1].to_owned(),
            })
            .collect();
        Ok(Self {
            root: parts.root().to_owned(),
            crumbs,
            current: Some(parts.basename().to_owned()),
        })
    }

    /// Returns `true` when only the root is shown.
    pub fn is_root_only(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;
    use pretty_assertions::assert_eq;

    fn state_with_depth(depth: usize) -> NavigationState {
        (0..depth).fold(NavigationState::new(), |state, idx| {
            let name = format!("dir{idx}");
            let mode = if idx == 0 {
                Mode::Node
            } else {
                Mode::file(1).with_parent_path(format!("/{name}"))
            };
            state.enter(name, mode)
        })
    }

    fn labels(crumbs: &[Crumb]) -> Vec<&str> {
        crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn home_shows_root_only() {
        let crumbs = Breadcrumbs::from_state(&NavigationState::new(), &BreadcrumbConfig::default());
        assert_eq!(crumbs.root.label, DEFAULT_ROOT_LABEL);
        assert_eq!(crumbs.root.target, CrumbTarget::Home);
        assert_eq!(crumbs.segments(), vec![Segment::Link(&crumbs.root)]);
    }

    #[test]
    fn single_level_shows_current_only() {
        let crumbs = Breadcrumbs::from_state(&state_with_depth(1), &BreadcrumbConfig::default());
        assert_eq!(crumbs.first, None);
        assert_eq!(crumbs.parent, None);
        assert_eq!(crumbs.current.as_deref(), Some("dir0"));
    }

    #[test]
    fn two_levels_show_first_and_current() {
        let crumbs = Breadcrumbs::from_state(&state_with_depth(2), &BreadcrumbConfig::default());
        assert_eq!(crumbs.first.as_ref().map(|c| c.target), Some(CrumbTarget::Ancestor(0)));
        assert_eq!(crumbs.parent, None);
        assert_eq!(crumbs.current.as_deref(), Some("dir1"));
    }

    #[test]
    fn one_middle_entry_stays_inline() {
        let crumbs = Breadcrumbs::from_state(&state_with_depth(4), &BreadcrumbConfig::default());
        assert_eq!(labels(&crumbs.middle), vec!["dir1"]);
        assert!(crumbs.collapsed.is_empty());
        assert_eq!(crumbs.parent.as_ref().map(|c| c.label.as_str()), Some("dir2"));
    }

    #[test]
    fn long_chain_collapses_middle() {
        let crumbs = Breadcrumbs::from_state(&state_with_depth(6), &BreadcrumbConfig::default());
        assert_eq!(crumbs.first.as_ref().map(|c| c.label.as_str()), Some("dir0"));
        assert_eq!(labels(&crumbs.collapsed), vec!["dir1", "dir2", "dir3"]);
        assert_eq!(
            crumbs.collapsed.iter().map(|c| c.target).collect::<Vec<_>>(),
            vec![
                CrumbTarget::Ancestor(1),
                CrumbTarget::Ancestor(2),
                CrumbTarget::Ancestor(3)
            ]
        );
        assert_eq!(crumbs.parent.as_ref().map(|c| c.target), Some(CrumbTarget::Ancestor(4)));

        let segments = crumbs.segments();
        assert_eq!(segments.len(), 5);
        assert!(matches!(segments[2], Segment::Collapsed(entries) if entries.len() == 3));
        assert_eq!(segments[4], Segment::Current("dir5"));
    }

    #[test]
    fn collapse_threshold_is_configurable() {
        let config = BreadcrumbConfig::default()
            .with_root_label("Files")
            .with_collapse_after(3);
        let crumbs = Breadcrumbs::from_state(&state_with_depth(6), &config);
        assert_eq!(crumbs.root.label, "Files");
        assert_eq!(labels(&crumbs.middle), vec!["dir1", "dir2", "dir3"]);
        assert!(crumbs.collapsed.is_empty());
    }

    #[test]
    fn links_cover_every_ancestor_once() {
        let state = state_with_depth(6);
        let crumbs = Breadcrumbs::from_state(&state, &BreadcrumbConfig::default());
        let targets: Vec<_> = crumbs.links().map(|c| c.target).collect();
        let mut expected = vec![CrumbTarget::Home];
        expected.extend((0..5).map(CrumbTarget::Ancestor));
        assert_eq!(targets, expected);
    }

    #[test]
    fn clicking_a_crumb_jumps_to_its_depth() {
        let state = state_with_depth(6);
        let crumbs = Breadcrumbs::from_state(&state, &BreadcrumbConfig::default());
        let jumped = crumbs.collapsed[1].target.apply(&state).unwrap();
        assert_eq!(jumped.depth(), 3);
        assert_eq!(jumped.current_name(), Some("dir2"));
        assert!(crumbs.root.target.apply(&state).unwrap().is_home());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_defaults_missing_fields() {
        let config: BreadcrumbConfig = serde_json::from_str(r#"{"collapseAfter": 2}"#).unwrap();
        assert_eq!(config.root_label, DEFAULT_ROOT_LABEL);
        assert_eq!(config.collapse_after, 2);
    }

    #[test]
    fn path_breadcrumbs_unix() {
        let crumbs = PathBreadcrumbs::from_path("/srv/data/photos").unwrap();
        assert_eq!(crumbs.root, "/");
        assert_eq!(
            crumbs.crumbs,
            vec![
                PathCrumb {
                    label: "srv".into(),
                    path: "/srv".into()
                },
                PathCrumb {
                    label: "data".into(),
                    path: "/srv/data".into()
                },
            ]
        );
        assert_eq!(crumbs.current.as_deref(), Some("photos"));
    }

    #[test]
    fn path_breadcrumbs_root_and_empty() {
        let root = PathBreadcrumbs::from_path("/").unwrap();
        assert_eq!(root.root, "/");
        assert!(root.crumbs.is_empty());
        assert!(root.is_root_only());

        let empty = PathBreadcrumbs::from_path("").unwrap();
        assert_eq!(empty.root, "");
        assert!(empty.is_root_only());
    }

    #[test]
    fn path_breadcrumbs_top_level_entry() {
        let crumbs = PathBreadcrumbs::from_path(r"C:\Users").unwrap();
        assert_eq!(crumbs.root, r"C:\");
        assert!(crumbs.crumbs.is_empty());
        assert_eq!(crumbs.current.as_deref(), Some("Users"));
    }

    #[test]
    fn path_breadcrumbs_reject_malformed() {
        let err = PathBreadcrumbs::from_path("relative/dir").unwrap_err();
        assert!(err.is_invalid_path());
    }
}
