//! # extfs-nav
//!
//! Path decomposition and breadcrumb navigation for the **ExtFS virtual
//! filesystem browser**.
//!
//! The browser shows the local node, its shared items and the items of
//! remote peers. This crate holds the UI-independent core of it: pure path
//! helpers, the navigation state machine and breadcrumb derivation. It
//! performs no I/O; listing rows is delegated to an [`ExtFsSource`].
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use extfs_nav::{Mode, Navigator};
//!
//! let mut nav = Navigator::new();
//! nav.enter("NodeA", Mode::Node);
//! nav.enter("reports", Mode::file(7));
//! assert_eq!(nav.state().depth(), 2);
//!
//! // Breadcrumb click on the first entry
//! nav.go_to_ancestor(0)?;
//! assert_eq!(nav.mode(), &Mode::Node);
//! # Ok::<(), extfs_nav::NavError>(())
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Mode`] | Which screen is shown, with its fetch parameters |
//! | [`NavigationState`] | Current screen plus the breadcrumb stack |
//! | [`Navigator`] | Session-owned holder of the current state |
//! | [`Breadcrumbs`] | Collapsible chain derived from a state |
//! | [`PathBreadcrumbs`] | Chain derived from a path string |
//! | [`Entry`] | A clickable row and the mode it opens |
//! | [`ExtFsSource`] | One retrieval per mode, implemented by the data layer |
//! | [`NavError`] | Error type with context |
//!
//! ---
//!
//! ## Modes
//!
//! ```text
//! Home ──▶ Node ──▶ File ──▶ File (deeper) ...
//!   │
//!   └────▶ Remote ──▶ RemoteFile ──▶ RemoteFile (deeper) ...
//! ```
//!
//! `go_home` reaches Home from anywhere. `go_to_ancestor` only reaches
//! modes already on the stack.
//!
//! ---
//!
//! ## Paths
//!
//! The [`path`] module splits path strings with Unix, UNC, URL or drive
//! letter roots:
//!
//! ```rust
//! use extfs_nav::path::{basename, dirname, detect_root};
//!
//! assert_eq!(detect_root(r"C:\Users\me")?, r"C:\");
//! assert_eq!(dirname(r"C:\Users\me", Default::default())?, r"C:\Users");
//! assert_eq!(basename(r"C:\Users\me", Default::default())?, "me");
//! # Ok::<(), extfs_nav::NavError>(())
//! ```
//!
//! ---
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, NavError>`:
//!
//! ```rust
//! use extfs_nav::NavigationState;
//!
//! let err = NavigationState::new().go_to_ancestor(0).unwrap_err();
//! assert_eq!(err.to_string(), "breadcrumb index 0 out of range (depth 0)");
//! ```
//!
//! ---
//!
//! ## Logging
//!
//! Transitions are reported through the [`log`] facade at `debug` level.
//! The crate never installs a logger.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`Mode`], [`NavigationState`], item records and [`BreadcrumbConfig`]; JSON snapshots via [`NavigationState::to_json`] |

// Private modules
mod breadcrumb;
mod error;
mod item;
mod mode;
mod navigator;
mod source;
mod state;

// Public modules
pub mod path;

// Public re-exports - error types
pub use error::NavError;

// Public re-exports - navigation
pub use mode::{
    APP_SETTINGS_QUERY_KEY, FILE_ITEMS_QUERY_KEY, Mode, ModeKind, NODE_ITEMS_QUERY_KEY, QueryKey,
    REMOTE_FILE_ITEMS_QUERY_KEY, REMOTE_ITEMS_QUERY_KEY, REMOTE_NODES_QUERY_KEY,
};
pub use navigator::Navigator;
pub use state::{NavigationState, ParentItem};

// Public re-exports - breadcrumbs
pub use breadcrumb::{
    BreadcrumbConfig, Breadcrumbs, Crumb, CrumbTarget, DEFAULT_ROOT_LABEL, PathBreadcrumbs,
    PathCrumb, Segment,
};

// Public re-exports - items and sources
pub use item::{Entry, FileItem, FileType, HomeEntry, NodeItem, RemoteFileItem, RemoteItem};
pub use source::{ExtFsSource, Listing, fetch_listing};
