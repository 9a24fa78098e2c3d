//! # Item Sources
//!
//! The seam between navigation and the data-fetch layer.
//!
//! ## Responsibility
//! - Define one retrieval per mode ([`ExtFsSource`])
//! - Dispatch a [`Mode`] to the matching retrieval ([`fetch_listing`])
//!
//! Navigation only decides *what* to list. Implementations own transport,
//! caching and staleness; a typical one keys its cache on
//! [`Mode::query_keys`].
//!
//! ## Usage
//!
//! ```rust
//! use extfs_nav::{fetch_listing, ExtFsSource, FileItem, HomeEntry, Mode, NavError};
//! use extfs_nav::{NodeItem, RemoteFileItem, RemoteItem};
//!
//! struct Offline;
//!
//! impl ExtFsSource for Offline {
//!     fn home_entries(&self) -> Result<Vec<HomeEntry>, NavError> {
//!         Ok(vec![HomeEntry::Local { name: "local".into(), node_id: "n0".into() }])
//!     }
//!     fn node_items(&self) -> Result<Vec<NodeItem>, NavError> {
//!         Ok(vec![])
//!     }
//!     fn file_items(&self, _: i64, _: Option<&str>) -> Result<Vec<FileItem>, NavError> {
//!         Ok(vec![])
//!     }
//!     fn remote_items(&self, _: &str) -> Result<Vec<RemoteItem>, NavError> {
//!         Err(NavError::Backend("offline".into()))
//!     }
//!     fn remote_file_items(
//!         &self,
//!         _: &str,
//!         _: i64,
//!         _: Option<&str>,
//!     ) -> Result<Vec<RemoteFileItem>, NavError> {
//!         Err(NavError::Backend("offline".into()))
//!     }
//! }
//!
//! let listing = fetch_listing(&Offline, &Mode::Home)?;
//! assert_eq!(listing.names(), vec!["local"]);
//! assert!(fetch_listing(&Offline, &Mode::remote("p1")).is_err());
//! # Ok::<(), extfs_nav::NavError>(())
//! ```

use crate::{Entry, FileItem, HomeEntry, Mode, NavError, NodeItem, RemoteFileItem, RemoteItem};

/// Data-fetch collaborator: one retrieval per browser mode.
///
/// Implementations report their own failures as [`NavError::Backend`].
pub trait ExtFsSource {
    /// The local node and known remote nodes.
    fn home_entries(&self) -> Result<Vec<HomeEntry>, NavError>;

    /// Shared items of the local node.
    fn node_items(&self) -> Result<Vec<NodeItem>, NavError>;

    /// Rows below a local shared item.
    fn file_items(
        &self,
        item_id: i64,
        parent_path: Option<&str>,
    ) -> Result<Vec<FileItem>, NavError>;

    /// Shared items of a remote node.
    fn remote_items(&self, node_id: &str) -> Result<Vec<RemoteItem>, NavError>;

    /// Rows below a remote shared item.
    fn remote_file_items(
        &self,
        node_id: &str,
        item_id: i64,
        parent_path: Option<&str>,
    ) -> Result<Vec<RemoteFileItem>, NavError>;
}

impl<S: ExtFsSource + ?Sized> ExtFsSource for &S {
    fn home_entries(&self) -> Result<Vec<HomeEntry>, NavError> {
        (**self).home_entries()
    }

    fn node_items(&self) -> Result<Vec<NodeItem>, NavError> {
        (**self).node_items()
    }

    fn file_items(
        &self,
        item_id: i64,
        parent_path: Option<&str>,
    ) -> Result<Vec<FileItem>, NavError> {
        (**self).file_items(item_id, parent_path)
    }

    fn remote_items(&self, node_id: &str) -> Result<Vec<RemoteItem>, NavError> {
        (**self).remote_items(node_id)
    }

    fn remote_file_items(
        &self,
        node_id: &str,
        item_id: i64,
        parent_path: Option<&str>,
    ) -> Result<Vec<RemoteFileItem>, NavError> {
        (**self).remote_file_items(node_id, item_id, parent_path)
    }
}

/// Rows of one screen, typed by mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Home screen rows.
    Home(Vec<HomeEntry>),
    /// Local node rows.
    Node(Vec<NodeItem>),
    /// Rows below a local shared item.
    File(Vec<FileItem>),
    /// Remote node rows.
    Remote(Vec<RemoteItem>),
    /// Rows below a remote shared item.
    RemoteFile(Vec<RemoteFileItem>),
}

impl Listing {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Listing::Home(rows) => rows.len(),
            Listing::Node(rows) => rows.len(),
            Listing::File(rows) => rows.len(),
            Listing::Remote(rows) => rows.len(),
            Listing::RemoteFile(rows) => rows.len(),
        }
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows as [`Entry`] trait objects, in listing order.
    pub fn entries(&self) -> Vec<&dyn Entry> {
        fn erase<E: Entry>(rows: &[E]) -> Vec<&dyn Entry> {
            rows.iter().map(|row| row as &dyn Entry).collect()
        }
        match self {
            Listing::Home(rows) => erase(rows),
            Listing::Node(rows) => erase(rows),
            Listing::File(rows) => erase(rows),
            Listing::Remote(rows) => erase(rows),
            Listing::RemoteFile(rows) => erase(rows),
        }
    }

    /// Display names, in listing order.
    pub fn names(&self) -> Vec<&str> {
        self.entries().into_iter().map(|entry| entry.name()).collect()
    }
}

/// Retrieve the rows for `mode`.
///
/// # Errors
///
/// Whatever the source reports.
pub fn fetch_listing<S: ExtFsSource + ?Sized>(source: &S, mode: &Mode) -> Result<Listing, NavError> {
    log::trace!("fetching listing for mode {}", mode.kind());
    let listing = match mode {
        Mode::Home => Listing::Home(source.home_entries()?),
        Mode::Node => Listing::Node(source.node_items()?),
        Mode::File {
            item_id,
            parent_path,
        } => Listing::File(source.file_items(*item_id, parent_path.as_deref())?),
        Mode::Remote { node_id } => Listing::Remote(source.remote_items(node_id)?),
        Mode::RemoteFile {
            node_id,
            item_id,
            parent_path,
        } => Listing::RemoteFile(source.remote_file_items(
            node_id,
            *item_id,
            parent_path.as_deref(),
        )?),
    };
    Ok(listing)
}
