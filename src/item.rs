//! # Item Records
//!
//! Rows returned for each browser mode, and the rule deciding whether a
//! click on a row descends.
//!
//! ## Overview
//!
//! | Mode | Record | Descends into |
//! |------|--------|---------------|
//! | Home | [`HomeEntry`] | `Node` (local) or `Remote` (available peer) |
//! | Node | [`NodeItem`] | `File` for an available directory |
//! | File | [`FileItem`] | `File` one level deeper |
//! | Remote | [`RemoteItem`] | `RemoteFile` for an available directory |
//! | RemoteFile | [`RemoteFileItem`] | `RemoteFile` one level deeper |
//!
//! Plain files and unavailable rows never descend.

use crate::Mode;

/// Kind of a shared row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Directory (`D`).
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    Directory,
    /// Regular file (`F`).
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    File,
}

impl FileType {
    /// Returns `true` for directories.
    #[inline]
    pub fn is_dir(self) -> bool {
        self == FileType::Directory
    }
}

/// A row the browser can display and click.
///
/// # Example
///
/// ```rust
/// use extfs_nav::{Entry, FileType, Mode, NodeItem};
///
/// let item = NodeItem {
///     id: 7,
///     name: "reports".into(),
///     file_type: FileType::Directory,
///     available: true,
///     updated_at: None,
/// };
/// assert_eq!(item.descend(&Mode::Node), Some(Mode::file(7)));
/// ```
pub trait Entry {
    /// Display name, also used as the breadcrumb label.
    fn name(&self) -> &str;

    /// Whether the row can currently be opened.
    fn is_available(&self) -> bool;

    /// Whether the row holds other rows.
    fn is_container(&self) -> bool;

    /// The mode entered by clicking this row while `current` is shown.
    ///
    /// `None` when the click does nothing.
    fn descend(&self, current: &Mode) -> Option<Mode>;
}

/// Row on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum HomeEntry {
    /// This node.
    Local {
        /// Node name from the application settings.
        name: String,
        /// Node id from the application settings.
        node_id: String,
    },
    /// A known peer.
    Remote {
        /// Peer name.
        name: String,
        /// Peer node id.
        node_id: String,
        /// Whether the peer is reachable.
        available: bool,
        /// Last update timestamp as reported by the backend.
        updated_at: Option<String>,
    },
}

impl HomeEntry {
    /// Node id of the entry.
    pub fn node_id(&self) -> &str {
        match self {
            HomeEntry::Local { node_id, .. } | HomeEntry::Remote { node_id, .. } => node_id,
        }
    }
}

impl Entry for HomeEntry {
    fn name(&self) -> &str {
        match self {
            HomeEntry::Local { name, .. } | HomeEntry::Remote { name, .. } => name,
        }
    }

    fn is_available(&self) -> bool {
        match self {
            HomeEntry::Local { .. } => true,
            HomeEntry::Remote { available, .. } => *available,
        }
    }

    fn is_container(&self) -> bool {
        true
    }

    fn descend(&self, _current: &Mode) -> Option<Mode> {
        match self {
            HomeEntry::Local { .. } => Some(Mode::Node),
            HomeEntry::Remote {
                node_id, available, ..
            } => available.then(|| Mode::remote(node_id.clone())),
        }
    }
}

/// A shared item of the local node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NodeItem {
    /// Item id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Directory or file.
    pub file_type: FileType,
    /// Whether the backing path is reachable.
    pub available: bool,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

impl Entry for NodeItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn is_container(&self) -> bool {
        self.file_type.is_dir()
    }

    fn descend(&self, _current: &Mode) -> Option<Mode> {
        (self.available && self.is_container()).then(|| Mode::file(self.id))
    }
}

/// A file or directory below a local shared item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FileItem {
    /// Row id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Directory or file.
    pub file_type: FileType,
    /// Path of the row inside its shared item.
    pub file_path: String,
    /// Whether the row is reachable.
    pub available: bool,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

impl Entry for FileItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn is_container(&self) -> bool {
        self.file_type.is_dir()
    }

    fn descend(&self, current: &Mode) -> Option<Mode> {
        if !(self.available && self.is_container()) {
            return None;
        }
        match current {
            Mode::File { .. } => Some(current.clone().with_parent_path(self.file_path.as_str())),
            _ => None,
        }
    }
}

/// A shared item of a remote node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RemoteItem {
    /// Local mirror row id.
    pub id: i64,
    /// Remote node id.
    pub node_id: String,
    /// Item id on the remote node.
    pub remote_item_id: i64,
    /// Display name.
    pub name: String,
    /// Directory or file.
    pub file_type: FileType,
    /// Whether the remote item is reachable.
    pub available: bool,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

impl Entry for RemoteItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn is_container(&self) -> bool {
        self.file_type.is_dir()
    }

    fn descend(&self, _current: &Mode) -> Option<Mode> {
        (self.available && self.is_container())
            .then(|| Mode::remote_file(self.node_id.clone(), self.remote_item_id))
    }
}

/// A file or directory below a remote shared item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RemoteFileItem {
    /// Row id.
    pub id: i64,
    /// Remote node id.
    pub node_id: String,
    /// Display name.
    pub name: String,
    /// Directory or file.
    pub file_type: FileType,
    /// Path of the row inside its remote shared item.
    pub file_path: String,
    /// Whether the row is reachable.
    pub available: bool,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

impl Entry for RemoteFileItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn is_container(&self) -> bool {
        self.file_type.is_dir()
    }

    fn descend(&self, current: &Mode) -> Option<Mode> {
        if !(self.available && self.is_container()) {
            return None;
        }
        match current {
            Mode::RemoteFile { .. } => {
                Some(current.clone().with_parent_path(self.file_path.as_str()))
            }
            _ => None,
        }
    }
}
