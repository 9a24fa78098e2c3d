//! Browser modes and the fetch identities derived from them.

use std::fmt;

use url::form_urlencoded;

/// Query prefix for the local application settings.
pub const APP_SETTINGS_QUERY_KEY: &str = "app-settings";
/// Query prefix for the remote node list shown on the home screen.
pub const REMOTE_NODES_QUERY_KEY: &str = "extfs-remote-nodes";
/// Query prefix for the local node's shared items.
pub const NODE_ITEMS_QUERY_KEY: &str = "extfs-node-items";
/// Query prefix for files below a local shared item.
pub const FILE_ITEMS_QUERY_KEY: &str = "extfs-file-items";
/// Query prefix for a remote node's shared items.
pub const REMOTE_ITEMS_QUERY_KEY: &str = "extfs-remote-items";
/// Query prefix for files below a remote shared item.
pub const REMOTE_FILE_ITEMS_QUERY_KEY: &str = "extfs-remote-file-items";

/// Fieldless tag of a [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// Home screen listing the local node and known remote nodes.
    Home,
    /// Shared items of the local node.
    Node,
    /// Files below a local shared item.
    File,
    /// Shared items of a remote node.
    Remote,
    /// Files below a remote shared item.
    RemoteFile,
}

impl ModeKind {
    /// Every kind, in declaration order.
    pub const ALL: [ModeKind; 5] = [
        ModeKind::Home,
        ModeKind::Node,
        ModeKind::File,
        ModeKind::Remote,
        ModeKind::RemoteFile,
    ];

    /// Short code used in serialized state (`H`, `N`, `F`, `R`, `RF`).
    pub const fn code(self) -> &'static str {
        match self {
            ModeKind::Home => "H",
            ModeKind::Node => "N",
            ModeKind::File => "F",
            ModeKind::Remote => "R",
            ModeKind::RemoteFile => "RF",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The screen the browser is showing, with its fetch parameters.
///
/// # Example
///
/// ```rust
/// use extfs_nav::{Mode, ModeKind};
///
/// let mode = Mode::file(7).with_parent_path("/srv/data");
/// assert_eq!(mode.kind(), ModeKind::File);
/// assert_eq!(mode.parent_path(), Some("/srv/data"));
/// assert_eq!(
///     mode.query_keys()[0].to_string(),
///     "extfs-file-items?itemId=7&parentPath=%2Fsrv%2Fdata",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "mode", rename_all_fields = "camelCase")
)]
pub enum Mode {
    /// Home screen.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "H"))]
    Home,
    /// Local node.
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    Node,
    /// Local shared item, optionally below a sub directory.
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    File {
        /// Shared item id.
        item_id: i64,
        /// Directory inside the item; `None` for the item itself.
        parent_path: Option<String>,
    },
    /// Remote node.
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    Remote {
        /// Remote node id.
        node_id: String,
    },
    /// Remote shared item, optionally below a sub directory.
    #[cfg_attr(feature = "serde", serde(rename = "RF"))]
    RemoteFile {
        /// Remote node id.
        node_id: String,
        /// Shared item id on the remote node.
        item_id: i64,
        /// Directory inside the item; `None` for the item itself.
        parent_path: Option<String>,
    },
}

impl Mode {
    /// Top of a local shared item.
    pub fn file(item_id: i64) -> Self {
        Mode::File {
            item_id,
            parent_path: None,
        }
    }

    /// A remote node.
    pub fn remote(node_id: impl Into<String>) -> Self {
        Mode::Remote {
            node_id: node_id.into(),
        }
    }

    /// Top of a remote shared item.
    pub fn remote_file(node_id: impl Into<String>, item_id: i64) -> Self {
        Mode::RemoteFile {
            node_id: node_id.into(),
            item_id,
            parent_path: None,
        }
    }

    /// Same item, one directory deeper.
    ///
    /// Modes without a path are returned unchanged.
    pub fn with_parent_path(self, path: impl Into<String>) -> Self {
        match self {
            Mode::File { item_id, .. } => Mode::File {
                item_id,
                parent_path: Some(path.into()),
            },
            Mode::RemoteFile {
                node_id, item_id, ..
            } => Mode::RemoteFile {
                node_id,
                item_id,
                parent_path: Some(path.into()),
            },
            other => other,
        }
    }

    /// The tag of this mode.
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Home => ModeKind::Home,
            Mode::Node => ModeKind::Node,
            Mode::File { .. } => ModeKind::File,
            Mode::Remote { .. } => ModeKind::Remote,
            Mode::RemoteFile { .. } => ModeKind::RemoteFile,
        }
    }

    /// Node id for the remote modes.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Mode::Remote { node_id } | Mode::RemoteFile { node_id, .. } => Some(node_id),
            _ => None,
        }
    }

    /// Item id for the file modes.
    pub fn item_id(&self) -> Option<i64> {
        match self {
            Mode::File { item_id, .. } | Mode::RemoteFile { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    /// Directory inside the item for the file modes.
    pub fn parent_path(&self) -> Option<&str> {
        match self {
            Mode::File { parent_path, .. } | Mode::RemoteFile { parent_path, .. } => {
                parent_path.as_deref()
            }
            _ => None,
        }
    }

    /// Fetch identities for this screen.
    ///
    /// Home needs two lists (settings for the local node, plus the remote
    /// nodes); every other mode needs one.
    pub fn query_keys(&self) -> Vec<QueryKey> {
        match self {
            Mode::Home => vec![
                QueryKey::new(APP_SETTINGS_QUERY_KEY),
                QueryKey::new(REMOTE_NODES_QUERY_KEY),
            ],
            Mode::Node => vec![QueryKey::new(NODE_ITEMS_QUERY_KEY)],
            Mode::File {
                item_id,
                parent_path,
            } => vec![QueryKey {
                item_id: Some(*item_id),
                parent_path: parent_path.clone(),
                ..QueryKey::new(FILE_ITEMS_QUERY_KEY)
            }],
            Mode::Remote { node_id } => vec![QueryKey {
                node_id: Some(node_id.clone()),
                ..QueryKey::new(REMOTE_ITEMS_QUERY_KEY)
            }],
            Mode::RemoteFile {
                node_id,
                item_id,
                parent_path,
            } => vec![QueryKey {
                node_id: Some(node_id.clone()),
                item_id: Some(*item_id),
                parent_path: parent_path.clone(),
                ..QueryKey::new(REMOTE_FILE_ITEMS_QUERY_KEY)
            }],
        }
    }
}

/// Cache identity of one list fetch: a static prefix plus parameters.
///
/// Displays as `prefix` or `prefix?nodeId=..&itemId=..&parentPath=..`,
/// listing only the parameters that are set. Values are
/// `application/x-www-form-urlencoded`, so the string is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    /// Static prefix naming the list.
    pub prefix: &'static str,
    /// Remote node id.
    pub node_id: Option<String>,
    /// Shared item id.
    pub item_id: Option<i64>,
    /// Directory inside the item.
    pub parent_path: Option<String>,
}

impl QueryKey {
    /// A key without parameters.
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            node_id: None,
            item_id: None,
            parent_path: None,
        }
    }

    /// Returns `true` if the key carries no parameters.
    pub fn is_static(&self) -> bool {
        self.node_id.is_none() && self.item_id.is_none() && self.parent_path.is_none()
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix)?;
        let params = [
            self.node_id.as_ref().map(|id| ("nodeId", id.clone())),
            self.item_id.map(|id| ("itemId", id.to_string())),
            self.parent_path.as_ref().map(|path| ("parentPath", path.clone())),
        ];
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.extend_pairs(params.into_iter().flatten());
        let query = query.finish();
        if !query.is_empty() {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_kind_codes() {
        let codes: Vec<_> = ModeKind::ALL.iter().map(|kind| kind.code()).collect();
        assert_eq!(codes, vec!["H", "N", "F", "R", "RF"]);
    }

    #[test]
    fn mode_default_is_home() {
        assert_eq!(Mode::default(), Mode::Home);
        assert_eq!(Mode::default().kind(), ModeKind::Home);
    }

    #[test]
    fn mode_accessors() {
        let mode = Mode::remote_file("peer-1", 3).with_parent_path("/share/a");
        assert_eq!(mode.kind(), ModeKind::RemoteFile);
        assert_eq!(mode.node_id(), Some("peer-1"));
        assert_eq!(mode.item_id(), Some(3));
        assert_eq!(mode.parent_path(), Some("/share/a"));

        assert_eq!(Mode::Node.node_id(), None);
        assert_eq!(Mode::remote("peer-1").item_id(), None);
    }

    #[test]
    fn with_parent_path_ignores_pathless_modes() {
        assert_eq!(Mode::Node.with_parent_path("/x"), Mode::Node);
        assert_eq!(
            Mode::remote("p").with_parent_path("/x"),
            Mode::remote("p")
        );
    }

    #[test]
    fn with_parent_path_replaces_previous_path() {
        let mode = Mode::file(1).with_parent_path("/a").with_parent_path("/a/b");
        assert_eq!(mode.parent_path(), Some("/a/b"));
        assert_eq!(mode.item_id(), Some(1));
    }

    #[test]
    fn home_query_keys() {
        let keys = Mode::Home.query_keys();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].to_string(), "app-settings");
        assert_eq!(keys[1].to_string(), "extfs-remote-nodes");
        assert!(keys.iter().all(QueryKey::is_static));
    }

    #[test]
    fn parameterized_query_keys() {
        assert_eq!(
            Mode::Node.query_keys()[0].to_string(),
            "extfs-node-items"
        );
        assert_eq!(
            Mode::file(7).query_keys()[0].to_string(),
            "extfs-file-items?itemId=7"
        );
        assert_eq!(
            Mode::remote("peer-1").query_keys()[0].to_string(),
            "extfs-remote-items?nodeId=peer-1"
        );
        assert_eq!(
            Mode::remote_file("peer-1", 2)
                .with_parent_path("/x")
                .query_keys()[0]
                .to_string(),
            "extfs-remote-file-items?nodeId=peer-1&itemId=2&parentPath=%2Fx"
        );
    }

    #[test]
    fn query_keys_differ_by_parameters() {
        assert_ne!(Mode::file(1).query_keys(), Mode::file(2).query_keys());
        assert_ne!(
            Mode::file(1).query_keys(),
            Mode::file(1).with_parent_path("/a").query_keys()
        );
    }

    #[test]
    fn query_key_escapes_reserved_characters() {
        let key = Mode::file(3).with_parent_path("/a&b=c d").query_keys()[0].to_string();
        assert_eq!(key, "extfs-file-items?itemId=3&parentPath=%2Fa%26b%3Dc+d");
    }
}
