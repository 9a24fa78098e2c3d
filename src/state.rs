//! # Navigation State
//!
//! The browser's current screen plus the breadcrumb stack that led there.
//!
//! ## Model
//!
//! ```text
//! parent_items: [ {NodeA, Node}, {reports, File 7}, {2024, File 7 /reports/2024} ]
//!                                                    ^ current mode
//! ```
//!
//! Each [`ParentItem`] stores the [`Mode`] that entering it produced, so the
//! current mode is the state of the last entry and an empty stack is
//! [`Mode::Home`]. Transitions never mutate: each returns a new
//! [`NavigationState`].
//!
//! ## Usage
//!
//! ```rust
//! use extfs_nav::{Mode, NavigationState};
//!
//! let home = NavigationState::new();
//! let node = home.enter("NodeA", Mode::Node);
//! let reports = node.enter("reports", Mode::file(7));
//! assert_eq!(reports.depth(), 2);
//!
//! let back = reports.go_to_ancestor(0)?;
//! assert_eq!(back.mode(), &Mode::Node);
//! assert_eq!(back.depth(), 1);
//! assert!(back.go_home().is_home());
//! # Ok::<(), extfs_nav::NavError>(())
//! ```

use crate::{Mode, ModeKind, NavError};

static HOME: Mode = Mode::Home;

/// One entered container on the breadcrumb stack.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentItem {
    /// Display name of the container.
    pub name: String,
    /// Mode that entering the container produced.
    pub state: Mode,
}

impl ParentItem {
    /// A stack entry for `name` entered as `state`.
    pub fn new(name: impl Into<String>, state: Mode) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }
}

/// The browser's current screen and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NavigationState {
    parent_items: Vec<ParentItem>,
}

impl NavigationState {
    /// The home screen with an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode: the state of the last stack entry, or Home.
    pub fn mode(&self) -> &Mode {
        self.parent_items
            .last()
            .map(|item| &item.state)
            .unwrap_or(&HOME)
    }

    /// Tag of the current mode.
    pub fn kind(&self) -> ModeKind {
        self.mode().kind()
    }

    /// The breadcrumb stack, oldest first.
    pub fn parent_items(&self) -> &[ParentItem] {
        &self.parent_items
    }

    /// Number of entered containers.
    pub fn depth(&self) -> usize {
        self.parent_items.len()
    }

    /// Returns `true` on the home screen.
    pub fn is_home(&self) -> bool {
        self.parent_items.is_empty()
    }

    /// Display name of the current container; `None` at home.
    pub fn current_name(&self) -> Option<&str> {
        self.parent_items.last().map(|item| item.name.as_str())
    }

    /// Descend into `name`, showing it as `child`.
    ///
    /// Pushes exactly one entry. Entering [`Mode::Home`] is the same as
    /// [`go_home`](Self::go_home), since home never sits on the stack.
    #[must_use]
    pub fn enter(&self, name: impl Into<String>, child: Mode) -> NavigationState {
        if child == Mode::Home {
            return self.go_home();
        }
        let mut parent_items = Vec::with_capacity(self.parent_items.len() + 1);
        parent_items.extend_from_slice(&self.parent_items);
        parent_items.push(ParentItem::new(name, child));
        NavigationState { parent_items }
    }

    /// Jump back to stack entry `index`.
    ///
    /// Keeps entries `0..=index`; the mode becomes the one stored at
    /// `index`. Jumping to `depth() - 1` returns an equal state.
    ///
    /// # Errors
    ///
    /// [`NavError::IndexOutOfRange`] when `index >= depth()`.
    pub fn go_to_ancestor(&self, index: usize) -> Result<NavigationState, NavError> {
        let len = self.parent_items.len();
        let kept = self
            .parent_items
            .get(..=index)
            .ok_or(NavError::IndexOutOfRange { index, len })?;
        Ok(NavigationState {
            parent_items: kept.to_vec(),
        })
    }

    /// The home screen, discarding all history.
    #[must_use]
    pub fn go_home(&self) -> NavigationState {
        NavigationState::new()
    }

    /// Serialize the state as JSON.
    ///
    /// # Errors
    ///
    /// [`NavError::Serialization`] if encoding fails.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, NavError> {
        serde_json::to_string(self).map_err(|e| NavError::Serialization(e.to_string()))
    }

    /// Restore a state written by [`to_json`](Self::to_json).
    ///
    /// # Errors
    ///
    /// [`NavError::Deserialization`] for malformed input.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<NavigationState, NavError> {
        serde_json::from_str(json).map_err(|e| NavError::Deserialization(e.to_string()))
    }
}

impl FromIterator<ParentItem> for NavigationState {
    /// Rebuild a state from stack entries.
    ///
    /// Home entries are dropped, as they can never be entered.
    fn from_iter<I: IntoIterator<Item = ParentItem>>(iter: I) -> Self {
        NavigationState {
            parent_items: iter
                .into_iter()
                .filter(|item| item.state != Mode::Home)
                .collect(),
        }
    }
}
