//! Session-owned controller for the ExtFS browser.

use crate::{
    BreadcrumbConfig, Breadcrumbs, CrumbTarget, Entry, ExtFsSource, Listing, Mode, NavError,
    NavigationState, QueryKey, fetch_listing,
};

/// Holds the single current [`NavigationState`] of one browsing session.
///
/// Each browser view owns its own `Navigator`; nothing is shared between
/// instances. Every transition replaces the whole state.
///
/// # Example
///
/// ```rust
/// use extfs_nav::{HomeEntry, Mode, Navigator};
///
/// let mut nav = Navigator::new();
/// let local = HomeEntry::Local { name: "this-node".into(), node_id: "n0".into() };
/// assert!(nav.open(&local));
/// assert_eq!(nav.mode(), &Mode::Node);
///
/// nav.go_home();
/// assert!(nav.state().is_home());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavigationState,
    config: BreadcrumbConfig,
}

impl Navigator {
    /// A session at the home screen with default breadcrumbs.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session at the home screen with custom breadcrumbs.
    pub fn with_config(config: BreadcrumbConfig) -> Self {
        Self {
            state: NavigationState::new(),
            config,
        }
    }

    /// The current state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The current mode.
    pub fn mode(&self) -> &Mode {
        self.state.mode()
    }

    /// Breadcrumb options.
    pub fn config(&self) -> &BreadcrumbConfig {
        &self.config
    }

    /// Replace the current state, returning the previous one.
    pub fn replace(&mut self, state: NavigationState) -> NavigationState {
        log::debug!(
            "navigate {} (depth {}) -> {} (depth {})",
            self.state.kind(),
            self.state.depth(),
            state.kind(),
            state.depth()
        );
        std::mem::replace(&mut self.state, state)
    }

    /// Descend into `name` as `child`.
    pub fn enter(&mut self, name: impl Into<String>, child: Mode) {
        let next = self.state.enter(name, child);
        self.replace(next);
    }

    /// Click on a row: descend if the row allows it.
    ///
    /// Returns `false`, leaving the state untouched, for files and
    /// unavailable rows.
    pub fn open<E: Entry + ?Sized>(&mut self, entry: &E) -> bool {
        match entry.descend(self.state.mode()) {
            Some(child) => {
                self.enter(entry.name(), child);
                true
            }
            None => {
                log::debug!("ignoring click on {:?}", entry.name());
                false
            }
        }
    }

    /// Jump back to breadcrumb stack entry `index`.
    ///
    /// # Errors
    ///
    /// [`NavError::IndexOutOfRange`]; the state is left untouched.
    pub fn go_to_ancestor(&mut self, index: usize) -> Result<(), NavError> {
        match self.state.go_to_ancestor(index) {
            Ok(next) => {
                self.replace(next);
                Ok(())
            }
            Err(err) => {
                log::warn!("rejected breadcrumb jump: {err}");
                Err(err)
            }
        }
    }

    /// Back to the home screen.
    pub fn go_home(&mut self) {
        let next = self.state.go_home();
        self.replace(next);
    }

    /// Apply a breadcrumb click.
    ///
    /// # Errors
    ///
    /// [`NavError::IndexOutOfRange`] for a stale ancestor index.
    pub fn select(&mut self, target: CrumbTarget) -> Result<(), NavError> {
        match target {
            CrumbTarget::Home => {
                self.go_home();
                Ok(())
            }
            CrumbTarget::Ancestor(index) => self.go_to_ancestor(index),
        }
    }

    /// Breadcrumbs for the current state.
    pub fn breadcrumbs(&self) -> Breadcrumbs {
        Breadcrumbs::from_state(&self.state, &self.config)
    }

    /// Fetch identities for the current screen.
    pub fn query_keys(&self) -> Vec<QueryKey> {
        self.state.mode().query_keys()
    }

    /// List the current screen from `source`.
    ///
    /// # Errors
    ///
    /// Whatever the source reports.
    pub fn refresh<S: ExtFsSource + ?Sized>(&self, source: &S) -> Result<Listing, NavError> {
        fetch_listing(source, self.state.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileType, NodeItem};

    fn media_dir(available: bool) -> NodeItem {
        NodeItem {
            id: 5,
            name: "media".into(),
            file_type: FileType::Directory,
            available,
            updated_at: None,
        }
    }

    #[test]
    fn navigators_are_independent() {
        let mut first = Navigator::new();
        let second = Navigator::new();
        first.enter("NodeA", Mode::Node);
        assert_eq!(first.state().depth(), 1);
        assert!(second.state().is_home());
    }

    #[test]
    fn replace_returns_previous_state() {
        let mut nav = Navigator::new();
        nav.enter("NodeA", Mode::Node);
        let previous = nav.replace(NavigationState::new());
        assert_eq!(previous.depth(), 1);
        assert!(nav.state().is_home());
    }

    #[test]
    fn open_descends_into_directories_only() {
        let mut nav = Navigator::new();
        nav.enter("NodeA", Mode::Node);

        assert!(!nav.open(&media_dir(false)));
        assert_eq!(nav.state().depth(), 1);

        assert!(nav.open(&media_dir(true)));
        assert_eq!(nav.mode(), &Mode::file(5));
        assert_eq!(nav.state().current_name(), Some("media"));
    }

    #[test]
    fn failed_jump_keeps_state() {
        let mut nav = Navigator::new();
        nav.enter("NodeA", Mode::Node);
        assert_eq!(
            nav.go_to_ancestor(5),
            Err(NavError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(nav.state().depth(), 1);
    }

    #[test]
    fn select_applies_crumb_targets() {
        let mut nav = Navigator::new();
        nav.enter("NodeA", Mode::Node);
        nav.enter("media", Mode::file(5));
        nav.select(CrumbTarget::Ancestor(0)).unwrap();
        assert_eq!(nav.mode(), &Mode::Node);
        nav.select(CrumbTarget::Home).unwrap();
        assert!(nav.state().is_home());
    }

    #[test]
    fn config_flows_into_breadcrumbs() {
        let nav = Navigator::with_config(BreadcrumbConfig::default().with_root_label("Shares"));
        assert_eq!(nav.config().root_label, "Shares");
        assert_eq!(nav.breadcrumbs().root.label, "Shares");
    }

    #[test]
    fn query_keys_follow_mode() {
        let mut nav = Navigator::new();
        assert_eq!(nav.query_keys().len(), 2);
        nav.enter("peer", Mode::remote("p1"));
        assert_eq!(
            nav.query_keys()[0].to_string(),
            "extfs-remote-items?nodeId=p1"
        );
    }
}
