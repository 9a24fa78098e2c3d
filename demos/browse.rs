//! Walk the ExtFS browser through a session with a static data source.
//!
//! Shows how a UI layer wires rows, clicks and breadcrumbs to the
//! navigation core.
//!
//! Run with: `cargo run --example browse`

use extfs_nav::*;

// =============================================================================
// Step 1: A minimal source
// =============================================================================

/// Fixed rows for every mode; a real implementation calls the backend.
struct StaticSource;

impl ExtFsSource for StaticSource {
    fn home_entries(&self) -> Result<Vec<HomeEntry>, NavError> {
        Ok(vec![
            HomeEntry::Local {
                name: "workstation".into(),
                node_id: "n0".into(),
            },
            HomeEntry::Remote {
                name: "nas".into(),
                node_id: "n1".into(),
                available: true,
                updated_at: Some("2024-06-01T10:00:00Z".into()),
            },
        ])
    }

    fn node_items(&self) -> Result<Vec<NodeItem>, NavError> {
        Ok(vec![NodeItem {
            id: 1,
            name: "projects".into(),
            file_type: FileType::Directory,
            available: true,
            updated_at: None,
        }])
    }

    fn file_items(
        &self,
        _item_id: i64,
        parent_path: Option<&str>,
    ) -> Result<Vec<FileItem>, NavError> {
        let base = parent_path.unwrap_or("/projects");
        Ok(["alpha", "beta"]
            .iter()
            .enumerate()
            .map(|(idx, name)| FileItem {
                id: idx as i64 + 10,
                name: (*name).into(),
                file_type: FileType::Directory,
                file_path: format!("{base}/{name}"),
                available: true,
                updated_at: None,
            })
            .collect())
    }

    fn remote_items(&self, _node_id: &str) -> Result<Vec<RemoteItem>, NavError> {
        Ok(vec![])
    }

    fn remote_file_items(
        &self,
        _node_id: &str,
        _item_id: i64,
        _parent_path: Option<&str>,
    ) -> Result<Vec<RemoteFileItem>, NavError> {
        Ok(vec![])
    }
}

// =============================================================================
// Step 2: Render helpers
// =============================================================================

fn render(nav: &Navigator) -> String {
    let crumbs = nav.breadcrumbs();
    crumbs
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::Link(crumb) => crumb.label.clone(),
            Segment::Collapsed(hidden) => format!("[…{}]", hidden.len()),
            Segment::Current(name) => format!("*{name}*"),
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

fn click_first(nav: &mut Navigator, source: &StaticSource) -> Result<(), NavError> {
    let listing = nav.refresh(source)?;
    if let Some(entry) = listing.entries().first() {
        nav.open(*entry);
    }
    Ok(())
}

// =============================================================================
// Step 3: A session
// =============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()?;

    let source = StaticSource;
    let mut nav = Navigator::new();
    println!("{}", render(&nav));

    for _ in 0..5 {
        click_first(&mut nav, &source)?;
        println!("{}", render(&nav));
    }

    for key in nav.query_keys() {
        println!("fetch key: {key}");
    }

    nav.go_to_ancestor(1)?;
    println!("after jump: {}", render(&nav));

    let picker = PathBreadcrumbs::from_path(r"C:\Users\me\Documents\notes.txt")?;
    let dirs: Vec<_> = picker.crumbs.iter().map(|c| c.label.as_str()).collect();
    println!(
        "picker: {} / {} / {}",
        picker.root,
        dirs.join(" / "),
        picker.current.unwrap_or_default()
    );

    nav.go_home();
    println!("{}", render(&nav));
    Ok(())
}
