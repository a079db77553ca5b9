//! Entity catalogs
//!
//! Projects and posts the terminal can list and open. A catalog keeps its
//! entries in insertion order, which is also the order they are listed in.

use crate::error::{Result, TerminalError};
use serde::{Deserialize, Serialize};

/// The two kinds of entity the terminal knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A code project
    Project,
    /// A blog post
    Post,
}

impl EntityKind {
    /// Singular lowercase name, as typed after `open`
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Project => "project",
            EntityKind::Post => "post",
        }
    }

    /// Header line of the listing
    pub fn header(&self) -> &'static str {
        match self {
            EntityKind::Project => "Projects:",
            EntityKind::Post => "Posts:",
        }
    }

    /// Trailing usage hint of the listing
    pub fn usage_hint(&self) -> &'static str {
        match self {
            EntityKind::Project => "Use \"open project [id]\" to view a project.",
            EntityKind::Post => "Use \"open post [id]\" to read a post.",
        }
    }

    /// Error text for an id that is not in the catalog
    pub fn not_found(&self) -> &'static str {
        match self {
            EntityKind::Project => "Project not found. Use \"projects\" to see available projects.",
            EntityKind::Post => "Post not found. Use \"posts\" to see available posts.",
        }
    }
}

/// A listable, openable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Lookup key, compared by exact string equality
    pub id: String,
    /// Display name
    pub name: String,
    /// Link opened by `open <kind> <id>`
    pub url: String,
}

impl Entity {
    /// Create a new entity
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Whether `open <kind> <id>` can ever resolve to this id
///
/// The id is compared against trimmed, lower-cased input.
fn is_reachable_id(id: &str) -> bool {
    !id.is_empty() && id.trim() == id && id.to_lowercase() == id
}

/// Ordered, immutable id → entity mapping
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: EntityKind,
    entries: Vec<Entity>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and ids `open` cannot reach
    pub fn new(kind: EntityKind, entries: Vec<Entity>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if !is_reachable_id(&entry.id) {
                return Err(TerminalError::UnreachableEntityId {
                    kind: kind.name().to_string(),
                    id: entry.id.clone(),
                });
            }
            if entries[..i].iter().any(|e| e.id == entry.id) {
                return Err(TerminalError::DuplicateEntity {
                    kind: kind.name().to_string(),
                    id: entry.id.clone(),
                });
            }
        }

        Ok(Self { kind, entries })
    }

    /// The projects shown on levkany.com
    pub fn default_projects() -> Self {
        Self {
            kind: EntityKind::Project,
            entries: vec![
                Entity::new("1", "PyAPI", "https://github.com/levkany/PyAPI"),
                Entity::new(
                    "2",
                    "Simple Webhooks",
                    "https://github.com/levkany/simple-webhooks",
                ),
                Entity::new(
                    "3",
                    "Coding Challenges",
                    "https://github.com/levkany/challanges",
                ),
            ],
        }
    }

    /// The posts shown on levkany.com
    pub fn default_posts() -> Self {
        Self {
            kind: EntityKind::Post,
            entries: vec![
                Entity::new("1", "Building Scalable APIs", "#"),
                Entity::new("2", "Clean Architecture in Python", "#"),
            ],
        }
    }

    /// What this catalog holds
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Look an entity up by exact id
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the listing shown by `projects` / `posts`
    pub fn listing(&self) -> String {
        let mut output = format!("{}\n\n", self.kind.header());
        for entity in &self.entries {
            output.push_str(&format!("  [{}] {}\n", entity.id, entity.name));
        }
        output.push('\n');
        output.push_str(self.kind.usage_hint());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_projects_order() {
        let projects = Catalog::default_projects();
        let ids: Vec<&str> = projects.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(projects.kind(), EntityKind::Project);
    }

    #[test]
    fn test_lookup_is_exact() {
        let projects = Catalog::default_projects();
        assert_eq!(projects.get("1").map(|e| e.name.as_str()), Some("PyAPI"));
        assert!(projects.get("01").is_none());
        assert!(projects.get(" 1").is_none());
        assert!(projects.get("99").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(
            EntityKind::Post,
            vec![
                Entity::new("1", "First", "#"),
                Entity::new("1", "Again", "#"),
            ],
        );
        assert!(matches!(
            result,
            Err(TerminalError::DuplicateEntity { ref id, .. }) if id == "1"
        ));
    }

    #[test]
    fn test_unreachable_ids_rejected() {
        for id in ["A1", " 2", "3 ", ""] {
            let result = Catalog::new(EntityKind::Project, vec![Entity::new(id, "X", "#")]);
            assert!(
                matches!(result, Err(TerminalError::UnreachableEntityId { .. })),
                "id {id:?} was accepted"
            );
        }

        let catalog =
            Catalog::new(EntityKind::Project, vec![Entity::new("my app", "X", "#")]).unwrap();
        assert!(catalog.get("my app").is_some());
    }

    #[test]
    fn test_listing_format() {
        let posts = Catalog::default_posts();
        assert_eq!(
            posts.listing(),
            "Posts:\n\n  [1] Building Scalable APIs\n  [2] Clean Architecture in Python\n\nUse \"open post [id]\" to read a post."
        );
    }

    #[test]
    fn test_listing_keeps_insertion_order() {
        let catalog = Catalog::new(
            EntityKind::Project,
            vec![
                Entity::new("b", "Second", "#"),
                Entity::new("a", "First", "#"),
            ],
        )
        .unwrap();
        let listing = catalog.listing();
        let second = listing.find("[b] Second").unwrap();
        let first = listing.find("[a] First").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_empty_catalog_listing() {
        let catalog = Catalog::new(EntityKind::Project, Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.listing(),
            "Projects:\n\n\nUse \"open project [id]\" to view a project."
        );
    }
}
