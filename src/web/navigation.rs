//! Navigation table mapping URL paths to pages.
//!
//! The table is an ordered, immutable list of [`RouteEntry`] values. Paths are
//! matched exactly: no wildcards, no prefix matching, no trailing-slash
//! variants (those are normalized away before routing). Paths and names are
//! unique within a table, so at most one entry ever matches.
//!
//! Two tables exist. [`NavigationTable::current`] is the one served.
//! [`NavigationTable::legacy`] is the earlier layout, which had an `Articles`
//! page where the current table has `Posts`; its leftover paths are
//! redirected to their current counterparts.

use std::collections::HashSet;
use std::fmt;

/// A renderable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Main,
    Login,
    Register,
    Articles,
    Posts,
    Profile,
    Friends,
    ActivityFeed,
}

impl Page {
    /// Pages that need a signed-in user.
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Page::Articles | Page::Posts | Page::Profile | Page::Friends | Page::ActivityFeed
        )
    }

    /// Human readable title shown in the navigation bar and `<title>`.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Main => "Home",
            Page::Login => "Sign in",
            Page::Register => "Sign up",
            Page::Articles => "Articles",
            Page::Posts => "Posts",
            Page::Profile => "Profile",
            Page::Friends => "Friends",
            Page::ActivityFeed => "Activity",
        }
    }
}

/// Association of a URL path with a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
}

impl RouteEntry {
    pub const fn new(path: &'static str, name: &'static str, page: Page) -> Self {
        Self { path, name, page }
    }
}

pub const ROUTES: [RouteEntry; 7] = [
    RouteEntry::new("/", "Main", Page::Main),
    RouteEntry::new("/login", "Login", Page::Login),
    RouteEntry::new("/register", "Register", Page::Register),
    RouteEntry::new("/posts", "Posts", Page::Posts),
    RouteEntry::new("/profile", "Profile", Page::Profile),
    RouteEntry::new("/friends", "Friends", Page::Friends),
    RouteEntry::new("/activity", "ActivityFeed", Page::ActivityFeed),
];

pub const LEGACY_ROUTES: [RouteEntry; 7] = [
    RouteEntry::new("/", "Main", Page::Main),
    RouteEntry::new("/login", "Login", Page::Login),
    RouteEntry::new("/register", "Register", Page::Register),
    RouteEntry::new("/articles", "Articles", Page::Articles),
    RouteEntry::new("/profile", "Profile", Page::Profile),
    RouteEntry::new("/friends", "Friends", Page::Friends),
    RouteEntry::new("/activity", "ActivityFeed", Page::ActivityFeed),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),
    #[error("duplicate route name: {0}")]
    DuplicateName(&'static str),
    #[error("route path must start with '/': {0}")]
    InvalidPath(&'static str),
}

/// Ordered, immutable set of route entries with unique paths and names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTable {
    entries: Vec<RouteEntry>,
}

impl NavigationTable {
    /// Builds a table, rejecting duplicate paths or names.
    pub fn new(entries: &[RouteEntry]) -> Result<Self, NavigationError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for entry in entries {
            if !entry.path.starts_with('/') {
                return Err(NavigationError::InvalidPath(entry.path));
            }
            if !paths.insert(entry.path) {
                return Err(NavigationError::DuplicatePath(entry.path));
            }
            if !names.insert(entry.name) {
                return Err(NavigationError::DuplicateName(entry.name));
            }
        }

        Ok(Self {
            entries: entries.to_vec(),
        })
    }

    /// The table served by the application.
    pub fn current() -> Self {
        Self {
            entries: ROUTES.to_vec(),
        }
    }

    /// The earlier table with `/articles` in place of `/posts`.
    pub fn legacy() -> Self {
        Self {
            entries: LEGACY_ROUTES.to_vec(),
        }
    }

    /// Exact path lookup.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of `self` that `other` lacks, in order.
    pub fn difference<'a>(&'a self, other: &'a NavigationTable) -> Vec<&'a RouteEntry> {
        self.entries
            .iter()
            .filter(|entry| !other.entries.contains(entry))
            .collect()
    }

    /// Maps paths of `older` missing from this table to the entry at the same
    /// position here.
    pub fn redirects_from(&self, older: &NavigationTable) -> Vec<(&'static str, &RouteEntry)> {
        older
            .entries
            .iter()
            .zip(self.entries.iter())
            .filter(|(old, _)| self.resolve(old.path).is_none())
            .map(|(old, new)| (old.path, new))
            .collect()
    }
}

impl Default for NavigationTable {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for NavigationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{:<12} {:<14} {:?}", entry.path, entry.name, entry.page)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_pass_validation() {
        assert_eq!(NavigationTable::new(&ROUTES).unwrap(), NavigationTable::current());
        assert_eq!(
            NavigationTable::new(&LEGACY_ROUTES).unwrap(),
            NavigationTable::legacy()
        );
    }

    #[test]
    fn test_paths_and_names_are_distinct() {
        for table in [NavigationTable::current(), NavigationTable::legacy()] {
            let paths: HashSet<_> = table.iter().map(|e| e.path).collect();
            let names: HashSet<_> = table.iter().map(|e| e.name).collect();
            assert_eq!(paths.len(), table.len());
            assert_eq!(names.len(), table.len());
        }
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let entries = [
            RouteEntry::new("/", "Main", Page::Main),
            RouteEntry::new("/", "Other", Page::Login),
        ];
        assert_eq!(
            NavigationTable::new(&entries),
            Err(NavigationError::DuplicatePath("/"))
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let entries = [
            RouteEntry::new("/a", "Same", Page::Main),
            RouteEntry::new("/b", "Same", Page::Login),
        ];
        assert_eq!(
            NavigationTable::new(&entries),
            Err(NavigationError::DuplicateName("Same"))
        );
    }

    #[test]
    fn test_relative_path_rejected() {
        let entries = [RouteEntry::new("login", "Login", Page::Login)];
        assert_eq!(
            NavigationTable::new(&entries),
            Err(NavigationError::InvalidPath("login"))
        );
    }

    #[test]
    fn test_resolve_each_declared_path() {
        let table = NavigationTable::current();
        for entry in table.iter() {
            assert_eq!(table.resolve(entry.path), Some(entry));
        }

        assert_eq!(table.resolve("/posts").map(|e| e.page), Some(Page::Posts));
        assert_eq!(
            table.resolve("/activity").map(|e| e.name),
            Some("ActivityFeed")
        );
    }

    #[test]
    fn test_resolve_is_exact() {
        let table = NavigationTable::current();

        for path in ["/unknown", "/articles", "/posts/1", "/Posts", "posts", "", "/login/"] {
            assert!(table.resolve(path).is_none(), "{path} should not match");
        }
    }

    #[test]
    fn test_by_name() {
        let table = NavigationTable::current();
        assert_eq!(table.by_name("Friends").map(|e| e.path), Some("/friends"));
        assert!(table.by_name("Articles").is_none());
    }

    #[test]
    fn test_tables_differ_only_in_fourth_entry() {
        let current = NavigationTable::current();
        let legacy = NavigationTable::legacy();

        assert_eq!(
            legacy.difference(&current),
            vec![&RouteEntry::new("/articles", "Articles", Page::Articles)]
        );
        assert_eq!(
            current.difference(&legacy),
            vec![&RouteEntry::new("/posts", "Posts", Page::Posts)]
        );

        for (i, (old, new)) in legacy.iter().zip(current.iter()).enumerate() {
            if i == 3 {
                assert_ne!(old, new);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_legacy_redirects() {
        let current = NavigationTable::current();
        let redirects = current.redirects_from(&NavigationTable::legacy());

        assert_eq!(redirects.len(), 1);
        assert_eq!(redirects[0].0, "/articles");
        assert_eq!(redirects[0].1.path, "/posts");
    }

    #[test]
    fn test_session_requirements() {
        let public: Vec<_> = NavigationTable::current()
            .iter()
            .filter(|e| !e.page.requires_session())
            .map(|e| e.name)
            .collect();

        assert_eq!(public, vec!["Main", "Login", "Register"]);
    }
}
