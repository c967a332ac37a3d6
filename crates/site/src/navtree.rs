//! Flat navigation tree accumulator
//!
//! Catalog queries return items in no particular order. `NavTreeResult`
//! collects them by path and links each one to its parent, so a child may be
//! added before its parent and is adopted once the parent arrives. Parents
//! that never arrive stay as placeholders without an item.

use std::collections::HashMap;

/// Parent of a `/`-separated path; the parent of a top-level segment is `""`
pub fn parent_path(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}

#[derive(Debug, Clone)]
struct Entry<T> {
    item: Option<T>,
    children: Vec<String>,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            item: None,
            children: Vec::new(),
        }
    }
}

/// Nested navigation node produced by [`NavTreeResult::into_tree`]
#[derive(Debug, Clone, PartialEq)]
pub struct NavNode<T> {
    /// Path of this node
    pub path: String,
    /// The item, `None` for placeholder parents
    pub item: Option<T>,
    /// Child nodes, in insertion order
    pub children: Vec<NavNode<T>>,
}

/// Items keyed by path, with parent/child links
#[derive(Debug, Clone)]
pub struct NavTreeResult<T> {
    entries: HashMap<String, Entry<T>>,
}

impl<T> Default for NavTreeResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NavTreeResult<T> {
    /// Empty result
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `item` at `path`.
    ///
    /// Adding the same path twice replaces the item and keeps its children.
    pub fn add(&mut self, path: &str, item: T) {
        self.link_upward(path);
        self.entries.entry(path.to_string()).or_default().item = Some(item);
    }

    /// Register `path` with its parent, creating placeholder ancestors until
    /// one that already has an entry is reached.
    fn link_upward(&mut self, path: &str) {
        let mut child = path.to_string();
        loop {
            let parent = parent_path(&child).to_string();
            if parent == child {
                return;
            }
            let known = self.entries.contains_key(&parent);
            let entry = self.entries.entry(parent.clone()).or_default();
            if !entry.children.contains(&child) {
                entry.children.push(child);
            }
            if known {
                return;
            }
            child = parent;
        }
    }

    /// Item stored at `path`
    pub fn get(&self, path: &str) -> Option<&T> {
        self.entries.get(path).and_then(|e| e.item.as_ref())
    }

    /// True if `path` has an entry, placeholder or not
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Items directly below `path`, in insertion order
    pub fn children(&self, path: &str) -> Vec<&T> {
        self.child_paths(path)
            .iter()
            .filter_map(|c| self.get(c))
            .collect()
    }

    /// Paths directly below `path`, in insertion order
    pub fn child_paths(&self, path: &str) -> &[String] {
        self.entries
            .get(path)
            .map_or(&[][..], |e| e.children.as_slice())
    }

    /// Number of entries, placeholders included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the result and build the nested tree below `root`.
    ///
    /// Returns `None` if `root` has no entry.
    pub fn into_tree(mut self, root: &str) -> Option<NavNode<T>> {
        self.take_node(root)
    }

    fn take_node(&mut self, path: &str) -> Option<NavNode<T>> {
        // Removing first guards against the root being its own parent.
        let entry = self.entries.remove(path)?;
        let children = entry
            .children
            .iter()
            .filter_map(|c| self.take_node(c))
            .collect();
        Some(NavNode {
            path: path.to_string(),
            item: entry.item,
            children,
        })
    }
}
