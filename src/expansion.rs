//! Tracks which collapsible regions of a rendered workflow are open.
//!
//! A region is addressed by an [`ExpansionKey`], derived from the owning node's
//! identifier plus a fixed discriminator. The state is owned by one interactive
//! session and never becomes part of the document.

use ahash::AHashSet;
use serde::Serialize;
use std::fmt;

/// The kinds of collapsible regions a node owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Parameters,
    Credentials,
    Message,
}

impl Region {
    /// The discriminator appended to the node identifier.
    pub fn suffix(self) -> &'static str {
        match self {
            Region::Parameters => "",
            Region::Credentials => "-credentials",
            Region::Message => "-message",
        }
    }
}

/// Synthetic identifier of one collapsible region.
///
/// Keys are plain concatenations, so a node whose identifier already ends in a
/// region suffix can share a key with another node's region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ExpansionKey(String);

impl ExpansionKey {
    pub fn new(node_id: &str, region: Region) -> Self {
        Self(format!("{}{}", node_id, region.suffix()))
    }

    pub fn parameters(node_id: &str) -> Self {
        Self::new(node_id, Region::Parameters)
    }

    pub fn credentials(node_id: &str) -> Self {
        Self::new(node_id, Region::Credentials)
    }

    pub fn message(node_id: &str) -> Self {
        Self::new(node_id, Region::Message)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpansionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpansionKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// The set of currently expanded regions. Starts empty: everything collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: AHashSet<ExpansionKey>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `key`. Returns whether the region is now expanded.
    pub fn toggle(&mut self, key: &ExpansionKey) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.clone());
            true
        }
    }

    pub fn is_expanded(&self, key: &ExpansionKey) -> bool {
        self.expanded.contains(key)
    }

    pub fn expand(&mut self, key: ExpansionKey) {
        self.expanded.insert(key);
    }

    pub fn collapse(&mut self, key: &ExpansionKey) {
        self.expanded.remove(key);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expanded keys in a stable order.
    pub fn keys(&self) -> Vec<&ExpansionKey> {
        let mut keys: Vec<_> = self.expanded.iter().collect();
        keys.sort();
        keys
    }
}

impl FromIterator<ExpansionKey> for ExpansionState {
    fn from_iter<I: IntoIterator<Item = ExpansionKey>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().collect(),
        }
    }
}
