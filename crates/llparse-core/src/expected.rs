//! Expectation sets reported by failed parse attempts.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;

/// Descriptions of what would have matched at a failure position.
///
/// Keeps insertion order and drops duplicates. Two sets are equal only if
/// they hold the same items in the same order.
#[derive(Clone, Debug, Default)]
pub struct Expected {
    items: IndexSet<Arc<str>>,
}

impl Expected {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(item: impl Into<Arc<str>>) -> Self {
        let mut set = Self::new();
        set.insert(item);
        set
    }

    /// Add an item. Returns false if it was already present (position unchanged).
    pub fn insert(&mut self, item: impl Into<Arc<str>>) -> bool {
        self.items.insert(item.into())
    }

    /// Append the items of `other` that are not yet present, in their order.
    pub fn union(&mut self, other: Expected) {
        self.items.extend(other.items);
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| &**item)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PartialEq for Expected {
    fn eq(&self, other: &Self) -> bool {
        self.items.iter().eq(other.items.iter())
    }
}

impl Eq for Expected {}

impl<S: Into<Arc<str>>> FromIterator<S> for Expected {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        let Some(first) = iter.next() else {
            return f.write_str("nothing");
        };
        if self.len() == 1 {
            return write!(f, "`{first}`");
        }
        write!(f, "one of `{first}`")?;
        for item in iter {
            write!(f, ", `{item}`")?;
        }
        Ok(())
    }
}
