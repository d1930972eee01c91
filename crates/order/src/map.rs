use std::borrow::Borrow;
use std::fmt::{self, Debug, Display};

use super::iter::{IntoIter, Iter, Keys, Values};
use super::print::render_dot;
use super::types::Link;
use super::util;

/// Ordered map backed by a left-leaning red-black tree.
///
/// `put`, `get`, `contains`, `min` and `delete_min` run in `O(log n)`.
/// Iteration yields entries in ascending key order.
///
/// The map does no internal synchronization. Mutating methods take
/// `&mut self`, so mutation while an iterator is alive does not compile.
pub struct OrderedMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Smallest key, or `None` if the map is empty.
    pub fn min(&self) -> Option<&K> {
        self.root.as_deref().map(|root| &util::min(root).k)
    }

    /// Remove the smallest key and return it together with its value.
    pub fn delete_min(&mut self) -> Option<(K, V)> {
        let root = self.root.take()?;
        let (mut root, min) = util::delete_min(root);
        if let Some(root) = root.as_mut() {
            root.b = true;
        }
        self.root = root;
        self.len -= 1;
        Some(min)
    }

    /// Iterate over all entries in ascending key order.
    ///
    /// Every call starts a new traversal from the smallest key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.len)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        util::height(&self.root)
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Associate `value` with `key`.
    ///
    /// Returns the previous value if `key` was already present; the key and
    /// the tree shape are then left untouched.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let (mut root, old) = util::put(self.root.take(), key, value);
        root.b = true;
        self.root = Some(root);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        util::find(&self.root, key).map(|n| &n.v)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        util::find_mut(&mut self.root, key).map(|n| &mut n.v)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        util::find(&self.root, key).is_some()
    }

    /// Check every LLRB invariant and that the cached length is accurate.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_llrb_tree(&self.root)?;
        let size = util::size(&self.root);
        if size != self.len {
            return Err(format!("Length mismatch: len {} but {size} nodes", self.len));
        }
        Ok(())
    }
}

impl<K: Display, V> OrderedMap<K, V> {
    /// Graphviz rendering of the internal tree, for debugging.
    pub fn render_dot(&self) -> String {
        render_dot(&self.root)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K: Debug, V: Debug> Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { map: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_returns_replaced_value() {
        let mut map = OrderedMap::new();
        assert_eq!(map.put(1, "a"), None);
        assert_eq!(map.put(1, "b"), Some("a"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&"b"));
    }

    #[test]
    fn root_is_black_after_every_mutation() {
        let mut map = OrderedMap::new();
        for k in 0..32 {
            map.put(k, k);
            assert!(map.root.as_ref().is_some_and(|r| r.b));
        }
        while map.delete_min().is_some() {
            assert!(map.root.as_ref().map(|r| r.b).unwrap_or(true));
        }
    }

    #[test]
    fn clear_drops_everything() {
        let mut map: OrderedMap<i32, i32> = (0..10).map(|k| (k, k)).collect();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.min(), None);
        map.assert_valid().unwrap();
    }
}
