//! Node type of the LLRB tree.
//!
//! Each node owns its children through [`Link`]s; there are no parent
//! links, so every restructuring is written as a function that consumes a
//! subtree and returns the new subtree root for the caller to reattach.

/// Owned link to a subtree. `None` is an absent (null) link.
pub type Link<K, V> = Option<Box<LlrbNode<K, V>>>;

#[derive(Clone, Debug)]
pub struct LlrbNode<K, V> {
    pub l: Link<K, V>,
    pub r: Link<K, V>,
    pub k: K,
    pub v: V,
    /// Color of the link from the parent: `true` = black, `false` = red.
    pub b: bool,
}

impl<K, V> LlrbNode<K, V> {
    /// New nodes always enter the tree through a red link.
    pub fn new(k: K, v: V) -> Self {
        Self {
            l: None,
            r: None,
            k,
            v,
            b: false,
        }
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        !self.b
    }
}
