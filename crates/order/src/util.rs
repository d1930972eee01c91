//! LLRB tree operations over owned links.
//!
//! Every mutating helper consumes a subtree root and returns the root that
//! replaces it. Callers reattach the returned node where the old one was.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use super::types::{Link, LlrbNode};

/// Check if a link is red. Absent links are black.
#[inline]
pub fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map(|n| n.is_red()).unwrap_or(false)
}

/// Flip colors of node and its children.
pub fn color_flip<K, V>(node: &mut LlrbNode<K, V>) {
    node.b = !node.b;
    if let Some(l) = node.l.as_mut() {
        l.b = !l.b;
    }
    if let Some(r) = node.r.as_mut() {
        r.b = !r.b;
    }
}

/// Turn a right-leaning red link into a left-leaning one.
pub fn rotate_left<K, V>(mut node: Box<LlrbNode<K, V>>) -> Box<LlrbNode<K, V>> {
    let mut x = node.r.take().expect("rotate_left requires right child");
    node.r = x.l.take();
    x.b = node.b;
    node.b = false;
    x.l = Some(node);
    x
}

/// Turn a left-leaning red link into a right-leaning one.
pub fn rotate_right<K, V>(mut node: Box<LlrbNode<K, V>>) -> Box<LlrbNode<K, V>> {
    let mut x = node.l.take().expect("rotate_right requires left child");
    node.l = x.r.take();
    x.b = node.b;
    node.b = false;
    x.r = Some(node);
    x
}

/// Move red link to the left.
///
/// Borrows redness from the right sibling so that the left child or one of
/// its children is red before descending into it.
pub fn move_red_left<K, V>(mut node: Box<LlrbNode<K, V>>) -> Box<LlrbNode<K, V>> {
    color_flip(&mut node);
    if node.r.as_ref().is_some_and(|r| is_red(&r.l)) {
        node.r = node.r.take().map(rotate_right);
        node = rotate_left(node);
        color_flip(&mut node);
    }
    node
}

/// Restore the LLRB invariants at `node` on the way up from a mutation.
pub fn balance<K, V>(mut node: Box<LlrbNode<K, V>>) -> Box<LlrbNode<K, V>> {
    if is_red(&node.r) && !is_red(&node.l) {
        node = rotate_left(node);
    }
    if node.l.as_ref().is_some_and(|l| l.is_red() && is_red(&l.l)) {
        node = rotate_right(node);
    }
    if is_red(&node.l) && is_red(&node.r) {
        color_flip(&mut node);
    }
    node
}

/// Insert `k` into the subtree, or replace the value stored under it.
///
/// Returns the new subtree root and the replaced value, if any.
pub fn put<K: Ord, V>(link: Link<K, V>, k: K, v: V) -> (Box<LlrbNode<K, V>>, Option<V>) {
    let Some(mut node) = link else {
        return (Box::new(LlrbNode::new(k, v)), None);
    };

    let old = match k.cmp(&node.k) {
        Ordering::Equal => Some(mem::replace(&mut node.v, v)),
        Ordering::Less => {
            let (l, old) = put(node.l.take(), k, v);
            node.l = Some(l);
            old
        }
        Ordering::Greater => {
            let (r, old) = put(node.r.take(), k, v);
            node.r = Some(r);
            old
        }
    };

    (balance(node), old)
}

/// Delete the minimum node from the subtree.
///
/// Returns the new subtree root and the removed key-value pair.
pub fn delete_min<K, V>(mut node: Box<LlrbNode<K, V>>) -> (Link<K, V>, (K, V)) {
    if node.l.as_ref().is_some_and(|l| !l.is_red() && !is_red(&l.l)) {
        node = move_red_left(node);
    }

    match node.l.take() {
        Some(l) => {
            let (l, min) = delete_min(l);
            node.l = l;
            (Some(balance(node)), min)
        }
        None => {
            // A node without left child has no right child either once the
            // tree is balanced; hand it back anyway rather than drop it.
            let LlrbNode { r, k, v, .. } = *node;
            (r, (k, v))
        }
    }
}

/// Find the minimum node in the subtree.
pub fn min<K, V>(mut node: &LlrbNode<K, V>) -> &LlrbNode<K, V> {
    while let Some(l) = node.l.as_deref() {
        node = l;
    }
    node
}

pub fn find<'a, K, V, Q>(link: &'a Link<K, V>, key: &Q) -> Option<&'a LlrbNode<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut curr = link.as_deref();
    while let Some(node) = curr {
        curr = match key.cmp(node.k.borrow()) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.l.as_deref(),
            Ordering::Greater => node.r.as_deref(),
        };
    }
    None
}

pub fn find_mut<'a, K, V, Q>(link: &'a mut Link<K, V>, key: &Q) -> Option<&'a mut LlrbNode<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut curr = link.as_deref_mut();
    while let Some(node) = curr {
        curr = match key.cmp(node.k.borrow()) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.l.as_deref_mut(),
            Ordering::Greater => node.r.as_deref_mut(),
        };
    }
    None
}

/// Number of nodes on the longest path from `link` down to an absent link.
pub fn height<K, V>(link: &Link<K, V>) -> usize {
    match link {
        None => 0,
        Some(n) => 1 + height(&n.l).max(height(&n.r)),
    }
}

pub fn size<K, V>(link: &Link<K, V>) -> usize {
    match link {
        None => 0,
        Some(n) => 1 + size(&n.l) + size(&n.r),
    }
}

/// Walk the whole tree and report the first LLRB invariant violation.
///
/// Returns the black height of the tree on success.
pub fn assert_llrb_tree<K: Ord, V>(root: &Link<K, V>) -> Result<usize, String> {
    fn check<K: Ord, V>(
        link: &Link<K, V>,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<usize, String> {
        let Some(n) = link else {
            return Ok(0);
        };

        if lower.is_some_and(|lower| n.k <= *lower) || upper.is_some_and(|upper| n.k >= *upper) {
            return Err("Search-tree property violated: key out of order".to_string());
        }
        if is_red(&n.r) {
            return Err("Left-leaning property violated: red right link".to_string());
        }
        if n.is_red() && is_red(&n.l) {
            return Err("Two consecutive red links on a left spine".to_string());
        }

        let left = check(&n.l, lower, Some(&n.k))?;
        let right = check(&n.r, Some(&n.k), upper)?;
        if left != right {
            return Err(format!(
                "Black balance violated: left black height {left}, right black height {right}"
            ));
        }

        Ok(left + usize::from(n.b))
    }

    if is_red(root) {
        return Err("Root link must be black".to_string());
    }
    check(root, None, None)
}
