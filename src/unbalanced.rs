//! An unbalanced BST. Keys go where the comparisons send them and nothing ever rotates, so the
//! shape of the tree is entirely decided by insertion order. Inserting keys in sorted order gives
//! a tree shaped like a linked list.
//!
//! Equal keys are kept, not merged: a key that compares equal to a node's key is routed into
//! that node's right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//! assert_eq!(tree.height(), -1);
//!
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.search(&40));
//! assert!(!tree.search(&90));
//! assert_eq!(tree.inorder_traversal(), [&20, &30, &40, &50, &60, &70, &80]);
//! assert_eq!(tree.height(), 2);
//!
//! // Duplicates are stored again.
//! tree.insert(50);
//! assert_eq!(tree.size(), 8);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::trace;

/// An optional, exclusively owned subtree.
type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree without any balancing. This can be used for inserting and searching for
/// keys and for walking them in the three depth-first orders.
///
/// Every walk uses an explicit stack so even a fully degenerate tree can't overflow the call
/// stack, and dropping the tree tears it down the same way.
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Unlink children before each node goes out of scope so `Box`'s own drop never recurses.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    /// Copies the tree node for node, so the clone has exactly the same shape.
    fn clone(&self) -> Self {
        // Postorder hands us both children of a node before the node itself, so finished
        // subtrees can be kept on a stack until their parent claims them.
        let nodes = self.postorder_nodes();
        let mut built: Vec<Box<Node<K>>> = Vec::with_capacity(nodes.len());
        for node in &nodes {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
            }));
        }
        trace!("cloned tree of {} nodes", nodes.len());

        Self { root: built.pop() }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("inorder", &self.inorder_traversal())
            .field("height", &self.height())
            .finish()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if nothing has been inserted into this tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given key into the tree. Smaller keys descend left and everything else
    /// (including keys equal to the one being compared against) descends right. The new node is
    /// attached at the first empty slot on that path.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(5);
    /// tree.insert(5);
    /// tree.insert(5);
    ///
    /// // Equal keys form a chain down the right side.
    /// assert_eq!(tree.size(), 3);
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.inorder_traversal(), [&5, &5, &5]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut depth = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }
        *link = Some(Node::new_boxed(key));
        trace!("attached new node at depth {}", depth);
    }

    /// Returns whether a node with the given key exists in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(!tree.search(&1));
    ///
    /// tree.insert(1);
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Returns the keys in sorted order by visiting the left subtree, then the subtree root, then
    /// the right subtree. Duplicates come out next to each other in the order they were
    /// inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::unbalanced::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7, 2, 4, 6, 8, 1].iter().copied().collect();
    ///
    /// assert_eq!(tree.inorder_traversal(), [&1, &2, &3, &4, &5, &6, &7, &8]);
    /// ```
    pub fn inorder_traversal(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        let mut stack: Vec<&Node<K>> = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    keys.push(&node.key);
                    current = node.right.as_deref();
                }
                None => return keys,
            }
        }
    }

    /// Returns the keys by visiting the subtree root, then the left subtree, then the right
    /// subtree. The first key is always the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::unbalanced::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7, 2, 4, 6, 8, 1].iter().copied().collect();
    ///
    /// assert_eq!(tree.preorder_traversal(), [&5, &3, &2, &1, &4, &7, &6, &8]);
    /// ```
    pub fn preorder_traversal(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        self.walk(|node, _| keys.push(&node.key));
        keys
    }

    /// Returns the keys by visiting the left subtree, then the right subtree, then the subtree
    /// root. The last key is always the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::unbalanced::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7, 2, 4, 6, 8, 1].iter().copied().collect();
    ///
    /// assert_eq!(tree.postorder_traversal(), [&1, &2, &4, &3, &6, &8, &7, &5]);
    /// ```
    pub fn postorder_traversal(&self) -> Vec<&K> {
        self.postorder_nodes()
            .into_iter()
            .map(|node| &node.key)
            .collect()
    }

    /// Gets the number of edges on the longest path from the root to a leaf. A single node has a
    /// height of `0` and an empty tree has a height of `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Ascending keys never branch.
    /// tree.extend(vec![2, 3, 4, 5]);
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        self.walk(|_, depth| height = height.max(depth as isize));
        height
    }

    /// Gets the number of nodes in this tree, counting every duplicate.
    pub fn size(&self) -> usize {
        let mut size = 0;
        self.walk(|_, _| size += 1);
        size
    }

    /// Returns the smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key, if any. When the largest key was inserted more than once this is
    /// the most recently inserted copy.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Visits every node in preorder along with its depth (the root is at depth `0`).
    fn walk<'a>(&'a self, mut visit: impl FnMut(&'a Node<K>, usize)) {
        let mut stack: Vec<(&Node<K>, usize)> =
            self.root.as_deref().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            // Right first so the left subtree is popped (and visited) first.
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
        }
    }

    /// Collects the nodes in postorder. This is the reverse of a root, right, left walk.
    fn postorder_nodes(&self) -> Vec<&Node<K>> {
        let mut nodes = Vec::new();
        let mut stack: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            nodes.push(node);
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
        }
        nodes.reverse();
        nodes
    }
}

/// A `Node` holds one inserted key and owns up to two subtrees. Everything in `left` is less
/// than `key` and nothing in `right` is less than `key`.
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}
