//! Union-Find over a fixed universe of hashable elements
//!
//! Elements are interned to dense slots at construction time. Parent and rank
//! bookkeeping then works on slot indices, so `find` and `union` cost a hash
//! lookup plus near-constant amortized work (path compression + union by rank).

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ClusterError;

/// Disjoint-set forest over a universe fixed at construction time.
///
/// `find` compresses paths and therefore needs `&mut self`; wrap the whole
/// structure in a lock if it must be shared across threads.
#[derive(Debug, Clone)]
pub struct DisjointSetUnion<T> {
    /// Element to slot index
    index: HashMap<T, usize>,

    /// Slot index to element, in insertion order
    elements: Vec<T>,

    /// Parent pointers (parent[i] == i for roots)
    parent: Vec<usize>,

    /// Upper bound on the height of each root's tree
    rank: Vec<u32>,

    /// Number of disjoint groups
    clusters: usize,
}

impl<T: Hash + Eq + Clone> DisjointSetUnion<T> {
    /// Create a forest where every distinct element is its own group.
    ///
    /// Duplicates collapse onto the first occurrence.
    pub fn new<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let elements = elements.into_iter();
        let (capacity, _) = elements.size_hint();

        let mut index = HashMap::with_capacity(capacity);
        let mut slots = Vec::with_capacity(capacity);

        for element in elements {
            if index.contains_key(&element) {
                continue;
            }
            index.insert(element.clone(), slots.len());
            slots.push(element);
        }

        let size = slots.len();
        Self {
            index,
            elements: slots,
            parent: (0..size).collect(),
            rank: vec![0; size],
            clusters: size,
        }
    }

    /// Number of elements in the universe
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether `x` was part of the universe at construction
    pub fn contains<Q>(&self, x: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(x)
    }

    /// Current number of disjoint groups
    pub fn cluster_count(&self) -> usize {
        self.clusters
    }

    /// Return the representative of the group containing `x`.
    ///
    /// Every node on the path to the root is re-pointed at the root. The
    /// partition itself never changes.
    pub fn find<Q>(&mut self, x: &Q) -> Result<&T, ClusterError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let slot = self.slot(x)?;
        let root = self.find_root(slot);
        Ok(&self.elements[root])
    }

    /// Merge the groups containing `x` and `y`.
    ///
    /// Returns `true` when two distinct groups were joined. On equal ranks
    /// `y`'s root is attached under `x`'s root. Both elements are checked
    /// before anything is touched, so a failed call leaves the forest as it was.
    pub fn union<Q>(&mut self, x: &Q, y: &Q) -> Result<bool, ClusterError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let x = self.slot(x)?;
        let y = self.slot(y)?;

        let root_x = self.find_root(x);
        let root_y = self.find_root(y);

        if root_x == root_y {
            return Ok(false);
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.clusters -= 1;
        Ok(true)
    }

    /// Whether `x` and `y` currently share a representative
    pub fn connected<Q>(&mut self, x: &Q, y: &Q) -> Result<bool, ClusterError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let x = self.slot(x)?;
        let y = self.slot(y)?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Enumerate the current partition.
    ///
    /// Groups appear in order of their first member in the universe, and
    /// members keep insertion order within a group.
    pub fn get_clusters(&mut self) -> Vec<Vec<T>> {
        let mut group_of_root: Vec<Option<usize>> = vec![None; self.elements.len()];
        let mut groups: Vec<Vec<T>> = Vec::with_capacity(self.clusters);

        for slot in 0..self.elements.len() {
            let root = self.find_root(slot);
            let group = match group_of_root[root] {
                Some(group) => group,
                None => {
                    groups.push(Vec::new());
                    group_of_root[root] = Some(groups.len() - 1);
                    groups.len() - 1
                }
            };
            groups[group].push(self.elements[slot].clone());
        }

        groups
    }

    fn slot<Q>(&self, x: &Q) -> Result<usize, ClusterError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.index
            .get(x)
            .copied()
            .ok_or_else(|| ClusterError::unknown(x))
    }

    /// Two passes: locate the root, then rewrite the path
    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for DisjointSetUnion<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}
