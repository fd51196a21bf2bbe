//! Disjoint-set forest
//!
//! Path compression on `find`, union by rank on `union`.

/// Union-Find data structure
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
            components: size,
        }
    }

    /// Representative of the set containing `i`
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut curr = i;
        while self.parent[curr] != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }
        root
    }

    /// Merge the sets containing `i` and `j`.
    ///
    /// Returns `false` when they were already in the same set.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        if self.rank[root_i] < self.rank[root_j] {
            self.parent[root_i] = root_j;
        } else if self.rank[root_i] > self.rank[root_j] {
            self.parent[root_j] = root_i;
        } else {
            self.parent[root_j] = root_i;
            self.rank[root_i] += 1;
        }
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }

    /// Number of disjoint sets
    pub fn component_count(&self) -> usize {
        self.components
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(6);
        assert_eq!(uf.component_count(), 6);

        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(3, 4));
        assert!(!uf.union(2, 4));

        assert!(uf.connected(0, 1));
        assert!(uf.connected(2, 4));
        assert!(!uf.connected(1, 2));
        assert!(!uf.connected(5, 0));
        assert_eq!(uf.component_count(), 3);
    }

    #[test]
    fn test_path_compression_flattens_chain() {
        let mut uf = UnionFind::new(1000);
        for i in 1..1000 {
            uf.union(i - 1, i);
        }
        let root = uf.find(999);
        for i in 0..1000 {
            assert_eq!(uf.find(i), root);
        }
        assert_eq!(uf.component_count(), 1);
    }
}
