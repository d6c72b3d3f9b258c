use crate::index::VertexIndex;

/// Disjoint sets of vertices. Every vertex starts as a singleton.
///
/// The representative of a set is one of its members. Which one is an
/// implementation detail; callers must not rely on it beyond `find`.
pub(crate) struct UnionFind {
    parent: Vec<VertexIndex>,
    size: Vec<u32>,
}

impl UnionFind {
    pub(crate) fn new(n: usize) -> Self {
        Self { parent: (0..n).map(VertexIndex::new).collect(), size: vec![1; n] }
    }

    /// Turns every vertex back into a singleton.
    pub(crate) fn reset(&mut self) {
        for (i, parent) in self.parent.iter_mut().enumerate() {
            *parent = VertexIndex::new(i);
        }
        self.size.fill(1);
    }

    pub(crate) fn find(&mut self, x: VertexIndex) -> VertexIndex {
        let mut root = x;
        while self.parent[root.index()] != root {
            root = self.parent[root.index()];
        }
        let mut x = x;
        while self.parent[x.index()] != root {
            let next = self.parent[x.index()];
            self.parent[x.index()] = root;
            x = next;
        }
        root
    }

    /// Merges the sets of `x` and `y` and returns the representative of the union.
    pub(crate) fn union(&mut self, x: VertexIndex, y: VertexIndex) -> VertexIndex {
        let (mut x, mut y) = (self.find(x), self.find(y));
        if x == y {
            return x;
        }
        if self.size[x.index()] < self.size[y.index()] {
            std::mem::swap(&mut x, &mut y);
        }
        self.parent[y.index()] = x;
        self.size[x.index()] += self.size[y.index()];
        x
    }

    /// Merges all sets of the given vertices. Returns `None` for an empty input.
    pub(crate) fn union_all(&mut self, xs: impl IntoIterator<Item = VertexIndex>) -> Option<VertexIndex> {
        let mut xs = xs.into_iter();
        let first = xs.next()?;
        Some(xs.fold(self.find(first), |root, x| self.union(root, x)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn v(x: usize) -> VertexIndex {
        VertexIndex::new(x)
    }

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new(4);
        for i in 0..4 {
            assert_eq!(uf.find(v(i)), v(i));
        }
    }

    #[test]
    fn union_merges_sets() {
        let mut uf = UnionFind::new(6);
        let r = uf.union(v(0), v(1));
        assert!(r == v(0) || r == v(1));
        assert_eq!(uf.find(v(0)), uf.find(v(1)));
        assert_ne!(uf.find(v(0)), uf.find(v(2)));

        uf.union(v(2), v(3));
        uf.union(v(3), v(4));
        assert_eq!(uf.find(v(2)), uf.find(v(4)));
        assert_ne!(uf.find(v(1)), uf.find(v(4)));

        let r = uf.union(v(1), v(4));
        for i in 0..5 {
            assert_eq!(uf.find(v(i)), r);
        }
        assert_eq!(uf.find(v(5)), v(5));
    }

    #[test]
    fn union_all_and_reset() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.union_all([]), None);
        assert_eq!(uf.union_all([v(3)]), Some(v(3)));

        let r = uf.union_all([v(0), v(2), v(4), v(2)]).unwrap();
        assert_eq!(uf.find(v(0)), r);
        assert_eq!(uf.find(v(2)), r);
        assert_eq!(uf.find(v(4)), r);
        assert_eq!(uf.find(v(1)), v(1));

        uf.reset();
        for i in 0..5 {
            assert_eq!(uf.find(v(i)), v(i));
        }
    }

    #[test]
    fn long_chain_is_compressed() {
        let n = 1000;
        let mut uf = UnionFind::new(n);
        for i in 1..n {
            uf.union(v(i - 1), v(i));
        }
        let r = uf.find(v(0));
        assert!((0..n).all(|i| uf.find(v(i)) == r));
        assert!((0..n).all(|i| uf.parent[i] == r));
    }
}
