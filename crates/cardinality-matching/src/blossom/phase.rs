use petgraph::visit::{IntoNeighbors, NodeCompactIndexable};
use tracing::trace;

use crate::index::VertexIndex;
use crate::queue::Queue;
use crate::union_find::UnionFind;

/// A piece of an alternating path. Sub-paths hidden inside a blossom are
/// expanded lazily, so nesting depth does not translate into call depth.
#[derive(Copy, Clone, Debug)]
enum Segment {
    Vertex(VertexIndex),
    /// The path from `start` up to `goal`, emitted back to front if `reversed`.
    Path { start: VertexIndex, goal: VertexIndex, reversed: bool },
}

impl Segment {
    fn reversed(self) -> Self {
        match self {
            Segment::Path { start, goal, reversed } => Segment::Path { start, goal, reversed: !reversed },
            vertex => vertex,
        }
    }
}

/// Bookkeeping for one augmenting path search.
///
/// The structure tree is stored implicitly:
/// + `s[b]` is the parent of the S-blossom with leader `b`, a T-vertex, or `b`
///   itself if the blossom is a root. Only entries of current leaders are
///   meaningful.
/// + `t[x]` is the S-vertex with an unmatched edge to the T-vertex `x`. The
///   parent of `x` in the structure tree is the blossom containing `t[x]`.
/// + `base[x]` is set once the T-vertex `x` becomes part of a blossom. It holds
///   the S–S edge `(v, w)` that closed the blossom, with `v` on the same side
///   as `x`.
///
/// All buffers are allocated once and reused by every phase.
pub(crate) struct PhaseState {
    leader: UnionFind,
    s: Vec<VertexIndex>,
    t: Vec<VertexIndex>,
    base: Vec<(VertexIndex, VertexIndex)>,
    unexplored: Queue<VertexIndex>,
    visited: [Vec<u32>; 2],
    gen: u32,
    segments: Vec<Segment>,
    walk: Vec<Segment>,
    path: Vec<VertexIndex>,
}

impl PhaseState {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            leader: UnionFind::new(n),
            s: vec![VertexIndex::end(); n],
            t: vec![VertexIndex::end(); n],
            base: vec![(VertexIndex::end(), VertexIndex::end()); n],
            unexplored: Queue::with_capacity(n),
            visited: [vec![0; n], vec![0; n]],
            gen: 0,
            segments: vec![],
            walk: vec![],
            path: Vec::with_capacity(n),
        }
    }

    fn reset(&mut self, mates: &[VertexIndex]) {
        self.leader.reset();
        self.s.fill(VertexIndex::end());
        self.t.fill(VertexIndex::end());
        self.unexplored.clear();
        for (i, mate) in mates.iter().enumerate() {
            if !mate.is_valid() {
                let v = VertexIndex::new(i);
                self.s[i] = v;
                self.unexplored.push_back(v);
            }
        }
    }

    /// Searches for one augmenting path and applies it to `mates`.
    ///
    /// Returns whether the matching grew by one edge. If not, `mates` is
    /// unchanged.
    pub(crate) fn search<G>(&mut self, graph: G, mates: &mut [VertexIndex]) -> bool
    where
        G: NodeCompactIndexable + IntoNeighbors,
    {
        self.reset(mates);
        trace!(roots = self.unexplored.len(), "phase start");

        // First-in first-out order favors short augmenting paths.
        while let Some(v) = self.unexplored.pop_front() {
            for w in graph.neighbors(graph.from_index(v.index())) {
                let w = VertexIndex::new(graph.to_index(w));
                if self.is_s_vertex(w) {
                    if self.ss_edge(v, w, mates) {
                        return true;
                    }
                } else if !self.t[w.index()].is_valid() {
                    self.t[w.index()] = v;
                    let u = mates[w.index()];
                    debug_assert!(u.is_valid(), "T-vertex {w} is unmatched");
                    if !self.is_s_vertex(u) {
                        self.s[u.index()] = w;
                        self.unexplored.push_back(u);
                    }
                }
            }
        }
        false
    }

    fn is_s_vertex(&mut self, x: VertexIndex) -> bool {
        let b = self.leader.find(x);
        self.s[b.index()].is_valid()
    }

    fn is_root(&mut self, b: VertexIndex) -> bool {
        self.leader.find(self.s[b.index()]) == b
    }

    fn next_generation(&mut self) {
        if self.gen == u32::MAX {
            self.visited.iter_mut().for_each(|marks| marks.fill(0));
            self.gen = 0;
        }
        self.gen += 1;
    }

    /// Moves one S-blossom up the structure tree and marks `head` as visited
    /// by `side`. Roots stay in place.
    fn step(&mut self, head: VertexIndex, side: usize) -> VertexIndex {
        let head = self.leader.find(head);
        let parent = self.leader.find(self.s[head.index()]);
        if parent == head {
            return head;
        }
        self.visited[side][head.index()] = self.gen;
        self.leader.find(self.t[parent.index()])
    }

    /// Handles an edge between two S-vertices. It either closes a blossom or
    /// connects two different structure trees, in which case the matching is
    /// augmented and `true` is returned.
    fn ss_edge(&mut self, v: VertexIndex, w: VertexIndex, mates: &mut [VertexIndex]) -> bool {
        let (mut head1, mut head2) = (self.leader.find(v), self.leader.find(w));
        if head1 == head2 {
            return false;
        }

        // Walk up both branches in lockstep. The first blossom seen by both
        // walks is the nearest common ancestor.
        self.next_generation();
        loop {
            head1 = self.step(head1, 0);
            head2 = self.step(head2, 1);

            if head1 == head2 {
                self.form_blossom(v, w, head1);
                return false;
            }
            if self.is_root(head1) && self.is_root(head2) {
                self.augment(v, w, mates);
                return true;
            }
            if self.visited[1][head1.index()] == self.gen {
                self.form_blossom(v, w, head1);
                return false;
            }
            if self.visited[0][head2.index()] == self.gen {
                self.form_blossom(v, w, head2);
                return false;
            }
        }
    }

    /// Contracts the cycle closed by the edge `v`-`w` into a single S-blossom
    /// that takes the place of the common ancestor `a`.
    fn form_blossom(&mut self, v: VertexIndex, w: VertexIndex, a: VertexIndex) {
        let a = self.leader.find(a);
        let mut members = std::mem::take(&mut self.path);
        members.clear();
        for (x, y) in [(v, w), (w, v)] {
            let mut head = self.leader.find(x);
            members.push(head);
            while head != a {
                let tnode = self.s[head.index()];
                self.base[tnode.index()] = (x, y);
                self.unexplored.push_back(tnode);
                head = self.leader.find(self.t[tnode.index()]);
                members.extend([tnode, head]);
            }
        }

        let parent = self.s[a.index()];
        let b = self.leader.union_all(members.iter().copied()).unwrap_or(a);
        self.s[b.index()] = parent;
        trace!(base = %a, leader = %b, size = members.len(), "blossom");
        self.path = members;
    }

    fn augment(&mut self, v: VertexIndex, w: VertexIndex, mates: &mut [VertexIndex]) {
        self.alternate(v, mates);
        self.alternate(w, mates);
        mates[v.index()] = w;
        mates[w.index()] = v;
        trace!(%v, %w, "augment");
    }

    /// Flips the alternating path from the root of the structure tree to `v`,
    /// leaving `v` unmatched and the root matched.
    fn alternate(&mut self, v: VertexIndex, mates: &mut [VertexIndex]) {
        self.alternating_path(v, mates);
        for pair in self.path.chunks_exact(2) {
            mates[pair[0].index()] = pair[1];
            mates[pair[1].index()] = pair[0];
        }
    }

    /// Writes the alternating path between `v` and the root of its structure
    /// tree to `self.path`, root first.
    fn alternating_path(&mut self, v: VertexIndex, mates: &[VertexIndex]) {
        let mut segments = std::mem::take(&mut self.segments);
        let mut walk = std::mem::take(&mut self.walk);
        self.path.clear();

        segments.push(Segment::Path { start: v, goal: VertexIndex::end(), reversed: true });
        while let Some(segment) = segments.pop() {
            match segment {
                Segment::Vertex(x) => self.path.push(x),
                Segment::Path { start, goal, reversed } => {
                    walk.clear();
                    self.walk_up(start, goal, mates, &mut walk);
                    if reversed {
                        segments.extend(walk.iter().map(|segment| segment.reversed()));
                    } else {
                        segments.extend(walk.iter().rev().copied());
                    }
                }
            }
        }

        self.segments = segments;
        self.walk = walk;
    }

    /// Collects the segments of the path from `start` to the T-vertex `goal`,
    /// or to the root if `goal` is not on the way.
    fn walk_up(&self, start: VertexIndex, goal: VertexIndex, mates: &[VertexIndex], out: &mut Vec<Segment>) {
        let mut start = start;
        loop {
            // A former T-vertex inside a blossom is left through the edge that
            // closed the blossom.
            while self.t[start.index()].is_valid() {
                let (v, w) = self.base[start.index()];
                out.push(Segment::Path { start: v, goal: start, reversed: true });
                start = w;
            }
            out.push(Segment::Vertex(start));
            let tnode = mates[start.index()];
            if !tnode.is_valid() {
                return;
            }
            out.push(Segment::Vertex(tnode));
            if tnode == goal {
                return;
            }
            start = self.t[tnode.index()];
        }
    }
}
