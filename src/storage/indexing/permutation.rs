use std::collections::{HashMap, HashSet};

use crate::core::{EncodedTriple, TermId};

/// One of the six orderings of (subject, predicate, object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permutation {
    Spo,
    Sop,
    Pso,
    Pos,
    Osp,
    Ops,
}

impl Permutation {
    pub const ALL: [Permutation; 6] = [
        Permutation::Spo,
        Permutation::Sop,
        Permutation::Pso,
        Permutation::Pos,
        Permutation::Osp,
        Permutation::Ops,
    ];

    /// Reorder a stored fact into this permutation's key order.
    pub fn project(self, t: &EncodedTriple) -> [TermId; 3] {
        let (s, p, o) = (t.subject, t.predicate, t.object);
        match self {
            Permutation::Spo => [s, p, o],
            Permutation::Sop => [s, o, p],
            Permutation::Pso => [p, s, o],
            Permutation::Pos => [p, o, s],
            Permutation::Osp => [o, s, p],
            Permutation::Ops => [o, p, s],
        }
    }

    /// Inverse of [`Permutation::project`].
    pub fn restore(self, [a, b, c]: [TermId; 3]) -> EncodedTriple {
        match self {
            Permutation::Spo => EncodedTriple::new(a, b, c),
            Permutation::Sop => EncodedTriple::new(a, c, b),
            Permutation::Pso => EncodedTriple::new(b, a, c),
            Permutation::Pos => EncodedTriple::new(c, a, b),
            Permutation::Osp => EncodedTriple::new(b, c, a),
            Permutation::Ops => EncodedTriple::new(c, b, a),
        }
    }

    /// The index whose leading keys are exactly the bound positions.
    pub fn for_bound(subject: bool, predicate: bool, object: bool) -> Permutation {
        match (subject, predicate, object) {
            (true, true, true) => Permutation::Spo,
            (false, true, true) => Permutation::Pos,
            (true, false, true) => Permutation::Sop,
            (true, true, false) => Permutation::Spo,
            (false, false, true) => Permutation::Osp,
            (false, true, false) => Permutation::Pso,
            (true, false, false) => Permutation::Spo,
            (false, false, false) => Permutation::Spo,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Permutation::Spo => "SPO",
            Permutation::Sop => "SOP",
            Permutation::Pso => "PSO",
            Permutation::Pos => "POS",
            Permutation::Osp => "OSP",
            Permutation::Ops => "OPS",
        }
    }
}

/// Two-level map: first key -> second key -> set of third keys.
#[derive(Debug)]
pub struct PermutationIndex {
    order: Permutation,
    entries: HashMap<TermId, HashMap<TermId, HashSet<TermId>>>,
}

impl PermutationIndex {
    pub fn new(order: Permutation) -> Self {
        Self { order, entries: HashMap::new() }
    }

    pub fn order(&self) -> Permutation {
        self.order
    }

    /// Returns false if the fact was already indexed.
    pub fn insert(&mut self, triple: &EncodedTriple) -> bool {
        let [a, b, c] = self.order.project(triple);
        self.entries.entry(a).or_default().entry(b).or_default().insert(c)
    }

    pub fn contains(&self, triple: &EncodedTriple) -> bool {
        let [a, b, c] = self.order.project(triple);
        self.entries.get(&a).and_then(|level| level.get(&b)).map_or(false, |set| set.contains(&c))
    }

    /// Walk the entries under `prefix` (zero, one or two leading keys in this
    /// index's order) and yield them as facts in subject, predicate, object order.
    /// Keys past the second are ignored.
    pub fn scan<'a>(&'a self, prefix: &[TermId]) -> Box<dyn Iterator<Item = EncodedTriple> + 'a> {
        let order = self.order;
        match *prefix {
            [a, b, ..] => Box::new(
                self.entries
                    .get(&a)
                    .and_then(|level| level.get(&b))
                    .into_iter()
                    .flatten()
                    .map(move |&c| order.restore([a, b, c])),
            ),
            [a] => Box::new(self.entries.get(&a).into_iter().flat_map(move |level| {
                level.iter().flat_map(move |(&b, thirds)| thirds.iter().map(move |&c| order.restore([a, b, c])))
            })),
            [] => Box::new(self.entries.iter().flat_map(move |(&a, level)| {
                level.iter().flat_map(move |(&b, thirds)| thirds.iter().map(move |&c| order.restore([a, b, c])))
            })),
        }
    }
}
