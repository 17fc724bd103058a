use std::collections::HashMap;

use crate::core::{EncodedPattern, EncodedTriple, TermId};

/// Frequency counts over stored facts, used to estimate pattern selectivity
/// without traversing an index.
#[derive(Debug, Default)]
pub struct SelectivityStatistics {
    count_s: HashMap<TermId, u64>,
    count_p: HashMap<TermId, u64>,
    count_o: HashMap<TermId, u64>,
    count_sp: HashMap<(TermId, TermId), u64>,
    count_so: HashMap<(TermId, TermId), u64>,
    count_po: HashMap<(TermId, TermId), u64>,
}

impl SelectivityStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one newly stored fact.
    pub fn record(&mut self, t: &EncodedTriple) {
        *self.count_s.entry(t.subject).or_insert(0) += 1;
        *self.count_p.entry(t.predicate).or_insert(0) += 1;
        *self.count_o.entry(t.object).or_insert(0) += 1;
        *self.count_sp.entry((t.subject, t.predicate)).or_insert(0) += 1;
        *self.count_so.entry((t.subject, t.object)).or_insert(0) += 1;
        *self.count_po.entry((t.predicate, t.object)).or_insert(0) += 1;
    }

    /// Number of facts matching a pattern with at most two bound positions.
    /// `total` is returned when nothing is bound. Fully bound patterns are
    /// answered by a membership test instead, so they yield `None` here.
    pub fn estimate(&self, pattern: &EncodedPattern, total: u64) -> Option<u64> {
        let get = |map: &HashMap<TermId, u64>, key: TermId| map.get(&key).copied().unwrap_or(0);
        let get_pair =
            |map: &HashMap<(TermId, TermId), u64>, key: (TermId, TermId)| map.get(&key).copied().unwrap_or(0);

        let count = match (pattern.subject, pattern.predicate, pattern.object) {
            (Some(_), Some(_), Some(_)) => return None,
            (None, Some(p), Some(o)) => get_pair(&self.count_po, (p, o)),
            (Some(s), None, Some(o)) => get_pair(&self.count_so, (s, o)),
            (Some(s), Some(p), None) => get_pair(&self.count_sp, (s, p)),
            (None, None, Some(o)) => get(&self.count_o, o),
            (None, Some(p), None) => get(&self.count_p, p),
            (Some(s), None, None) => get(&self.count_s, s),
            (None, None, None) => total,
        };
        Some(count)
    }
}
