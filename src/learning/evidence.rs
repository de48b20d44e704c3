//! Vote counting for candidate corrections.

use std::collections::BTreeMap;

use ahash::AHashMap;

/// Counts of candidate replacements observed for each wrong token.
#[derive(Debug, Clone, Default)]
pub struct CorrectionEvidence {
    votes: AHashMap<String, AHashMap<String, usize>>,
}

impl CorrectionEvidence {
    /// Create empty evidence.
    pub fn new() -> Self {
        CorrectionEvidence {
            votes: AHashMap::new(),
        }
    }

    /// Record one vote for `wrong` → `candidate`.
    pub fn record(&mut self, wrong: &str, candidate: &str) {
        *self
            .votes
            .entry(wrong.to_string())
            .or_default()
            .entry(candidate.to_string())
            .or_insert(0) += 1;
    }

    /// Add all votes of `other` to this evidence.
    pub fn merge(&mut self, other: CorrectionEvidence) {
        for (wrong, candidates) in other.votes {
            let counts = self.votes.entry(wrong).or_default();
            for (candidate, count) in candidates {
                *counts.entry(candidate).or_insert(0) += count;
            }
        }
    }

    /// Votes recorded for `wrong` → `candidate`.
    pub fn count(&self, wrong: &str, candidate: &str) -> usize {
        self.votes
            .get(wrong)
            .and_then(|candidates| candidates.get(candidate))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct wrong tokens.
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    /// Check if no votes were recorded.
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Total number of votes.
    pub fn total_votes(&self) -> usize {
        self.votes.values().flat_map(|c| c.values()).sum()
    }

    /// Reduce the evidence to one accepted correction per wrong token.
    ///
    /// The best candidate is the one with most votes; ties go to the
    /// alphabetically smallest. It is accepted when it has at least
    /// `min_support` votes and holds at least `min_share` of all votes for
    /// that token.
    pub fn collapse(&self, min_support: usize, min_share: f64) -> BTreeMap<String, String> {
        let mut accepted = BTreeMap::new();

        for (wrong, candidates) in &self.votes {
            let total: usize = candidates.values().sum();
            let best = candidates
                .iter()
                .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)));

            if let Some((candidate, &count)) = best
                && count >= min_support
                && count as f64 / total.max(1) as f64 >= min_share
            {
                accepted.insert(wrong.clone(), candidate.clone());
            }
        }

        accepted
    }
}
