//! Edit distance for dictionary suggestions.

/// Levenshtein distance between `word` and `candidate`, or `None` once it is
/// certain to exceed `max`.
///
/// Characters are compared as Unicode scalar values, so `ğ` against `g` counts
/// as one substitution.
pub fn bounded_distance(word: &str, candidate: &str, max: usize) -> Option<usize> {
    let word: Vec<char> = word.chars().collect();
    let candidate: Vec<char> = candidate.chars().collect();

    if word.len().abs_diff(candidate.len()) > max {
        return None;
    }

    // row[j]: distance between the prefix of `word` read so far and candidate[..j]
    let mut row: Vec<usize> = (0..=candidate.len()).collect();

    for (i, &wc) in word.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &cc) in candidate.iter().enumerate() {
            let substitution = diagonal + usize::from(wc != cc);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }

        if row.iter().min().is_some_and(|&best| best > max) {
            return None;
        }
    }

    row.last().copied().filter(|&distance| distance <= max)
}
