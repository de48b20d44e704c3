//! Ratcliff/Obershelp similarity ("gestalt pattern matching").
//!
//! The ratio is `2 * M / T`, where `T` is the total length of both strings and
//! `M` the number of characters in matching blocks. Blocks are found by taking
//! the longest common substring and recursing on the pieces to its left and
//! right. Ties between equally long substrings go to the one that starts
//! earliest in the first string, then earliest in the second.

/// Find the longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)`.
fn find_longest_match(
    a: &[char],
    b: &[char],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

    // run[j + 1] = length of the match ending at a[i - 1], b[j]
    let mut prev_run = vec![0usize; b.len() + 1];
    let mut curr_run = vec![0usize; b.len() + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            curr_run[j + 1] = if a[i] == b[j] {
                let k = if j > blo { prev_run[j] } else { 0 } + 1;
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
                k
            } else {
                0
            };
        }
        std::mem::swap(&mut prev_run, &mut curr_run);
    }

    (best_i, best_j, best_size)
}

/// Total number of characters in the matching blocks of `a` and `b`.
pub fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut queue = vec![((0, a.len()), (0, b.len()))];

    while let Some(((alo, ahi), (blo, bhi))) = queue.pop() {
        let (i, j, k) = find_longest_match(a, b, (alo, ahi), (blo, bhi));
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            queue.push(((alo, i), (blo, j)));
        }
        if i + k < ahi && j + k < bhi {
            queue.push(((i + k, ahi), (j + k, bhi)));
        }
    }

    total
}

/// Similarity ratio in `[0.0, 1.0]`; two empty strings are identical.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// The candidate most similar to `word`, if any reaches `cutoff`.
///
/// Ties on the ratio go to the lexicographically greatest candidate, so the
/// result does not depend on the order of `candidates`.
pub fn closest_match<'a, I>(word: &str, candidates: I, cutoff: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(f64, &'a str)> = None;

    for candidate in candidates {
        let score = similarity_ratio(candidate, word);
        if score < cutoff {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_score, best_candidate)) => {
                score > best_score || (score == best_score && candidate > best_candidate)
            }
        };
        if better {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}
