use std::collections::HashMap;

use serde::Serialize;

use crate::scoring::normalize::normalize;
use crate::scoring::phonetic::phonetic_code;

/// Added to the score when any query word and name word share a phonetic code
pub const DEFAULT_PHONETIC_BOOST: f64 = 0.4;

/// Second sequences at least this long drop their most frequent chars from the index
const AUTOJUNK_MIN_LEN: usize = 200;

/// Ratcliff/Obershelp ratio over chars: `2 * M / (len_a + len_b)`, where `M`
/// counts the chars in the matching blocks found by taking the longest common
/// run and recursing on both sides of it.
///
/// Not symmetric: ties between equally long runs resolve towards the start of
/// `a`, so swapping the arguments can change the result.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Ascending positions of every char of `b`, minus the popular ones in long inputs
fn char_positions(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        positions.entry(c).or_default().push(j);
    }

    if b.len() >= AUTOJUNK_MIN_LEN {
        let limit = b.len() / 100 + 1;
        positions.retain(|_, found| found.len() <= limit);
    }
    positions
}

/// Sum of the matching block sizes between `a` and `b`
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let positions = char_positions(b);
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut matched = 0;

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, &positions, (alo, ahi), (blo, bhi));
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, size)`.
///
/// Picks the earliest start in `a`, then in `b`. The run found through the
/// index is then widened over equal neighbours, which lets chars dropped by
/// the autojunk rule join a block.
fn longest_match(
    a: &[char],
    b: &[char],
    positions: &HashMap<char, Vec<usize>>,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run length ending at each position of b, for the previous char of a
    let mut runs: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_runs = HashMap::new();
        if let Some(found) = positions.get(c) {
            for &j in found.iter().skip_while(|&&j| j < blo).take_while(|&&j| j < bhi) {
                let size = j
                    .checked_sub(1)
                    .and_then(|prev| runs.get(&prev))
                    .map_or(1, |run| run + 1);
                next_runs.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        runs = next_runs;
    }

    while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
        best_i -= 1;
        best_j -= 1;
        best_size += 1;
    }
    while best_i + best_size < ahi
        && best_j + best_size < bhi
        && a[best_i + best_size] == b[best_j + best_size]
    {
        best_size += 1;
    }

    (best_i, best_j, best_size)
}

/// The intermediate values behind a similarity score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityBreakdown {
    pub normalized_query: String,
    pub normalized_name: String,
    /// Whole query against whole name
    pub basic: f64,
    /// Best word-level or word-to-whole ratio
    pub best_part: f64,
    /// Boost applied (0.0 when no words sound alike)
    pub phonetic_boost: f64,
    /// Final score, capped at 1.0
    pub score: f64,
}

/// Score `name` against `query` and keep every intermediate value.
pub fn explain(query: &str, name: &str, phonetic_boost: f64) -> SimilarityBreakdown {
    let normalized_query = normalize(query);
    let normalized_name = normalize(name);
    let basic = sequence_ratio(&normalized_query, &normalized_name);

    let query_parts: Vec<&str> = normalized_query.split_whitespace().collect();
    let name_parts: Vec<&str> = normalized_name.split_whitespace().collect();

    if query_parts.is_empty() || name_parts.is_empty() {
        return SimilarityBreakdown {
            basic,
            best_part: basic,
            phonetic_boost: 0.0,
            score: basic,
            normalized_query,
            normalized_name,
        };
    }

    let query_to_name = query_parts
        .iter()
        .map(|q| sequence_ratio(q, &normalized_name));
    let name_to_query = name_parts
        .iter()
        .map(|n| sequence_ratio(&normalized_query, n));
    let pairwise = query_parts
        .iter()
        .flat_map(|q| name_parts.iter().map(move |n| sequence_ratio(q, n)));

    let best_part = query_to_name
        .chain(name_to_query)
        .chain(pairwise)
        .fold(0.0_f64, f64::max);

    let name_codes: Vec<String> = name_parts.iter().map(|n| phonetic_code(n)).collect();
    let sounds_alike = query_parts.iter().any(|q| {
        let code = phonetic_code(q);
        !code.is_empty() && name_codes.contains(&code)
    });
    let phonetic_boost = if sounds_alike { phonetic_boost } else { 0.0 };

    let score = ((basic + best_part) / 2.0 + phonetic_boost).min(1.0);

    SimilarityBreakdown {
        normalized_query,
        normalized_name,
        basic,
        best_part,
        phonetic_boost,
        score,
    }
}

/// Similarity in [0, 1] between a free-text query and a candidate name
pub fn similarity(query: &str, name: &str) -> f64 {
    explain(query, name, DEFAULT_PHONETIC_BOOST).score
}
