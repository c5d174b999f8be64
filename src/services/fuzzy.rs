use std::cmp::Ordering;

use strsim::normalized_levenshtein;

/// Default number of matches returned to the search control
pub const DEFAULT_LIMIT: usize = 5;

/// Minimum similarity ratio for a candidate to count as a match.
/// Candidates below this are treated as noise rather than typos.
const SCORE_CUTOFF: f64 = 0.6;

/// Finds the known titles closest to a free-text query
///
/// Case-insensitive similarity ratio over character sequences, descending
/// score order, at most `limit` results. The sort is stable so equal
/// scores keep catalog order, making the output deterministic for
/// identical inputs. Returns an empty vec when nothing clears the cutoff;
/// callers fall back to the unfiltered selection list.
pub fn close_matches(query: &str, titles: &[String], limit: usize) -> Vec<String> {
    let query = query.to_lowercase();

    let mut scored: Vec<(f64, &String)> = titles
        .iter()
        .filter_map(|title| {
            let score = normalized_levenshtein(&query, &title.to_lowercase());
            (score >= SCORE_CUTOFF).then_some((score, title))
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(limit);

    scored.into_iter().map(|(_, title)| title.clone()).collect()
}
