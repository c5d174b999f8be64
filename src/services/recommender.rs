use std::cmp::Ordering;

use crate::{
    catalog::{Catalog, SimilarityMatrix},
    error::{AppError, AppResult},
    models::Recommendation,
};

/// Number of recommendations returned per query
pub const TOP_K: usize = 5;

/// Ranks the catalog by similarity to the given title
///
/// Resolves the title to its catalog index (first match), reads that row
/// of the similarity matrix, and returns the `min(TOP_K, N - 1)` highest
/// scoring neighbors in descending order. The queried entry is excluded
/// by index equality, never by sorted position, so a diagonal that is not
/// strictly maximal cannot silently drop a legitimate neighbor.
///
/// Equal scores keep catalog order (stable sort), so repeated calls with
/// the same inputs produce identical ordered output.
pub fn recommend(
    catalog: &Catalog,
    similarity: &SimilarityMatrix,
    title: &str,
) -> AppResult<Vec<Recommendation>> {
    let index = catalog
        .index_of(title)
        .ok_or_else(|| AppError::NotFound(format!("Title not in catalog: {}", title)))?;

    let row = similarity
        .row(index)
        .ok_or_else(|| AppError::Internal(format!("Similarity matrix has no row {}", index)))?;

    let mut scored: Vec<(usize, f32)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(TOP_K);

    Ok(scored
        .into_iter()
        .filter_map(|(i, score)| {
            catalog.title_at(i).map(|t| Recommendation {
                title: t.to_string(),
                similarity: score,
            })
        })
        .collect())
}
