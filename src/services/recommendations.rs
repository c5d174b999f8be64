use std::sync::Arc;

use chrono::Utc;

use crate::{
    catalog::{Catalog, SimilarityMatrix},
    error::AppResult,
    models::{EnrichedRecommendation, RecommendationSet},
    services::{
        providers::{self, MetadataProvider},
        rating_filter, recommender,
    },
};

/// Runs the full recommendation pipeline for one user action
///
/// Ranks the catalog by similarity to the selected title, filters the
/// candidates by the rating threshold, then fetches posters for the
/// survivors only. Per-title provider calls run concurrently within each
/// stage and join in order, so the result is identical to the sequential
/// description: similarity order in, similarity order out.
pub async fn build_recommendations(
    catalog: &Catalog,
    similarity: &SimilarityMatrix,
    provider: Arc<dyn MetadataProvider>,
    title: &str,
    min_rating: f64,
) -> AppResult<RecommendationSet> {
    let candidates = recommender::recommend(catalog, similarity, title)?;

    tracing::info!(
        title = %title,
        candidates = candidates.len(),
        min_rating = min_rating,
        provider = provider.name(),
        "Ranked recommendation candidates"
    );

    let rated = rating_filter::filter_by_rating(provider.clone(), candidates, min_rating).await;

    let survivor_titles: Vec<String> = rated.iter().map(|r| r.title.clone()).collect();
    let posters = providers::posters_for(provider, &survivor_titles).await;

    let recommendations: Vec<EnrichedRecommendation> = rated
        .into_iter()
        .zip(posters)
        .map(|(rec, poster_url)| EnrichedRecommendation {
            title: rec.title,
            similarity: rec.similarity,
            rating: rec.rating,
            poster_url,
        })
        .collect();

    let message = recommendations.is_empty().then(|| {
        format!(
            "No recommendations meet the minimum rating of {:.1}",
            min_rating
        )
    });

    Ok(RecommendationSet {
        query: title.to_string(),
        recommendations,
        message,
        generated_at: Utc::now(),
    })
}
