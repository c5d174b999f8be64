use std::sync::Arc;

use crate::{
    models::{RatedRecommendation, Recommendation},
    services::providers::{self, MetadataProvider},
};

/// Applies the minimum-rating threshold to ranked recommendations
///
/// Each title's rating is obtained through the metadata provider; the
/// lookups run concurrently and are joined in input order. Titles with a
/// rating at or above `min_rating` are retained (inclusive boundary) in
/// their original order; this never re-sorts by rating. Failed or unknown
/// lookups carry the 0.0 sentinel and therefore drop out whenever
/// `min_rating` is above zero.
pub async fn filter_by_rating(
    provider: Arc<dyn MetadataProvider>,
    recommendations: Vec<Recommendation>,
    min_rating: f64,
) -> Vec<RatedRecommendation> {
    let titles: Vec<String> = recommendations.iter().map(|r| r.title.clone()).collect();
    let ratings = providers::ratings_for(provider, &titles).await;

    recommendations
        .into_iter()
        .zip(ratings)
        .filter(|(_, rating)| *rating >= min_rating)
        .map(|(rec, rating)| RatedRecommendation {
            title: rec.title,
            similarity: rec.similarity,
            rating,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockMetadataProvider;

    fn recommendations(titles: &[&str]) -> Vec<Recommendation> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| Recommendation {
                title: t.to_string(),
                similarity: 1.0 - i as f32 * 0.1,
            })
            .collect()
    }

    fn provider_with_ratings() -> Arc<MockMetadataProvider> {
        let mut mock = MockMetadataProvider::new();
        mock.expect_fetch_rating().returning(|title| match title {
            "Beta" => 7.0,
            "Gamma" => 6.9,
            "Delta" => 8.1,
            _ => 0.0,
        });
        Arc::new(mock)
    }

    #[tokio::test]
    async fn test_threshold_boundary_is_inclusive() {
        let result = filter_by_rating(
            provider_with_ratings(),
            recommendations(&["Beta", "Gamma", "Delta"]),
            7.0,
        )
        .await;

        let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Beta", "Delta"]);
        assert_eq!(result[0].rating, 7.0);
        assert_eq!(result[1].rating, 8.1);
    }

    #[tokio::test]
    async fn test_epsilon_below_threshold_is_excluded() {
        let result =
            filter_by_rating(provider_with_ratings(), recommendations(&["Gamma"]), 7.0).await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_input_order_is_preserved_not_resorted() {
        // Delta (8.1) outscores Beta (7.0) but Beta arrived first
        let result = filter_by_rating(
            provider_with_ratings(),
            recommendations(&["Beta", "Delta"]),
            1.0,
        )
        .await;

        let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Beta", "Delta"]);
    }

    #[tokio::test]
    async fn test_unknown_ratings_drop_under_positive_threshold() {
        let result = filter_by_rating(
            provider_with_ratings(),
            recommendations(&["Unknown Movie", "Delta"]),
            0.1,
        )
        .await;

        let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Delta"]);
    }

    #[tokio::test]
    async fn test_zero_threshold_keeps_unknown_ratings() {
        let result = filter_by_rating(
            provider_with_ratings(),
            recommendations(&["Unknown Movie"]),
            0.0,
        )
        .await;

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].rating, 0.0);
    }
}
