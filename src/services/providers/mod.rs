use std::sync::Arc;

use async_trait::async_trait;

pub mod omdb;

/// Movie metadata provider abstraction
///
/// Both lookups are best-effort against a third-party text-search API
/// keyed by title string, so an ambiguous title may silently resolve to
/// the wrong record. Neither operation ever propagates a failure: network
/// and parse errors degrade to the documented sentinels so a flaky
/// provider can never fail a recommendation request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Poster URL for a title, `None` when the provider has no image,
    /// does not recognize the title, or the lookup fails
    async fn fetch_poster(&self, title: &str) -> Option<String>;

    /// IMDb rating for a title, `0.0` when the provider has no rating,
    /// does not recognize the title, or the lookup fails
    async fn fetch_rating(&self, title: &str) -> f64;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Fetches ratings for every title concurrently
///
/// One task per title; results are joined in input order, so the caller
/// observes the same sequence it passed in. A task that dies degrades to
/// the 0.0 sentinel like any other failed lookup.
pub async fn ratings_for(provider: Arc<dyn MetadataProvider>, titles: &[String]) -> Vec<f64> {
    let mut tasks = Vec::with_capacity(titles.len());

    for title in titles {
        let provider = provider.clone();
        let title = title.clone();
        tasks.push(tokio::spawn(
            async move { provider.fetch_rating(&title).await },
        ));
    }

    let mut ratings = Vec::with_capacity(tasks.len());
    for task in tasks {
        match task.await {
            Ok(rating) => ratings.push(rating),
            Err(e) => {
                tracing::error!(error = %e, "Rating lookup task failed");
                ratings.push(0.0);
            }
        }
    }

    ratings
}

/// Fetches posters for every title concurrently, joined in input order
pub async fn posters_for(
    provider: Arc<dyn MetadataProvider>,
    titles: &[String],
) -> Vec<Option<String>> {
    let mut tasks = Vec::with_capacity(titles.len());

    for title in titles {
        let provider = provider.clone();
        let title = title.clone();
        tasks.push(tokio::spawn(
            async move { provider.fetch_poster(&title).await },
        ));
    }

    let mut posters = Vec::with_capacity(tasks.len());
    for task in tasks {
        match task.await {
            Ok(poster) => posters.push(poster),
            Err(e) => {
                tracing::error!(error = %e, "Poster lookup task failed");
                posters.push(None);
            }
        }
    }

    posters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub_provider() -> Arc<MockMetadataProvider> {
        let mut mock = MockMetadataProvider::new();
        mock.expect_fetch_rating().returning(|title| match title {
            "Beta" => 7.0,
            "Gamma" => 6.9,
            "Delta" => 8.1,
            _ => 0.0,
        });
        mock.expect_fetch_poster().returning(|title| match title {
            "Beta" => Some("https://posters.test/beta.jpg".to_string()),
            _ => None,
        });
        Arc::new(mock)
    }

    #[tokio::test]
    async fn test_ratings_join_in_input_order() {
        let titles = vec![
            "Beta".to_string(),
            "Gamma".to_string(),
            "Delta".to_string(),
        ];
        let ratings = ratings_for(stub_provider(), &titles).await;
        assert_eq!(ratings, vec![7.0, 6.9, 8.1]);
    }

    #[tokio::test]
    async fn test_unknown_titles_degrade_to_zero() {
        let titles = vec!["Nope".to_string()];
        let ratings = ratings_for(stub_provider(), &titles).await;
        assert_eq!(ratings, vec![0.0]);
    }

    #[tokio::test]
    async fn test_posters_join_in_input_order() {
        let titles = vec!["Gamma".to_string(), "Beta".to_string()];
        let posters = posters_for(stub_provider(), &titles).await;
        assert_eq!(
            posters,
            vec![None, Some("https://posters.test/beta.jpg".to_string())]
        );
    }
}
