use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Path to the catalog artifact (JSON array of titles)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Path to the similarity matrix artifact (gzipped JSON)
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_catalog_path() -> String {
    "data/catalog.json".to_string()
}

fn default_similarity_path() -> String {
    "data/similarity.json.gz".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
