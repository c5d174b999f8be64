use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use serde::Serialize;

/// Errors raised while loading the catalog and similarity artifacts
///
/// All of these are fatal: the server refuses to start rather than run
/// with inconsistent catalog/matrix state.
#[derive(thiserror::Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog artifact contains no titles")]
    EmptyCatalog,

    #[error("Similarity matrix is not square: row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Catalog has {titles} titles but similarity matrix has {rows} rows")]
    CardinalityMismatch { titles: usize, rows: usize },
}

/// A catalog entry as exposed to the selection control
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogEntry {
    pub index: usize,
    pub title: String,
}

/// The authoritative set of known movie titles and their stable indices
///
/// Loaded once at startup and read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    titles: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from an ordered list of titles
    pub fn from_titles(titles: Vec<String>) -> Result<Self, ArtifactError> {
        if titles.is_empty() {
            return Err(ArtifactError::EmptyCatalog);
        }
        Ok(Self { titles })
    }

    /// Parses a catalog artifact: a JSON array of title strings
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ArtifactError> {
        let titles: Vec<String> = serde_json::from_reader(reader)?;
        Self::from_titles(titles)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Resolves a title to its index. Takes the first match when the
    /// catalog contains duplicates.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.titles.iter().position(|t| t == title)
    }

    pub fn title_at(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// Catalog entries in index order, for the selection control
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.titles
            .iter()
            .enumerate()
            .map(|(index, title)| CatalogEntry {
                index,
                title: title.clone(),
            })
            .collect()
    }
}

/// Precomputed pairwise similarity scores between catalog entries
///
/// Row `i` holds the similarity of entry `i` to every other entry,
/// including itself. Symmetry is a property of the source artifact and
/// is not verified here.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    /// Builds a matrix from raw rows, verifying it is square
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, ArtifactError> {
        let expected = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(ArtifactError::NotSquare {
                    row: i,
                    expected,
                    actual: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Parses a gzip-compressed JSON array-of-arrays artifact
    pub fn from_gzip_reader<R: Read>(reader: R) -> Result<Self, ArtifactError> {
        let rows: Vec<Vec<f32>> = serde_json::from_reader(GzDecoder::new(reader))?;
        Self::from_rows(rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(Vec::as_slice)
    }
}

/// Loads the catalog and similarity artifacts and cross-checks their
/// cardinality (N titles requires an NxN matrix). Fails fast on any
/// mismatch so the server never starts with inconsistent state.
pub fn load_artifacts(
    catalog_path: impl AsRef<Path>,
    similarity_path: impl AsRef<Path>,
) -> Result<(Catalog, SimilarityMatrix), ArtifactError> {
    let catalog = Catalog::from_reader(File::open(catalog_path.as_ref())?)?;
    let similarity = SimilarityMatrix::from_gzip_reader(File::open(similarity_path.as_ref())?)?;

    if catalog.len() != similarity.len() {
        return Err(ArtifactError::CardinalityMismatch {
            titles: catalog.len(),
            rows: similarity.len(),
        });
    }

    tracing::info!(
        titles = catalog.len(),
        "Catalog and similarity artifacts loaded"
    );

    Ok((catalog, similarity))
}
