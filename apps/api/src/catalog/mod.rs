//! Static career catalog: a flat table of records read once at startup and
//! treated as read-only for the lifetime of the process.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

use crate::matching::avenues::Avenue;
use crate::matching::normalizer::normalize;

/// One row of the catalog CSV, as stored. Missing cells are empty strings,
/// not absent values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogRow {
    #[serde(rename = "Job Title", default)]
    pub job_title: String,
    #[serde(rename = "Description of the Job", default)]
    pub description: String,
    #[serde(rename = "Links", default)]
    pub link: String,
    #[serde(rename = "NOC", default)]
    pub noc: String,
    #[serde(rename = "Keywords", default)]
    pub keywords: String,
    #[serde(rename = "Career Avenues", default)]
    pub avenues: String,
    #[serde(rename = "Category", default)]
    pub category: String,
}

/// A catalog record with keyword stems and avenue tags parsed once at load
/// time. The catalog never changes after startup, so per-turn matching works
/// on the precomputed sets.
#[derive(Debug, Clone)]
pub struct CareerRecord {
    pub job_title: String,
    pub description: String,
    pub link: String,
    pub noc: String,
    pub category: String,
    pub keyword_stems: BTreeSet<String>,
    pub avenue_tags: BTreeSet<Avenue>,
}

impl CareerRecord {
    fn from_row(row: CatalogRow) -> Self {
        // Keyword cells are comma-space separated; each entry is normalized
        // as a unit. An empty or missing cell contributes no stems.
        let keyword_stems = row
            .keywords
            .to_lowercase()
            .split(", ")
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(normalize)
            .collect();

        // Avenue tags are comma separated and already canonical.
        let avenue_tags = row
            .avenues
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .filter_map(|tag| {
                let parsed = Avenue::from_tag(tag);
                if parsed.is_none() {
                    warn!(job_title = %row.job_title, tag, "unknown avenue tag in catalog, skipping");
                }
                parsed
            })
            .collect();

        CareerRecord {
            job_title: row.job_title,
            description: row.description,
            link: row.link,
            noc: row.noc,
            category: row.category,
            keyword_stems,
            avenue_tags,
        }
    }
}

/// The loaded catalog, in file order. Record order is the ranking tie-break.
pub struct Catalog {
    records: Vec<CareerRecord>,
}

impl Catalog {
    /// Reads the catalog CSV. Rows with missing trailing cells are accepted;
    /// the absent fields become empty strings.
    pub fn load(path: &Path) -> Result<Catalog> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("failed to open catalog at {}", path.display()))?;

        let mut rows = Vec::new();
        for row in reader.deserialize::<CatalogRow>() {
            rows.push(row.context("malformed catalog row")?);
        }
        Ok(Catalog::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<CatalogRow>) -> Catalog {
        Catalog {
            records: rows.into_iter().map(CareerRecord::from_row).collect(),
        }
    }

    pub fn records(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records sharing a category, excluding the record itself. Used for the
    /// related-careers list attached to each match.
    pub fn related_in_category(&self, category: &str, exclude_title: &str) -> Vec<&CareerRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category && r.job_title != exclude_title)
            .collect()
    }
}
