//! Remote backend: NCBI E-utilities efetch, one HTTP request per taxid.
//!
//! Each lookup fetches the taxonomy record as XML and joins the record's
//! `Lineage` field (root-side first, queried taxon excluded) with the
//! record's own `ScientificName`.

use crate::pipeline::LineageSource;
use crate::{LineageError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;

pub const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// NCBI asks every E-utilities caller to identify itself
const TOOL_NAME: &str = "lineage-bench";

pub struct EntrezBackend {
    client: reqwest::blocking::Client,
    base_url: String,
    email: String,
}

impl EntrezBackend {
    pub fn new(email: &str) -> anyhow::Result<Self> {
        Self::with_base_url(email, EUTILS_BASE_URL)
    }

    pub fn with_base_url(email: &str, base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("lineage-bench/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            email: email.to_string(),
        })
    }

    fn fetch_taxon(&self, taxid: &str) -> Result<TaxonRecord> {
        let url = format!("{}/efetch.fcgi", self.base_url);
        let body = self
            .client
            .get(&url)
            .query(&[
                ("db", "taxonomy"),
                ("id", taxid),
                ("retmode", "xml"),
                ("tool", TOOL_NAME),
                ("email", self.email.as_str()),
            ])
            .send()?
            .error_for_status()?
            .text()?;

        let taxa: TaxaSet = quick_xml::de::from_str(&body)?;
        taxa.records
            .into_iter()
            .next()
            .ok_or_else(|| LineageError::UnknownTaxid(taxid.to_string()))
    }
}

impl LineageSource for EntrezBackend {
    fn name_lineage(&self, taxid: &str) -> Result<Vec<String>> {
        let record = self.fetch_taxon(taxid)?;
        Ok(record.into_names())
    }
}

/// Root element of the efetch response
#[derive(Debug, Deserialize)]
struct TaxaSet {
    #[serde(rename = "Taxon", default)]
    records: Vec<TaxonRecord>,
}

#[derive(Debug, Deserialize)]
struct TaxonRecord {
    #[serde(rename = "ScientificName")]
    scientific_name: String,
    #[serde(rename = "Lineage", default)]
    lineage: String,
}

impl TaxonRecord {
    /// Split the pre-joined lineage text and append the record's own name
    fn into_names(self) -> Vec<String> {
        let mut names: Vec<String> = self
            .lineage
            .split("; ")
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        names.push(self.scientific_name);
        names
    }
}
