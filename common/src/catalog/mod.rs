//! In-memory project collection with the fallback policy used by the site.
//!
//! The client asks the API for live records and hands the outcome to
//! `ProjectCatalog::from_fetch` (or one of its siblings). Any failure, or a
//! live payload that breaks the unique-id invariant, resolves to the embedded
//! sample collection. The failure reason is kept in `CatalogSource` so that
//! callers can log it; it is never meant for display.

mod sample;

use crate::model::project::ProjectRecord;
use std::collections::HashSet;
use std::fmt::Display;
use thiserror::Error;

pub use sample::sample_projects;

/// Filter value meaning "no technology filter".
pub const ALL_TECHNOLOGIES: &str = "all";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("project not found: {0}")]
    NotFound(String),

    #[error("duplicate project id: {0}")]
    DuplicateId(String),
}

/// Where the records of a catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Live,
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
    source: CatalogSource,
}

impl ProjectCatalog {
    /// Builds a catalog from live records, rejecting duplicate ids.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self {
            records,
            source: CatalogSource::Live,
        })
    }

    /// The embedded sample collection as primary data.
    pub fn embedded() -> Self {
        Self {
            records: sample_projects(),
            source: CatalogSource::Live,
        }
    }

    /// The embedded sample collection, recording why live data was not used.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            records: sample_projects(),
            source: CatalogSource::Fallback {
                reason: reason.into(),
            },
        }
    }

    /// Resolves the outcome of fetching the full listing.
    pub fn from_fetch<E: Display>(fetched: Result<Vec<ProjectRecord>, E>) -> Self {
        match fetched {
            Ok(records) => {
                Self::new(records).unwrap_or_else(|err| Self::fallback(err.to_string()))
            }
            Err(err) => Self::fallback(err.to_string()),
        }
    }

    /// Resolves the outcome of fetching the featured listing.
    ///
    /// Live results are filtered again so that a misbehaving endpoint cannot
    /// surface records that are not flagged as featured.
    pub fn featured_from_fetch<E: Display>(
        fetched: Result<Vec<ProjectRecord>, E>,
    ) -> (Vec<ProjectRecord>, CatalogSource) {
        let catalog = Self::from_fetch(fetched);
        let featured = catalog.featured().into_iter().cloned().collect();
        (featured, catalog.source)
    }

    /// Resolves the outcome of fetching one record by id.
    ///
    /// A live record whose id differs from the one requested is treated as a
    /// failed fetch.
    pub fn record_from_fetch<E: Display>(
        id: &str,
        fetched: Result<ProjectRecord, E>,
    ) -> (Result<ProjectRecord, CatalogError>, CatalogSource) {
        let reason = match fetched {
            Ok(record) if record.id == id => return (Ok(record), CatalogSource::Live),
            Ok(record) => format!("requested {id}, received {}", record.id),
            Err(err) => err.to_string(),
        };
        let catalog = Self::fallback(reason);
        let record = catalog.get_by_id(id).cloned();
        (record, catalog.source)
    }

    pub fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn featured(&self) -> Vec<&ProjectRecord> {
        self.records.iter().filter(|p| p.featured).collect()
    }

    /// Linear scan by id.
    pub fn get_by_id(&self, id: &str) -> Result<&ProjectRecord, CatalogError> {
        self.records
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, CatalogSource::Fallback { .. })
    }

    /// Distinct technology tags in first-seen order.
    pub fn technologies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .flat_map(|p| p.technologies.iter().map(String::as_str))
            .filter(|t| seen.insert(*t))
            .collect()
    }

    /// Records tagged with `technology`, or every record for `ALL_TECHNOLOGIES`.
    pub fn filter_by_technology(&self, technology: &str) -> Vec<&ProjectRecord> {
        if technology == ALL_TECHNOLOGIES {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|p| p.uses_technology(technology))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, featured: bool, technologies: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: format!("Title {id}"),
            description: String::new(),
            full_description: String::new(),
            key_features: Vec::new(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            category: "Web App".to_string(),
            image: Default::default(),
            github: None,
            live_demo: None,
            date: None,
            client: None,
            featured,
        }
    }

    fn assert_featured_is_filter_of_all(catalog: &ProjectCatalog) {
        let expected: Vec<&ProjectRecord> = catalog.all().iter().filter(|p| p.featured).collect();
        assert_eq!(catalog.featured(), expected);
    }

    #[test]
    fn embedded_ids_are_unique() {
        let records = sample_projects();
        assert!(!records.is_empty());
        assert!(ProjectCatalog::new(records).is_ok());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ProjectCatalog::new(vec![record("a", true, &[]), record("a", false, &[])])
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("a".to_string()));
    }

    #[test]
    fn live_fetch_is_used_as_is() {
        let catalog = ProjectCatalog::from_fetch::<String>(Ok(vec![
            record("a", false, &[]),
            record("b", true, &[]),
        ]));

        assert_eq!(catalog.source(), &CatalogSource::Live);
        assert_eq!(catalog.all().len(), 2);
        assert_eq!(catalog.featured().len(), 1);
        assert_featured_is_filter_of_all(&catalog);
    }

    #[test]
    fn failed_fetch_falls_back_to_embedded() {
        let catalog = ProjectCatalog::from_fetch::<&str>(Err("HTTP 503"));

        assert!(catalog.is_fallback());
        assert_eq!(
            catalog.source(),
            &CatalogSource::Fallback {
                reason: "HTTP 503".to_string()
            }
        );
        assert_eq!(catalog.all(), sample_projects().as_slice());
        assert_featured_is_filter_of_all(&catalog);
    }

    #[test]
    fn duplicate_live_ids_fall_back() {
        let catalog = ProjectCatalog::from_fetch::<String>(Ok(vec![
            record("x", true, &[]),
            record("x", true, &[]),
        ]));
        assert!(catalog.is_fallback());
        assert_eq!(catalog.all(), sample_projects().as_slice());
    }

    #[test]
    fn featured_fetch_drops_unflagged_records() {
        let (featured, source) = ProjectCatalog::featured_from_fetch::<String>(Ok(vec![
            record("a", true, &[]),
            record("b", false, &[]),
        ]));
        assert_eq!(source, CatalogSource::Live);
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "a");

        let (featured, source) = ProjectCatalog::featured_from_fetch::<&str>(Err("offline"));
        assert!(matches!(source, CatalogSource::Fallback { .. }));
        assert!(featured.iter().all(|p| p.featured));
        assert_eq!(featured.len(), ProjectCatalog::embedded().featured().len());
    }

    #[test]
    fn record_fetch_falls_back_to_linear_scan() {
        let (live, source) = ProjectCatalog::record_from_fetch::<String>("z", Ok(record("z", false, &[])));
        assert_eq!(live.unwrap().id, "z");
        assert_eq!(source, CatalogSource::Live);

        let (found, source) = ProjectCatalog::record_from_fetch::<&str>("project-2", Err("timeout"));
        assert_eq!(found.unwrap().id, "project-2");
        assert!(matches!(source, CatalogSource::Fallback { .. }));

        let (missing, _) = ProjectCatalog::record_from_fetch::<&str>("nope", Err("timeout"));
        assert_eq!(missing, Err(CatalogError::NotFound("nope".to_string())));

        let (mismatch, source) =
            ProjectCatalog::record_from_fetch::<String>("project-1", Ok(record("other", false, &[])));
        assert_eq!(mismatch.unwrap().id, "project-1");
        assert!(matches!(source, CatalogSource::Fallback { .. }));
    }

    #[test]
    fn get_by_id_reports_not_found() {
        let catalog = ProjectCatalog::embedded();
        assert_eq!(catalog.get_by_id("project-3").unwrap().id, "project-3");
        assert!(matches!(
            catalog.get_by_id("project-99"),
            Err(CatalogError::NotFound(id)) if id == "project-99"
        ));
    }

    #[test]
    fn technology_filter() {
        let catalog = ProjectCatalog::new(vec![
            record("a", true, &["Rust", "Yew"]),
            record("b", false, &["Rust"]),
            record("c", false, &["Go"]),
        ])
        .unwrap();

        assert_eq!(catalog.technologies(), vec!["Rust", "Yew", "Go"]);
        let ids: Vec<&str> = catalog
            .filter_by_technology("Rust")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(catalog.filter_by_technology(ALL_TECHNOLOGIES).len(), 3);
        assert!(catalog.filter_by_technology("Elm").is_empty());
    }
}
