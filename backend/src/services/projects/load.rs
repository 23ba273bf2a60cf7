use common::catalog::{CatalogSource, ProjectCatalog};
use common::model::project::ProjectRecord;
use log::{info, warn};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
enum ProjectsFileError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

fn read_records(path: &Path) -> Result<Vec<ProjectRecord>, ProjectsFileError> {
    let raw = fs::read_to_string(path).map_err(|source| ProjectsFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ProjectsFileError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Builds the catalog served by `/api/projects`.
///
/// Without a file the embedded records are served. A file that cannot be
/// read, parsed, or that repeats an id falls back to the embedded records
/// with a warning; startup never fails on it.
pub fn load_catalog(projects_file: Option<&Path>) -> ProjectCatalog {
    let Some(path) = projects_file else {
        info!("Serving embedded project records");
        return ProjectCatalog::embedded();
    };

    let catalog = ProjectCatalog::from_fetch(read_records(path));
    match catalog.source() {
        CatalogSource::Live => info!(
            "Loaded {} project records from {}",
            catalog.all().len(),
            path.display()
        ),
        CatalogSource::Fallback { reason } => {
            warn!("Using embedded project records: {reason}")
        }
    }
    catalog
}
