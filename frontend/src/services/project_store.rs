//! Client side of the project catalog.
//!
//! Every lookup asks the API first and hands the outcome to the catalog's
//! fallback policy, so pages always receive records. A fallback is reported
//! on the browser console only. The full listing is cached for the lifetime
//! of the page; single-record lookups consult that cache before the network.

use std::cell::RefCell;
use std::rc::Rc;

use common::catalog::{CatalogError, CatalogSource, ProjectCatalog};
use common::model::project::ProjectRecord;
use gloo_console::{log, warn};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::api_url;

thread_local! {
    static CATALOG_CACHE: RefCell<Option<Rc<ProjectCatalog>>> = const { RefCell::new(None) };
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        source: gloo_net::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("cannot decode response from {url}: {source}")]
    Decode {
        url: String,
        source: gloo_net::Error,
    },
}

async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let url = api_url(path);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|source| FetchError::Network {
            url: url.clone(),
            source,
        })?;

    if !response.ok() {
        return Err(FetchError::Status {
            url,
            status: response.status(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| FetchError::Decode { url, source })
}

fn report(source: &CatalogSource, what: &str) {
    match source {
        CatalogSource::Live => log!(format!("Loaded {what} from the API")),
        CatalogSource::Fallback { reason } => {
            warn!(format!("Using embedded {what}: {reason}"))
        }
    }
}

fn cached() -> Option<Rc<ProjectCatalog>> {
    CATALOG_CACHE.with(|cache| cache.borrow().clone())
}

/// API path of one record. The id comes from the URL hash and is encoded
/// as a single path segment.
fn record_path(id: &str) -> String {
    format!("projects/{}", urlencoding::encode(id))
}

/// Every project, from the cache when a listing was already resolved.
pub async fn list_all() -> Rc<ProjectCatalog> {
    if let Some(catalog) = cached() {
        return catalog;
    }

    let catalog = Rc::new(ProjectCatalog::from_fetch(
        fetch_json::<Vec<ProjectRecord>>("projects").await,
    ));
    report(catalog.source(), "project list");
    CATALOG_CACHE.with(|cache| *cache.borrow_mut() = Some(catalog.clone()));
    catalog
}

/// Featured projects, in catalog order.
pub async fn list_featured() -> Vec<ProjectRecord> {
    if let Some(catalog) = cached() {
        return catalog.featured().into_iter().cloned().collect();
    }

    let (featured, source) =
        ProjectCatalog::featured_from_fetch(fetch_json::<Vec<ProjectRecord>>("projects/featured").await);
    report(&source, "featured projects");
    featured
}

/// One project by id. `Err(CatalogError::NotFound)` only when neither the
/// API nor the embedded records know the id.
pub async fn get_by_id(id: &str) -> Result<ProjectRecord, CatalogError> {
    if let Some(catalog) = cached() {
        if let Ok(record) = catalog.get_by_id(id) {
            return Ok(record.clone());
        }
    }

    let (record, source) =
        ProjectCatalog::record_from_fetch(id, fetch_json::<ProjectRecord>(&record_path(id)).await);
    report(&source, &format!("project {id}"));
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_path_encodes_the_id() {
        assert_eq!(record_path("project-1"), "projects/project-1");
        assert_eq!(record_path("a/b?c"), "projects/a%2Fb%3Fc");
        assert_eq!(record_path("my project"), "projects/my%20project");
    }
}
