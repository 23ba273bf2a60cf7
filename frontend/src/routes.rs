//! Hash-based page addressing (`#/`, `#/projects/project-1`, ...).
//!
//! The server answers every unknown path with `index.html`, but hash routes
//! keep the SPA independent of that fallback when it is hosted statically.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Projects,
    ProjectDetail(String),
    Contact,
    NotFound,
}

impl Page {
    /// Parses `location.hash`. An empty hash is the home page.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.trim_end_matches('/');
        let segments: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };

        match segments.as_slice() {
            [] => Page::Home,
            ["about"] => Page::About,
            ["projects"] => Page::Projects,
            ["projects", id] if !id.is_empty() => Page::ProjectDetail(id.to_string()),
            ["contact"] => Page::Contact,
            _ => Page::NotFound,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Page::Home => "#/".to_string(),
            Page::About => "#/about".to_string(),
            Page::Projects => "#/projects".to_string(),
            Page::ProjectDetail(id) => format!("#/projects/{id}"),
            Page::Contact => "#/contact".to_string(),
            Page::NotFound => "#/404".to_string(),
        }
    }

    /// Navbar entry this page belongs to, if any.
    pub fn section(&self) -> Option<Page> {
        match self {
            Page::ProjectDetail(_) => Some(Page::Projects),
            Page::NotFound => None,
            other => Some(other.clone()),
        }
    }
}
