use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_NUMBER: u32 = 0;
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Body of `POST /search`. Absent and `null` paging fields take the defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub pagenum: Option<u32>,
    #[serde(default)]
    pub maxpages: Option<u32>,
}

impl SearchRequest {
    pub fn page_number(&self) -> u32 {
        self.pagenum.unwrap_or(DEFAULT_PAGE_NUMBER)
    }

    pub fn max_pages(&self) -> u32 {
        self.maxpages.unwrap_or(DEFAULT_MAX_PAGES)
    }
}

/// Body of `POST /docfragment/:doc_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct FragmentRequest {
    #[serde(rename = "formInput", default)]
    pub form_input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
