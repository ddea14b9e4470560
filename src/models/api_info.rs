use serde::{Deserialize, Serialize};

use crate::utils::constant::{API_DESCRIPTION, API_TITLE, API_VERSION};

/// Metadata describing the API, published in the OpenAPI `info` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            title: API_TITLE.to_string(),
            version: API_VERSION.to_string(),
            description: API_DESCRIPTION.to_string(),
        }
    }
}
