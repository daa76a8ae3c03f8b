use ot_api::models::SearchHit;
use ot_api::queries::{ALL_ENTITY_NAMES, ENTITY_DISEASE, ENTITY_TARGET};
use serde::Serialize;

use crate::format::OutputFormat;
use crate::validate::{self, DEFAULT_SEARCH_SIZE, MAX_RESULT_SIZE};

use super::{ControlError, PlatformControlPlane};

/// Arguments for the cross-entity search operation.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub query: String,
    pub size: Option<usize>,
    pub format: Option<String>,
}

/// Search hits plus accounting for the requested window. `total` is the
/// upstream-reported hit count before the size cap.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub total: u64,
    pub returned: u64,
    pub hits: Vec<SearchHit>,
}

impl PlatformControlPlane {
    /// Searches targets by free text.
    ///
    /// # Errors
    /// Returns `ControlError::Argument` before any network access when the
    /// arguments fail validation, and `ControlError::Client` when the
    /// upstream call fails.
    pub async fn search_targets(
        &self,
        request: SearchRequest,
    ) -> Result<(SearchReport, OutputFormat), ControlError> {
        self.search_entities(request, &[ENTITY_TARGET]).await
    }

    /// Searches diseases by free text.
    ///
    /// # Errors
    /// Returns `ControlError::Argument` before any network access when the
    /// arguments fail validation, and `ControlError::Client` when the
    /// upstream call fails.
    pub async fn search_diseases(
        &self,
        request: SearchRequest,
    ) -> Result<(SearchReport, OutputFormat), ControlError> {
        self.search_entities(request, &[ENTITY_DISEASE]).await
    }

    /// Searches across all entity kinds at once, for the free-text resource
    /// read.
    ///
    /// # Errors
    /// Same failure modes as the single-kind searches.
    pub async fn search_all(
        &self,
        request: SearchRequest,
    ) -> Result<(SearchReport, OutputFormat), ControlError> {
        self.search_entities(request, &ALL_ENTITY_NAMES).await
    }

    async fn search_entities(
        &self,
        request: SearchRequest,
        entity_names: &[&str],
    ) -> Result<(SearchReport, OutputFormat), ControlError> {
        let query = validate::non_empty("query", &request.query)?;
        let size = validate::result_size("size", request.size, DEFAULT_SEARCH_SIZE, MAX_RESULT_SIZE)?;
        let format = validate::output_format(request.format.as_deref())?;

        let mut results = self.client.search(&query, entity_names, size).await?;
        results.hits.truncate(size);

        let report = SearchReport {
            query,
            total: results.total,
            returned: u64::try_from(results.hits.len()).unwrap_or(u64::MAX),
            hits: results.hits,
        };
        Ok((report, format))
    }
}
