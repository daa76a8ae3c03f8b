use ot_core::control::{ControlError, SearchReport, SearchRequest};
use ot_core::format::{self, OutputFormat};
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{OpenTargetsMcp, helpers};

/// Parameters shared by the free-text search tools.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchParams {
    pub query: String,
    pub size: Option<usize>,
    pub format: Option<String>,
}

impl From<SearchParams> for SearchRequest {
    fn from(params: SearchParams) -> Self {
        Self {
            query: params.query,
            size: params.size,
            format: params.format,
        }
    }
}

#[tool_router(router = tool_router_search, vis = "pub")]
impl OpenTargetsMcp {
    #[tool(description = "Search targets (genes/proteins) by free text.")]
    async fn search_targets(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        render_search(self.control().search_targets(params.into()).await)
    }

    #[tool(description = "Search diseases and phenotypes by free text.")]
    async fn search_diseases(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        render_search(self.control().search_diseases(params.into()).await)
    }
}

fn render_search(
    outcome: Result<(SearchReport, OutputFormat), ControlError>,
) -> Result<CallToolResult, ErrorData> {
    match outcome {
        Ok((report, OutputFormat::Structured)) => {
            Ok(CallToolResult::success(vec![Content::json(report)?]))
        }
        Ok((report, OutputFormat::Tabular)) => {
            let mut text = format!(
                "query\t{}\ntotal\t{}\nreturned\t{}\n\n",
                report.query, report.total, report.returned
            );
            text.push_str(&format::search_hits_table(&report.hits));
            Ok(CallToolResult::success(vec![Content::text(text)]))
        }
        Err(err) => helpers::control_failure(err),
    }
}
