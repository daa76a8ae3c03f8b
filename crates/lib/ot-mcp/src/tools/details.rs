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

/// Parameters for fetching one target by Ensembl gene id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TargetDetailsParams {
    pub ensembl_id: String,
}

/// Parameters for fetching one disease by EFO/MONDO id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DiseaseDetailsParams {
    pub efo_id: String,
}

#[tool_router(router = tool_router_details, vis = "pub")]
impl OpenTargetsMcp {
    #[tool(description = "Fetch annotation details for one target by Ensembl gene id.")]
    async fn get_target_details(
        &self,
        Parameters(params): Parameters<TargetDetailsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.control().target_details(&params.ensembl_id).await {
            Ok(Some(payload)) => Ok(CallToolResult::success(vec![Content::json(payload)?])),
            Ok(None) => Ok(CallToolResult::error(vec![Content::text(format!(
                "no target found for `{}`",
                params.ensembl_id
            ))])),
            Err(err) => helpers::control_failure(err),
        }
    }

    #[tool(description = "Fetch annotation details for one disease by EFO or MONDO id.")]
    async fn get_disease_details(
        &self,
        Parameters(params): Parameters<DiseaseDetailsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.control().disease_details(&params.efo_id).await {
            Ok(Some(payload)) => Ok(CallToolResult::success(vec![Content::json(payload)?])),
            Ok(None) => Ok(CallToolResult::error(vec![Content::text(format!(
                "no disease found for `{}`",
                params.efo_id
            ))])),
            Err(err) => helpers::control_failure(err),
        }
    }
}
