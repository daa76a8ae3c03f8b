use ot_core::control::{AssociationLookup, AssociationRequest, SummaryRequest};
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

/// Parameters for the association lookup. Set exactly one of `ensembl_id`
/// and `efo_id` to pick the direction.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AssociationsParams {
    pub ensembl_id: Option<String>,
    pub efo_id: Option<String>,
    pub min_score: Option<f64>,
    pub size: Option<usize>,
}

/// Parameters for the disease-target summary. The disease id is accepted
/// under either `disease_id` or `efo_id`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DiseaseTargetsSummaryParams {
    pub disease_id: Option<String>,
    pub efo_id: Option<String>,
    pub min_score: Option<f64>,
    pub size: Option<usize>,
}

#[tool_router(router = tool_router_associations, vis = "pub")]
impl OpenTargetsMcp {
    #[tool(
        description = "List scored associations for a target (ensembl_id) or a disease (efo_id). Rows keep the upstream score-descending order."
    )]
    async fn get_target_disease_associations(
        &self,
        Parameters(params): Parameters<AssociationsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let request = AssociationRequest {
            ensembl_id: params.ensembl_id,
            efo_id: params.efo_id,
            min_score: params.min_score,
            size: params.size,
        };
        match self.control().associations(request).await {
            Ok(AssociationLookup::Aggregated(report)) => {
                Ok(CallToolResult::success(vec![Content::json(report)?]))
            }
            Ok(AssociationLookup::PairwiseUnsupported { ensembl_id, efo_id }) => {
                Ok(CallToolResult::success(vec![Content::text(format!(
                    "direct association lookup between `{ensembl_id}` and `{efo_id}` is not implemented yet; supply only one identifier"
                ))]))
            }
            Err(err) => helpers::control_failure(err),
        }
    }

    #[tool(
        description = "Rank the targets associated with one disease (disease_id or efo_id), with optional min_score and size."
    )]
    async fn get_disease_targets_summary(
        &self,
        Parameters(params): Parameters<DiseaseTargetsSummaryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let request = SummaryRequest {
            disease_id: params.disease_id,
            efo_id: params.efo_id,
            min_score: params.min_score,
            size: params.size,
        };
        match self.control().disease_target_summary(request).await {
            Ok(report) => Ok(CallToolResult::success(vec![Content::json(report)?])),
            Err(err) => helpers::control_failure(err),
        }
    }
}
