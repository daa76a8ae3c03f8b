//! MCP server implementation for ot-mcp.
//!
//! This crate wires the Open Targets control plane into rmcp tool handlers
//! and exposes the MCP-facing tool and resource surface.

mod helpers;
mod resources;
mod tools;
pub mod server;

use ot_core::control::PlatformControlPlane;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{
    CallToolResult,
    Content,
    ListResourceTemplatesResult,
    ListResourcesResult,
    PaginatedRequestParams,
    ReadResourceRequestParams,
    ReadResourceResult,
    ServerCapabilities,
    ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};

const SERVER_INSTRUCTIONS: &str = r"ot-mcp exposes the Open Targets Platform GraphQL API as MCP tools and resources.

Tools:
- `search_targets` and `search_diseases` find entities by free text (`query`; optional `size`;
  optional `format` of `structured` or `tabular`).
- `get_target_details` fetches one target by Ensembl gene id (e.g. ENSG00000157764).
- `get_disease_details` fetches one disease by EFO/MONDO id (e.g. EFO_0000756).
- `get_target_disease_associations` lists scored associations for a target (`ensembl_id`) or a
  disease (`efo_id`); optional `min_score` in [0, 1] and `size`. Supplying both identifiers is
  not supported yet.
- `get_disease_targets_summary` ranks the targets associated with one disease (`disease_id` or
  `efo_id`; optional `min_score`, `size`).

Resources:
- opentargets://target/{ensemblId}
- opentargets://disease/{efoId}
- opentargets://drug/{chemblId}
- opentargets://search/{query}
- opentargets://association/{ensemblId}/{efoId} (not implemented yet)

Notes:
- Association scores are in [0, 1]; rows keep the upstream score-descending order.
- Aggregated results report `requested`, `returned`, `total`, and (when `min_score` is set)
  `filtered_total` counts.
- `health` returns `ok`.";

/// MCP server wrapper around the Open Targets control plane.
#[derive(Clone)]
pub struct OpenTargetsMcp {
    tool_router: ToolRouter<Self>,
    control: PlatformControlPlane,
}

impl OpenTargetsMcp {
    #[must_use]
    pub fn new(control: PlatformControlPlane) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_search()
            + Self::tool_router_details()
            + Self::tool_router_associations();
        Self {
            tool_router,
            control,
        }
    }

    pub(crate) fn control(&self) -> &PlatformControlPlane {
        &self.control
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl OpenTargetsMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for OpenTargetsMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult {
            resources: Vec::new(),
            next_cursor: None,
            ..Default::default()
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult {
            resource_templates: resources::templates()?,
            next_cursor: None,
            ..Default::default()
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        resources::read(self, &request.uri).await
    }
}
