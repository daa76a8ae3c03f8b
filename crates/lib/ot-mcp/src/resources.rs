//! Resource-style reads over `opentargets://` URIs. Identifier segments
//! are treated as opaque strings; no percent-decoding is applied.

use ot_core::control::SearchRequest;
use rmcp::ErrorData;
use rmcp::model::{ErrorCode, ReadResourceResult, ResourceContents, ResourceTemplate};
use serde_json::Value;

use crate::{OpenTargetsMcp, helpers};

const TEMPLATES: &str = r#"[
  {
    "uriTemplate": "opentargets://target/{ensemblId}",
    "name": "target",
    "description": "Annotation details for one target by Ensembl gene id.",
    "mimeType": "application/json"
  },
  {
    "uriTemplate": "opentargets://disease/{efoId}",
    "name": "disease",
    "description": "Annotation details for one disease by EFO or MONDO id.",
    "mimeType": "application/json"
  },
  {
    "uriTemplate": "opentargets://drug/{chemblId}",
    "name": "drug",
    "description": "Annotation details for one drug by ChEMBL id.",
    "mimeType": "application/json"
  },
  {
    "uriTemplate": "opentargets://association/{ensemblId}/{efoId}",
    "name": "association",
    "description": "Pairwise target-disease association (not implemented yet).",
    "mimeType": "text/plain"
  },
  {
    "uriTemplate": "opentargets://search/{query}",
    "name": "search",
    "description": "Cross-entity free-text search over targets, diseases, and drugs.",
    "mimeType": "application/json"
  }
]"#;

pub(crate) fn templates() -> Result<Vec<ResourceTemplate>, ErrorData> {
    serde_json::from_str(TEMPLATES).map_err(|err| {
        helpers::mcp_err(
            ErrorCode::INTERNAL_ERROR,
            format!("resource templates are malformed: {err}"),
        )
    })
}

/// Recognized resource routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResourceRoute {
    Target(String),
    Disease(String),
    Drug(String),
    AssociationPair { ensembl_id: String, efo_id: String },
    Search(String),
}

pub(crate) fn parse_uri(uri: &str) -> Option<ResourceRoute> {
    let rest = uri.strip_prefix("opentargets://")?;
    let segments: Vec<&str> = rest.split('/').collect();
    match segments.as_slice() {
        ["target", id] if !id.is_empty() => Some(ResourceRoute::Target((*id).to_owned())),
        ["disease", id] if !id.is_empty() => Some(ResourceRoute::Disease((*id).to_owned())),
        ["drug", id] if !id.is_empty() => Some(ResourceRoute::Drug((*id).to_owned())),
        ["association", ensembl_id, efo_id] if !ensembl_id.is_empty() && !efo_id.is_empty() => {
            Some(ResourceRoute::AssociationPair {
                ensembl_id: (*ensembl_id).to_owned(),
                efo_id: (*efo_id).to_owned(),
            })
        }
        ["search", query] if !query.is_empty() => Some(ResourceRoute::Search((*query).to_owned())),
        _ => None,
    }
}

pub(crate) async fn read(
    server: &OpenTargetsMcp,
    uri: &str,
) -> Result<ReadResourceResult, ErrorData> {
    let Some(route) = parse_uri(uri) else {
        return Err(helpers::mcp_err(
            ErrorCode::RESOURCE_NOT_FOUND,
            format!("unrecognized resource URI: {uri}"),
        ));
    };

    let text = match route {
        ResourceRoute::Target(id) => {
            let payload = server
                .control()
                .target_details(&id)
                .await
                .map_err(helpers::resource_failure)?;
            render_entity("target", &id, payload)?
        }
        ResourceRoute::Disease(id) => {
            let payload = server
                .control()
                .disease_details(&id)
                .await
                .map_err(helpers::resource_failure)?;
            render_entity("disease", &id, payload)?
        }
        ResourceRoute::Drug(id) => {
            let payload = server
                .control()
                .drug_details(&id)
                .await
                .map_err(helpers::resource_failure)?;
            render_entity("drug", &id, payload)?
        }
        ResourceRoute::AssociationPair { ensembl_id, efo_id } => format!(
            "direct association lookup between `{ensembl_id}` and `{efo_id}` is not implemented yet; read opentargets://target/{ensembl_id} or opentargets://disease/{efo_id} instead"
        ),
        ResourceRoute::Search(query) => {
            let (report, _) = server
                .control()
                .search_all(SearchRequest {
                    query,
                    size: None,
                    format: None,
                })
                .await
                .map_err(helpers::resource_failure)?;
            render_json(&report)?
        }
    };

    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(text, uri)],
    })
}

fn render_entity(kind: &str, id: &str, payload: Option<Value>) -> Result<String, ErrorData> {
    match payload {
        Some(value) => render_json(&value),
        None => Err(helpers::mcp_err(
            ErrorCode::RESOURCE_NOT_FOUND,
            format!("no {kind} found for `{id}`"),
        )),
    }
}

fn render_json<T: serde::Serialize>(value: &T) -> Result<String, ErrorData> {
    serde_json::to_string_pretty(value).map_err(|err| {
        helpers::mcp_err(
            ErrorCode::INTERNAL_ERROR,
            format!("failed to serialize resource payload: {err}"),
        )
    })
}
