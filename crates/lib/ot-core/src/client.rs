use std::{error::Error, fmt, time::Duration};

use ot_api::models::{
    AssociationRow,
    DiseaseAssociationsData,
    DiseaseDetailData,
    DrugDetailData,
    EntityRef,
    SearchData,
    SearchResults,
    TargetAssociationsData,
    TargetDetailData,
};
use ot_api::queries::{self, GraphQlRequest};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::paging::{PageFuture, PageSource, PagedBatch};

pub const DEFAULT_GRAPHQL_URL: &str = "https://api.platform.opentargets.org/api/v4/graphql";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("ot-mcp/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the Open Targets GraphQL endpoint. Immutable
/// once the client is built.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GRAPHQL_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl PlatformConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[derive(Debug)]
pub enum ClientError {
    Build(reqwest::Error),
    Http(reqwest::Error),
    Status { status: u16, body: String },
    GraphQl(String),
    MissingData,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Http(err) => write!(f, "GraphQL request failed: {err}"),
            Self::Status { status, body } => {
                write!(f, "GraphQL endpoint returned HTTP {status}: {body}")
            }
            Self::GraphQl(message) => write!(f, "GraphQL errors: {message}"),
            Self::MissingData => write!(f, "GraphQL response carried no data"),
        }
    }
}

impl Error for ClientError {}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

fn fold_envelope<T>(envelope: GraphQlResponse<T>) -> ClientResult<T> {
    if let Some(errors) = envelope.errors {
        if !errors.is_empty() {
            let joined = errors
                .into_iter()
                .map(|err| err.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ClientError::GraphQl(joined));
        }
    }
    envelope.data.ok_or(ClientError::MissingData)
}

/// Client for the Open Targets Platform GraphQL API.
#[derive(Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PlatformClient {
    /// # Errors
    /// Returns `ClientError::Build` if the underlying HTTP client cannot be
    /// constructed from the supplied settings.
    pub fn new(config: PlatformConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Executes one GraphQL request and unwraps the response envelope.
    ///
    /// Transport failures, non-success statuses, and GraphQL-level error
    /// arrays all collapse into `ClientError`.
    ///
    /// # Errors
    /// Returns `ClientError` if the request fails at any of those layers.
    pub async fn execute<T: DeserializeOwned>(&self, request: &GraphQlRequest) -> ClientResult<T> {
        tracing::debug!(endpoint = %self.endpoint, variables = %request.variables, "graphql request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(ClientError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlResponse<T> = response.json().await.map_err(ClientError::Http)?;
        fold_envelope(envelope)
    }

    /// Runs the cross-entity search query.
    ///
    /// # Errors
    /// Returns `ClientError` if the upstream call fails.
    pub async fn search(
        &self,
        query_string: &str,
        entity_names: &[&str],
        size: usize,
    ) -> ClientResult<SearchResults> {
        let data: SearchData = self
            .execute(&queries::entity_search(query_string, entity_names, size))
            .await?;
        Ok(data.search)
    }

    /// Fetches the annotation payload for one target, or `None` when the
    /// identifier is unknown upstream.
    ///
    /// # Errors
    /// Returns `ClientError` if the upstream call fails.
    pub async fn target_details(&self, ensembl_id: &str) -> ClientResult<Option<Value>> {
        let data: TargetDetailData = self.execute(&queries::target_details(ensembl_id)).await?;
        Ok(data.target)
    }

    /// Fetches the annotation payload for one disease, or `None` when the
    /// identifier is unknown upstream.
    ///
    /// # Errors
    /// Returns `ClientError` if the upstream call fails.
    pub async fn disease_details(&self, efo_id: &str) -> ClientResult<Option<Value>> {
        let data: DiseaseDetailData = self.execute(&queries::disease_details(efo_id)).await?;
        Ok(data.disease)
    }

    /// Fetches the annotation payload for one drug, or `None` when the
    /// identifier is unknown upstream.
    ///
    /// # Errors
    /// Returns `ClientError` if the upstream call fails.
    pub async fn drug_details(&self, chembl_id: &str) -> ClientResult<Option<Value>> {
        let data: DrugDetailData = self.execute(&queries::drug_details(chembl_id)).await?;
        Ok(data.drug)
    }

    /// Fetches one page of diseases associated with a target. An unknown
    /// identifier yields an empty batch with total zero rather than an
    /// error.
    ///
    /// # Errors
    /// Returns `ClientError` if the upstream call fails.
    pub async fn target_associated_diseases(
        &self,
        ensembl_id: &str,
        page_index: usize,
        page_size: usize,
    ) -> ClientResult<PagedBatch> {
        let data: TargetAssociationsData = self
            .execute(&queries::target_associated_diseases(
                ensembl_id, page_index, page_size,
            ))
            .await?;
        Ok(match data.target {
            Some(target) => PagedBatch {
                entity: EntityRef {
                    id: target.id,
                    name: target.approved_symbol,
                },
                total: target.associated_diseases.count,
                rows: target
                    .associated_diseases
                    .rows
                    .into_iter()
                    .map(AssociationRow::from)
                    .collect(),
            },
            None => PagedBatch::empty(ensembl_id),
        })
    }

    /// Fetches one page of targets associated with a disease. An unknown
    /// identifier yields an empty batch with total zero rather than an
    /// error.
    ///
    /// # Errors
    /// Returns `ClientError` if the upstream call fails.
    pub async fn disease_associated_targets(
        &self,
        efo_id: &str,
        page_index: usize,
        page_size: usize,
    ) -> ClientResult<PagedBatch> {
        let data: DiseaseAssociationsData = self
            .execute(&queries::disease_associated_targets(
                efo_id, page_index, page_size,
            ))
            .await?;
        Ok(match data.disease {
            Some(disease) => PagedBatch {
                entity: EntityRef {
                    id: disease.id,
                    name: disease.name,
                },
                total: disease.associated_targets.count,
                rows: disease
                    .associated_targets
                    .rows
                    .into_iter()
                    .map(AssociationRow::from)
                    .collect(),
            },
            None => PagedBatch::empty(efo_id),
        })
    }
}

/// Pages through the diseases associated with one target.
pub struct TargetDiseasesSource {
    client: PlatformClient,
    ensembl_id: String,
}

impl TargetDiseasesSource {
    #[must_use]
    pub const fn new(client: PlatformClient, ensembl_id: String) -> Self {
        Self { client, ensembl_id }
    }
}

impl PageSource for TargetDiseasesSource {
    fn fetch_page(&self, page_index: usize, page_size: usize) -> PageFuture {
        let client = self.client.clone();
        let ensembl_id = self.ensembl_id.clone();
        Box::pin(async move {
            client
                .target_associated_diseases(&ensembl_id, page_index, page_size)
                .await
        })
    }
}

/// Pages through the targets associated with one disease.
pub struct DiseaseTargetsSource {
    client: PlatformClient,
    efo_id: String,
}

impl DiseaseTargetsSource {
    #[must_use]
    pub const fn new(client: PlatformClient, efo_id: String) -> Self {
        Self { client, efo_id }
    }
}

impl PageSource for DiseaseTargetsSource {
    fn fetch_page(&self, page_index: usize, page_size: usize) -> PageFuture {
        let client = self.client.clone();
        let efo_id = self.efo_id.clone();
        Box::pin(async move {
            client
                .disease_associated_targets(&efo_id, page_index, page_size)
                .await
        })
    }
}
