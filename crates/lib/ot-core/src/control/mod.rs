use std::{error::Error, fmt};

use crate::client::{PlatformClient, PlatformConfig};
use crate::paging::PageAggregator;
use crate::validate::ArgumentError;

pub mod associations;
pub mod details;
pub mod search;

pub use associations::{AssociationLookup, AssociationRequest, SummaryRequest};
pub use search::{SearchReport, SearchRequest};

#[derive(Debug)]
pub enum ControlError {
    Argument(ArgumentError),
    Client(crate::client::ClientError),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(err) => write!(f, "{err}"),
            Self::Client(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControlError {}

impl From<ArgumentError> for ControlError {
    fn from(err: ArgumentError) -> Self {
        Self::Argument(err)
    }
}

impl From<crate::client::ClientError> for ControlError {
    fn from(err: crate::client::ClientError) -> Self {
        Self::Client(err)
    }
}

/// Entry point for the six caller-facing operations. Holds the one
/// process-wide client; every invocation's working state is local.
#[derive(Clone)]
pub struct PlatformControlPlane {
    client: PlatformClient,
    aggregator: PageAggregator,
}

impl PlatformControlPlane {
    #[must_use]
    pub fn new(client: PlatformClient) -> Self {
        Self {
            client,
            aggregator: PageAggregator::default(),
        }
    }

    /// # Errors
    /// Returns `ControlError::Client` if the HTTP client cannot be built.
    pub fn from_config(config: PlatformConfig) -> Result<Self, ControlError> {
        Ok(Self::new(PlatformClient::new(config)?))
    }

    #[must_use]
    pub fn with_aggregator(mut self, aggregator: PageAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    #[must_use]
    pub fn client(&self) -> &PlatformClient {
        &self.client
    }
}
