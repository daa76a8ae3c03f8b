use crate::client::{DiseaseTargetsSource, TargetDiseasesSource};
use crate::paging::AssociationReport;
use crate::validate::{
    self,
    ArgumentError,
    DEFAULT_ASSOCIATION_SIZE,
    DEFAULT_SUMMARY_SIZE,
    MAX_RESULT_SIZE,
    MAX_SUMMARY_SIZE,
};

use super::{ControlError, PlatformControlPlane};

/// Arguments for the association lookup. Which identifier is present
/// decides the lookup direction.
#[derive(Debug, Clone, Default)]
pub struct AssociationRequest {
    pub ensembl_id: Option<String>,
    pub efo_id: Option<String>,
    pub min_score: Option<f64>,
    pub size: Option<usize>,
}

/// Arguments for the disease-target summary. The disease may arrive under
/// either argument name.
#[derive(Debug, Clone, Default)]
pub struct SummaryRequest {
    pub disease_id: Option<String>,
    pub efo_id: Option<String>,
    pub min_score: Option<f64>,
    pub size: Option<usize>,
}

/// Outcome of the association lookup.
#[derive(Debug, Clone)]
pub enum AssociationLookup {
    Aggregated(AssociationReport),
    /// Both identifiers were supplied; the pairwise direction is not
    /// implemented yet and is reported as such instead of failing.
    PairwiseUnsupported { ensembl_id: String, efo_id: String },
}

impl PlatformControlPlane {
    /// Looks up scored associations for one target or one disease,
    /// aggregating upstream pages until the requested count is covered.
    ///
    /// # Errors
    /// Returns `ControlError::Argument` before any network access when
    /// neither identifier is present or a bound fails, and
    /// `ControlError::Client` when any page fetch fails.
    pub async fn associations(
        &self,
        request: AssociationRequest,
    ) -> Result<AssociationLookup, ControlError> {
        let ensembl_id = validate::optional_text("ensembl_id", request.ensembl_id.as_deref())?;
        let efo_id = validate::optional_text("efo_id", request.efo_id.as_deref())?;
        let min_score = validate::score_floor(request.min_score)?;
        let size = validate::result_size(
            "size",
            request.size,
            DEFAULT_ASSOCIATION_SIZE,
            MAX_RESULT_SIZE,
        )?;

        match (ensembl_id, efo_id) {
            (Some(ensembl_id), Some(efo_id)) => {
                Ok(AssociationLookup::PairwiseUnsupported { ensembl_id, efo_id })
            }
            (Some(ensembl_id), None) => {
                let source = TargetDiseasesSource::new(self.client.clone(), ensembl_id);
                let aggregation = self.aggregator.collect(&source, size).await?;
                Ok(AssociationLookup::Aggregated(
                    aggregation.into_report(min_score),
                ))
            }
            (None, Some(efo_id)) => {
                let source = DiseaseTargetsSource::new(self.client.clone(), efo_id);
                let aggregation = self.aggregator.collect(&source, size).await?;
                Ok(AssociationLookup::Aggregated(
                    aggregation.into_report(min_score),
                ))
            }
            (None, None) => Err(ArgumentError::MissingAnyOf {
                names: "`ensembl_id`, `efo_id`",
            }
            .into()),
        }
    }

    /// Summarizes the targets most strongly associated with one disease.
    ///
    /// # Errors
    /// Returns `ControlError::Argument` before any network access when no
    /// disease identifier is present or a bound fails, and
    /// `ControlError::Client` when any page fetch fails.
    pub async fn disease_target_summary(
        &self,
        request: SummaryRequest,
    ) -> Result<AssociationReport, ControlError> {
        let disease_id = validate::optional_text("disease_id", request.disease_id.as_deref())?;
        let efo_id = validate::optional_text("efo_id", request.efo_id.as_deref())?;
        let identifier = summary_identifier(disease_id, efo_id)?;
        let min_score = validate::score_floor(request.min_score)?;
        let size =
            validate::result_size("size", request.size, DEFAULT_SUMMARY_SIZE, MAX_SUMMARY_SIZE)?;

        let source = DiseaseTargetsSource::new(self.client.clone(), identifier);
        let aggregation = self.aggregator.collect(&source, size).await?;
        Ok(aggregation.into_report(min_score))
    }
}

fn summary_identifier(
    disease_id: Option<String>,
    efo_id: Option<String>,
) -> Result<String, ArgumentError> {
    match (disease_id, efo_id) {
        (Some(id), _) | (None, Some(id)) => Ok(id),
        (None, None) => Err(ArgumentError::MissingAnyOf {
            names: "`disease_id`, `efo_id`",
        }),
    }
}
