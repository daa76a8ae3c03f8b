use serde_json::Value;

use crate::validate;

use super::{ControlError, PlatformControlPlane};

impl PlatformControlPlane {
    /// Fetches the annotation payload for one target by Ensembl gene id.
    ///
    /// # Errors
    /// Returns `ControlError::Argument` for a blank identifier and
    /// `ControlError::Client` when the upstream call fails.
    pub async fn target_details(&self, ensembl_id: &str) -> Result<Option<Value>, ControlError> {
        let id = validate::non_empty("ensembl_id", ensembl_id)?;
        Ok(self.client.target_details(&id).await?)
    }

    /// Fetches the annotation payload for one disease by EFO id.
    ///
    /// # Errors
    /// Returns `ControlError::Argument` for a blank identifier and
    /// `ControlError::Client` when the upstream call fails.
    pub async fn disease_details(&self, efo_id: &str) -> Result<Option<Value>, ControlError> {
        let id = validate::non_empty("efo_id", efo_id)?;
        Ok(self.client.disease_details(&id).await?)
    }

    /// Fetches the annotation payload for one drug by ChEMBL id.
    ///
    /// # Errors
    /// Returns `ControlError::Argument` for a blank identifier and
    /// `ControlError::Client` when the upstream call fails.
    pub async fn drug_details(&self, chembl_id: &str) -> Result<Option<Value>, ControlError> {
        let id = validate::non_empty("chembl_id", chembl_id)?;
        Ok(self.client.drug_details(&id).await?)
    }
}
