use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier and display name for the entity a result set is anchored on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityRef {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One scored target-disease edge, normalized so downstream code does not
/// care which side of the edge was queried.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssociationRow {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub score: f64,
}

/// One page of association rows plus the upstream-reported grand total.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AssociationTable<R> {
    pub count: u64,
    pub rows: Vec<R>,
}

/// `data` payload for the target-direction association query.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetAssociationsData {
    pub target: Option<TargetAssociations>,
}

/// A target and one page of its associated diseases.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAssociations {
    pub id: String,
    pub approved_symbol: Option<String>,
    pub associated_diseases: AssociationTable<DiseaseAssociationRow>,
}

/// `data` payload for the disease-direction association query.
#[derive(Debug, Clone, Deserialize)]
pub struct DiseaseAssociationsData {
    pub disease: Option<DiseaseAssociations>,
}

/// A disease and one page of its associated targets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseAssociations {
    pub id: String,
    pub name: Option<String>,
    pub associated_targets: AssociationTable<TargetAssociationRow>,
}

/// Upstream row shape when the counterpart entity is a disease.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DiseaseAssociationRow {
    pub score: f64,
    pub disease: DiseaseRef,
}

/// Upstream row shape when the counterpart entity is a target.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TargetAssociationRow {
    pub score: f64,
    pub target: TargetRef,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DiseaseRef {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TargetRef {
    pub id: String,
    #[serde(rename = "approvedSymbol")]
    pub approved_symbol: Option<String>,
}

impl From<DiseaseAssociationRow> for AssociationRow {
    fn from(row: DiseaseAssociationRow) -> Self {
        Self {
            id: row.disease.id,
            name: row.disease.name,
            score: row.score,
        }
    }
}

impl From<TargetAssociationRow> for AssociationRow {
    fn from(row: TargetAssociationRow) -> Self {
        Self {
            id: row.target.id,
            name: row.target.approved_symbol,
            score: row.score,
        }
    }
}

/// `data` payload for the cross-entity search query.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchData {
    pub search: SearchResults,
}

/// Search hits plus the upstream-reported total hit count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub total: u64,
    pub hits: Vec<SearchHit>,
}

/// One search hit; `object` carries the matched entity payload verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<Value>,
}

/// `data` payload for the target detail query.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetDetailData {
    pub target: Option<Value>,
}

/// `data` payload for the disease detail query.
#[derive(Debug, Clone, Deserialize)]
pub struct DiseaseDetailData {
    pub disease: Option<Value>,
}

/// `data` payload for the drug detail query.
#[derive(Debug, Clone, Deserialize)]
pub struct DrugDetailData {
    pub drug: Option<Value>,
}
