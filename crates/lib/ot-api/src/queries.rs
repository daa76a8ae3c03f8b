//! GraphQL documents for the Open Targets Platform `/api/v4/graphql`
//! endpoint, paired with builders that bind their variables.

use serde::Serialize;
use serde_json::{Value, json};

pub const ENTITY_TARGET: &str = "target";
pub const ENTITY_DISEASE: &str = "disease";
pub const ENTITY_DRUG: &str = "drug";

pub const ALL_ENTITY_NAMES: [&str; 3] = [ENTITY_TARGET, ENTITY_DISEASE, ENTITY_DRUG];

/// One upstream call: a fixed query document plus its variable bindings.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: Value,
}

const SEARCH: &str = r"
query EntitySearch($queryString: String!, $entityNames: [String!]!, $size: Int!) {
  search(queryString: $queryString, entityNames: $entityNames, page: { index: 0, size: $size }) {
    total
    hits {
      id
      entity
      name
      description
      object {
        ... on Target {
          id
          approvedSymbol
          approvedName
          biotype
        }
        ... on Disease {
          id
          name
          description
        }
        ... on Drug {
          id
          name
          drugType
          maximumClinicalTrialPhase
        }
      }
    }
  }
}";

const TARGET_DETAILS: &str = r"
query TargetDetails($ensemblId: String!) {
  target(ensemblId: $ensemblId) {
    id
    approvedSymbol
    approvedName
    biotype
    functionDescriptions
    synonyms {
      label
      source
    }
    genomicLocation {
      chromosome
      start
      end
      strand
    }
  }
}";

const DISEASE_DETAILS: &str = r"
query DiseaseDetails($efoId: String!) {
  disease(efoId: $efoId) {
    id
    name
    description
    therapeuticAreas {
      id
      name
    }
    synonyms {
      relation
      terms
    }
  }
}";

const DRUG_DETAILS: &str = r"
query DrugDetails($chemblId: String!) {
  drug(chemblId: $chemblId) {
    id
    name
    drugType
    description
    isApproved
    hasBeenWithdrawn
    blackBoxWarning
    yearOfFirstApproval
    maximumClinicalTrialPhase
    synonyms
    tradeNames
    mechanismsOfAction {
      rows {
        mechanismOfAction
        actionType
        targets {
          id
          approvedSymbol
        }
      }
    }
  }
}";

const TARGET_ASSOCIATED_DISEASES: &str = r"
query TargetAssociatedDiseases($ensemblId: String!, $index: Int!, $size: Int!) {
  target(ensemblId: $ensemblId) {
    id
    approvedSymbol
    associatedDiseases(page: { index: $index, size: $size }) {
      count
      rows {
        score
        disease {
          id
          name
        }
      }
    }
  }
}";

const DISEASE_ASSOCIATED_TARGETS: &str = r"
query DiseaseAssociatedTargets($efoId: String!, $index: Int!, $size: Int!) {
  disease(efoId: $efoId) {
    id
    name
    associatedTargets(page: { index: $index, size: $size }) {
      count
      rows {
        score
        target {
          id
          approvedSymbol
        }
      }
    }
  }
}";

#[must_use]
pub fn entity_search(query_string: &str, entity_names: &[&str], size: usize) -> GraphQlRequest {
    GraphQlRequest {
        query: SEARCH,
        variables: json!({
            "queryString": query_string,
            "entityNames": entity_names,
            "size": size,
        }),
    }
}

#[must_use]
pub fn target_details(ensembl_id: &str) -> GraphQlRequest {
    GraphQlRequest {
        query: TARGET_DETAILS,
        variables: json!({ "ensemblId": ensembl_id }),
    }
}

#[must_use]
pub fn disease_details(efo_id: &str) -> GraphQlRequest {
    GraphQlRequest {
        query: DISEASE_DETAILS,
        variables: json!({ "efoId": efo_id }),
    }
}

#[must_use]
pub fn drug_details(chembl_id: &str) -> GraphQlRequest {
    GraphQlRequest {
        query: DRUG_DETAILS,
        variables: json!({ "chemblId": chembl_id }),
    }
}

#[must_use]
pub fn target_associated_diseases(
    ensembl_id: &str,
    page_index: usize,
    page_size: usize,
) -> GraphQlRequest {
    GraphQlRequest {
        query: TARGET_ASSOCIATED_DISEASES,
        variables: json!({
            "ensemblId": ensembl_id,
            "index": page_index,
            "size": page_size,
        }),
    }
}

#[must_use]
pub fn disease_associated_targets(
    efo_id: &str,
    page_index: usize,
    page_size: usize,
) -> GraphQlRequest {
    GraphQlRequest {
        query: DISEASE_ASSOCIATED_TARGETS,
        variables: json!({
            "efoId": efo_id,
            "index": page_index,
            "size": page_size,
        }),
    }
}
