//! Result shaping for the operation surface. Domain fields pass through
//! untouched; only the container shape changes.

use ot_api::models::SearchHit;

/// How a caller wants result rows rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Structured,
    Tabular,
}

/// Renders search hits as a tab-separated table with a header row.
#[must_use]
pub fn search_hits_table(hits: &[SearchHit]) -> String {
    let mut table = String::from("id\tentity\tname\tdescription\n");
    for hit in hits {
        table.push_str(&cell(&hit.id));
        table.push('\t');
        table.push_str(&cell(&hit.entity));
        table.push('\t');
        table.push_str(&cell(hit.name.as_deref().unwrap_or_default()));
        table.push('\t');
        table.push_str(&cell(hit.description.as_deref().unwrap_or_default()));
        table.push('\n');
    }
    table
}

fn cell(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, name: Option<&str>, description: Option<&str>) -> SearchHit {
        SearchHit {
            id: id.to_owned(),
            entity: "target".to_owned(),
            name: name.map(str::to_owned),
            description: description.map(str::to_owned),
            object: None,
        }
    }

    #[test]
    fn table_has_header_and_one_line_per_hit() {
        let hits = vec![
            hit("ENSG00000157764", Some("BRAF"), Some("kinase")),
            hit("ENSG00000141510", Some("TP53"), None),
        ];
        let table = search_hits_table(&hits);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id\tentity\tname\tdescription");
        assert_eq!(lines[1], "ENSG00000157764\ttarget\tBRAF\tkinase");
        assert_eq!(lines[2], "ENSG00000141510\ttarget\tTP53\t");
    }

    #[test]
    fn embedded_separators_are_flattened() {
        let hits = vec![hit("X", Some("tabbed\tname"), Some("multi\nline"))];
        let table = search_hits_table(&hits);
        assert!(table.contains("tabbed name"));
        assert!(table.contains("multi line"));
    }
}
