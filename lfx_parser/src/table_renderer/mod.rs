use regex::Regex;

use crate::readme_parser::ProjectRecord;

/// Constant prefix of every project link's visible text.
const PROJECT_PREFIX: &str = "CNCF";

/// Renders records as the three-column markdown table tracked in the
/// archive document. Rows appear in record order; the mentee cell is a
/// single-space placeholder for manual fill-in.
pub fn generate_table(records: &[ProjectRecord], term_label: &str) -> String {
    // Titles copied from the roster sometimes already carry a term
    // annotation; strip it so the composed link text has exactly one.
    let term_note = Regex::new(r"\s*\(2025.*\)").unwrap();

    let mut output = String::from("| Project | Mentors | Mentee |\n");
    output.push_str("| --- | --- | --- |\n");

    for record in records {
        let clean_title = term_note.replace_all(&record.title, "");
        let display_text = format!(
            "{PROJECT_PREFIX} - {}: {} ({})",
            record.organization, clean_title, term_label
        );
        let project_col = format!("[{}]({})", display_text, record.url);
        let mentors_col = record.mentors.join(", ");

        output.push_str(&format!("| {} | {} | {} |\n", project_col, mentors_col, " "));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(organization: &str, title: &str, mentors: &[&str], url: &str) -> ProjectRecord {
        ProjectRecord {
            organization: organization.to_string(),
            title: title.to_string(),
            mentors: mentors.iter().map(|m| m.to_string()).collect(),
            url: url.to_string(),
            mentee: String::new(),
        }
    }

    #[test]
    fn empty_input_renders_header_only() {
        let table = generate_table(&[], "2025 Term 3");
        assert_eq!(table, "| Project | Mentors | Mentee |\n| --- | --- | --- |\n");
    }

    #[test]
    fn renders_exact_body_row() {
        let records = vec![record(
            "OrgA",
            "Proj One",
            &["Alice A", "Bob B"],
            "https://example.com/1",
        )];
        let table = generate_table(&records, "2025 Term 3");

        let body_row = table.lines().nth(2).unwrap();
        assert_eq!(
            body_row,
            "| [CNCF - OrgA: Proj One (2025 Term 3)](https://example.com/1) | Alice A, Bob B |   |"
        );
    }

    #[test]
    fn strips_existing_term_annotation_from_title() {
        let records = vec![record(
            "OrgA",
            "Proj One (2025 Spring)",
            &["Alice A"],
            "https://example.com/1",
        )];
        let table = generate_table(&records, "2025 Term 3");

        assert!(table.contains("[CNCF - OrgA: Proj One (2025 Term 3)](https://example.com/1)"));
        assert!(!table.contains("2025 Spring"));
    }

    #[test]
    fn record_without_mentors_gets_empty_cell() {
        let records = vec![record("OrgA", "Proj One", &[], "https://example.com/1")];
        let table = generate_table(&records, "2025 Term 3");

        let body_row = table.lines().nth(2).unwrap();
        assert_eq!(
            body_row,
            "| [CNCF - OrgA: Proj One (2025 Term 3)](https://example.com/1) |  |   |"
        );
    }

    #[test]
    fn rows_follow_record_order() {
        let records = vec![
            record("OrgA", "First", &["A"], "https://example.com/1"),
            record("OrgB", "Second", &["B"], "https://example.com/2"),
        ];
        let table = generate_table(&records, "2025 Term 3");

        let first = table.lines().nth(2).unwrap();
        let second = table.lines().nth(3).unwrap();
        assert!(first.contains("OrgA: First"));
        assert!(second.contains("OrgB: Second"));
    }
}
