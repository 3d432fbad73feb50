use regex::Regex;
use serde::{Deserialize, Serialize};

/// One project row recovered from the historical archive document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArchiveProject {
    pub year: i32,
    pub term: String,
    pub organization: String,
    pub title: String,
    pub url: String,
    pub mentors: Vec<String>,
    pub mentee: String,
}

/// Fallback year for rows preceding any year heading.
const DEFAULT_YEAR: i32 = 2022;

/// Parses the accumulated archive README: `#### <year>` and `##### <term>`
/// headings set the scope for the generated tables that follow. Total over
/// arbitrary text; rows that do not look like project rows are skipped.
pub fn parse_archive(content: &str) -> Vec<ArchiveProject> {
    let year_re = Regex::new(r"^#{4}\s(\d{4})").unwrap();
    let term_re = Regex::new(r"^#{5}\s(.*)$").unwrap();
    let link_re = Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap();

    let mut projects = Vec::new();
    let mut current_year: i32 = 0;
    let mut current_term = String::new();

    for raw in content.lines() {
        let line = raw.trim();

        if let Some(caps) = year_re.captures(line) {
            current_year = caps[1].parse().unwrap_or(0);
            continue;
        }

        if let Some(caps) = term_re.captures(line) {
            current_term = normalize_term(&caps[1]);
            continue;
        }

        if !is_table_row(line) {
            continue;
        }

        let cells = split_cells(line);
        if cells.len() < 2 {
            continue;
        }

        let project_col = &cells[0];
        if project_col.eq_ignore_ascii_case("project") || project_col.contains("---") {
            continue;
        }

        let (link_text, url) = match link_re.captures(project_col) {
            Some(caps) => (caps[1].to_string(), caps[2].to_string()),
            None => (project_col.clone(), String::new()),
        };

        let (organization, title) = split_organization(&link_text);

        let mentors: Vec<String> = cells[1]
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();

        let mentee = cells.get(2).cloned().unwrap_or_default();

        projects.push(ArchiveProject {
            year: if current_year == 0 { DEFAULT_YEAR } else { current_year },
            term: if current_term.is_empty() {
                "Unknown".to_string()
            } else {
                current_term.clone()
            },
            organization: normalize_organization(&organization),
            title: clean_title(&title),
            url,
            mentors,
            mentee,
        });
    }

    projects
}

/// A data row: pipe-framed and not the `---` separator.
fn is_table_row(line: &str) -> bool {
    line.starts_with('|') && line.contains('|') && !line.contains("---")
}

/// Pipe-splits a row, trimming cells and dropping the empty fragments a
/// leading/trailing pipe produces.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

/// Term headings read like `2025 Term 2: June - August` — keep the part
/// before the colon and drop a leading year so terms compare across years.
fn normalize_term(raw: &str) -> String {
    let mut term = raw.trim();
    if let Some((before_colon, _)) = term.split_once(':') {
        term = before_colon.trim();
    }
    let year_prefix = Regex::new(r"^\d{4}\s+").unwrap();
    year_prefix.replace(term, "").to_string()
}

/// Splits a project link text into organization and title.
///
/// `"CNCF - Org: Title"` and `"CNCF - Org - Title"` split on their
/// separator; a prefixed text without one keeps the full text as title and
/// takes the first word as organization. Unprefixed text splits on `:` when
/// present, else the organization falls back to `"Other"`.
fn split_organization(link_text: &str) -> (String, String) {
    const CNCF_PREFIX: &str = "CNCF - ";

    if let Some(rest) = link_text.strip_prefix(CNCF_PREFIX) {
        let separator = if rest.contains(':') {
            Some(":")
        } else if rest.contains(" - ") {
            Some(" - ")
        } else {
            None
        };

        return match separator {
            Some(sep) => {
                let mut parts = rest.splitn(2, sep);
                let organization = parts.next().unwrap_or_default().trim().to_string();
                let title = parts.next().unwrap_or_default().trim().to_string();
                (organization, title)
            }
            None => {
                let organization = rest.split(' ').next().unwrap_or_default().to_string();
                (organization, link_text.to_string())
            }
        };
    }

    if let Some((organization, title)) = link_text.split_once(':') {
        (organization.trim().to_string(), title.trim().to_string())
    } else {
        ("Other".to_string(), link_text.to_string())
    }
}

/// Drops a `(yyyy Term n)` annotation left in the title by the generator.
fn clean_title(title: &str) -> String {
    let term_note = Regex::new(r"\(\d{4} Term \d+\)").unwrap();
    term_note.replace(title, "").trim().to_string()
}

/// Collapses organization spelling variants onto their canonical name.
fn normalize_organization(organization: &str) -> String {
    for canonical in ["Kubernetes", "Knative", "WasmEdge"] {
        if organization.contains(canonical) {
            return canonical.to_string();
        }
    }
    organization.to_string()
}
