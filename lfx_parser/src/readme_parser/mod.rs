use regex::Regex;
use serde::{Deserialize, Serialize};

/// One project entry reconstructed from the roster README.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProjectRecord {
    /// Organization in scope when the project heading was seen; may be empty.
    pub organization: String,
    /// Raw title text after the project heading marker.
    pub title: String,
    /// Cleaned mentor names in the order they appeared.
    pub mentors: Vec<String>,
    /// Destination of the "LFX URL:" line; a record without one is dropped.
    pub url: String,
    /// Filled in by hand after selection; always empty when parsed.
    pub mentee: String,
}

/// Organization-level headings that are administrative, not organizations.
const IGNORED_HEADERS: [&str; 3] = ["Timeline", "Project instructions", "Application instructions"];

struct LinePatterns {
    /// `### Organization` — exactly three hashes.
    organization: Regex,
    /// `#### Project title` — exactly four hashes.
    project: Regex,
    /// `Mentors:` section marker, optionally bulleted.
    mentor_start: Regex,
    /// Prefixes that unconditionally end mentor capture.
    stop: Regex,
    /// Labeled URL line, matched anywhere in the line.
    lfx_url: Regex,
}

impl LinePatterns {
    fn compile() -> Self {
        Self {
            organization: Regex::new(r"^###\s+([^#].*)$").unwrap(),
            project: Regex::new(r"^####\s+(.+)$").unwrap(),
            mentor_start: Regex::new(r"(?i)^[-*]?\s*mentors?\s*:?").unwrap(),
            stop: Regex::new(r"(?i)^(upstream issue|lfx url|#)").unwrap(),
            lfx_url: Regex::new(r"(?i)lfx url:\s*(.+)").unwrap(),
        }
    }
}

/// Mutable state threaded through the line loop.
#[derive(Default)]
struct ParserState {
    current_organization: String,
    current_record: Option<ProjectRecord>,
    capturing_mentors: bool,
    output: Vec<ProjectRecord>,
}

impl ParserState {
    /// Finalize the in-progress record. Records that never got a URL are
    /// discarded silently.
    fn flush_current(&mut self) {
        if let Some(record) = self.current_record.take() {
            if !record.url.is_empty() {
                self.output.push(record);
            }
        }
    }
}

/// Walks the roster README line by line and emits completed project records
/// in document order. Total over arbitrary text; malformed input degrades to
/// skipped lines and dropped records, never an error.
pub fn parse_readme(content: &str) -> Vec<ProjectRecord> {
    let patterns = LinePatterns::compile();
    let mut state = ParserState::default();

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        process_line(&mut state, line, &patterns);
    }

    state.flush_current();
    state.output
}

fn process_line(state: &mut ParserState, line: &str, patterns: &LinePatterns) {
    // 1. Organization heading. Administrative headings keep the previous
    //    organization in scope but still end any mentor capture.
    if let Some(caps) = patterns.organization.captures(line) {
        let header = caps[1].trim();
        if !IGNORED_HEADERS.contains(&header) {
            state.current_organization = header.to_string();
        }
        state.capturing_mentors = false;
        return;
    }

    // 2. Project heading supersedes the record in progress.
    if let Some(caps) = patterns.project.captures(line) {
        state.flush_current();
        state.current_record = Some(ProjectRecord {
            organization: state.current_organization.clone(),
            title: caps[1].trim().to_string(),
            mentors: Vec::new(),
            url: String::new(),
            mentee: String::new(),
        });
        state.capturing_mentors = false;
        return;
    }

    // 3. Mentor section marker. The marker line itself is never an entry.
    if patterns.mentor_start.is_match(line) {
        state.capturing_mentors = true;
        return;
    }

    // 4. Mentor capture. A stop line ends capture but must NOT short-circuit:
    //    the same line can carry the LFX URL checked in step 5.
    if state.capturing_mentors {
        if patterns.stop.is_match(line) {
            state.capturing_mentors = false;
        } else if line.starts_with('-') || line.starts_with('*') {
            let name = clean_mentor_name(line);
            if !name.is_empty() {
                if let Some(record) = state.current_record.as_mut() {
                    record.mentors.push(name);
                }
            }
        }
    }

    // 5. URL line. A later occurrence overwrites an earlier one.
    if let Some(caps) = patterns.lfx_url.captures(line) {
        if let Some(record) = state.current_record.as_mut() {
            record.url = caps[1].trim().to_string();
            state.capturing_mentors = false;
        }
    }
}

/// Derives a plain display name from a mentor bullet:
/// `"- Jane Doe (@jdoe, jane@example.com)"` becomes `"Jane Doe"`.
pub fn clean_mentor_name(line: &str) -> String {
    let bullet = Regex::new(r"^[-*]\s+").unwrap();
    let stripped = bullet.replace(line, "");
    let stripped = stripped.trim();

    // Keep only the text before the first parenthetical, angle bracket, or
    // at-mention.
    let name = stripped.split(['(', '<', '@']).next().unwrap_or_default();
    name.trim().to_string()
}
