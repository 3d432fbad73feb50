use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::readme_parser::ProjectRecord;

/// JSON envelope around the parsed records, with a generation timestamp so
/// saved reports can be told apart.
#[derive(Debug, Serialize, Deserialize)]
pub struct MentorshipReport {
    pub generated_at: String,
    pub total_projects: usize,
    pub projects: Vec<ProjectRecord>,
}

pub fn build_report(projects: Vec<ProjectRecord>) -> MentorshipReport {
    MentorshipReport {
        generated_at: Utc::now().to_rfc3339(),
        total_projects: projects.len(),
        projects,
    }
}
