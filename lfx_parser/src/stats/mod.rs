use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::archive_parser::ArchiveProject;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct OrgCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Program-wide aggregates over the archive.
#[derive(Debug, Serialize)]
pub struct ProgramStats {
    /// Projects per organization, most active first.
    pub org_counts: Vec<OrgCount>,
    /// Projects per year, oldest first.
    pub year_counts: Vec<YearCount>,
    pub total_orgs: usize,
    pub total_mentors: usize,
    pub total_mentees: usize,
    /// Organizations appearing for the first time in each year, sorted.
    pub new_orgs_by_year: BTreeMap<i32, Vec<String>>,
}

pub fn compute_stats(projects: &[ArchiveProject]) -> ProgramStats {
    let mut org_counts_map: HashMap<&str, usize> = HashMap::new();
    let mut year_counts_map: BTreeMap<i32, usize> = BTreeMap::new();
    let mut mentors: HashSet<&str> = HashSet::new();
    let mut mentees: HashSet<&str> = HashSet::new();

    for project in projects {
        *org_counts_map.entry(&project.organization).or_default() += 1;
        *year_counts_map.entry(project.year).or_default() += 1;
        mentors.extend(project.mentors.iter().map(String::as_str));

        // Blank mentee cells mark open slots, not people.
        if !project.mentee.trim().is_empty() {
            mentees.insert(project.mentee.as_str());
        }
    }

    let total_orgs = org_counts_map.len();

    let mut org_counts: Vec<OrgCount> = org_counts_map
        .into_iter()
        .map(|(name, count)| OrgCount {
            name: name.to_string(),
            count,
        })
        .collect();
    org_counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.name.cmp(&b.name)));

    let mut new_orgs_by_year: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    let mut seen_orgs: HashSet<&str> = HashSet::new();
    for &year in year_counts_map.keys() {
        let mut fresh: Vec<String> = Vec::new();
        for project in projects.iter().filter(|p| p.year == year) {
            if seen_orgs.insert(&project.organization) {
                fresh.push(project.organization.clone());
            }
        }
        fresh.sort();
        new_orgs_by_year.insert(year, fresh);
    }

    let year_counts = year_counts_map
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect();

    ProgramStats {
        org_counts,
        year_counts,
        total_orgs,
        total_mentors: mentors.len(),
        total_mentees: mentees.len(),
        new_orgs_by_year,
    }
}

/// Yearly project counts for one organization over the full year range the
/// archive spans, zero-filled so trend lines have no gaps.
pub fn org_trend(projects: &[ArchiveProject], organization: &str) -> Vec<YearCount> {
    let Some(min_year) = projects.iter().map(|p| p.year).min() else {
        return Vec::new();
    };
    let max_year = projects.iter().map(|p| p.year).max().unwrap_or(min_year);

    let mut counts: BTreeMap<i32, usize> = (min_year..=max_year).map(|y| (y, 0)).collect();
    for project in projects.iter().filter(|p| p.organization == organization) {
        *counts.entry(project.year).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Criteria are ANDed; unset criteria match everything. The free-text
/// search covers title, mentors, and mentee but not the organization,
/// which has its own exact filter.
#[derive(Debug, Default, Clone)]
pub struct ProjectFilter {
    pub search: String,
    pub year: Option<i32>,
    pub term: Option<String>,
    pub organization: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &ArchiveProject) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || project.title.to_lowercase().contains(&needle)
            || project
                .mentors
                .iter()
                .any(|m| m.to_lowercase().contains(&needle))
            || project.mentee.to_lowercase().contains(&needle);

        let matches_year = self.year.is_none_or(|y| project.year == y);
        let matches_term = self.term.as_deref().is_none_or(|t| project.term == t);
        let matches_org = self
            .organization
            .as_deref()
            .is_none_or(|o| project.organization == o);

        matches_search && matches_year && matches_term && matches_org
    }
}

pub fn filter_projects<'a>(
    projects: &'a [ArchiveProject],
    filter: &ProjectFilter,
) -> Vec<&'a ArchiveProject> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(
        year: i32,
        term: &str,
        organization: &str,
        title: &str,
        mentors: &[&str],
        mentee: &str,
    ) -> ArchiveProject {
        ArchiveProject {
            year,
            term: term.to_string(),
            organization: organization.to_string(),
            title: title.to_string(),
            url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
            mentors: mentors.iter().map(|m| m.to_string()).collect(),
            mentee: mentee.to_string(),
        }
    }

    fn fixture() -> Vec<ArchiveProject> {
        vec![
            project(2023, "Term 1", "Kubernetes", "Sched One", &["Alice A"], ""),
            project(2023, "Term 2", "Knative", "Event One", &["Bob B"], "Mel M"),
            project(2024, "Term 1", "Kubernetes", "Sched Two", &["Alice A", "Carol C"], " "),
            project(2025, "Term 1", "WasmEdge", "Wasm One", &["Dana D"], "Nia N"),
            project(2025, "Term 2", "Kubernetes", "Sched Three", &["Carol C"], ""),
        ]
    }

    #[test]
    fn org_counts_sorted_by_count_then_name() {
        let stats = compute_stats(&fixture());
        let names: Vec<&str> = stats.org_counts.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Kubernetes", "Knative", "WasmEdge"]);
        assert_eq!(stats.org_counts[0].count, 3);
        assert_eq!(stats.total_orgs, 3);
    }

    #[test]
    fn year_counts_ascend() {
        let stats = compute_stats(&fixture());
        assert_eq!(
            stats.year_counts,
            vec![
                YearCount { year: 2023, count: 2 },
                YearCount { year: 2024, count: 1 },
                YearCount { year: 2025, count: 2 },
            ]
        );
    }

    #[test]
    fn mentor_and_mentee_totals_are_distinct_counts() {
        let stats = compute_stats(&fixture());
        // Alice A and Carol C both mentor twice; each counts once.
        assert_eq!(stats.total_mentors, 4);
        // Whitespace-only mentee cells are open slots, not mentees.
        assert_eq!(stats.total_mentees, 2);
    }

    #[test]
    fn new_orgs_are_attributed_to_their_first_year() {
        let stats = compute_stats(&fixture());
        assert_eq!(
            stats.new_orgs_by_year.get(&2023).unwrap(),
            &vec!["Knative".to_string(), "Kubernetes".to_string()]
        );
        assert!(stats.new_orgs_by_year.get(&2024).unwrap().is_empty());
        assert_eq!(
            stats.new_orgs_by_year.get(&2025).unwrap(),
            &vec!["WasmEdge".to_string()]
        );
    }

    #[test]
    fn empty_archive_produces_empty_stats() {
        let stats = compute_stats(&[]);
        assert!(stats.org_counts.is_empty());
        assert!(stats.year_counts.is_empty());
        assert_eq!(stats.total_orgs, 0);
        assert_eq!(stats.total_mentors, 0);
    }

    #[test]
    fn org_trend_zero_fills_missing_years() {
        let trend = org_trend(&fixture(), "Knative");
        assert_eq!(
            trend,
            vec![
                YearCount { year: 2023, count: 1 },
                YearCount { year: 2024, count: 0 },
                YearCount { year: 2025, count: 0 },
            ]
        );
    }

    #[test]
    fn org_trend_of_empty_archive_is_empty() {
        assert!(org_trend(&[], "Kubernetes").is_empty());
    }

    #[test]
    fn search_matches_mentors_but_not_organization() {
        let projects = fixture();

        let by_mentor = ProjectFilter {
            search: "carol".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_projects(&projects, &by_mentor).len(), 2);

        // Organization names are reachable through the organization filter
        // only.
        let by_org_text = ProjectFilter {
            search: "knative".to_string(),
            ..Default::default()
        };
        assert!(filter_projects(&projects, &by_org_text).is_empty());
    }

    #[test]
    fn filters_combine_with_and() {
        let projects = fixture();
        let filter = ProjectFilter {
            search: String::new(),
            year: Some(2025),
            term: Some("Term 2".to_string()),
            organization: Some("Kubernetes".to_string()),
        };
        let matched = filter_projects(&projects, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Sched Three");
    }

    #[test]
    fn default_filter_matches_everything() {
        let projects = fixture();
        assert_eq!(filter_projects(&projects, &ProjectFilter::default()).len(), projects.len());
    }
}
