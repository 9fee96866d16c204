//! Heuristic scoring over the resume record. Every score is a pure function
//! of its input and lands in [0, 100].

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

/// Presence weights for the completeness score. Sum is exactly 100.
const COMPLETENESS_WEIGHTS: &[(&str, u32)] = &[
    ("full_name", 15),
    ("email", 15),
    ("phone", 10),
    ("education", 20),
    ("experience", 25),
    ("technical_skills", 10),
    ("projects", 5),
];

const ATS_BASE_SCORE: u32 = 60;
const DETAILED_DESCRIPTION_CHARS: usize = 100;
const READABLE_TEXT_CHARS: usize = 500;

/// Fixed keyword inventory for the density heuristic.
const KEYWORDS: &[&str] = &["javascript", "python", "react", "node", "aws", "git"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum SectionStatus {
    Excellent,
    Good,
    NeedsImprovement,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionScore {
    pub name: String,
    pub score: u32,
    pub status: SectionStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub completeness: u32,
    pub ats_score: u32,
    pub readability_score: u32,
    pub keyword_density: u32,
    pub sections: Vec<SectionScore>,
    pub recommendations: Vec<String>,
    pub estimated_read_time_minutes: u32,
}

pub fn analyze(record: &ResumeRecord) -> AnalyticsReport {
    AnalyticsReport {
        completeness: completeness_score(record),
        ats_score: ats_score(record),
        readability_score: readability_score(record),
        keyword_density: keyword_density(record),
        sections: section_scores(record),
        recommendations: recommendations(record),
        estimated_read_time_minutes: estimated_read_time_minutes(record),
    }
}

/// Weighted presence score: name 15, email 15, phone 10, education 20,
/// experience 25, technical skills 10, projects 5.
pub fn completeness_score(record: &ResumeRecord) -> u32 {
    let mut score = 0;
    for (field, weight) in COMPLETENESS_WEIGHTS {
        let present = match *field {
            "full_name" => !record.personal_info.full_name.is_empty(),
            "email" => !record.personal_info.email.is_empty(),
            "phone" => !record.personal_info.phone.is_empty(),
            "education" => !record.education.is_empty(),
            "experience" => !record.experience.is_empty(),
            "technical_skills" => !record.skills.technical.is_empty(),
            "projects" => !record.projects.is_empty(),
            _ => unreachable!("unknown completeness weight"),
        };
        if present {
            score += weight;
        }
    }
    score.min(100)
}

/// ATS-likeness: base 60, plus bonuses for skill breadth, a detailed
/// experience description, and profile links.
pub fn ats_score(record: &ResumeRecord) -> u32 {
    let mut score = ATS_BASE_SCORE;
    if record.skills.technical.len() >= 5 {
        score += 15;
    }
    if record
        .experience
        .iter()
        .any(|exp| exp.description.len() > DETAILED_DESCRIPTION_CHARS)
    {
        score += 15;
    }
    if !record.personal_info.linkedin.is_empty() {
        score += 5;
    }
    if !record.personal_info.github.is_empty() {
        score += 5;
    }
    score.min(100)
}

/// Two-band readability heuristic over total free-text length.
pub fn readability_score(record: &ResumeRecord) -> u32 {
    let total_text: usize = record
        .experience
        .iter()
        .map(|exp| exp.description.len())
        .chain(record.projects.iter().map(|p| p.description.len()))
        .sum();
    if total_text > READABLE_TEXT_CHARS {
        85
    } else {
        70
    }
}

/// Fraction of the fixed keyword list found anywhere in the serialized
/// record, case-insensitively. Field names count too: the `github` key
/// always satisfies "git".
pub fn keyword_density(record: &ResumeRecord) -> u32 {
    let haystack = serde_json::to_string(record)
        .unwrap_or_default()
        .to_lowercase();
    let matches = KEYWORDS.iter().filter(|k| haystack.contains(**k)).count();
    ((matches as f64 / KEYWORDS.len() as f64) * 100.0).round() as u32
}

pub fn section_scores(record: &ResumeRecord) -> Vec<SectionScore> {
    let personal_complete = !record.personal_info.full_name.is_empty()
        && !record.personal_info.email.is_empty();
    let technical = record.skills.technical.len();
    let projects = record.projects.len();

    vec![
        SectionScore {
            name: "Personal Info".to_string(),
            score: if personal_complete { 100 } else { 60 },
            status: if personal_complete {
                SectionStatus::Excellent
            } else {
                SectionStatus::NeedsImprovement
            },
        },
        SectionScore {
            name: "Education".to_string(),
            score: if record.education.is_empty() { 0 } else { 90 },
            status: if record.education.is_empty() {
                SectionStatus::Missing
            } else {
                SectionStatus::Excellent
            },
        },
        SectionScore {
            name: "Experience".to_string(),
            score: if record.experience.is_empty() { 0 } else { 85 },
            status: if record.experience.is_empty() {
                SectionStatus::Missing
            } else {
                SectionStatus::Good
            },
        },
        SectionScore {
            name: "Skills".to_string(),
            score: match technical {
                0 => 0,
                1..=4 => 70,
                _ => 95,
            },
            status: match technical {
                0 => SectionStatus::Missing,
                1..=4 => SectionStatus::Good,
                _ => SectionStatus::Excellent,
            },
        },
        SectionScore {
            name: "Projects".to_string(),
            score: match projects {
                0 => 0,
                1 => 70,
                _ => 90,
            },
            status: match projects {
                0 => SectionStatus::Missing,
                1 => SectionStatus::Good,
                _ => SectionStatus::Excellent,
            },
        },
    ]
}

pub fn recommendations(record: &ResumeRecord) -> Vec<String> {
    let mut recommendations = Vec::new();
    if record.personal_info.linkedin.is_empty() {
        recommendations.push("Add LinkedIn profile for better networking".to_string());
    }
    if record.skills.technical.len() < 5 {
        recommendations.push("Add more technical skills to improve ATS score".to_string());
    }
    if record.projects.len() < 2 {
        recommendations.push("Include more projects to showcase your abilities".to_string());
    }
    if !record
        .experience
        .iter()
        .any(|exp| exp.description.len() > DETAILED_DESCRIPTION_CHARS)
    {
        recommendations.push("Add more detailed descriptions to your experience".to_string());
    }
    recommendations
}

/// Rough reading time: 30 seconds per experience entry, 20 per project,
/// rounded up to whole minutes.
pub fn estimated_read_time_minutes(record: &ResumeRecord) -> u32 {
    let seconds = record.experience.len() as u32 * 30 + record.projects.len() as u32 * 20;
    seconds.div_ceil(60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};

    fn full_record() -> ResumeRecord {
        let mut record = ResumeRecord::default();
        record.personal_info.full_name = "Ada Lovelace".to_string();
        record.personal_info.email = "ada@example.com".to_string();
        record.personal_info.phone = "+44 1234".to_string();
        record.education.push(EducationEntry::new());
        record.experience.push(ExperienceEntry::new());
        record.skills.technical.push("Rust".to_string());
        record.projects.push(ProjectEntry::new());
        record
    }

    #[test]
    fn test_completeness_empty_record_is_zero() {
        assert_eq!(completeness_score(&ResumeRecord::default()), 0);
    }

    #[test]
    fn test_completeness_full_record_is_100() {
        assert_eq!(completeness_score(&full_record()), 100);
    }

    #[test]
    fn test_completeness_partial_weights() {
        let mut record = ResumeRecord::default();
        record.personal_info.full_name = "Ada".to_string();
        record.personal_info.email = "ada@example.com".to_string();
        // name 15 + email 15
        assert_eq!(completeness_score(&record), 30);
        record.experience.push(ExperienceEntry::new());
        assert_eq!(completeness_score(&record), 55);
    }

    #[test]
    fn test_ats_score_base_for_empty_record() {
        assert_eq!(ats_score(&ResumeRecord::default()), 60);
    }

    #[test]
    fn test_ats_score_maxes_at_100() {
        let mut record = full_record();
        record.skills.technical =
            vec!["a", "b", "c", "d", "e"].into_iter().map(String::from).collect();
        record.experience[0].description = "x".repeat(150);
        record.personal_info.linkedin = "linkedin.com/in/ada".to_string();
        record.personal_info.github = "github.com/ada".to_string();
        assert_eq!(ats_score(&record), 100);
    }

    #[test]
    fn test_ats_description_bonus_requires_over_100_chars() {
        let mut record = ResumeRecord::default();
        let mut exp = ExperienceEntry::new();
        exp.description = "x".repeat(100);
        record.experience.push(exp);
        assert_eq!(ats_score(&record), 60);
        record.experience[0].description.push('x');
        assert_eq!(ats_score(&record), 75);
    }

    #[test]
    fn test_readability_bands() {
        let mut record = ResumeRecord::default();
        assert_eq!(readability_score(&record), 70);
        let mut exp = ExperienceEntry::new();
        exp.description = "y".repeat(501);
        record.experience.push(exp);
        assert_eq!(readability_score(&record), 85);
    }

    #[test]
    fn test_keyword_density_counts_case_insensitive() {
        let mut record = ResumeRecord::default();
        record.skills.technical = vec!["Python".to_string(), "React".to_string()];
        // python + react + "git" via the github field name = 3 of 6
        assert_eq!(keyword_density(&record), 50);
    }

    #[test]
    fn test_keyword_density_floor_from_field_names() {
        // The serialized record always contains the "github" key, which the
        // substring scan counts as "git". 1 of 6 keywords.
        assert_eq!(keyword_density(&ResumeRecord::default()), 17);
    }

    #[test]
    fn test_section_scores_for_empty_record() {
        let sections = section_scores(&ResumeRecord::default());
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0].status, SectionStatus::NeedsImprovement);
        assert!(sections[1..]
            .iter()
            .all(|s| s.status == SectionStatus::Missing && s.score == 0));
    }

    #[test]
    fn test_recommendations_drop_off_as_record_fills() {
        let empty = recommendations(&ResumeRecord::default());
        assert_eq!(empty.len(), 4);

        let mut record = full_record();
        record.personal_info.linkedin = "linkedin.com/in/ada".to_string();
        record.skills.technical =
            vec!["a", "b", "c", "d", "e"].into_iter().map(String::from).collect();
        record.projects.push(ProjectEntry::new());
        record.experience[0].description = "x".repeat(150);
        assert!(recommendations(&record).is_empty());
    }

    #[test]
    fn test_read_time_rounds_up() {
        let mut record = ResumeRecord::default();
        assert_eq!(estimated_read_time_minutes(&record), 0);
        record.experience.push(ExperienceEntry::new());
        // 30 seconds rounds up to 1 minute
        assert_eq!(estimated_read_time_minutes(&record), 1);
        record.experience.push(ExperienceEntry::new());
        record.projects.push(ProjectEntry::new());
        // 80 seconds rounds up to 2 minutes
        assert_eq!(estimated_read_time_minutes(&record), 2);
    }

    #[test]
    fn test_all_scores_within_bounds() {
        for record in [ResumeRecord::default(), full_record()] {
            let report = analyze(&record);
            assert!(report.completeness <= 100);
            assert!(report.ats_score <= 100);
            assert!(report.readability_score <= 100);
            assert!(report.keyword_density <= 100);
        }
    }
}
