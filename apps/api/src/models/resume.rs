use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The target application a resume is being built for. Drives assist prompts
/// and form guidance, nothing else.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResumeType {
    Job,
    Internship,
    Hackathon,
}

impl ResumeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeType::Job => "job",
            ResumeType::Internship => "internship",
            ResumeType::Hackathon => "hackathon",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub gpa: String,
    pub start_date: String,
    pub end_date: String,
    /// When true the entry is ongoing and `end_date` is ignored by renderers.
    pub current: bool,
}

impl EducationEntry {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            gpa: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl ExperienceEntry {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
    pub demo: String,
    pub start_date: String,
    pub end_date: String,
}

impl ProjectEntry {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            github: String::new(),
            demo: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
}

/// The full resume record held by one wizard session. Process-local value,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Skills,
    pub projects: Vec<ProjectEntry>,
    pub resume_type: ResumeType,
    pub selected_template: String,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            education: Vec::new(),
            experience: Vec::new(),
            skills: Skills::default(),
            projects: Vec::new(),
            resume_type: ResumeType::Job,
            selected_template: crate::models::templates::DEFAULT_TEMPLATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = ResumeRecord::default();
        assert!(record.personal_info.full_name.is_empty());
        assert!(record.education.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.projects.is_empty());
        assert!(record.skills.technical.is_empty());
        assert_eq!(record.resume_type, ResumeType::Job);
        assert_eq!(record.selected_template, "modern-tech");
    }

    #[test]
    fn test_new_entries_get_distinct_ids() {
        let a = EducationEntry::new();
        let b = EducationEntry::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_resume_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ResumeType::Internship).unwrap(),
            "\"internship\""
        );
    }
}
