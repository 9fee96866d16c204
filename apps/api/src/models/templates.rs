use serde::Serialize;

use crate::models::resume::ResumeType;

pub const DEFAULT_TEMPLATE: &str = "modern-tech";

/// One entry in the static template catalog. Visual content lives client-side;
/// the API only validates ids and reports which resume types a template suits.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub recommended_for: &'static [ResumeType],
}

pub const TEMPLATES: &[Template] = &[
    Template {
        id: "modern-tech",
        name: "Modern Tech",
        recommended_for: &[ResumeType::Job, ResumeType::Hackathon],
    },
    Template {
        id: "executive-pro",
        name: "Executive Pro",
        recommended_for: &[ResumeType::Job],
    },
    Template {
        id: "creative-designer",
        name: "Creative Designer",
        recommended_for: &[ResumeType::Job, ResumeType::Internship],
    },
    Template {
        id: "startup-founder",
        name: "Startup Founder",
        recommended_for: &[ResumeType::Job, ResumeType::Hackathon],
    },
    Template {
        id: "academic-scholar",
        name: "Academic Scholar",
        recommended_for: &[ResumeType::Internship],
    },
    Template {
        id: "sales-champion",
        name: "Sales Champion",
        recommended_for: &[ResumeType::Job],
    },
    Template {
        id: "healthcare-pro",
        name: "Healthcare Pro",
        recommended_for: &[ResumeType::Job],
    },
    Template {
        id: "finance-expert",
        name: "Finance Expert",
        recommended_for: &[ResumeType::Job],
    },
    Template {
        id: "marketing-guru",
        name: "Marketing Guru",
        recommended_for: &[ResumeType::Job, ResumeType::Internship],
    },
];

pub fn is_known_template(id: &str) -> bool {
    TEMPLATES.iter().any(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_is_in_catalog() {
        assert!(is_known_template(DEFAULT_TEMPLATE));
    }

    #[test]
    fn test_unknown_template_rejected() {
        assert!(!is_known_template("vaporwave-deluxe"));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<_> = TEMPLATES.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TEMPLATES.len());
    }
}
