use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::models::templates;

/// One page of the linear wizard sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        id: "type",
        title: "Resume Type",
        description: "Choose your target application",
    },
    Step {
        id: "template",
        title: "Template",
        description: "Select your design",
    },
    Step {
        id: "personal",
        title: "Personal Info",
        description: "Basic contact information",
    },
    Step {
        id: "education",
        title: "Education",
        description: "Academic background",
    },
    Step {
        id: "experience",
        title: "Experience",
        description: "Work and internship history",
    },
    Step {
        id: "skills",
        title: "Skills",
        description: "Technical and soft skills",
    },
    Step {
        id: "projects",
        title: "Projects",
        description: "Personal and academic projects",
    },
    Step {
        id: "preview",
        title: "Preview",
        description: "Review and download",
    },
];

/// Top-level record fields addressable by `update_section`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    PersonalInfo,
    Education,
    Experience,
    Skills,
    Projects,
    ResumeType,
    SelectedTemplate,
}

/// The wizard state machine: one resume record plus a step cursor.
///
/// Advancing past an incomplete step is allowed on purpose. There is no
/// validation gating between steps.
#[derive(Debug, Clone)]
pub struct WizardController {
    current_step: usize,
    pub record: ResumeRecord,
}

impl Default for WizardController {
    fn default() -> Self {
        Self {
            current_step: 0,
            record: ResumeRecord::default(),
        }
    }
}

impl WizardController {
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step(&self) -> &'static Step {
        &STEPS[self.current_step]
    }

    /// Moves to the next step. No-op on the last step.
    pub fn advance(&mut self) {
        if self.current_step < STEPS.len() - 1 {
            self.current_step += 1;
        }
    }

    /// Moves to the previous step. No-op on the first step.
    pub fn retreat(&mut self) {
        if self.current_step > 0 {
            self.current_step -= 1;
        }
    }

    /// Percentage of the wizard completed, counting the current step.
    pub fn progress(&self) -> f64 {
        ((self.current_step + 1) as f64 / STEPS.len() as f64) * 100.0
    }

    /// Replaces one top-level field of the record wholesale. Shallow-replace
    /// semantics: whatever the caller sends becomes the new value, no partial
    /// merge inside nested objects.
    pub fn update_section(&mut self, key: SectionKey, value: Value) -> Result<(), AppError> {
        match key {
            SectionKey::PersonalInfo => {
                self.record.personal_info = decode(key, value)?;
            }
            SectionKey::Education => {
                self.record.education = decode(key, value)?;
            }
            SectionKey::Experience => {
                self.record.experience = decode(key, value)?;
            }
            SectionKey::Skills => {
                self.record.skills = decode(key, value)?;
            }
            SectionKey::Projects => {
                self.record.projects = decode(key, value)?;
            }
            SectionKey::ResumeType => {
                self.record.resume_type = decode(key, value)?;
            }
            SectionKey::SelectedTemplate => {
                let id: String = decode(key, value)?;
                if !templates::is_known_template(&id) {
                    return Err(AppError::Validation(format!("Unknown template '{id}'")));
                }
                self.record.selected_template = id;
            }
        }
        Ok(())
    }
}

fn decode<T: serde::de::DeserializeOwned>(key: SectionKey, value: Value) -> Result<T, AppError> {
    serde_json::from_value(value)
        .map_err(|e| AppError::Validation(format!("Invalid value for section {key:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeType;
    use serde_json::json;

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut wizard = WizardController::default();
        wizard.retreat();
        assert_eq!(wizard.current_step(), 0);
    }

    #[test]
    fn test_advance_clamps_at_last_step() {
        let mut wizard = WizardController::default();
        for _ in 0..STEPS.len() + 3 {
            wizard.advance();
        }
        assert_eq!(wizard.current_step(), STEPS.len() - 1);
        assert_eq!(wizard.step().id, "preview");
    }

    #[test]
    fn test_advance_then_retreat_round_trips() {
        let mut wizard = WizardController::default();
        wizard.advance();
        wizard.advance();
        let before = wizard.current_step();
        wizard.advance();
        wizard.retreat();
        assert_eq!(wizard.current_step(), before);
    }

    #[test]
    fn test_progress_at_first_and_last_step() {
        let mut wizard = WizardController::default();
        let expected_first = 100.0 / STEPS.len() as f64;
        assert!((wizard.progress() - expected_first).abs() < f64::EPSILON);
        for _ in 0..STEPS.len() {
            wizard.advance();
        }
        assert!((wizard.progress() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_section_replaces_resume_type() {
        let mut wizard = WizardController::default();
        wizard
            .update_section(SectionKey::ResumeType, json!("hackathon"))
            .unwrap();
        assert_eq!(wizard.record.resume_type, ResumeType::Hackathon);
    }

    #[test]
    fn test_update_section_replaces_whole_skills_block() {
        let mut wizard = WizardController::default();
        wizard.record.skills.soft = vec!["teamwork".to_string()];
        wizard
            .update_section(
                SectionKey::Skills,
                json!({ "technical": ["Rust"], "soft": [], "languages": [] }),
            )
            .unwrap();
        // Wholesale replacement: the old soft-skill list is gone.
        assert_eq!(wizard.record.skills.technical, vec!["Rust"]);
        assert!(wizard.record.skills.soft.is_empty());
    }

    #[test]
    fn test_update_section_rejects_unknown_template() {
        let mut wizard = WizardController::default();
        let err = wizard
            .update_section(SectionKey::SelectedTemplate, json!("no-such-template"))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(wizard.record.selected_template, "modern-tech");
    }

    #[test]
    fn test_update_section_rejects_malformed_value() {
        let mut wizard = WizardController::default();
        let err = wizard
            .update_section(SectionKey::PersonalInfo, json!("not an object"))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
