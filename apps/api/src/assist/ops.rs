//! Assist operations with their fixed fallback values.
//!
//! Error policy (the only error kind this service has): an external call
//! failed or returned unparseable content. Caught here, logged, and replaced
//! by the documented fallback — never surfaced to the caller as an error
//! state. `""` and `[]` are ordinary field values downstream.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::assist::prompts;
use crate::llm_client::{extract_json_array, extract_json_object, GeminiClient, GeminiError};
use crate::models::resume::{ResumeRecord, ResumeType};

pub const FALLBACK_SUGGESTION: &str = "Unable to generate suggestions at this time.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    pub improved: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAnalysis {
    pub score: u32,
    pub recommendations: Vec<String>,
    pub weak_areas: Vec<String>,
}

impl RecordAnalysis {
    /// The canned analysis substituted when the model call fails.
    pub fn fallback() -> Self {
        Self {
            score: 70,
            recommendations: vec![
                "Add more specific achievements".to_string(),
                "Include quantifiable results".to_string(),
                "Expand technical skills".to_string(),
            ],
            weak_areas: vec![
                "Experience section".to_string(),
                "Project descriptions".to_string(),
            ],
        }
    }
}

/// The assist backend. Carried in `AppState` as `Arc<dyn TextAssist>` so the
/// fallback paths are testable without network access.
#[async_trait]
pub trait TextAssist: Send + Sync {
    async fn improve_description(
        &self,
        section: &str,
        content: &str,
        resume_type: ResumeType,
    ) -> Result<Improvement, GeminiError>;

    async fn suggest_skills(
        &self,
        resume_type: ResumeType,
        existing: &[String],
    ) -> Result<Vec<String>, GeminiError>;

    async fn draft_project_description(
        &self,
        name: &str,
        technologies: &[String],
        resume_type: ResumeType,
    ) -> Result<String, GeminiError>;

    async fn analyze_record(&self, record: &ResumeRecord) -> Result<RecordAnalysis, GeminiError>;
}

/// Production backend: one Gemini call per operation, JSON pattern-matched
/// out of the free-text response where the operation expects structure.
pub struct GeminiAssist(pub GeminiClient);

#[async_trait]
impl TextAssist for GeminiAssist {
    async fn improve_description(
        &self,
        section: &str,
        content: &str,
        resume_type: ResumeType,
    ) -> Result<Improvement, GeminiError> {
        let prompt = prompts::improve_description(section, content, resume_type);
        let text = self.0.generate(&prompt).await?;
        let json = extract_json_object(&text).ok_or(GeminiError::EmptyContent)?;
        Ok(serde_json::from_str(json)?)
    }

    async fn suggest_skills(
        &self,
        resume_type: ResumeType,
        existing: &[String],
    ) -> Result<Vec<String>, GeminiError> {
        let prompt = prompts::suggest_skills(resume_type, existing);
        let text = self.0.generate(&prompt).await?;
        let json = extract_json_array(&text).ok_or(GeminiError::EmptyContent)?;
        Ok(serde_json::from_str(json)?)
    }

    async fn draft_project_description(
        &self,
        name: &str,
        technologies: &[String],
        resume_type: ResumeType,
    ) -> Result<String, GeminiError> {
        let prompt = prompts::draft_project_description(name, technologies, resume_type);
        let text = self.0.generate(&prompt).await?;
        Ok(text.trim().to_string())
    }

    async fn analyze_record(&self, record: &ResumeRecord) -> Result<RecordAnalysis, GeminiError> {
        let prompt = prompts::analyze_record(record);
        let text = self.0.generate(&prompt).await?;
        let json = extract_json_object(&text).ok_or(GeminiError::EmptyContent)?;
        Ok(serde_json::from_str(json)?)
    }
}

// Fallback wrappers. Handlers call these, never the trait directly, so a
// failed call can never escape as an error response.

pub async fn improve_with_fallback(
    assist: &dyn TextAssist,
    section: &str,
    content: &str,
    resume_type: ResumeType,
) -> Improvement {
    match assist.improve_description(section, content, resume_type).await {
        Ok(improvement) => improvement,
        Err(e) => {
            warn!("improve_description failed, keeping original text: {e}");
            Improvement {
                improved: content.to_string(),
                suggestions: vec![FALLBACK_SUGGESTION.to_string()],
            }
        }
    }
}

pub async fn suggest_skills_with_fallback(
    assist: &dyn TextAssist,
    resume_type: ResumeType,
    existing: &[String],
) -> Vec<String> {
    match assist.suggest_skills(resume_type, existing).await {
        Ok(skills) => skills,
        Err(e) => {
            warn!("suggest_skills failed, returning no suggestions: {e}");
            Vec::new()
        }
    }
}

pub async fn draft_project_description_with_fallback(
    assist: &dyn TextAssist,
    name: &str,
    technologies: &[String],
    resume_type: ResumeType,
) -> String {
    match assist
        .draft_project_description(name, technologies, resume_type)
        .await
    {
        Ok(description) => description,
        Err(e) => {
            warn!("draft_project_description failed, returning empty text: {e}");
            String::new()
        }
    }
}

pub async fn analyze_record_with_fallback(
    assist: &dyn TextAssist,
    record: &ResumeRecord,
) -> RecordAnalysis {
    match assist.analyze_record(record).await {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!("analyze_record failed, returning canned analysis: {e}");
            RecordAnalysis::fallback()
        }
    }
}
