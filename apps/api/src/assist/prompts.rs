//! Prompt templates for the assist operations. Each prompt instructs the
//! model on output shape; the ops layer still pattern-matches for embedded
//! JSON because models do not reliably comply.

use crate::models::resume::{ResumeRecord, ResumeType};

pub fn improve_description(section: &str, content: &str, resume_type: ResumeType) -> String {
    format!(
        "You are a professional resume advisor. Please improve the following {section} section \
         for a {resume_type} resume.\n\n\
         Current content: \"{content}\"\n\n\
         Please provide:\n\
         1. An improved version of the content\n\
         2. 2-3 specific suggestions for enhancement\n\
         3. Keep it concise and professional\n\n\
         Format your response as JSON:\n\
         {{\n  \"improved\": \"improved content here\",\n  \"suggestions\": [\"suggestion 1\", \"suggestion 2\", \"suggestion 3\"]\n}}",
        resume_type = resume_type.as_str(),
    )
}

pub fn suggest_skills(resume_type: ResumeType, existing: &[String]) -> String {
    format!(
        "Suggest 10 relevant technical skills for a {resume_type} resume.\n\
         Current skills: {current}\n\n\
         Please suggest skills that are:\n\
         1. Relevant to {resume_type} applications\n\
         2. Not already in the current skills list\n\
         3. Popular and in-demand in the current job market\n\n\
         Return only a JSON array of skill names:\n\
         [\"skill1\", \"skill2\", \"skill3\", ...]",
        resume_type = resume_type.as_str(),
        current = existing.join(", "),
    )
}

pub fn draft_project_description(
    name: &str,
    technologies: &[String],
    resume_type: ResumeType,
) -> String {
    format!(
        "Generate a professional project description for a {resume_type} resume.\n\n\
         Project Name: {name}\n\
         Technologies Used: {tech}\n\n\
         Please create a description that:\n\
         1. Is 2-3 sentences long\n\
         2. Highlights technical achievements and impact\n\
         3. Uses action verbs and quantifiable results where possible\n\
         4. Is appropriate for a {resume_type} application\n\n\
         Return only the description text, no additional formatting.",
        resume_type = resume_type.as_str(),
        tech = technologies.join(", "),
    )
}

pub fn analyze_record(record: &ResumeRecord) -> String {
    format!(
        "Analyze this resume data and provide a completeness score and recommendations:\n\n\
         Resume Type: {resume_type}\n\
         Personal Info: {personal}\n\
         Education: {education} entries\n\
         Experience: {experience} entries\n\
         Skills: {skills} total skills\n\
         Projects: {projects} entries\n\n\
         Please provide:\n\
         1. A completeness score (0-100)\n\
         2. Top 3 recommendations for improvement\n\
         3. Missing sections or weak areas\n\n\
         Format as JSON:\n\
         {{\n  \"score\": 85,\n  \"recommendations\": [\"recommendation 1\", \"recommendation 2\", \"recommendation 3\"],\n  \"weak_areas\": [\"area 1\", \"area 2\"]\n}}",
        resume_type = record.resume_type.as_str(),
        personal = serde_json::to_string(&record.personal_info).unwrap_or_default(),
        education = record.education.len(),
        experience = record.experience.len(),
        skills = record.skills.technical.len() + record.skills.soft.len(),
        projects = record.projects.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improve_prompt_embeds_content_and_type() {
        let prompt = improve_description("experience", "Wrote code", ResumeType::Internship);
        assert!(prompt.contains("\"Wrote code\""));
        assert!(prompt.contains("internship resume"));
    }

    #[test]
    fn test_skill_prompt_lists_existing_skills() {
        let prompt = suggest_skills(
            ResumeType::Job,
            &["Rust".to_string(), "Postgres".to_string()],
        );
        assert!(prompt.contains("Rust, Postgres"));
    }

    #[test]
    fn test_analyze_prompt_counts_entries() {
        let mut record = ResumeRecord::default();
        record.skills.technical = vec!["Rust".to_string()];
        record.skills.soft = vec!["Teamwork".to_string()];
        let prompt = analyze_record(&record);
        assert!(prompt.contains("Skills: 2 total skills"));
        assert!(prompt.contains("Education: 0 entries"));
    }
}
