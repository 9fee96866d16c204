//! Simulated export and share operations. These are deliberate placeholders:
//! the "document" is a plain-text rendering of the record and the share URL
//! points at nothing. No real file format is produced.

pub mod handlers;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::ResumeRecord;

const SHARE_BASE_URL: &str = "https://craftcv.dev/share";
const SHARE_TOKEN_LEN: usize = 9;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Docx,
    Txt,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Txt => "txt",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedDocument {
    pub file_name: String,
    pub format: ExportFormat,
    pub content: String,
}

/// Renders the placeholder document body for any requested format.
pub fn export_placeholder(record: &ResumeRecord, format: ExportFormat) -> ExportedDocument {
    let name = if record.personal_info.full_name.is_empty() {
        "resume"
    } else {
        &record.personal_info.full_name
    };

    let mut content = String::new();
    content.push_str(&format!("{name}\n"));
    if !record.personal_info.email.is_empty() {
        content.push_str(&format!("{}\n", record.personal_info.email));
    }
    content.push_str(&format!(
        "\nTemplate: {} ({})\n",
        record.selected_template,
        record.resume_type.as_str()
    ));
    content.push_str(&format!(
        "\nEducation: {} entries\nExperience: {} entries\nProjects: {} entries\n",
        record.education.len(),
        record.experience.len(),
        record.projects.len()
    ));

    ExportedDocument {
        file_name: format!(
            "{}.{}",
            name.to_lowercase().replace(' ', "-"),
            format.extension()
        ),
        format,
        content,
    }
}

/// Generates a random-looking share URL. The token is not stored anywhere;
/// the link resolves to nothing by design.
pub fn share_url() -> String {
    let token: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(SHARE_TOKEN_LEN)
        .collect();
    format!("{SHARE_BASE_URL}/{token}")
}
