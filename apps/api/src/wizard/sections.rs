//! Pure list transformations over the repeatable record sections.
//!
//! Entry ids are fresh v4 uuids: unique within their list and never reused
//! after removal. Insertion order is display order.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};

/// Implemented by every repeatable-list entry type so the list operations
/// below work uniformly across education, experience, and projects.
pub trait SectionEntry: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> Uuid;
}

impl SectionEntry for EducationEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl SectionEntry for ExperienceEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl SectionEntry for ProjectEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Applies a shallow field patch to the entry matching `id`. Absent ids are a
/// no-op (returns `None`), matching the forgiving form semantics. The `id`
/// field itself cannot be patched.
pub fn patch_entry<T: SectionEntry>(
    list: &mut [T],
    id: Uuid,
    patch: &Value,
) -> Result<Option<T>, AppError> {
    let fields = patch
        .as_object()
        .ok_or_else(|| AppError::Validation("Patch body must be a JSON object".to_string()))?;

    let Some(slot) = list.iter_mut().find(|e| e.id() == id) else {
        return Ok(None);
    };

    let mut current = serde_json::to_value(&*slot)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize entry: {e}")))?;
    let obj = current.as_object_mut().expect("entries serialize as objects");
    for (key, value) in fields {
        if key == "id" {
            return Err(AppError::Validation("Entry ids cannot be changed".to_string()));
        }
        if !obj.contains_key(key) {
            return Err(AppError::Validation(format!("Unknown entry field '{key}'")));
        }
        obj.insert(key.clone(), value.clone());
    }

    let updated: T = serde_json::from_value(current)
        .map_err(|e| AppError::Validation(format!("Invalid patch value: {e}")))?;
    *slot = updated.clone();
    Ok(Some(updated))
}

/// Removes the entry matching `id`. Absent ids are a no-op. Relative order of
/// the survivors is preserved.
pub fn remove_entry<T: SectionEntry>(list: &mut Vec<T>, id: Uuid) -> bool {
    let before = list.len();
    list.retain(|e| e.id() != id);
    list.len() != before
}

/// Appends a skill to one category list. Leading/trailing whitespace is
/// stripped; empty and duplicate values are rejected.
pub fn add_skill(list: &mut Vec<String>, skill: &str) -> Result<(), AppError> {
    let skill = skill.trim();
    if skill.is_empty() {
        return Err(AppError::Validation("Skill cannot be empty".to_string()));
    }
    if list.iter().any(|s| s == skill) {
        return Err(AppError::Validation(format!("Skill '{skill}' already added")));
    }
    list.push(skill.to_string());
    Ok(())
}

/// Removes a skill by value. Absent values are a no-op.
pub fn remove_skill(list: &mut Vec<String>, skill: &str) -> bool {
    let before = list.len();
    list.retain(|s| s != skill);
    list.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_remove_sequences_keep_ids_unique() {
        let mut list: Vec<EducationEntry> = Vec::new();
        for _ in 0..5 {
            list.push(EducationEntry::new());
        }
        let removed = list[2].id;
        assert!(remove_entry(&mut list, removed));
        list.push(EducationEntry::new());
        list.push(EducationEntry::new());

        // 5 adds - 1 remove + 2 adds
        assert_eq!(list.len(), 6);
        let mut ids: Vec<_> = list.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
        assert!(!list.iter().any(|e| e.id == removed));
    }

    #[test]
    fn test_remove_preserves_insertion_order() {
        let mut list: Vec<ProjectEntry> = (0..4)
            .map(|i| {
                let mut p = ProjectEntry::new();
                p.name = format!("project-{i}");
                p
            })
            .collect();
        let victim = list[1].id;
        assert!(remove_entry(&mut list, victim));
        let names: Vec<_> = list.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["project-0", "project-2", "project-3"]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut list = vec![ExperienceEntry::new()];
        assert!(!remove_entry(&mut list, Uuid::new_v4()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_patch_updates_single_field() {
        let mut list = vec![ExperienceEntry::new()];
        let id = list[0].id;
        let updated = patch_entry(&mut list, id, &json!({ "company": "Acme" }))
            .unwrap()
            .unwrap();
        assert_eq!(updated.company, "Acme");
        assert_eq!(list[0].company, "Acme");
        // untouched fields survive
        assert!(list[0].position.is_empty());
    }

    #[test]
    fn test_patch_absent_id_is_noop() {
        let mut list = vec![ExperienceEntry::new()];
        let result = patch_entry(&mut list, Uuid::new_v4(), &json!({ "company": "Acme" })).unwrap();
        assert!(result.is_none());
        assert!(list[0].company.is_empty());
    }

    #[test]
    fn test_patch_rejects_id_change() {
        let mut list = vec![EducationEntry::new()];
        let id = list[0].id;
        let err = patch_entry(&mut list, id, &json!({ "id": Uuid::new_v4() })).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(list[0].id, id);
    }

    #[test]
    fn test_patch_rejects_unknown_field() {
        let mut list = vec![EducationEntry::new()];
        let id = list[0].id;
        let err = patch_entry(&mut list, id, &json!({ "salary": 1 })).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_patch_current_flag() {
        let mut list = vec![EducationEntry::new()];
        let id = list[0].id;
        patch_entry(&mut list, id, &json!({ "current": true })).unwrap();
        assert!(list[0].current);
    }

    #[test]
    fn test_add_skill_trims_and_dedupes() {
        let mut skills = Vec::new();
        add_skill(&mut skills, "  Rust  ").unwrap();
        assert_eq!(skills, vec!["Rust"]);
        assert!(add_skill(&mut skills, "Rust").is_err());
        assert!(add_skill(&mut skills, "   ").is_err());
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_remove_skill_by_value() {
        let mut skills = vec!["Rust".to_string(), "Go".to_string()];
        assert!(remove_skill(&mut skills, "Rust"));
        assert!(!remove_skill(&mut skills, "Zig"));
        assert_eq!(skills, vec!["Go"]);
    }
}
