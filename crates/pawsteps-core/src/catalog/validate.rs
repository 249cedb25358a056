//! Lenient validation of the static content documents.
//!
//! The curriculum and support documents are parsed as loose JSON and
//! validated field by field. Every failure becomes a descriptive error
//! string; nothing aborts the load. Invalid entries are skipped, invalid
//! optional fields are dropped, and dangling lesson references are
//! reported while the week itself is kept.

use std::collections::HashMap;

use serde_json::Value;

use crate::models::{Lesson, SupportCategory, SupportItem, Week};

/// Result of loading the curriculum document.
#[derive(Debug, Default)]
pub(super) struct CurriculumLoad {
    pub weeks: Vec<Week>,
    pub lessons_by_week: HashMap<String, Vec<Lesson>>,
    pub errors: Vec<String>,
}

/// Result of loading the support-library document.
#[derive(Debug, Default)]
pub(super) struct SupportLoad {
    pub categories: Vec<SupportCategory>,
    pub errors: Vec<String>,
}

pub(super) fn load_curriculum(source: &str) -> CurriculumLoad {
    let mut load = CurriculumLoad::default();

    let document: Value = match serde_json::from_str(source) {
        Ok(document) => document,
        Err(e) => {
            load.errors.push(format!("Curriculum document is not valid JSON: {e}"));
            return load;
        }
    };

    let Some(weeks) = document.get("weeks").and_then(Value::as_array) else {
        load.errors
            .push("Curriculum document is missing the 'weeks' array".to_string());
        return load;
    };

    for (index, entry) in weeks.iter().enumerate() {
        match validate_week(entry, index, &mut load.errors) {
            Some((week, lessons)) => {
                load.lessons_by_week.insert(week.id.clone(), lessons);
                load.weeks.push(week);
            }
            None => continue,
        }
    }

    load.weeks.sort_by_key(|week| week.number);
    load
}

/// Validates one week entry; `None` drops the week.
fn validate_week(entry: &Value, index: usize, errors: &mut Vec<String>) -> Option<(Week, Vec<Lesson>)> {
    let label = entry
        .get("id")
        .and_then(Value::as_str)
        .map_or_else(|| format!("week at index {index}"), |id| format!("week '{id}'"));

    let id = require_string(entry, "id", &label, errors)?;
    let number = match entry.get("number").and_then(Value::as_u64) {
        Some(number) => number as u32,
        None => {
            errors.push(format!("{label}: 'number' must be an integer"));
            return None;
        }
    };
    let title = require_string(entry, "title", &label, errors)?;
    let focus = require_string(entry, "focus", &label, errors)?;
    let lesson_ids = validate_lesson_ids(entry, &label, errors)?;

    let mut lessons = Vec::new();
    if let Some(bundle) = entry.get("lessons").and_then(Value::as_array) {
        for (lesson_index, lesson_entry) in bundle.iter().enumerate() {
            if let Some(lesson) = validate_lesson(lesson_entry, lesson_index, &label, errors) {
                lessons.push(lesson);
            }
        }
    } else {
        errors.push(format!("{label}: missing 'lessons' bundle"));
    }

    // Dangling references are reported but do not remove the week.
    for lesson_id in &lesson_ids {
        if !lessons.iter().any(|lesson| &lesson.id == lesson_id) {
            errors.push(format!(
                "{label}: declared lesson '{lesson_id}' does not resolve within the week's bundle"
            ));
        }
    }

    Some((
        Week {
            id,
            number,
            title,
            focus,
            lesson_ids,
        },
        lessons,
    ))
}

/// The declared lesson-id list: non-empty strings, duplicate-free.
fn validate_lesson_ids(entry: &Value, label: &str, errors: &mut Vec<String>) -> Option<Vec<String>> {
    let Some(raw) = entry.get("lessonIds").and_then(Value::as_array) else {
        errors.push(format!("{label}: 'lessonIds' must be an array"));
        return None;
    };

    let mut ids = Vec::with_capacity(raw.len());
    for value in raw {
        match value.as_str() {
            Some(id) if !id.is_empty() => {
                if ids.iter().any(|existing: &String| existing == id) {
                    errors.push(format!("{label}: duplicate lesson id '{id}' in 'lessonIds'"));
                } else {
                    ids.push(id.to_string());
                }
            }
            _ => errors.push(format!("{label}: 'lessonIds' entries must be non-empty strings")),
        }
    }
    Some(ids)
}

/// Validates one lesson; `None` drops the lesson.
fn validate_lesson(
    entry: &Value,
    index: usize,
    week_label: &str,
    errors: &mut Vec<String>,
) -> Option<Lesson> {
    let label = entry.get("id").and_then(Value::as_str).map_or_else(
        || format!("{week_label}, lesson at index {index}"),
        |id| format!("{week_label}, lesson '{id}'"),
    );

    let id = require_string(entry, "id", &label, errors)?;
    let title = require_string(entry, "title", &label, errors)?;

    Some(Lesson {
        id,
        title,
        objective: optional_string(entry, "objective", &label, errors),
        duration: optional_string(entry, "duration", &label, errors),
        materials: optional_string_array(entry, "materials", &label, errors),
        steps: optional_string_array(entry, "steps", &label, errors),
        guideline: optional_string(entry, "guideline", &label, errors),
        safety_note: optional_string(entry, "safetyNote", &label, errors),
    })
}

pub(super) fn load_support(source: &str) -> SupportLoad {
    let mut load = SupportLoad::default();

    let document: Value = match serde_json::from_str(source) {
        Ok(document) => document,
        Err(e) => {
            load.errors.push(format!("Support document is not valid JSON: {e}"));
            return load;
        }
    };

    let Some(categories) = document.get("categories").and_then(Value::as_array) else {
        load.errors
            .push("Support document is missing the 'categories' array".to_string());
        return load;
    };

    for (index, entry) in categories.iter().enumerate() {
        if let Some(category) = validate_category(entry, index, &mut load.errors) {
            load.categories.push(category);
        }
    }
    load
}

/// Validates one support category; `None` drops the category.
fn validate_category(entry: &Value, index: usize, errors: &mut Vec<String>) -> Option<SupportCategory> {
    let label = entry.get("id").and_then(Value::as_str).map_or_else(
        || format!("support category at index {index}"),
        |id| format!("support category '{id}'"),
    );

    let id = require_string(entry, "id", &label, errors)?;
    let title = require_string(entry, "title", &label, errors)?;
    let description = require_string(entry, "description", &label, errors)?;
    let keywords = require_string_array(entry, "keywords", &label, errors)?;

    let mut items = Vec::new();
    if let Some(raw_items) = entry.get("items").and_then(Value::as_array) {
        for (item_index, item_entry) in raw_items.iter().enumerate() {
            if let Some(item) = validate_item(item_entry, item_index, &label, errors) {
                items.push(item);
            }
        }
    }

    Some(SupportCategory {
        id,
        title,
        description,
        keywords,
        items,
    })
}

/// Validates one support item; `None` drops the item.
fn validate_item(
    entry: &Value,
    index: usize,
    category_label: &str,
    errors: &mut Vec<String>,
) -> Option<SupportItem> {
    let label = entry.get("id").and_then(Value::as_str).map_or_else(
        || format!("{category_label}, item at index {index}"),
        |id| format!("{category_label}, item '{id}'"),
    );

    Some(SupportItem {
        id: require_string(entry, "id", &label, errors)?,
        title: require_string(entry, "title", &label, errors)?,
        summary: require_string(entry, "summary", &label, errors)?,
        tips: require_string_array(entry, "tips", &label, errors)?,
    })
}

fn require_string(entry: &Value, field: &str, label: &str, errors: &mut Vec<String>) -> Option<String> {
    match entry.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Some(value.to_string()),
        _ => {
            errors.push(format!("{label}: '{field}' must be a non-empty string"));
            None
        }
    }
}

fn optional_string(entry: &Value, field: &str, label: &str, errors: &mut Vec<String>) -> Option<String> {
    match entry.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(format!("{label}: '{field}' must be a string when present"));
            None
        }
    }
}

fn optional_string_array(entry: &Value, field: &str, label: &str, errors: &mut Vec<String>) -> Vec<String> {
    match entry.get(field) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(values)) => {
            let mut collected = Vec::with_capacity(values.len());
            for value in values {
                match value.as_str() {
                    Some(s) => collected.push(s.to_string()),
                    None => errors.push(format!("{label}: '{field}' entries must be strings")),
                }
            }
            collected
        }
        Some(_) => {
            errors.push(format!("{label}: '{field}' must be an array when present"));
            Vec::new()
        }
    }
}

fn require_string_array(
    entry: &Value,
    field: &str,
    label: &str,
    errors: &mut Vec<String>,
) -> Option<Vec<String>> {
    match entry.get(field) {
        Some(Value::Array(values)) => {
            let mut collected = Vec::with_capacity(values.len());
            for value in values {
                match value.as_str() {
                    Some(s) => collected.push(s.to_string()),
                    None => errors.push(format!("{label}: '{field}' entries must be strings")),
                }
            }
            Some(collected)
        }
        _ => {
            errors.push(format!("{label}: '{field}' must be a string array"));
            None
        }
    }
}
