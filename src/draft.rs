//! Card Draft
//!
//! Validation and construction of new card records from form input.

use chrono::NaiveDate;

use crate::models::{format_filesize, CardTag, FileMeta, NewCard, Priority, TagColor, TaskType};

/// Description length cap, enforced while typing and again on submission
pub const DESC_MAX_CHARS: usize = 200;

/// Truncate a description to the cap, on a character boundary
pub fn clamp_desc(input: &str) -> String {
    input.chars().take(DESC_MAX_CHARS).collect()
}

/// Parse the value of a date input; empty or malformed values mean no due date
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// In-progress form state for a card being created
#[derive(Debug, Clone)]
pub struct CardDraft {
    pub title: String,
    pub desc: String,
    pub priority: Priority,
    pub tag_color: TagColor,
    pub task_type: Option<TaskType>,
    pub file: Option<FileMeta>,
    pub due_date: Option<NaiveDate>,
}

impl CardDraft {
    /// Validate and build the record the creation callback receives.
    ///
    /// Title and description must be non-empty after trimming and a task type
    /// must be selected; otherwise this returns `None` and the form stays open.
    /// The tag band opens with the submitted title and the chosen color.
    pub fn finish(self) -> Option<NewCard> {
        if self.title.trim().is_empty() || self.desc.trim().is_empty() {
            return None;
        }
        let task_type = self.task_type?;

        let filesize = format_filesize(self.file.as_ref());
        Some(NewCard {
            tag: CardTag {
                is_open: true,
                tag_title: self.title.clone(),
                tag_color: self.tag_color,
            },
            title: self.title,
            desc: clamp_desc(&self.desc),
            priority: self.priority,
            task_type,
            file: self.file,
            filesize,
            due_date: self.due_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> CardDraft {
        CardDraft {
            title: "Ship the release".to_string(),
            desc: "cut the branch and tag it".to_string(),
            priority: Priority::Medium,
            tag_color: TagColor::Blue,
            task_type: Some(TaskType::Project),
            file: None,
            due_date: None,
        }
    }

    #[test]
    fn test_finish_rejects_missing_required_fields() {
        let mut draft = valid_draft();
        draft.title = String::new();
        assert!(draft.finish().is_none());

        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        assert!(draft.finish().is_none());

        let mut draft = valid_draft();
        draft.desc = String::new();
        assert!(draft.finish().is_none());

        let mut draft = valid_draft();
        draft.desc = " \t ".to_string();
        assert!(draft.finish().is_none());

        let mut draft = valid_draft();
        draft.task_type = None;
        assert!(draft.finish().is_none());
    }

    #[test]
    fn test_finish_opens_tag_band_with_submitted_title() {
        let card = valid_draft().finish().unwrap();
        assert!(card.tag.is_open);
        assert_eq!(card.tag.tag_title, "Ship the release");
        assert_eq!(card.tag.tag_color, TagColor::Blue);
        assert_eq!(card.title, "Ship the release");
        assert_eq!(card.task_type, TaskType::Project);
    }

    #[test]
    fn test_finish_caps_description_length() {
        let mut draft = valid_draft();
        draft.desc = "x".repeat(450);
        let card = draft.finish().unwrap();
        assert_eq!(card.desc.chars().count(), DESC_MAX_CHARS);
    }

    #[test]
    fn test_clamp_desc_respects_char_boundaries() {
        let long = "é".repeat(250);
        let clamped = clamp_desc(&long);
        assert_eq!(clamped.chars().count(), DESC_MAX_CHARS);

        assert_eq!(clamp_desc("short"), "short");
    }

    #[test]
    fn test_finish_computes_filesize() {
        let mut draft = valid_draft();
        draft.file = Some(FileMeta { name: "report.pdf".to_string(), size: 1_048_576 });
        assert_eq!(draft.finish().unwrap().filesize, "1.00MB");

        let mut draft = valid_draft();
        draft.file = Some(FileMeta { name: "big.iso".to_string(), size: 1_572_864 });
        assert_eq!(draft.finish().unwrap().filesize, "1.50MB");

        assert_eq!(valid_draft().finish().unwrap().filesize, "0mb");
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(parse_due_date("2026-08-07"), NaiveDate::from_ymd_opt(2026, 8, 7));
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("not a date"), None);
    }
}
