//! Card Models
//!
//! Data structures for card records owned by the board.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Card priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    None,
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::None, Priority::Low, Priority::Medium, Priority::High];

    /// Form value
    pub fn value(self) -> &'static str {
        match self {
            Priority::None => "none",
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Priority::None => "None",
            Priority::Low => "Low Priority",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
        }
    }

    pub fn from_value(value: &str) -> Option<Priority> {
        Priority::ALL.into_iter().find(|p| p.value() == value)
    }
}

/// Card task type, required at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Tracker,
    Reminder,
    Fileholder,
    Project,
    Goal,
    Checklist,
}

impl TaskType {
    pub const ALL: [TaskType; 6] = [
        TaskType::Tracker,
        TaskType::Reminder,
        TaskType::Fileholder,
        TaskType::Project,
        TaskType::Goal,
        TaskType::Checklist,
    ];

    /// Form value
    pub fn value(self) -> &'static str {
        match self {
            TaskType::Tracker => "tracker",
            TaskType::Reminder => "reminder",
            TaskType::Fileholder => "fileholder",
            TaskType::Project => "project",
            TaskType::Goal => "goal",
            TaskType::Checklist => "checklist",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            TaskType::Tracker => "Tracker",
            TaskType::Reminder => "Reminder",
            TaskType::Fileholder => "File Holder",
            TaskType::Project => "Project",
            TaskType::Goal => "Goal",
            TaskType::Checklist => "Checklist",
        }
    }

    pub fn from_value(value: &str) -> Option<TaskType> {
        TaskType::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// Tag band color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Green,
    Blue,
    Red,
    Yellow,
}

impl TagColor {
    pub const ALL: [TagColor; 4] = [TagColor::Green, TagColor::Blue, TagColor::Red, TagColor::Yellow];

    /// Form value, also a valid CSS color
    pub fn value(self) -> &'static str {
        match self {
            TagColor::Green => "green",
            TagColor::Blue => "blue",
            TagColor::Red => "red",
            TagColor::Yellow => "yellow",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            TagColor::Green => "Green",
            TagColor::Blue => "Blue",
            TagColor::Red => "Red",
            TagColor::Yellow => "Yellow",
        }
    }

    pub fn from_value(value: &str) -> Option<TagColor> {
        TagColor::ALL.into_iter().find(|c| c.value() == value)
    }
}

/// Colored footer strip on a card; rendered only while `is_open`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTag {
    pub is_open: bool,
    pub tag_title: String,
    pub tag_color: TagColor,
}

/// Attached file reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

impl FileMeta {
    /// Display string: bytes / 1,048,576, two decimals
    pub fn display_size(&self) -> String {
        format!("{:.2}MB", self.size as f64 / 1_048_576.0)
    }
}

/// Footer size string for an optional attachment
pub fn format_filesize(file: Option<&FileMeta>) -> String {
    match file {
        Some(meta) => meta.display_size(),
        None => "0mb".to_string(),
    }
}

/// Card record, the single domain entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub desc: String,
    pub priority: Priority,
    pub task_type: TaskType,
    pub tag: CardTag,
    pub file: Option<FileMeta>,
    /// Precomputed display string, see `format_filesize`
    pub filesize: String,
    pub due_date: Option<NaiveDate>,
}

/// A fully populated card record as emitted by the creation form.
/// The board assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewCard {
    pub title: String,
    pub desc: String,
    pub priority: Priority,
    pub task_type: TaskType,
    pub tag: CardTag,
    pub file: Option<FileMeta>,
    pub filesize: String,
    pub due_date: Option<NaiveDate>,
}

/// Edited fields emitted when a card display unit saves
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardPatch {
    pub desc: String,
    pub task_type: TaskType,
    pub priority: Priority,
    pub tag_color: TagColor,
}

impl Card {
    pub fn from_new(id: u32, new: NewCard) -> Card {
        Card {
            id,
            title: new.title,
            desc: new.desc,
            priority: new.priority,
            task_type: new.task_type,
            tag: new.tag,
            file: new.file,
            filesize: new.filesize,
            due_date: new.due_date,
        }
    }

    /// Merge an edit payload; only the four editable fields change
    pub fn apply_edit(&mut self, patch: &CardPatch) {
        self.desc = patch.desc.clone();
        self.task_type = patch.task_type;
        self.priority = patch.priority;
        self.tag.tag_color = patch.tag_color;
    }

    /// The edit payload an untouched edit session would save
    pub fn edit_seed(&self) -> CardPatch {
        CardPatch {
            desc: self.desc.clone(),
            task_type: self.task_type,
            priority: self.priority,
            tag_color: self.tag.tag_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_card(id: u32) -> Card {
        Card {
            id,
            title: format!("Card {}", id),
            desc: "write the report".to_string(),
            priority: Priority::Low,
            task_type: TaskType::Tracker,
            tag: CardTag {
                is_open: true,
                tag_title: format!("Card {}", id),
                tag_color: TagColor::Green,
            },
            file: None,
            filesize: "0mb".to_string(),
            due_date: None,
        }
    }

    #[test]
    fn test_enum_values_round_trip() {
        for p in Priority::ALL {
            assert_eq!(Priority::from_value(p.value()), Some(p));
        }
        for t in TaskType::ALL {
            assert_eq!(TaskType::from_value(t.value()), Some(t));
        }
        for c in TagColor::ALL {
            assert_eq!(TagColor::from_value(c.value()), Some(c));
        }
        assert_eq!(TaskType::from_value("fileholder"), Some(TaskType::Fileholder));
        assert_eq!(TaskType::from_value("bogus"), None);
    }

    #[test]
    fn test_enum_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&TagColor::Yellow).unwrap(), "\"yellow\"");
        assert_eq!(serde_json::to_string(&TaskType::Fileholder).unwrap(), "\"fileholder\"");
        assert_eq!(serde_json::to_string(&Priority::None).unwrap(), "\"none\"");
    }

    #[test]
    fn test_display_size() {
        let one_mb = FileMeta { name: "a.bin".to_string(), size: 1_048_576 };
        assert_eq!(one_mb.display_size(), "1.00MB");

        let half_mb = FileMeta { name: "b.bin".to_string(), size: 524_288 };
        assert_eq!(half_mb.display_size(), "0.50MB");

        assert_eq!(format_filesize(Some(&one_mb)), "1.00MB");
        assert_eq!(format_filesize(None), "0mb");
    }

    #[test]
    fn test_apply_edit_touches_only_editable_fields() {
        let mut card = make_card(7);
        card.file = Some(FileMeta { name: "notes.txt".to_string(), size: 12 });
        card.filesize = "0.00MB".to_string();
        let before = card.clone();

        card.apply_edit(&CardPatch {
            desc: "revised".to_string(),
            task_type: TaskType::Goal,
            priority: Priority::High,
            tag_color: TagColor::Red,
        });

        assert_eq!(card.desc, "revised");
        assert_eq!(card.task_type, TaskType::Goal);
        assert_eq!(card.priority, Priority::High);
        assert_eq!(card.tag.tag_color, TagColor::Red);

        // Everything else untouched
        assert_eq!(card.id, before.id);
        assert_eq!(card.title, before.title);
        assert_eq!(card.tag.is_open, before.tag.is_open);
        assert_eq!(card.tag.tag_title, before.tag.tag_title);
        assert_eq!(card.file, before.file);
        assert_eq!(card.filesize, before.filesize);
        assert_eq!(card.due_date, before.due_date);
    }

    #[test]
    fn test_saving_untouched_edit_seed_is_identity() {
        // Toggling into edit mode and saving without changes leaves the record as it was
        let mut card = make_card(3);
        let before = card.clone();
        let seed = card.edit_seed();
        card.apply_edit(&seed);
        assert_eq!(card, before);
    }
}
