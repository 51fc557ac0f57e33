//! Task records.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Row identifier of a stored task.
pub type TaskId = i64;

/// A stored task.
///
/// `date` is the compact `YYYYMMDD` anchor date and `repeat` the recurrence
/// rule (empty for one-off tasks). The identifier is serialized as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(serialize_with = "id_to_string", deserialize_with = "id_from_string")]
    pub id: TaskId,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl Task {
    pub fn is_recurring(&self) -> bool {
        !self.repeat.is_empty()
    }
}

/// Task fields as submitted by a client, before validation.
///
/// Every field is optional at the boundary; the service decides which ones
/// are required for each operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskInput {
    pub id: Option<String>,
    pub date: Option<String>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub repeat: Option<String>,
}

impl TaskInput {
    pub fn new(title: impl Into<String>) -> Self {
        TaskInput {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_repeat(mut self, repeat: impl Into<String>) -> Self {
        self.repeat = Some(repeat.into());
        self
    }
}

fn id_to_string<S: Serializer>(id: &TaskId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&id.to_string())
}

fn id_from_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TaskId, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(TaskId),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}
