//! Trajectory record types

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One thought → action → observation iteration of an agent run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub thought: String,
    pub action: String,
    pub observation: String,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub response: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_time: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_state",
        skip_serializing_if = "Option::is_none"
    )]
    pub state: Option<StepState>,
    /// Conversation history; only meaningful on the first step
    #[serde(
        default,
        deserialize_with = "lenient_messages",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub messages: Vec<Message>,
}

impl Step {
    pub fn new(
        thought: impl Into<String>,
        action: impl Into<String>,
        observation: impl Into<String>,
    ) -> Self {
        Self {
            thought: thought.into(),
            action: action.into(),
            observation: observation.into(),
            response: None,
            execution_time: None,
            state: None,
            messages: Vec::new(),
        }
    }

    /// First line of the action, the canonical command
    pub fn command_line(&self) -> &str {
        first_line(&self.action)
    }

    pub fn working_dir(&self) -> Option<&str> {
        self.state.as_ref().and_then(|s| s.working_dir.as_deref())
    }
}

/// Environment state captured after a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepState {
    #[serde(default)]
    pub working_dir: Option<String>,
}

/// A history message attached to a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "lenient_string")]
    pub message_type: String,
    #[serde(default)]
    pub content: serde_json::Value,
}

impl Message {
    /// Text of the message. Array content is flattened from its text parts.
    pub fn text(&self) -> String {
        match &self.content {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    serde_json::Value::String(s) => Some(s.as_str()),
                    other => other.get("text").and_then(|t| t.as_str()),
                })
                .collect::<Vec<_>>()
                .join(""),
            _ => String::new(),
        }
    }
}

/// Ordered, read-only sequence of steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    steps: Vec<Step>,
}

impl Trajectory {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Step)> {
        self.steps.iter().enumerate()
    }

    /// Messages carried by the first step, if any
    pub fn initial_messages(&self) -> &[Message] {
        self.steps
            .first()
            .map(|s| s.messages.as_slice())
            .unwrap_or(&[])
    }
}

impl From<Vec<Step>> for Trajectory {
    fn from(steps: Vec<Step>) -> Self {
        Self::new(steps)
    }
}

// Optional step metadata never invalidates a trajectory: a value of the
// wrong shape reads as absent.

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// SWE-agent 0.x stores `state` as a JSON-encoded string
fn lenient_state<'de, D>(deserializer: D) -> Result<Option<StepState>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::String(encoded) => match serde_json::from_str(&encoded) {
            Ok(decoded) => decoded,
            Err(_) => return Ok(None),
        },
        other => other,
    };
    Ok(serde_json::from_value(value).ok())
}

fn lenient_messages<'de, D>(deserializer: D) -> Result<Vec<Message>, D::Error>
where
    D: Deserializer<'de>,
{
    let messages = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(messages)
}

/// Text up to the first `\n`
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}
