//! RPM blocks (Result, Purpose, Massive action plan).

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{RpmError, RpmResult};
use crate::record::{Record, check_timestamp, lenient_id, new_id, require_text};
use crate::resource::Resource;

/// Planning horizon of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Time,
    Project,
    Day,
    Week,
    Month,
    Quarter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    #[serde(rename = "min")]
    Minutes,
    #[serde(rename = "hr")]
    Hours,
    #[serde(rename = "d")]
    Days,
    #[serde(rename = "wk")]
    Weeks,
    #[serde(rename = "mo")]
    Months,
}

impl DurationUnit {
    /// Approximate length in minutes (a month counts as 30 days)
    pub fn minutes(&self) -> f64 {
        match self {
            DurationUnit::Minutes => 1.0,
            DurationUnit::Hours => 60.0,
            DurationUnit::Days => 60.0 * 24.0,
            DurationUnit::Weeks => 60.0 * 24.0 * 7.0,
            DurationUnit::Months => 60.0 * 24.0 * 30.0,
        }
    }
}

/// Status glyph shown next to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKey {
    #[serde(rename = "○")]
    NotStarted,
    #[serde(rename = "✔")]
    Done,
    #[serde(rename = "⏳")]
    Pending,
    #[serde(rename = "◐")]
    InProgress,
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            ActionKey::NotStarted => "○",
            ActionKey::Done => "✔",
            ActionKey::Pending => "⏳",
            ActionKey::InProgress => "◐",
        };
        write!(f, "{glyph}")
    }
}

/// Lifecycle of a scheduled action occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    New,
    Planned,
    InProgress,
    Leveraged,
    Completed,
    Cancelled,
    NotNeeded,
    Moved,
}

impl ActionStatus {
    /// Whether the action still needs doing
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            ActionStatus::New | ActionStatus::Planned | ActionStatus::InProgress
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MassiveAction {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leverage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_amount: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<DurationUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ActionKey>,

    // Occurrence fields (set once the action is placed on the calendar)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ActionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// 0 = Sunday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,
}

impl MassiveAction {
    pub fn new(text: impl Into<String>) -> Self {
        MassiveAction {
            id: String::new(),
            text: text.into(),
            leverage: None,
            duration_amount: None,
            duration_unit: None,
            priority: None,
            key: None,
            color: None,
            text_color: None,
            status: None,
            description: None,
            category_id: None,
            day_of_week: None,
        }
    }

    /// Planned duration in minutes, if both amount and unit are set.
    pub fn duration_minutes(&self) -> Option<f64> {
        Some(self.duration_amount.as_ref()?.as_f64()? * self.duration_unit?.minutes())
    }

    fn validate(&self) -> RpmResult<()> {
        require_text("massive action text", &self.text)?;

        if let Some(amount) = &self.duration_amount
            && !amount.as_f64().is_some_and(|n| n >= 0.0)
        {
            return Err(RpmError::invalid(format!(
                "durationAmount must be a non-negative number, got {amount}"
            )));
        }

        if let Some(day) = self.day_of_week
            && day > 6
        {
            return Err(RpmError::invalid(format!(
                "dayOfWeek must be between 0 and 6, got {day}"
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RpmBlock {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub result: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub purposes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub massive_actions: Vec<MassiveAction>,
    /// Category reference (not owned)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<BlockType>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub saved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RpmBlock {
    pub fn new(result: impl Into<String>) -> Self {
        RpmBlock {
            id: String::new(),
            result: result.into(),
            purposes: Vec::new(),
            massive_actions: Vec::new(),
            category: None,
            kind: None,
            saved: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sum of all action durations that have both amount and unit.
    pub fn total_minutes(&self) -> f64 {
        self.massive_actions
            .iter()
            .filter_map(MassiveAction::duration_minutes)
            .sum()
    }
}

impl Record for RpmBlock {
    const RESOURCE: Resource = Resource::RpmBlocks;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> RpmResult<()> {
        check_timestamp("createdAt", self.created_at.as_deref())?;
        check_timestamp("updatedAt", self.updated_at.as_deref())?;

        let mut ids = HashSet::new();
        for action in &self.massive_actions {
            action.validate()?;
            if !action.id.is_empty() && !ids.insert(action.id.as_str()) {
                return Err(RpmError::invalid(format!(
                    "duplicate massive action id '{}'",
                    action.id
                )));
            }
        }
        Ok(())
    }

    fn normalize(&mut self) {
        for action in &mut self.massive_actions {
            if action.id.is_empty() {
                action.id = new_id();
            }
        }
    }
}
