//! Roster layout presets.
//!
//! The same record type serves both check-in flavours: a name-keyed roster
//! with check-out and scores, and an email-keyed roster that only stamps the
//! arrival and tags the channel.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Keyed by name (exact match), check-in then check-out, scores
    RollCall,
    /// Keyed by email (case-insensitive), check-in only, tagged OFFLINE
    Offline,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::RollCall => "roll-call",
            Profile::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    Exact,
    CaseInsensitive,
}

impl KeyMatch {
    pub fn matches(&self, stored: &str, input: &str) -> bool {
        match self {
            KeyMatch::Exact => stored == input,
            KeyMatch::CaseInsensitive => stored.to_lowercase() == input.to_lowercase(),
        }
    }
}

/// Header labels of the backing table. A `None` column is not part of the
/// layout; if the sheet still has it, it is carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    pub key: String,
    pub check_in: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl ColumnNames {
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::RollCall => Self {
                key: "name".to_string(),
                check_in: "check_in".to_string(),
                check_out: Some("check_out".to_string()),
                score: Some("score".to_string()),
                mode: None,
            },
            Profile::Offline => Self {
                key: "email".to_string(),
                check_in: "check_in".to_string(),
                check_out: None,
                score: None,
                mode: Some("mode".to_string()),
            },
        }
    }

    /// Headers in output order.
    pub fn headers(&self) -> Vec<&str> {
        let mut out = vec![self.key.as_str(), self.check_in.as_str()];
        if let Some(c) = &self.check_out {
            out.push(c);
        }
        if let Some(c) = &self.score {
            out.push(c);
        }
        if let Some(c) = &self.mode {
            out.push(c);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSchema {
    pub profile: Profile,
    pub key_match: KeyMatch,
    pub columns: ColumnNames,
    pub mode_tag: Option<String>,
}

impl RosterSchema {
    pub fn new(profile: Profile) -> Self {
        let (key_match, mode_tag) = match profile {
            Profile::RollCall => (KeyMatch::Exact, None),
            Profile::Offline => (KeyMatch::CaseInsensitive, Some("OFFLINE".to_string())),
        };

        Self {
            profile,
            key_match,
            columns: ColumnNames::for_profile(profile),
            mode_tag,
        }
    }

    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_mode_tag(mut self, tag: Option<String>) -> Self {
        if tag.is_some() {
            self.mode_tag = tag;
        }
        self
    }

    pub fn supports_checkout(&self) -> bool {
        self.columns.check_out.is_some()
    }

    pub fn tracks_score(&self) -> bool {
        self.columns.score.is_some()
    }

    /// The tag stamped on check-in, only when the layout has a mode column.
    pub fn check_in_mode(&self) -> Option<&str> {
        self.columns.mode.as_ref().and(self.mode_tag.as_deref())
    }
}
