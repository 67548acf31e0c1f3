use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two mutually exclusive "looking for" choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookingFor {
    Volunteer,
    Mentor,
}

impl LookingFor {
    pub fn as_str(self) -> &'static str {
        match self {
            LookingFor::Volunteer => "Volunteer",
            LookingFor::Mentor => "Mentor",
        }
    }

    pub fn other(self) -> Self {
        match self {
            LookingFor::Volunteer => LookingFor::Mentor,
            LookingFor::Mentor => LookingFor::Volunteer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookingForError {
    #[error("unknown looking-for value '{0}'")]
    Unknown(String),
}

impl FromStr for LookingFor {
    type Err = LookingForError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Volunteer" => Ok(LookingFor::Volunteer),
            "Mentor" => Ok(LookingFor::Mentor),
            other => Err(LookingForError::Unknown(other.to_string())),
        }
    }
}

/// Visual state of a toggle button's enclosing control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Selected,
    Unselected,
}

/// Tracks which "looking for" control is shown as selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleGroup {
    selected: Option<LookingFor>,
}

impl ToggleGroup {
    /// Selects `value` and returns the `(control, state)` pairs to paint,
    /// selected control first.
    pub fn select(&mut self, value: LookingFor) -> [(LookingFor, ToggleState); 2] {
        self.selected = Some(value);
        [
            (value, ToggleState::Selected),
            (value.other(), ToggleState::Unselected),
        ]
    }

    pub fn selected(&self) -> Option<LookingFor> {
        self.selected
    }
}
