//! Repeatable skill rows: identity, field naming and the row markup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dom::{
    ERROR_MESSAGE_CLASS, REMOVE_ROW_CLASS, SKILL_LEVEL_PREFIX, SKILL_NAME_PREFIX,
    SKILL_WEIGHT_PREFIX,
};
use crate::form::validation::parse_float;

/// Skill level choices offered by each row's level selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Junior,
    Medior,
    Senior,
    Mentor,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 5] = [
        SkillLevel::Unspecified,
        SkillLevel::Junior,
        SkillLevel::Medior,
        SkillLevel::Senior,
        SkillLevel::Mentor,
    ];

    /// The `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Unspecified => "",
            SkillLevel::Junior => "Junior",
            SkillLevel::Medior => "Medior",
            SkillLevel::Senior => "Senior",
            SkillLevel::Mentor => "Mentor",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SkillLevel::Unspecified => "Select skill level ...",
            other => other.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown skill level '{0}'")]
pub struct UnknownLevel(pub String);

impl FromStr for SkillLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

/// Identifier of a row's container element, `row{index}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub usize);

impl RowId {
    /// Parses `row3` or the remove button's `#row3` data reference.
    pub fn parse(s: &str) -> Option<Self> {
        s.trim_start_matches('#')
            .strip_prefix("row")
            .and_then(|n| n.parse().ok())
            .map(RowId)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    SkillName,
    SkillLevel,
    SkillWeight,
}

impl FieldKind {
    pub fn prefix(self) -> &'static str {
        match self {
            FieldKind::SkillName => SKILL_NAME_PREFIX,
            FieldKind::SkillLevel => SKILL_LEVEL_PREFIX,
            FieldKind::SkillWeight => SKILL_WEIGHT_PREFIX,
        }
    }
}

/// A row field name such as `skill_weight4`: a kind prefix plus the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName {
    pub kind: FieldKind,
    pub row: RowId,
}

impl FieldName {
    pub fn new(kind: FieldKind, row: RowId) -> Self {
        Self { kind, row }
    }

    /// Only the kind, for names that carry a known prefix but no usable index.
    pub fn kind_of(name: &str) -> Option<FieldKind> {
        [
            FieldKind::SkillName,
            FieldKind::SkillLevel,
            FieldKind::SkillWeight,
        ]
        .into_iter()
        .find(|kind| name.starts_with(kind.prefix()))
    }

    pub fn parse(name: &str) -> Option<Self> {
        let kind = Self::kind_of(name)?;
        let index = name[kind.prefix().len()..].parse().ok()?;
        Some(Self::new(kind, RowId(index)))
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.row.0)
    }
}

/// One repeatable form unit. Values are whatever the user last left in the fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillRow {
    pub index: usize,
    pub skill_name: String,
    pub skill_level: SkillLevel,
    pub skill_weight: Option<f64>,
}

impl SkillRow {
    fn empty(index: usize) -> Self {
        Self {
            index,
            skill_name: String::new(),
            skill_level: SkillLevel::Unspecified,
            skill_weight: None,
        }
    }

    pub fn id(&self) -> RowId {
        RowId(self.index)
    }

    pub fn field(&self, kind: FieldKind) -> FieldName {
        FieldName::new(kind, self.id())
    }
}

/// Owns the live rows and the index counter. Indices are never reused.
#[derive(Debug, Clone)]
pub struct RowManager {
    rows: Vec<SkillRow>,
    next_index: usize,
}

impl Default for RowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RowManager {
    /// Starts with row 0, which ships in the static page markup.
    pub fn new() -> Self {
        Self {
            rows: vec![SkillRow::empty(0)],
            next_index: 1,
        }
    }

    pub fn add_row(&mut self) -> &SkillRow {
        let index = self.next_index;
        self.next_index += 1;
        self.rows.push(SkillRow::empty(index));
        &self.rows[self.rows.len() - 1]
    }

    /// Removes the row if present. Remaining rows keep their indices.
    pub fn remove_row(&mut self, id: RowId) -> Option<SkillRow> {
        let pos = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(pos))
    }

    pub fn get(&self, id: RowId) -> Option<&SkillRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Records a field value on its row. Returns `false` if the row no longer exists
    /// or the value is not an accepted level.
    pub fn record(&mut self, field: FieldName, value: &str) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id() == field.row) else {
            return false;
        };
        match field.kind {
            FieldKind::SkillName => row.skill_name = value.to_string(),
            FieldKind::SkillLevel => match value.parse() {
                Ok(level) => row.skill_level = level,
                Err(_) => return false,
            },
            FieldKind::SkillWeight => {
                let weight = parse_float(value);
                row.skill_weight = (!weight.is_nan()).then_some(weight);
            }
        }
        true
    }

    /// Live rows in page order.
    pub fn rows(&self) -> &[SkillRow] {
        &self.rows
    }

    pub fn next_index(&self) -> usize {
        self.next_index
    }
}

/// HTML for a newly added row, appended to the input container.
pub fn render_row_markup(id: RowId) -> String {
    let name = FieldName::new(FieldKind::SkillName, id);
    let level = FieldName::new(FieldKind::SkillLevel, id);
    let weight = FieldName::new(FieldKind::SkillWeight, id);

    let options: String = SkillLevel::ALL
        .iter()
        .map(|l| format!(r#"<option value="{}">{}</option>"#, l.as_str(), l.label()))
        .collect();

    format!(
        concat!(
            r#"<div class="input-row" id="{id}">"#,
            r#"<div class="form-group">"#,
            r#"<label for="{name}">Skill Name</label>"#,
            r#"<input type="text" id="{name}" name="{name}" placeholder="Type skill ..." class="form-control" required>"#,
            r#"<span class="{err}"></span>"#,
            r#"</div>"#,
            r#"<div class="form-group">"#,
            r#"<label for="{level}">Skill Level (Optional)</label>"#,
            r#"<select id="{level}" name="{level}" class="form-control">{options}</select>"#,
            r#"</div>"#,
            r#"<div class="form-group">"#,
            r#"<label for="{weight}">Skill Weight (Optional)</label>"#,
            r#"<input type="number" id="{weight}" name="{weight}" placeholder="Enter skill weight ..." class="form-control">"#,
            r#"<span class="{err}"></span>"#,
            r#"</div>"#,
            r##"<button class="{remove}" data-row="#{id}">Remove</button>"##,
            r#"</div>"#,
        ),
        id = id,
        name = name,
        level = level,
        weight = weight,
        options = options,
        err = ERROR_MESSAGE_CLASS,
        remove = REMOVE_ROW_CLASS,
    )
}
