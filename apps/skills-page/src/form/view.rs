use std::collections::{HashMap, HashSet};

use crate::catalog::SkillCatalog;
use crate::dom::{SELECTED_CLASS, UNSELECTED_CLASS};
use crate::form::looking_for::{LookingFor, ToggleState};
use crate::form::rows::{FieldName, RowId, SkillRow};
use crate::form::validation::FieldValidation;

/// What the form controller may do to the page.
pub trait FormView {
    /// Appends the row markup to the input container.
    fn append_row(&mut self, row: &SkillRow, markup: &str);

    /// Removes the row's subtree. Returns `false` if no such element exists.
    fn remove_row(&mut self, id: RowId) -> bool;

    /// Binds a suggestion list sourced from `catalog` to the field.
    fn enable_autocomplete(&mut self, field: FieldName, catalog: &SkillCatalog);

    /// Toggles the field's error class and sets its sibling error-message text.
    fn show_validation(&mut self, field: &str, validation: FieldValidation);

    /// Swaps the selected/unselected class on the control enclosing a toggle input.
    fn paint_toggle(&mut self, control: LookingFor, state: ToggleState);

    /// The pre-checked "looking for" radio, if any.
    fn checked_looking_for(&self) -> Option<LookingFor>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub error: bool,
    pub message: String,
}

/// In-memory form page. Starts with row 0 present, as the served markup does.
#[derive(Debug, Clone)]
pub struct MemoryFormView {
    pub rows: Vec<RowId>,
    pub markup: HashMap<RowId, String>,
    pub autocomplete: HashSet<String>,
    pub fields: HashMap<String, FieldState>,
    pub toggles: HashMap<LookingFor, &'static str>,
    pub checked: Option<LookingFor>,
}

impl MemoryFormView {
    pub fn new(checked: Option<LookingFor>) -> Self {
        Self {
            rows: vec![RowId(0)],
            markup: HashMap::new(),
            autocomplete: HashSet::new(),
            fields: HashMap::new(),
            toggles: HashMap::new(),
            checked,
        }
    }

    pub fn field(&self, name: &str) -> FieldState {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Class currently carried by the toggle's enclosing control.
    pub fn toggle_class(&self, control: LookingFor) -> Option<&'static str> {
        self.toggles.get(&control).copied()
    }
}

impl Default for MemoryFormView {
    fn default() -> Self {
        Self::new(None)
    }
}

impl FormView for MemoryFormView {
    fn append_row(&mut self, row: &SkillRow, markup: &str) {
        self.rows.push(row.id());
        self.markup.insert(row.id(), markup.to_string());
    }

    fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| *r != id);
        self.markup.remove(&id);
        self.rows.len() != before
    }

    fn enable_autocomplete(&mut self, field: FieldName, _catalog: &SkillCatalog) {
        self.autocomplete.insert(field.to_string());
    }

    fn show_validation(&mut self, field: &str, validation: FieldValidation) {
        self.fields.insert(
            field.to_string(),
            FieldState {
                error: !validation.valid,
                message: validation.message.unwrap_or_default().to_string(),
            },
        );
    }

    fn paint_toggle(&mut self, control: LookingFor, state: ToggleState) {
        let class = match state {
            ToggleState::Selected => SELECTED_CLASS,
            ToggleState::Unselected => UNSELECTED_CLASS,
        };
        self.toggles.insert(control, class);
    }

    fn checked_looking_for(&self) -> Option<LookingFor> {
        self.checked
    }
}
