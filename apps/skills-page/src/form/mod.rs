//! Skill input form: repeatable skill rows, field validation and the
//! "looking for" toggle.

pub mod controller;
pub mod looking_for;
pub mod rows;
pub mod validation;
pub mod view;

pub use controller::{FormController, FormEvent};
pub use looking_for::{LookingFor, LookingForError, ToggleGroup, ToggleState};
pub use rows::{FieldKind, FieldName, RowId, RowManager, SkillLevel, SkillRow, UnknownLevel};
pub use validation::{validate_skill_name, validate_skill_weight, FieldValidation};
pub use view::{FormView, MemoryFormView};
