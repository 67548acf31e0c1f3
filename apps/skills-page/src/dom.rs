//! Element ids, classes and field-name prefixes the page markup is expected to carry.

pub const ADD_MORE_ID: &str = "add-more";
pub const INPUT_CONTAINER_ID: &str = "input-container";
pub const SHOW_MORE_ID: &str = "show_more";
pub const RETRIEVE_SELECTED_ID: &str = "retrieve_selected";

pub const EMAIL_CHECKBOX_CLASS: &str = "email-checkbox";
pub const ERROR_CLASS: &str = "error";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const REMOVE_ROW_CLASS: &str = "remove-row";
pub const SELECTED_CLASS: &str = "btn-selected";
pub const UNSELECTED_CLASS: &str = "btn-unselected";

pub const SKILL_NAME_PREFIX: &str = "option_skill";
pub const SKILL_LEVEL_PREFIX: &str = "level_skill";
pub const SKILL_WEIGHT_PREFIX: &str = "skill_weight";
pub const LOOKING_FOR_NAME: &str = "looking-for";

pub const PREP_EMAIL_PATH: &str = "/prep_email";

/// Column holding the candidate's name in a result row (the checkbox sits in column 0).
pub const NAME_CELL: usize = 1;
/// Column holding the candidate's email in a result row.
pub const EMAIL_CELL: usize = 2;
