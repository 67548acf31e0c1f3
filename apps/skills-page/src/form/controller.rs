use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::errors::PageError;
use crate::form::looking_for::{LookingFor, ToggleGroup};
use crate::form::rows::{render_row_markup, FieldKind, FieldName, RowId, RowManager, SkillRow};
use crate::form::validation::{validate_skill_name, validate_skill_weight, FieldValidation};
use crate::form::view::FormView;

const STATIC_ROW: RowId = RowId(0);

/// UI events the form page forwards to its controller.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Click on `#add-more`.
    AddMore,
    /// Click on a row's remove button.
    RemoveRow(RowId),
    /// Focus left a text or number input.
    FieldBlurred { name: String, value: String },
    /// A level selector changed.
    LevelChanged { name: String, value: String },
    /// A "looking for" radio changed.
    LookingForChanged(LookingFor),
}

/// Page-scoped controller for the skill input form.
pub struct FormController<V: FormView> {
    view: V,
    catalog: Arc<SkillCatalog>,
    rows: RowManager,
    looking_for: ToggleGroup,
}

impl<V: FormView> FormController<V> {
    /// Page-ready initialisation: autocomplete on the static row and the toggle
    /// painted to match whichever radio is pre-checked.
    pub fn ready(view: V, catalog: Arc<SkillCatalog>) -> Self {
        let mut controller = Self {
            view,
            catalog,
            rows: RowManager::new(),
            looking_for: ToggleGroup::default(),
        };

        controller.enable_autocomplete(FieldName::new(FieldKind::SkillName, STATIC_ROW));
        if let Some(checked) = controller.view.checked_looking_for() {
            controller.toggle_looking_for(checked);
        }
        controller
    }

    /// Loads the catalog named by the configuration, then runs page-ready.
    pub fn from_config(view: V, config: &Config) -> Result<Self, PageError> {
        let catalog = SkillCatalog::load(&config.skills_catalog)?;
        Ok(Self::ready(view, Arc::new(catalog)))
    }

    pub fn handle(&mut self, event: FormEvent) {
        match event {
            FormEvent::AddMore => {
                self.add_row();
            }
            FormEvent::RemoveRow(id) => self.remove_row(id),
            FormEvent::FieldBlurred { name, value } => {
                self.field_blurred(&name, &value);
            }
            FormEvent::LevelChanged { name, value } => self.record(&name, &value),
            FormEvent::LookingForChanged(value) => self.toggle_looking_for(value),
        }
    }

    pub fn enable_autocomplete(&mut self, field: FieldName) {
        self.view.enable_autocomplete(field, &self.catalog);
    }

    pub fn add_row(&mut self) -> RowId {
        let row = self.rows.add_row().clone();
        let markup = render_row_markup(row.id());
        self.view.append_row(&row, &markup);
        self.enable_autocomplete(row.field(FieldKind::SkillName));
        debug!("Added skill row {}", row.index);
        row.id()
    }

    /// Removes an added row. Row 0 is part of the served markup and has no remove
    /// button, so a request for it is ignored.
    pub fn remove_row(&mut self, id: RowId) {
        if id == STATIC_ROW {
            warn!("Ignored remove request for the static skill row");
            return;
        }
        let known = self.rows.remove_row(id).is_some();
        let removed = self.view.remove_row(id);
        if known || removed {
            debug!("Removed skill row {}", id.0);
        } else {
            warn!("Remove requested for unknown skill row {}", id.0);
        }
    }

    /// Validates a field on focus loss by name prefix and records its value.
    /// Fields outside the skill rows are ignored and return `None`.
    pub fn field_blurred(&mut self, name: &str, value: &str) -> Option<FieldValidation> {
        let validation = match FieldName::kind_of(name)? {
            FieldKind::SkillName => validate_skill_name(value, &self.catalog),
            FieldKind::SkillWeight => validate_skill_weight(value),
            FieldKind::SkillLevel => {
                self.record(name, value);
                return None;
            }
        };
        self.view.show_validation(name, validation);
        self.record(name, value);
        Some(validation)
    }

    pub fn toggle_looking_for(&mut self, value: LookingFor) {
        for (control, state) in self.looking_for.select(value) {
            self.view.paint_toggle(control, state);
        }
    }

    fn record(&mut self, name: &str, value: &str) {
        if let Some(field) = FieldName::parse(name) {
            if !self.rows.record(field, value) {
                debug!("Ignored value for {name}");
            }
        }
    }

    /// Live rows with the values last recorded for them.
    pub fn rows(&self) -> &[SkillRow] {
        self.rows.rows()
    }

    pub fn looking_for(&self) -> Option<LookingFor> {
        self.looking_for.selected()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{SELECTED_CLASS, UNSELECTED_CLASS};
    use crate::form::rows::SkillLevel;
    use crate::form::view::{FieldState, MemoryFormView};

    fn controller(checked: Option<LookingFor>) -> FormController<MemoryFormView> {
        let catalog = Arc::new(SkillCatalog::new(["Python", "Rust", "SQL"]));
        FormController::ready(MemoryFormView::new(checked), catalog)
    }

    fn blur(name: &str, value: &str) -> FormEvent {
        FormEvent::FieldBlurred {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_ready_enables_autocomplete_on_static_row() {
        let c = controller(None);
        assert!(c.view().autocomplete.contains("option_skill0"));
        assert_eq!(c.looking_for(), None);
    }

    #[test]
    fn test_from_config_loads_catalog() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Grafika": "Grafika", "Rust": "Rust"}}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let config = Config::from_lookup(|key| {
            (key == "SKILLS_CATALOG").then(|| path.clone())
        })
        .unwrap();

        let mut c = FormController::from_config(MemoryFormView::default(), &config).unwrap();
        assert_eq!(c.field_blurred("option_skill0", "Grafika"), Some(FieldValidation::VALID));
        assert!(!c.field_blurred("option_skill0", "Python").unwrap().valid);
    }

    #[test]
    fn test_from_config_missing_catalog() {
        let config = Config::from_lookup(|key| {
            (key == "SKILLS_CATALOG").then(|| "/nonexistent/skills.json".to_string())
        })
        .unwrap();
        let result = FormController::from_config(MemoryFormView::default(), &config);
        assert!(matches!(result, Err(PageError::CatalogIo { .. })));
    }

    #[test]
    fn test_ready_syncs_prechecked_toggle() {
        let c = controller(Some(LookingFor::Volunteer));
        assert_eq!(
            c.view().toggle_class(LookingFor::Volunteer),
            Some(SELECTED_CLASS)
        );
        assert_eq!(
            c.view().toggle_class(LookingFor::Mentor),
            Some(UNSELECTED_CLASS)
        );
    }

    #[test]
    fn test_toggle_switches_selection() {
        let mut c = controller(Some(LookingFor::Volunteer));
        c.handle(FormEvent::LookingForChanged(LookingFor::Mentor));
        assert_eq!(c.view().toggle_class(LookingFor::Mentor), Some(SELECTED_CLASS));
        assert_eq!(
            c.view().toggle_class(LookingFor::Volunteer),
            Some(UNSELECTED_CLASS)
        );
        assert_eq!(c.looking_for(), Some(LookingFor::Mentor));
    }

    #[test]
    fn test_add_rows_then_remove_subset() {
        let mut c = controller(None);
        for _ in 0..4 {
            c.handle(FormEvent::AddMore);
        }
        assert_eq!(
            c.view().rows,
            vec![RowId(0), RowId(1), RowId(2), RowId(3), RowId(4)]
        );
        assert!(c.view().autocomplete.contains("option_skill4"));
        assert!(c.view().markup[&RowId(3)].contains(r#"name="skill_weight3""#));

        c.handle(FormEvent::RemoveRow(RowId(1)));
        c.handle(FormEvent::RemoveRow(RowId(3)));
        assert_eq!(c.view().rows, vec![RowId(0), RowId(2), RowId(4)]);
        let indices: Vec<usize> = c.rows().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 2, 4]);

        assert_eq!(c.add_row(), RowId(5));
    }

    #[test]
    fn test_static_row_cannot_be_removed() {
        let mut c = controller(None);
        c.handle(FormEvent::AddMore);
        c.handle(FormEvent::RemoveRow(RowId(0)));
        assert_eq!(c.view().rows, vec![RowId(0), RowId(1)]);
        let indices: Vec<usize> = c.rows().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_remove_unknown_row_is_harmless() {
        let mut c = controller(None);
        c.handle(FormEvent::RemoveRow(RowId(42)));
        assert_eq!(c.view().rows, vec![RowId(0)]);
    }

    #[test]
    fn test_skill_name_blur_marks_error_and_clears_it() {
        let mut c = controller(None);
        c.handle(blur("option_skill0", "Zzz"));
        let field = c.view().field("option_skill0");
        assert!(field.error);
        assert_eq!(field.message, "Invalid skill name");

        c.handle(blur("option_skill0", "Python"));
        assert_eq!(c.view().field("option_skill0"), FieldState::default());
        assert_eq!(c.rows()[0].skill_name, "Python");
    }

    #[test]
    fn test_weight_blur_messages() {
        let mut c = controller(None);
        let id = c.add_row();
        let name = format!("skill_weight{}", id.0);

        c.handle(blur(&name, "-1"));
        assert_eq!(c.view().field(&name).message, "Weight cannot be negative.");
        c.handle(blur(&name, "0"));
        assert_eq!(c.view().field(&name).message, "Weight cannot be 0.");
        c.handle(blur(&name, "abc"));
        assert!(!c.view().field(&name).error);
        assert_eq!(c.view().field(&name).message, "");
        c.handle(blur(&name, "3"));
        assert_eq!(c.rows()[1].skill_weight, Some(3.0));
    }

    #[test]
    fn test_validation_applies_to_any_prefixed_name() {
        let mut c = controller(None);
        let r = c.field_blurred("option_skill_extra", "Nope");
        assert_eq!(r.map(|v| v.valid), Some(false));
        assert!(c.view().field("option_skill_extra").error);
    }

    #[test]
    fn test_unrelated_fields_are_ignored() {
        let mut c = controller(None);
        assert_eq!(c.field_blurred("position_name0", "Backend dev"), None);
        assert!(c.view().fields.is_empty());
    }

    #[test]
    fn test_level_change_recorded() {
        let mut c = controller(None);
        c.handle(FormEvent::LevelChanged {
            name: "level_skill0".to_string(),
            value: "Junior".to_string(),
        });
        assert_eq!(c.rows()[0].skill_level, SkillLevel::Junior);
    }
}
