//! Page controllers for the skills-matching web app.
//!
//! Two independent controllers, one per page:
//! - [`form::FormController`] drives the skill input form (repeatable rows, field
//!   validation, the "looking for" toggle).
//! - [`results::ResultTableController`] drives the results table (paged reveal,
//!   row selection, email preparation).
//!
//! Both talk to the page only through the [`form::FormView`] / [`results::TableView`]
//! traits, so the same logic runs against a browser binding or the in-memory views.

pub mod catalog;
pub mod config;
pub mod dom;
pub mod errors;
pub mod form;
pub mod results;
pub mod telemetry;

pub use catalog::SkillCatalog;
pub use config::Config;
pub use errors::PageError;
