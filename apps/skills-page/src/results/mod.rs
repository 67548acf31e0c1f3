//! Results table: paged reveal of result rows and email preparation for the
//! checked ones.

pub mod controller;
pub mod reveal;
pub mod selection;
pub mod submit;
pub mod view;

pub use controller::ResultTableController;
pub use reveal::{RevealCursor, RevealState, DEFAULT_INCREMENT};
pub use selection::{collect_selected_rows, SelectedRecord, TableRow};
pub use submit::{
    submit_selection, HttpPrepEmail, LinkOpener, PrepEmailResponse, PrepEmailTransport,
    SubmitError, SystemBrowser,
};
pub use view::{MemoryTableView, TableView};
