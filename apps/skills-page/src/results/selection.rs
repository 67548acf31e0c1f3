use serde::{Deserialize, Serialize};

use crate::dom::{EMAIL_CELL, NAME_CELL};

/// A body row of the results table as the page currently shows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    /// Text content of each `td`, in column order.
    pub cells: Vec<String>,
    /// Whether the row's email checkbox is checked.
    pub checked: bool,
}

impl TableRow {
    pub fn new<I, S>(cells: I, checked: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            checked,
        }
    }

    fn cell_text(&self, index: usize) -> String {
        self.cells.get(index).cloned().unwrap_or_default()
    }
}

/// Name/email pair extracted from a checked row, sent to the email preparation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
}

/// Records for every checked row in table order, hidden rows included.
pub fn collect_selected_rows(rows: &[TableRow]) -> Vec<SelectedRecord> {
    rows.iter()
        .filter(|row| row.checked)
        .map(|row| SelectedRecord {
            name: row.cell_text(NAME_CELL),
            email: row.cell_text(EMAIL_CELL),
        })
        .collect()
}
