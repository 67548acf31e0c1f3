use crate::results::selection::TableRow;

/// What the result table controller may do to the page.
pub trait TableView {
    /// Body rows in table order; rows inside `thead` are excluded.
    fn body_rows(&self) -> Vec<TableRow>;

    fn set_row_visible(&mut self, index: usize, visible: bool);

    fn hide_show_more(&mut self);
}

/// In-memory results table.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableView {
    pub rows: Vec<TableRow>,
    pub visible: Vec<bool>,
    pub show_more_visible: bool,
}

impl MemoryTableView {
    /// All rows start visible, as served, with the "show more" control shown.
    pub fn new(rows: Vec<TableRow>) -> Self {
        let visible = vec![true; rows.len()];
        Self {
            rows,
            visible,
            show_more_visible: true,
        }
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, shown)| shown.then_some(i))
            .collect()
    }

    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(row) = self.rows.get_mut(index) {
            row.checked = checked;
        }
    }
}

impl TableView for MemoryTableView {
    fn body_rows(&self) -> Vec<TableRow> {
        self.rows.clone()
    }

    fn set_row_visible(&mut self, index: usize, visible: bool) {
        if let Some(slot) = self.visible.get_mut(index) {
            *slot = visible;
        }
    }

    fn hide_show_more(&mut self) {
        self.show_more_visible = false;
    }
}
