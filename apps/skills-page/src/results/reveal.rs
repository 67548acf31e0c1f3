use std::ops::Range;

pub const DEFAULT_INCREMENT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Some rows are still hidden.
    Partial,
    /// Every row is shown and the "show more" control is hidden. Terminal.
    Complete,
}

/// Count of result rows currently shown, advanced in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealCursor {
    displayed: usize,
    total: usize,
    increment: usize,
}

impl RevealCursor {
    pub fn new(total: usize, increment: usize) -> Self {
        Self {
            displayed: 0,
            total,
            increment: increment.max(1),
        }
    }

    /// Advances by one increment and returns the row indices to reveal.
    /// The cursor itself may run past `total`; the returned range never does.
    pub fn advance(&mut self) -> Range<usize> {
        let start = self.displayed.min(self.total);
        self.displayed = self.displayed.saturating_add(self.increment);
        start..self.displayed.min(self.total)
    }

    pub fn state(&self) -> RevealState {
        if self.displayed >= self.total {
            RevealState::Complete
        } else {
            RevealState::Partial
        }
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
