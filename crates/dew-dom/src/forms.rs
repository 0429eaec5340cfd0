//! Form control state that lives outside the attribute map.

/// Direction of a selection, as reported by text controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionDirection {
    #[default]
    None,
    Forward,
    Backward,
}

/// Caret and selection range of a text control, in byte offsets into
/// the control's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSelection {
    pub start: usize,
    pub end: usize,
    pub direction: SelectionDirection,
}

impl InputSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the range, normalizing a reversed pair.
    pub fn set_range(&mut self, start: usize, end: usize, direction: SelectionDirection) {
        if start <= end {
            self.start = start;
            self.end = end;
        } else {
            self.start = end;
            self.end = start;
        }
        self.direction = direction;
    }

    /// Collapses the selection to a single caret position.
    pub fn collapse_to(&mut self, position: usize) {
        self.start = position;
        self.end = position;
        self.direction = SelectionDirection::None;
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn length(&self) -> usize {
        self.end - self.start
    }
}
