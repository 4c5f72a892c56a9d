//! Drag-to-reorder state machine for the choice list
//!
//! Independent of any event binding: the host feeds it a start index,
//! hover events (row index, pointer y, row bounds) and a drop. Each hover
//! that crosses the hovered row's vertical midpoint in the drag direction
//! yields one `(from, to)` reorder.

/// Vertical extent of a rendered choice row, in the host's coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBounds {
    pub top: f32,
    pub bottom: f32,
}

impl RowBounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Bounds of row `index` in a list of uniform rows
    pub fn uniform(index: usize, row_height: f32) -> Self {
        let top = index as f32 * row_height;
        Self {
            top,
            bottom: top + row_height,
        }
    }

    /// Distance from the top of the row to its midpoint
    pub fn half_height(&self) -> f32 {
        (self.bottom - self.top) / 2.0
    }
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A row is being dragged; `source` is its current index
    Dragging { source: usize },
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pick up the row at `index`
    pub fn begin(&mut self, index: usize) {
        self.state = DragState::Dragging { source: index };
    }

    /// Pointer moved over row `target`.
    ///
    /// Returns the reorder to apply, if the pointer has crossed the row's
    /// midpoint in the direction of travel. A downward drag moves only
    /// once the pointer is below the midpoint, an upward drag only once
    /// it is above; exactly on the midpoint never moves. The controller
    /// keeps its source until the move is confirmed with [`Self::commit`].
    pub fn hover(&self, target: usize, pointer_y: f32, row: RowBounds) -> Option<(usize, usize)> {
        let DragState::Dragging { source } = self.state else {
            return None;
        };
        if source == target {
            return None;
        }

        let offset = pointer_y - row.top;
        let middle = row.half_height();

        if source < target && offset <= middle {
            return None;
        }
        if source > target && offset >= middle {
            return None;
        }

        Some((source, target))
    }

    /// The dragged row now sits at `index`
    pub fn commit(&mut self, index: usize) {
        if self.is_dragging() {
            self.state = DragState::Dragging { source: index };
        }
    }

    /// Row `index` left the list. Dragging that row ends the drag;
    /// removing a row above it shifts the source up by one.
    pub fn row_removed(&mut self, index: usize) {
        if let DragState::Dragging { source } = self.state {
            if source == index {
                self.state = DragState::Idle;
            } else if index < source {
                self.state = DragState::Dragging { source: source - 1 };
            }
        }
    }

    /// Release the row; returns to idle
    pub fn drop(&mut self) {
        self.state = DragState::Idle;
    }
}
