use crate::core::models::{Direction, MoveRecord};

/// Ordered log of applied moves. `len()` is the move count since load or
/// restart. Undo pops the tail, so a new move after an undo implicitly
/// discards the redo branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    moves: Vec<MoveRecord>,
}

impl History {
    /// `capacity` is an allocation hint; the log grows past it if the
    /// game runs long.
    pub fn with_capacity(capacity: usize) -> History {
        History {
            moves: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, direction: Direction, pushed: bool) {
        self.moves.push(MoveRecord { direction, pushed });
    }

    /// Remove and return the most recent move, `None` when there is
    /// nothing to undo.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.moves.pop()
    }

    pub fn last(&self) -> Option<MoveRecord> {
        self.moves.last().copied()
    }

    pub fn reset(&mut self) {
        self.moves.clear();
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move codes of every recorded move, in order (the move-log save
    /// format).
    pub fn serialize(&self) -> String {
        self.moves.iter().map(|m| m.code()).collect()
    }
}
