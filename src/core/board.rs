use crate::core::models::{Cell, Direction, MoveOutcome, MoveRecord, Vec2};

/// The game grid plus the avatar's cached position. The cache is redundant
/// with the grid and is kept in sync on every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec<Vec<Cell>>,
    avatar: Vec2,
}

/// Value a cell reverts to when the avatar or a box leaves it.
fn vacated(cell: Cell) -> Cell {
    if cell.has_target() {
        Cell::Target
    } else {
        Cell::Empty
    }
}

/// Value a cell takes when the avatar steps onto it.
fn avatar_arrival(cell: Cell) -> Cell {
    if cell.has_target() {
        Cell::AvatarOnTarget
    } else {
        Cell::Avatar
    }
}

/// Value a cell takes when a box lands on it.
fn box_arrival(cell: Cell) -> Cell {
    if cell.has_target() {
        Cell::BoxOnTarget
    } else {
        Cell::Box
    }
}

impl Board {
    /// Invariant checked by the level parser: the grid contains exactly one
    /// avatar cell, and `avatar` points at it.
    pub(crate) fn from_parts(grid: Vec<Vec<Cell>>, avatar: Vec2) -> Board {
        Board { grid, avatar }
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, |row| row.len())
    }

    pub fn avatar(&self) -> Vec2 {
        self.avatar
    }

    pub fn cell(&self, pos: Vec2) -> Option<Cell> {
        if pos.i < 0 || pos.j < 0 {
            return None;
        }
        self.grid
            .get(pos.i as usize)
            .and_then(|row| row.get(pos.j as usize))
            .copied()
    }

    // In-bounds accessors, only called after `cell` has checked the position.
    fn at(&self, pos: Vec2) -> Cell {
        self.grid[pos.i as usize][pos.j as usize]
    }

    fn set(&mut self, pos: Vec2, cell: Cell) {
        self.grid[pos.i as usize][pos.j as usize] = cell;
    }

    /// Apply one directional move. A wall, an immovable box, or an
    /// out-of-bounds destination blocks the move and leaves the grid
    /// untouched.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let step = direction.delta();
        let dest_pos = self.avatar + step;
        let Some(dest) = self.cell(dest_pos) else {
            return MoveOutcome::Blocked;
        };

        let pushed = match dest {
            Cell::Empty | Cell::Target => false,
            Cell::Box | Cell::BoxOnTarget => {
                let far_pos = dest_pos + step;
                let Some(far) = self.cell(far_pos) else {
                    return MoveOutcome::Blocked;
                };
                if !matches!(far, Cell::Empty | Cell::Target) {
                    return MoveOutcome::Blocked;
                }
                // Box advances one cell; the avatar will step into its place.
                self.set(far_pos, box_arrival(far));
                self.set(dest_pos, vacated(dest));
                true
            }
            Cell::Wall | Cell::Avatar | Cell::AvatarOnTarget => {
                return MoveOutcome::Blocked;
            }
        };

        let origin = self.at(self.avatar);
        self.set(self.avatar, vacated(origin));
        let dest_now = self.at(dest_pos);
        self.set(dest_pos, avatar_arrival(dest_now));
        self.avatar = dest_pos;

        MoveOutcome::Moved { pushed }
    }

    /// Reverse the most recent move given its record: the avatar steps back
    /// one cell, and a pushed box returns from the far cell into the cell
    /// the avatar vacates. Exact inverse of `apply_move` on the grid;
    /// `Blocked` only if the record does not match the grid.
    pub fn apply_inverse(&mut self, record: MoveRecord) -> MoveOutcome {
        let step = record.direction.delta();
        let back_pos = self.avatar - step;
        let Some(back) = self.cell(back_pos) else {
            return MoveOutcome::Blocked;
        };
        if !matches!(back, Cell::Empty | Cell::Target) {
            return MoveOutcome::Blocked;
        }

        let origin = self.at(self.avatar);
        if record.pushed {
            let far_pos = self.avatar + step;
            let Some(far) = self.cell(far_pos) else {
                return MoveOutcome::Blocked;
            };
            if !far.is_box() {
                return MoveOutcome::Blocked;
            }
            self.set(far_pos, vacated(far));
            self.set(self.avatar, box_arrival(vacated(origin)));
        } else {
            self.set(self.avatar, vacated(origin));
        }

        self.set(back_pos, avatar_arrival(back));
        self.avatar = back_pos;

        MoveOutcome::Moved {
            pushed: record.pushed,
        }
    }

    /// Won when no bare box remains and the avatar is not standing on an
    /// unfulfilled target. An avatar parked on the last empty target
    /// therefore still counts as not won.
    pub fn is_won(&self) -> bool {
        for row in &self.grid {
            for c in row {
                if *c == Cell::Box || *c == Cell::AvatarOnTarget {
                    return false;
                }
            }
        }
        true
    }

    /// Row-major dump in the load format, one line per row. Combined states
    /// are preserved verbatim; collapsing is a display concern.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));
        for row in &self.grid {
            for c in row {
                out.push(c.to_char());
            }
            out.push('\n');
        }
        out
    }
}
