#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Target,
    Box,
    BoxOnTarget,
    Avatar,
    AvatarOnTarget,
}

impl Cell {
    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            ' ' => Some(Cell::Empty),
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Target),
            '$' => Some(Cell::Box),
            '*' => Some(Cell::BoxOnTarget),
            '@' => Some(Cell::Avatar),
            '+' => Some(Cell::AvatarOnTarget),
            _ => None,
        }
    }

    /// Save-format character, combined states written verbatim.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Target => '.',
            Cell::Box => '$',
            Cell::BoxOnTarget => '*',
            Cell::Avatar => '@',
            Cell::AvatarOnTarget => '+',
        }
    }

    /// Screen character; combined states collapse to the occupant.
    pub fn display_char(self) -> char {
        match self {
            Cell::BoxOnTarget => '$',
            Cell::AvatarOnTarget => '@',
            other => other.to_char(),
        }
    }

    pub fn has_target(self) -> bool {
        matches!(self, Cell::Target | Cell::BoxOnTarget | Cell::AvatarOnTarget)
    }

    pub fn is_box(self) -> bool {
        matches!(self, Cell::Box | Cell::BoxOnTarget)
    }

    pub fn is_avatar(self) -> bool {
        matches!(self, Cell::Avatar | Cell::AvatarOnTarget)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i - rhs.i,
            j: self.j - rhs.j,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// One entry of the move history: enough to reverse the move exactly.
/// The grid alone cannot tell whether the avatar's last step pushed a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub direction: Direction,
    pub pushed: bool,
}

impl MoveRecord {
    /// Single-character code for the move-log format. Lowercase is a plain
    /// step, uppercase means a box was pushed.
    pub fn code(self) -> char {
        let ch = match self.direction {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        };
        if self.pushed {
            ch.to_ascii_uppercase()
        } else {
            ch
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Moved { pushed: bool },
    Blocked,
}

/// Session commands, abstracted away from raw keypresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Move(Direction),
    Undo,
    Restart,
    Abandon,
    ZoomIn,
    ZoomOut,
}
