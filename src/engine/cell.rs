/// One board position and its per-turn flags.
///
/// An empty cell (value 0) never carries `merged_this_turn` or
/// `just_spawned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    value: u32,
    merged_this_turn: bool,
    merged_last_turn: bool,
    just_spawned: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        value: 0,
        merged_this_turn: false,
        merged_last_turn: false,
        just_spawned: false,
    };

    /// A plain tile with no turn flags set.
    #[inline]
    pub fn with_value(value: u32) -> Self {
        Cell { value, ..Cell::EMPTY }
    }

    #[inline]
    pub fn value(&self) -> u32 { self.value }

    #[inline]
    pub fn is_empty(&self) -> bool { self.value == 0 }

    /// True once this cell has been the target of a merge in the current turn.
    #[inline]
    pub fn merged_this_turn(&self) -> bool { self.merged_this_turn }

    /// Highlight flag for renderers; carries no game logic.
    #[inline]
    pub fn merged_last_turn(&self) -> bool { self.merged_last_turn }

    #[inline]
    pub fn just_spawned(&self) -> bool { self.just_spawned }

    /// Empty the cell. Used on the source side of a merge.
    #[inline]
    pub fn clear(&mut self) {
        *self = Cell::EMPTY;
    }

    /// Roll the per-turn flags over; must run on every cell before the next move.
    #[inline]
    pub fn begin_next_turn(&mut self) {
        self.just_spawned = false;
        self.merged_last_turn = self.merged_this_turn;
        self.merged_this_turn = false;
    }

    /// Double this tile as the target of a merge.
    #[inline]
    pub(crate) fn absorb(&mut self) {
        debug_assert!(!self.merged_this_turn, "cell merged twice in one turn");
        self.value *= 2;
        self.merged_this_turn = true;
    }

    /// Place a freshly spawned tile into an empty cell.
    #[inline]
    pub(crate) fn spawn(&mut self, value: u32) {
        debug_assert!(self.is_empty(), "spawned onto an occupied cell");
        *self = Cell { value, just_spawned: true, ..Cell::EMPTY };
    }
}
