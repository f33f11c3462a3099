use smallvec::SmallVec;

/// One entry of the board's undo stack: the scalar counters as they were
/// before a move was applied, plus the grid indices of every opponent cell
/// that move's capture step flipped. Reversing the flips and restoring the
/// counters undoes the move without copying the whole grid.
///
/// A destination square has at most eight neighbors, so the flip list
/// stays inline.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct UndoState {
    pub red_count: u32,
    pub blue_count: u32,
    pub jump_count: u32,
    pub move_count: u32,
    pub flipped: SmallVec<[usize; 8]>,
}

impl UndoState {
    pub fn snapshot(red_count: u32, blue_count: u32, jump_count: u32, move_count: u32) -> Self {
        Self {
            red_count,
            blue_count,
            jump_count,
            move_count,
            flipped: SmallVec::new(),
        }
    }
}
