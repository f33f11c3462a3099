pub mod color;
pub mod error;
pub mod square;

mod display;
mod undo;


use std::fmt;
use std::rc::Rc;

use color::PieceColor;
use error::BoardError;
use square::{Square, EXTENDED_CELLS, EXTENDED_SIDE};
use undo::UndoState;

use crate::ataxx_move::AtaxxMove;

/// Number of consecutive jump moves (with no intervening extend) after
/// which the game is declared over.
pub const JUMP_LIMIT: u32 = 25;

/// Callback invoked after every successful board mutation. The board has
/// no opinion on what observes it; the display layer typically does.
pub type BoardObserver = Rc<dyn Fn(&Board)>;

/// The state of an Ataxx game. The playable 7x7 area lives inside an 11x11
/// grid whose outer two rows and columns are permanently `Blocked`, so a
/// neighborhood scan up to distance 2 never needs a bounds check: squares
/// off the edge simply look blocked.
///
/// Piece counts are maintained incrementally on every mutation. Undo works
/// from a stack of counter snapshots paired with the cells each move
/// flipped (see `undo::UndoState`), which is a strict LIFO inverse of
/// `make_move`/`pass`.
pub struct Board {
    grid: [PieceColor; EXTENDED_CELLS],
    turn: PieceColor,
    red_count: u32,
    blue_count: u32,
    move_count: u32,
    jump_count: u32,
    history: Vec<AtaxxMove>,
    undo_stack: Vec<UndoState>,
    observers: Vec<BoardObserver>,
}

/// Index of the square `dc` columns and `dr` rows away from index `sq`.
/// Out-of-range offsets up to distance 2 land on border cells, never
/// outside the grid.
fn neighbor(sq: usize, dc: i32, dr: i32) -> usize {
    (sq as i32 + dc + dr * EXTENDED_SIDE as i32) as usize
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A new board in the starting position: red at a7 and g1, blue at a1
    /// and g7, red to move.
    pub fn new() -> Self {
        let mut board = Self {
            grid: [PieceColor::Blocked; EXTENDED_CELLS],
            turn: PieceColor::Red,
            red_count: 0,
            blue_count: 0,
            move_count: 0,
            jump_count: 0,
            history: Vec::new(),
            undo_stack: Vec::new(),
            observers: Vec::new(),
        };
        board.clear();
        board
    }

    /// Reset to the starting position and discard history, undo state and
    /// any blocks.
    pub fn clear(&mut self) {
        for cell in self.grid.iter_mut() {
            *cell = PieceColor::Blocked;
        }
        self.turn = PieceColor::Red;
        self.red_count = 0;
        self.blue_count = 0;
        self.move_count = 0;
        self.jump_count = 0;
        self.history.clear();
        self.undo_stack.clear();
        for col in 'a'..='g' {
            for row in '1'..='7' {
                self.set(Square::new(col, row).unwrap().index(), PieceColor::Empty);
            }
        }
        self.set(Square::new('a', '7').unwrap().index(), PieceColor::Red);
        self.set(Square::new('g', '1').unwrap().index(), PieceColor::Red);
        self.set(Square::new('a', '1').unwrap().index(), PieceColor::Blue);
        self.set(Square::new('g', '7').unwrap().index(), PieceColor::Blue);
        self.notify_observers();
    }

    /// Set a cell, keeping the piece counts consistent with the grid.
    fn set(&mut self, sq: usize, v: PieceColor) {
        let old = self.grid[sq];
        if old == v {
            return;
        }
        match old {
            PieceColor::Red => self.red_count -= 1,
            PieceColor::Blue => self.blue_count -= 1,
            _ => {}
        }
        match v {
            PieceColor::Red => self.red_count += 1,
            PieceColor::Blue => self.blue_count += 1,
            _ => {}
        }
        self.grid[sq] = v;
    }

    /// Cell mutation that bypasses move recording, for tests elsewhere in
    /// the crate that need to construct positions directly.
    #[cfg(test)]
    pub(crate) fn set_unchecked(&mut self, sq: Square, v: PieceColor) {
        self.set(sq.index(), v);
    }

    #[cfg(test)]
    pub(crate) fn set_turn(&mut self, color: PieceColor) {
        self.turn = color;
    }

    pub fn get(&self, sq: Square) -> PieceColor {
        self.grid[sq.index()]
    }

    /// Contents of the cell with linearized index `index`, border included.
    pub fn get_index(&self, index: usize) -> PieceColor {
        self.grid[index]
    }

    /// The player whose turn it is. Arbitrary once `game_over()` is true.
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    pub fn red_pieces(&self) -> u32 {
        self.red_count
    }

    pub fn blue_pieces(&self) -> u32 {
        self.blue_count
    }

    pub fn num_pieces(&self, color: PieceColor) -> u32 {
        match color {
            PieceColor::Red => self.red_count,
            PieceColor::Blue => self.blue_count,
            _ => 0,
        }
    }

    /// Total moves and passes since the last clear.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Consecutive jumps since the last extend (or the start of the game).
    pub fn jump_count(&self) -> u32 {
        self.jump_count
    }

    /// Every move and pass applied since the last clear, in order.
    pub fn all_moves(&self) -> &[AtaxxMove] {
        &self.history
    }

    /// True iff `mv` may be applied right now: the source holds the piece
    /// of the player on move and the destination is empty. Passes are
    /// validated by `pass` instead; sentinels are never legal.
    pub fn legal_move(&self, mv: &AtaxxMove) -> bool {
        match mv {
            AtaxxMove::Extend { from, to } | AtaxxMove::Jump { from, to } => {
                self.get(*from) == self.turn && self.get(*to) == PieceColor::Empty
            }
            _ => false,
        }
    }

    /// True iff `who` has any extend or jump available, regardless of
    /// whose turn it is or whether the game is over.
    pub fn can_move(&self, who: PieceColor) -> bool {
        for row in ('1'..='7').rev() {
            for col in 'a'..='g' {
                let sq = Square::new(col, row).unwrap();
                if self.get(sq) != who {
                    continue;
                }
                let i = sq.index();
                for dc in -2..=2 {
                    for dr in -2..=2 {
                        if dc == 0 && dr == 0 {
                            continue;
                        }
                        if self.grid[neighbor(i, dc, dr)] == PieceColor::Empty {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// True iff neither side can move, one side has no pieces, or the
    /// jump limit has been reached.
    pub fn game_over(&self) -> bool {
        (!self.can_move(PieceColor::Red) && !self.can_move(PieceColor::Blue))
            || self.red_count == 0
            || self.blue_count == 0
            || self.jump_count >= JUMP_LIMIT
    }

    /// Perform the move c0r0-c1r1, or a pass if `c0` is '-'.
    pub fn make_move_coords(
        &mut self,
        c0: char,
        r0: char,
        c1: char,
        r1: char,
    ) -> Result<(), BoardError> {
        let mv = AtaxxMove::from_coords(c0, r0, c1, r1)?;
        self.make_move(mv)
    }

    /// Apply `mv`, recording it in the history and on the undo stack.
    pub fn make_move(&mut self, mv: AtaxxMove) -> Result<(), BoardError> {
        if mv.is_pass() {
            return self.pass();
        }
        if !self.legal_move(&mv) {
            return Err(BoardError::IllegalMove { mv });
        }

        let mut undo = UndoState::snapshot(
            self.red_count,
            self.blue_count,
            self.jump_count,
            self.move_count,
        );
        let mover = self.turn;
        let to = match mv {
            AtaxxMove::Jump { from, to } => {
                self.set(to.index(), mover);
                self.set(from.index(), PieceColor::Empty);
                self.jump_count += 1;
                to
            }
            AtaxxMove::Extend { to, .. } => {
                self.set(to.index(), mover);
                self.jump_count = 0;
                to
            }
            // legal_move rejects passes and sentinels above
            _ => return Err(BoardError::IllegalMove { mv }),
        };

        // Capture propagation: every opposing piece adjacent to the
        // destination converts to the mover's color.
        let dest = to.index();
        for dc in (-1..=1).rev() {
            for dr in (-1..=1).rev() {
                if dc == 0 && dr == 0 {
                    continue;
                }
                let n = neighbor(dest, dc, dr);
                if self.grid[n] == mover.opposite() {
                    self.set(n, mover);
                    undo.flipped.push(n);
                }
            }
        }

        self.history.push(mv);
        self.undo_stack.push(undo);
        self.move_count += 1;
        self.turn = mover.opposite();
        self.notify_observers();
        Ok(())
    }

    /// Apply a legal move without touching the history or undo stacks.
    /// Used only for position setup.
    pub fn make_unrecorded_move(&mut self, mv: AtaxxMove) -> Result<(), BoardError> {
        if mv.is_pass() {
            return self.pass();
        }
        if !self.legal_move(&mv) {
            return Err(BoardError::IllegalMove { mv });
        }
        let mover = self.turn;
        let to = match mv {
            AtaxxMove::Jump { from, to } => {
                self.set(to.index(), mover);
                self.set(from.index(), PieceColor::Empty);
                to
            }
            AtaxxMove::Extend { to, .. } => {
                self.set(to.index(), mover);
                to
            }
            _ => return Err(BoardError::IllegalMove { mv }),
        };
        let dest = to.index();
        for dc in (-1..=1).rev() {
            for dr in (-1..=1).rev() {
                if dc == 0 && dr == 0 {
                    continue;
                }
                let n = neighbor(dest, dc, dr);
                if self.grid[n] == mover.opposite() {
                    self.set(n, mover);
                }
            }
        }
        self.turn = mover.opposite();
        self.notify_observers();
        Ok(())
    }

    /// Record that the player on move passes. Legal only when that player
    /// has no extend or jump anywhere on the board.
    pub fn pass(&mut self) -> Result<(), BoardError> {
        if self.can_move(self.turn) {
            return Err(BoardError::IllegalPass);
        }
        self.undo_stack.push(UndoState::snapshot(
            self.red_count,
            self.blue_count,
            self.jump_count,
            self.move_count,
        ));
        self.history.push(AtaxxMove::Pass);
        self.move_count += 1;
        self.turn = self.turn.opposite();
        self.notify_observers();
        Ok(())
    }

    /// Undo the most recent move or pass.
    pub fn undo(&mut self) -> Result<(), BoardError> {
        let last = match self.history.pop() {
            Some(mv) => mv,
            None => return Err(BoardError::EmptyHistory),
        };
        // make_move and pass push both stacks together
        let undo = self.undo_stack.pop().expect("undo stack tracks history");

        let mover = self.turn.opposite();
        for &sq in undo.flipped.iter() {
            self.set(sq, mover.opposite());
        }
        match last {
            AtaxxMove::Jump { from, to } => {
                self.set(from.index(), mover);
                self.set(to.index(), PieceColor::Empty);
            }
            AtaxxMove::Extend { to, .. } => {
                self.set(to.index(), PieceColor::Empty);
            }
            _ => {}
        }

        self.red_count = undo.red_count;
        self.blue_count = undo.blue_count;
        self.jump_count = undo.jump_count;
        self.move_count = undo.move_count;
        self.turn = mover;
        self.notify_observers();
        Ok(())
    }

    /// True iff a block may be placed on `sq`: the square is empty and is
    /// not one of the four starting corners.
    pub fn legal_block(&self, sq: Square) -> bool {
        let corner =
            (sq.col() == 'a' || sq.col() == 'g') && (sq.row() == '1' || sq.row() == '7');
        self.get(sq) == PieceColor::Empty && !corner
    }

    /// Place a block on the given square and its reflections across the
    /// center column, the center row, and both. Blocks are part of game
    /// setup: they are not undoable and are rejected once a move has been
    /// made.
    pub fn set_block(&mut self, col: char, row: char) -> Result<(), BoardError> {
        if !self.history.is_empty() {
            return Err(BoardError::BlockAfterFirstMove);
        }
        let sq = Square::new(col, row).ok_or(BoardError::IllegalBlock)?;
        if !self.legal_block(sq) {
            return Err(BoardError::IllegalBlock);
        }
        let targets = [sq, sq.mirrored_col(), sq.mirrored_row(), sq.mirrored()];
        for target in targets.iter() {
            if self.get(*target) == PieceColor::Empty {
                self.set(target.index(), PieceColor::Blocked);
            }
        }
        self.notify_observers();
        Ok(())
    }

    pub fn add_observer(&mut self, observer: BoardObserver) {
        self.observers.push(observer);
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            observer(self);
        }
    }
}

impl Clone for Board {
    /// Clones carry the full game state but not the observer list, so a
    /// search working on a private copy never triggers display updates.
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            turn: self.turn,
            red_count: self.red_count,
            blue_count: self.blue_count,
            move_count: self.move_count,
            jump_count: self.jump_count,
            history: self.history.clone(),
            undo_stack: self.undo_stack.clone(),
            observers: Vec::new(),
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid[..] == other.grid[..]
            && self.turn == other.turn
            && self.red_count == other.red_count
            && self.blue_count == other.blue_count
            && self.move_count == other.move_count
            && self.jump_count == other.jump_count
            && self.history == other.history
    }
}

impl Eq for Board {}

// Manual impl because `observers` holds `Rc<dyn Fn>`, which isn't `Debug`;
// covers the same fields `PartialEq` compares.
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &&self.grid[..])
            .field("turn", &self.turn)
            .field("red_count", &self.red_count)
            .field("blue_count", &self.blue_count)
            .field("move_count", &self.move_count)
            .field("jump_count", &self.jump_count)
            .field("history", &self.history)
            .finish()
    }
}
