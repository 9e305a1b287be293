use crate::board::{Board, CELL_COUNT};
use crate::bot_controller::calculate_move;
use crate::error::{IllegalMove, MatchError};
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Mark, Outcome};
use crate::win_detector::evaluate;

/// Turn state machine. X always opens; `Terminal` is left only through
/// `reset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    AwaitingFirst,
    AwaitingSecond,
    Terminal,
}

/// Match-series statistics. Survives `reset`; only a terminal transition
/// updates it, exactly once per finished board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

#[derive(Debug)]
pub struct Match {
    board: Board,
    phase: MatchPhase,
    outcome: Outcome,
    tally: Tally,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: MatchPhase::AwaitingFirst,
            outcome: Outcome::Ongoing,
            tally: Tally::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn side_to_move(&self) -> Option<Mark> {
        match self.phase {
            MatchPhase::AwaitingFirst => Some(Mark::X),
            MatchPhase::AwaitingSecond => Some(Mark::O),
            MatchPhase::Terminal => None,
        }
    }

    /// Places the side-to-move's mark into `cell`. On a rejected move the
    /// match is left exactly as it was.
    pub fn apply_move(&mut self, cell: usize) -> Result<Outcome, IllegalMove> {
        let mark = match self.side_to_move() {
            Some(mark) => mark,
            None => return Err(IllegalMove::MatchOver),
        };

        if cell >= CELL_COUNT {
            return Err(IllegalMove::OutOfBounds(cell));
        }

        if !self.board.is_empty_cell(cell) {
            return Err(IllegalMove::CellOccupied(cell));
        }

        self.board.place(cell, mark);
        self.outcome = evaluate(&self.board);

        match self.outcome {
            Outcome::Ongoing => {
                self.phase = match self.phase {
                    MatchPhase::AwaitingFirst => MatchPhase::AwaitingSecond,
                    MatchPhase::AwaitingSecond => MatchPhase::AwaitingFirst,
                    MatchPhase::Terminal => unreachable!("side_to_move gated the terminal phase"),
                };
            }
            Outcome::Win(Mark::X) => {
                self.phase = MatchPhase::Terminal;
                self.tally.x_wins += 1;
            }
            Outcome::Win(_) => {
                self.phase = MatchPhase::Terminal;
                self.tally.o_wins += 1;
            }
            Outcome::Draw => {
                self.phase = MatchPhase::Terminal;
                self.tally.draws += 1;
            }
        }

        Ok(self.outcome)
    }

    /// Asks the bot for the side-to-move's cell. The caller applies the
    /// result via `apply_move`; the match itself is not touched here.
    pub fn engine_move(
        &self,
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) -> Result<usize, MatchError> {
        let mark = self.side_to_move().ok_or(IllegalMove::MatchOver)?;
        let cell = calculate_move(difficulty, &self.board, mark, rng)?;
        Ok(cell)
    }

    /// Fresh board, X to move. Valid from any phase; the tally carries over.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.phase = MatchPhase::AwaitingFirst;
        self.outcome = Outcome::Ongoing;
    }
}
