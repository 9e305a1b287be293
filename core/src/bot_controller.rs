use crate::board::Board;
use crate::error::InvariantViolation;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Mark, Outcome};
use crate::win_detector::evaluate;

/// Picks a move for `engine_mark` on `board`. The board is never mutated;
/// the search runs on a private scratch copy.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    engine_mark: Mark,
    rng: &mut SessionRng,
) -> Result<usize, InvariantViolation> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Impossible => choose_move(board, engine_mark),
    }
}

fn calculate_random_move(
    board: &Board,
    rng: &mut SessionRng,
) -> Result<usize, InvariantViolation> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(InvariantViolation(
            "move requested but no empty cell remains".to_string(),
        ));
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Exhaustive minimax move selection for `engine_mark`. Candidates are tried
/// in ascending cell order and ties keep the first-encountered move, so the
/// result is deterministic for a given board.
pub fn choose_move(board: &Board, engine_mark: Mark) -> Result<usize, InvariantViolation> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(InvariantViolation(
            "move requested but no empty cell remains".to_string(),
        ));
    }

    let opponent_mark = match engine_mark.opponent() {
        Some(mark) => mark,
        None => {
            return Err(InvariantViolation(
                "engine cannot play the empty mark".to_string(),
            ));
        }
    };

    let mut scratch = *board;
    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    for cell in available_moves {
        scratch.place(cell, engine_mark);
        let score = best_move_score(&mut scratch, engine_mark, opponent_mark, 0);
        scratch.clear(cell);

        if score > best_score {
            best_score = score;
            best_move = cell;
        }
    }

    Ok(best_move)
}

/// Scores a position from `engine_mark`'s perspective with `side_to_move` to
/// play. A win for the engine scores `10 - depth`, a loss `depth - 10`, a
/// draw `0`; the depth term makes the engine prefer the fastest forced win
/// and the slowest forced loss. The depth parameter exists only for this
/// tie-break, never to bound the search: the 3x3 tree is always explored to
/// the leaves.
///
/// Every placement is undone before the next candidate, so the buffer is
/// back in its pre-call state when the enumeration finishes.
pub fn best_move_score(
    board: &mut Board,
    engine_mark: Mark,
    side_to_move: Mark,
    depth: i32,
) -> i32 {
    match evaluate(board) {
        Outcome::Win(mark) if mark == engine_mark => return 10 - depth,
        Outcome::Win(_) => return depth - 10,
        Outcome::Draw => return 0,
        Outcome::Ongoing => {}
    }

    let next_side = side_to_move
        .opponent()
        .unwrap_or_else(|| unreachable!("side to move is never the empty mark"));

    if side_to_move == engine_mark {
        let mut best = i32::MIN;
        for cell in board.available_moves() {
            board.place(cell, side_to_move);
            best = best.max(best_move_score(board, engine_mark, next_side, depth + 1));
            board.clear(cell);
        }
        best
    } else {
        let mut best = i32::MAX;
        for cell in board.available_moves() {
            board.place(cell, side_to_move);
            best = best.min(best_move_score(board, engine_mark, next_side, depth + 1));
            board.clear(cell);
        }
        best
    }
}
