//! Random playouts.
//!
//! A playout drives a session to the end, picking uniformly among the legal
//! moves of whichever color the session expects next and passing when there
//! are none. No position is evaluated; this is a driver for demos and for
//! exercising the rules on many positions.

use fastrand::Rng;
use tracing::debug;

use crate::board::{Color, Coord};
use crate::error::Result;
use crate::session::{GameSession, MoveResult, Outcome, SessionState};

/// Counters collected while a playout runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayoutStats {
    pub moves: usize,
    pub passes: usize,
}

/// Play random legal moves until the game is over.
pub fn playout(session: &mut GameSession, rng: &mut Rng) -> Result<(Outcome, PlayoutStats)> {
    playout_with(session, rng, |_, _, _| {})
}

/// Like [`playout`], calling `observe` after every submission.
pub fn playout_with<F>(
    session: &mut GameSession,
    rng: &mut Rng,
    mut observe: F,
) -> Result<(Outcome, PlayoutStats)>
where
    F: FnMut(Color, &MoveResult, &GameSession),
{
    let mut stats = PlayoutStats::default();
    loop {
        let color = match session.state() {
            SessionState::AwaitingMove(color) => *color,
            SessionState::Terminal(outcome) => {
                stats.moves = session.moves_played();
                return Ok((outcome.clone(), stats));
            }
        };

        let result = match choose_random_move(session, color, rng) {
            Some(coord) => session.submit_move(color, coord)?,
            None => session.pass(color),
        };
        if let MoveResult::Passed { .. } = result {
            stats.passes += 1;
        }
        debug!(%color, ?result, "playout step");
        observe(color, &result, session);
    }
}

fn choose_random_move(session: &GameSession, color: Color, rng: &mut Rng) -> Option<Coord> {
    let moves = session.legal_moves(color);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}
