//! Game session: the two players, move submission and end-of-game handling.
//!
//! Turn order is driven by the caller. The session reports whose turn it
//! expects next (`SessionState::AwaitingMove`), but any color may submit a
//! move at any time and is judged only by its own legal moves. This lets a
//! driver replay a recorded game in which one color moves twice in a row
//! after the other was forced to pass.

use std::fmt;

use tracing::{info, instrument, warn};

use crate::board::{Board, Color, Coord, Snapshot};
use crate::constants::FIRST_MOVER;
use crate::error::Result;
use crate::moves;

/// A player and the values derived from the board after every move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Color,
    score: usize,
    legal_moves: Vec<Coord>,
}

impl Player {
    fn new(name: String, color: Color, board: &Board) -> Self {
        let mut player = Player {
            name,
            color,
            score: 0,
            legal_moves: Vec::new(),
        };
        player.refresh(board);
        player
    }

    fn refresh(&mut self, board: &Board) {
        self.score = board.count_color(self.color);
        self.legal_moves = moves::legal_moves(board, self.color);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Legal moves in column-major order.
    pub fn legal_moves(&self) -> &[Coord] {
        &self.legal_moves
    }
}

/// Final result of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner {
        color: Color,
        name: String,
        score: usize,
        opponent_score: usize,
    },
    Tie {
        score: usize,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner { color, name, .. } => write!(f, "Winner is {color} player: {name}"),
            Outcome::Tie { .. } => write!(f, "It's a tie"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Game in progress; the color is the one expected to move next.
    AwaitingMove(Color),
    Terminal(Outcome),
}

/// What happened to a submitted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The disc was placed and the listed discs flipped.
    Applied { coord: Coord, flipped: Vec<Coord> },
    /// The color had no legal move while its opponent did. Board unchanged.
    Passed { color: Color },
    /// The coordinate is not legal for the color. Board unchanged.
    Invalid { legal_moves: Vec<Coord> },
    /// The game is over, either now or already before this submission.
    GameOver(Outcome),
}

/// A game between two named players on one board.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    state: SessionState,
    moves_played: usize,
}

fn slot(color: Color) -> usize {
    match color {
        Color::Black => 0,
        Color::White => 1,
    }
}

impl GameSession {
    /// New game on the standard starting board.
    pub fn new(black: impl Into<String>, white: impl Into<String>) -> Self {
        Self::with_board(Board::new(), black, white)
    }

    /// New game on a prepared board. Black is expected to move first.
    pub fn with_board(board: Board, black: impl Into<String>, white: impl Into<String>) -> Self {
        let players = [
            Player::new(black.into(), Color::Black, &board),
            Player::new(white.into(), Color::White, &board),
        ];
        Self {
            board,
            players,
            state: SessionState::AwaitingMove(FIRST_MOVER),
            moves_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[slot(color)]
    }

    pub fn score(&self, color: Color) -> usize {
        self.player(color).score()
    }

    /// Cached legal moves for `color`, column-major.
    pub fn legal_moves(&self, color: Color) -> &[Coord] {
        self.player(color).legal_moves()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, SessionState::Terminal(_))
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.state {
            SessionState::Terminal(outcome) => Some(outcome),
            SessionState::AwaitingMove(_) => None,
        }
    }

    /// Number of moves applied so far. Passes are not counted.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Result of comparing the current scores.
    pub fn standings(&self) -> Outcome {
        let black = self.player(Color::Black);
        let white = self.player(Color::White);
        if black.score() == white.score() {
            return Outcome::Tie {
                score: black.score(),
            };
        }
        let (winner, loser) = if black.score() > white.score() {
            (black, white)
        } else {
            (white, black)
        };
        Outcome::Winner {
            color: winner.color(),
            name: winner.name().to_string(),
            score: winner.score(),
            opponent_score: loser.score(),
        }
    }

    /// Submit a move for `color`.
    ///
    /// Invalid coordinates and forced passes come back as `MoveResult`
    /// values. `Err` is reserved for board invariant violations.
    #[instrument(skip(self), fields(moves_played = self.moves_played))]
    pub fn submit_move(&mut self, color: Color, coord: Coord) -> Result<MoveResult> {
        if let Some(result) = self.check_turn(color) {
            return Ok(result);
        }

        if !self.legal_moves(color).contains(&coord) {
            warn!(%color, %coord, "invalid move");
            return Ok(MoveResult::Invalid {
                legal_moves: self.legal_moves(color).to_vec(),
            });
        }

        let flipped = moves::apply(&mut self.board, color, coord)?;
        self.moves_played += 1;
        self.refresh_players();

        if self.board.is_full() {
            return Ok(self.finish());
        }
        self.state = SessionState::AwaitingMove(color.opponent());
        Ok(MoveResult::Applied { coord, flipped })
    }

    /// Give up the turn for `color`.
    ///
    /// Only allowed when `color` has no legal move; otherwise the legal moves
    /// are returned as `Invalid`.
    pub fn pass(&mut self, color: Color) -> MoveResult {
        self.check_turn(color).unwrap_or_else(|| MoveResult::Invalid {
            legal_moves: self.legal_moves(color).to_vec(),
        })
    }

    /// Game-over and forced-pass checks shared by moves and passes.
    fn check_turn(&mut self, color: Color) -> Option<MoveResult> {
        if let SessionState::Terminal(outcome) = &self.state {
            return Some(MoveResult::GameOver(outcome.clone()));
        }

        let own_moves = !self.legal_moves(color).is_empty();
        let opponent_moves = !self.legal_moves(color.opponent()).is_empty();
        match (own_moves, opponent_moves) {
            (false, false) => Some(self.finish()),
            (false, true) => {
                info!(%color, "no legal move, turn passes");
                self.state = SessionState::AwaitingMove(color.opponent());
                Some(MoveResult::Passed { color })
            }
            (true, _) => None,
        }
    }

    fn refresh_players(&mut self) {
        for player in &mut self.players {
            player.refresh(&self.board);
        }
    }

    fn finish(&mut self) -> MoveResult {
        let outcome = self.standings();
        info!(
            black = self.score(Color::Black),
            white = self.score(Color::White),
            "game over: {outcome}"
        );
        self.state = SessionState::Terminal(outcome.clone());
        MoveResult::GameOver(outcome)
    }
}
