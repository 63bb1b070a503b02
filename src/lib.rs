//! Othello-Rust: a two-player disc-flipping board game engine.
//!
//! This crate tracks an 8x8 Othello board, checks candidate moves against
//! the directional capture rule, applies moves (place + flip) and decides
//! when the game is over and who won.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, starting layout, directions and symbols
//! - [`board`] - Colors, cells, coordinates and the padded board grid
//! - [`scan`] - Directional capture scans
//! - [`moves`] - Move legality, enumeration and execution
//! - [`session`] - Players, move submission and end-of-game handling
//! - [`error`] - Error types
//! - [`render`] - Text rendering of a session
//! - [`playout`] - Random self-play driver
//! - [`script`] - Move scripts and the bundled reference game
//! - [`protocol`] - Line-oriented text protocol
//!
//! ## Example
//!
//! ```
//! use othello_rust::board::{Color, Coord};
//! use othello_rust::session::{GameSession, MoveResult};
//!
//! let mut game = GameSession::new("Leo", "Helen");
//! let result = game.submit_move(Color::Black, Coord::new(4, 3)).unwrap();
//! assert!(matches!(result, MoveResult::Applied { .. }));
//! assert_eq!(game.score(Color::Black), 4);
//! assert_eq!(game.score(Color::White), 1);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod moves;
pub mod playout;
pub mod protocol;
pub mod render;
pub mod scan;
pub mod script;
pub mod session;
