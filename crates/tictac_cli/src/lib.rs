//! Terminal front end for the tictac engine.
//!
//! Reads moves, hands them to [`tictac::Game::play`] and prints the board.
//! No game rules live here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use input::{Input, InputError, parse_coordinates, parse_input};
pub use session::{OutputFormat, Session, announce, render, replay};
