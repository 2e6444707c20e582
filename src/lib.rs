#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, reason = "accessors are trivially pure")]

pub mod coord;

pub mod board;
pub mod board_display;
pub mod end_state;
pub mod error;
pub mod event;
pub mod game;
pub mod grid;
pub mod layout;
pub mod movegen;
pub mod movement;
pub mod piece;
pub mod playout;
pub mod primitive;
pub mod repl;
pub mod rules;
pub mod side;

mod misc;
