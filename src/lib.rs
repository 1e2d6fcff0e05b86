//! Crate root module declarations for the draughts (checkers) engine core.
//!
//! This file exposes all top-level subsystems (board representation, rules
//! and move application, game-tree search, and the turn orchestrator) so
//! binaries, tests, and external tooling can import stable module paths.

pub mod errors;

pub mod board {
    pub mod builder;
    pub mod direction;
    pub mod figure;
    pub mod point;
    pub mod side;
    pub mod square_board;
}

pub mod rules {
    pub mod english_draughts;
    pub mod move_chain;
    pub mod move_sequence;
    pub mod move_step;
}

pub mod bot {
    pub mod bot_move;
    pub mod cancel;
    pub mod negamax_bot;
    pub mod scoring;
}

pub mod game {
    pub mod game;
    pub mod history;
    pub mod player;
}
