//! Turn-based game loop over the rules engine and the move applier.

use tracing::debug;

use crate::board::builder::BoardBuilder;
use crate::board::figure::Figure;
use crate::board::side::Side;
use crate::board::square_board::SquareBoard;
use crate::errors::GameError;
use crate::game::history::History;
use crate::game::player::{GameMove, Player};
use crate::rules::english_draughts::Rules;
use crate::rules::move_chain::apply_sequence;
use crate::rules::move_sequence::MoveSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    None,
    Started,
    Player1Wins,
    Player2Wins,
    Draw,
    Stopped,
    Error,
}

/// Drives a game between two players until a win, a stop, or an error.
///
/// Each turn the current player is offered every legal walk plus `Undo` and
/// `Redo` whenever the respective history is non-empty. Choosing a move that
/// was not offered ends the game with [`GameError::NoSuchMove`].
pub struct Game<R, B> {
    rules: R,
    builder: B,
    board: SquareBoard,
    undo_history: Vec<History>,
    redo_history: Vec<History>,
    turn: u32,
    status: GameStatus,
}

impl<R: Rules, B: BoardBuilder> Game<R, B> {
    pub fn new(rules: R, builder: B) -> Game<R, B> {
        let board = builder.build();
        Game {
            rules,
            builder,
            board,
            undo_history: Vec::new(),
            redo_history: Vec::new(),
            turn: 0,
            status: GameStatus::None,
        }
    }

    pub fn board(&self) -> &SquareBoard {
        &self.board
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Runs a fresh game to completion. Players take turns starting with
    /// `player1`; a player returning `None` from `choose` stops the game.
    pub fn run(
        &mut self,
        player1: &mut dyn Player,
        player2: &mut dyn Player,
    ) -> Result<GameStatus, GameError> {
        if player1.side() == player2.side() {
            return Err(GameError::PlayersOnSameSide);
        }

        self.board = self.builder.build();
        self.undo_history.clear();
        self.redo_history.clear();
        self.turn = 0;
        self.status = GameStatus::Started;

        loop {
            let mover_index = (self.turn % 2) as usize;
            let player: &mut dyn Player = if mover_index == 0 { player1 } else { player2 };
            let side = player.side();

            let offered = self.offered_moves(side)?;
            let Some(chosen) = player.choose(&offered, &self.board) else {
                self.status = GameStatus::Stopped;
                return Ok(self.status);
            };
            if !offered.contains(&chosen) {
                self.status = GameStatus::Error;
                return Err(GameError::NoSuchMove);
            }
            debug!("turn {}: {side:?} chose {chosen:?}", self.turn);

            match chosen {
                GameMove::Walk { figure, sequence } => {
                    if self.walk(figure, sequence, side, mover_index)? {
                        return Ok(self.status);
                    }
                }
                GameMove::Undo => self.undo(),
                GameMove::Redo => self.redo(),
            }
        }
    }

    fn offered_moves(&self, side: Side) -> Result<Vec<GameMove>, GameError> {
        let walks = self.rules.get_moves(&self.board, side)?;
        let mut offered = Vec::new();
        for (figure, sequences) in walks {
            for sequence in sequences {
                offered.push(GameMove::Walk { figure, sequence });
            }
        }
        if !self.undo_history.is_empty() {
            offered.push(GameMove::Undo);
        }
        if !self.redo_history.is_empty() {
            offered.push(GameMove::Redo);
        }
        Ok(offered)
    }

    /// Applies a walk move. Returns `true` when the walk wins the game by
    /// leaving the opponent without a single legal move.
    fn walk(
        &mut self,
        figure: Figure,
        sequence: MoveSequence,
        side: Side,
        mover_index: usize,
    ) -> Result<bool, GameError> {
        self.undo_history.push(History {
            side,
            figure,
            sequence: sequence.clone(),
            board_before: self.board,
            turn: self.turn,
        });
        self.board = apply_sequence(figure, self.board, &sequence);
        // A fresh walk forks history; the old future is gone.
        self.redo_history.clear();
        self.turn += 1;

        let enemy_moves = self.rules.get_moves(&self.board, side.opposite())?;
        if enemy_moves.is_empty() {
            self.status = if mover_index == 0 {
                GameStatus::Player1Wins
            } else {
                GameStatus::Player2Wins
            };
            return Ok(true);
        }
        Ok(false)
    }

    fn undo(&mut self) {
        if let Some(entry) = self.undo_history.pop() {
            self.board = entry.board_before;
            self.turn -= 1;
            self.redo_history.push(entry);
        }
    }

    fn redo(&mut self) {
        if let Some(entry) = self.redo_history.pop() {
            self.board = apply_sequence(entry.figure, entry.board_before, &entry.sequence);
            self.turn += 1;
            self.undo_history.push(entry);
        }
    }
}
