//! NegaMax game-tree search with alpha-beta pruning and bounded sibling
//! parallelism.
//!
//! Sibling branches each receive their own board copy, so the only shared
//! mutable state inside one node is the (best move, alpha) slot behind a
//! mutex. Pruning raises a per-node cancellation token outside that lock;
//! in-flight siblings poll it and abandon their subtrees cooperatively.

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;

use tracing::debug;

use crate::board::figure::Figure;
use crate::board::side::Side;
use crate::board::square_board::SquareBoard;
use crate::bot::bot_move::BotMove;
use crate::bot::cancel::CancelToken;
use crate::bot::scoring::BoardScoring;
use crate::errors::GameError;
use crate::rules::english_draughts::Rules;
use crate::rules::move_chain::apply_sequence;
use crate::rules::move_sequence::MoveSequence;

/// Leaf sentinel when the bot's own side has no figures left.
pub const LOSS_SCORE: i32 = -1000;
/// Leaf sentinel when the opponent has no figures left.
pub const WIN_SCORE: i32 = 1000;

const STACK_CHECK_INTERVAL: u32 = 8;
// Spawned workers get the default 2 MiB stack, so the soft limit must sit
// well below that.
const STACK_SOFT_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy)]
pub struct BotOptions {
    pub max_depth: u32,
    /// Upper bound on concurrently running sibling workers across the whole
    /// tree; 0 disables parallelism entirely.
    pub degree_of_parallelism: usize,
    pub allow_pruning: bool,
    pub is_debug: bool,
}

impl Default for BotOptions {
    fn default() -> BotOptions {
        BotOptions {
            max_depth: 10,
            degree_of_parallelism: thread::available_parallelism().map_or(1, |n| n.get()),
            allow_pruning: false,
            is_debug: false,
        }
    }
}

pub struct NegaMaxBot<R, S> {
    rules: R,
    scoring: S,
    running_workers: AtomicUsize,
    total_moves_estimated: AtomicUsize,
}

/// Immutable per-search context threaded through the recursion.
struct SearchCtx {
    bot_side: Side,
    player_side: Side,
    options: BotOptions,
    cancellation: CancelToken,
}

/// One (figure, sequence) pair to explore from a node.
struct Candidate {
    figure: Figure,
    sequence_index: usize,
    sequence: MoveSequence,
    board: SquareBoard,
}

/// Shared accumulator for one node's sibling branches.
struct NodeSlot {
    best: BotMove,
    alpha: i32,
    error: Option<GameError>,
}

impl<R: Rules + Sync, S: BoardScoring + Sync> NegaMaxBot<R, S> {
    pub fn new(rules: R, scoring: S) -> NegaMaxBot<R, S> {
        NegaMaxBot {
            rules,
            scoring,
            running_workers: AtomicUsize::new(0),
            total_moves_estimated: AtomicUsize::new(0),
        }
    }

    /// Cumulative count of leaf evaluations across all searches run on this
    /// bot. Callers interested in one search measure the delta around it.
    pub fn total_moves_estimated(&self) -> usize {
        self.total_moves_estimated.load(Ordering::Relaxed)
    }

    /// Searches for the best move from `bot_side`'s perspective.
    ///
    /// Cancellation (including a deadline on the token) is not an error: the
    /// search returns the best answer found so far.
    pub fn find_best_move(
        &self,
        board: SquareBoard,
        bot_side: Side,
        cancellation: &CancelToken,
        options: BotOptions,
    ) -> Result<BotMove, GameError> {
        let ctx = SearchCtx {
            bot_side,
            player_side: bot_side.opposite(),
            options,
            cancellation: cancellation.clone(),
        };
        self.negamax(
            board,
            options.max_depth,
            i32::MIN + 1,
            i32::MAX,
            bot_side,
            &ctx,
            &CancelToken::new(),
        )
    }

    fn negamax(
        &self,
        board: SquareBoard,
        depth: u32,
        alpha: i32,
        beta: i32,
        side: Side,
        ctx: &SearchCtx,
        branch: &CancelToken,
    ) -> Result<BotMove, GameError> {
        if ctx.cancellation.is_cancelled() || !self.can_search_deeper(&board, depth, ctx) {
            return Ok(BotMove::leaf(self.estimate(&board, ctx)));
        }

        let candidates = self.candidates(&board, side)?;
        if depth == ctx.options.max_depth && candidates.len() == 1 {
            // Root fast path: a forced move needs no search at all.
            let only = &candidates[0];
            return Ok(BotMove::new(only.figure, only.sequence_index, 0));
        }
        if candidates.is_empty() {
            return Ok(BotMove::leaf(self.estimate(&board, ctx)));
        }

        let slot = Mutex::new(NodeSlot {
            best: BotMove::leaf(i32::MIN),
            alpha,
            error: None,
        });
        let prune = CancelToken::new();

        thread::scope(|scope| {
            for candidate in &candidates {
                if prune.is_cancelled() {
                    break;
                }
                if branch.is_cancelled() {
                    prune.cancel();
                    break;
                }

                let parallel = candidates.len() > 1
                    && depth < ctx.options.max_depth
                    && self.try_claim_worker(ctx.options.degree_of_parallelism);
                if parallel {
                    let slot = &slot;
                    let prune = &prune;
                    scope.spawn(move || {
                        self.explore(candidate, depth, beta, side, ctx, slot, prune);
                        self.running_workers.fetch_sub(1, Ordering::SeqCst);
                    });
                } else {
                    self.explore(candidate, depth, beta, side, ctx, &slot, &prune);
                }
            }
        });

        let slot = slot.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(error) = slot.error {
            return Err(error);
        }
        if slot.best.is_leaf() {
            // The branch token stopped this node before any sibling finished;
            // fall back to a static estimate so the parent never negates the
            // initial sentinel score.
            return Ok(BotMove::leaf(self.estimate(&board, ctx)));
        }
        Ok(slot.best)
    }

    /// Evaluates one candidate branch and folds the result into the node's
    /// shared slot. Runs either inline or on a spawned worker.
    fn explore(
        &self,
        candidate: &Candidate,
        depth: u32,
        beta: i32,
        side: Side,
        ctx: &SearchCtx,
        slot: &Mutex<NodeSlot>,
        prune: &CancelToken,
    ) {
        let alpha_now = {
            let Ok(slot) = slot.lock() else { return };
            if slot.error.is_some() {
                return;
            }
            slot.alpha
        };
        if ctx.options.is_debug {
            self.log_branch("before", candidate, side, depth, alpha_now, beta, alpha_now, ctx);
        }

        let next_board = apply_sequence(candidate.figure, candidate.board, &candidate.sequence);
        match self.negamax(next_board, depth - 1, -beta, -alpha_now, side.opposite(), ctx, prune) {
            Ok(reply) => {
                let score = -reply.score;
                let mut should_prune = false;
                let mut alpha_after = alpha_now;
                if let Ok(mut slot) = slot.lock() {
                    if score > slot.best.score {
                        slot.best = BotMove::new(candidate.figure, candidate.sequence_index, score);
                    }
                    slot.alpha = slot.alpha.max(slot.best.score);
                    alpha_after = slot.alpha;
                    should_prune = ctx.options.allow_pruning && slot.alpha >= beta;
                }
                if ctx.options.is_debug {
                    self.log_branch("after", candidate, side, depth, alpha_after, beta, score, ctx);
                }
                // Raised outside the lock so cancellation never holds it.
                if should_prune {
                    prune.cancel();
                }
            }
            Err(error) => {
                if let Ok(mut slot) = slot.lock() {
                    slot.error.get_or_insert(error);
                }
                prune.cancel();
            }
        }
    }

    fn candidates(&self, board: &SquareBoard, side: Side) -> Result<Vec<Candidate>, GameError> {
        let moves = self.rules.get_moves(board, side)?;
        let mut result = Vec::with_capacity(moves.len());
        for (figure, sequences) in moves {
            for (sequence_index, sequence) in sequences.into_iter().enumerate() {
                result.push(Candidate {
                    figure,
                    sequence_index,
                    sequence,
                    board: *board,
                });
            }
        }
        Ok(result)
    }

    fn can_search_deeper(&self, board: &SquareBoard, depth: u32, ctx: &SearchCtx) -> bool {
        depth > 0
            && !stack_running_low(ctx.options.max_depth - depth)
            && !board.no_figures(ctx.bot_side)
            && !board.no_figures(ctx.player_side)
    }

    /// Leaf evaluation from the bot's own perspective. Win/loss by material
    /// extinction is detected right here instead of via a separate
    /// game-over check, which would re-run the same move enumeration.
    fn estimate(&self, board: &SquareBoard, ctx: &SearchCtx) -> i32 {
        self.total_moves_estimated.fetch_add(1, Ordering::Relaxed);
        if board.no_figures(ctx.bot_side) {
            return LOSS_SCORE;
        }
        if board.no_figures(ctx.player_side) {
            return WIN_SCORE;
        }
        self.scoring.evaluate(board, ctx.bot_side)
    }

    /// Claims a parallel worker slot if the global bound allows one more.
    fn try_claim_worker(&self, limit: usize) -> bool {
        self.running_workers
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |running| {
                (running < limit).then_some(running + 1)
            })
            .is_ok()
    }

    #[allow(clippy::too_many_arguments)]
    fn log_branch(
        &self,
        phase: &str,
        candidate: &Candidate,
        side: Side,
        depth: u32,
        alpha: i32,
        beta: i32,
        score: i32,
        ctx: &SearchCtx,
    ) {
        let indent = "\t".repeat((ctx.options.max_depth - depth) as usize);
        debug!(
            "{indent}{phase}:: {side:?}/{}#{}; bounds: {alpha}/{beta}; score: {score}",
            candidate.figure, candidate.sequence_index
        );
    }
}

thread_local! {
    static STACK_ANCHOR: Cell<usize> = const { Cell::new(0) };
}

/// Heuristic stack-exhaustion guard, polled every few recursion levels.
///
/// The first check in a thread records an anchor address near the top of its
/// stack; later checks compare the current frame against it and report
/// trouble once the estimated usage crosses a soft limit. A node that trips
/// the guard is treated as a leaf instead of crashing.
fn stack_running_low(level: u32) -> bool {
    if level % STACK_CHECK_INTERVAL != 0 {
        return false;
    }
    let here = &level as *const u32 as usize;
    STACK_ANCHOR.with(|anchor| {
        if anchor.get() == 0 {
            anchor.set(here);
            return false;
        }
        anchor.get().abs_diff(here) > STACK_SOFT_LIMIT_BYTES
    })
}
