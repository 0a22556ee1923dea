//! Off-thread move selection.
//!
//! `spawn_search` runs an engine on a worker thread against a snapshot of the
//! position and hands the result back over a one-shot channel, so the caller
//! can keep servicing input while the engine thinks. Cancelling only discards
//! the result: the fixed-depth search is short and runs to completion on the
//! snapshot, which the caller's game never sees.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;

pub struct SearchHandle {
    receiver: Receiver<ChessResult<EngineOutput>>,
    cancelled: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

/// Start `engine` on a worker thread for a copy of `game_state`.
pub fn spawn_search<E>(engine: Arc<Mutex<E>>, game_state: &GameState) -> SearchHandle
where
    E: Engine + ?Sized + 'static,
{
    let (sender, receiver) = mpsc::channel();
    let cancelled = Arc::new(AtomicBool::new(false));
    let worker_cancelled = Arc::clone(&cancelled);
    let snapshot = game_state.clone();

    let worker = thread::spawn(move || {
        let result = match engine.lock() {
            Ok(mut engine) => engine.choose_move(&snapshot),
            Err(_) => Err(ChessError::SearchWorker(
                "engine lock poisoned by an earlier panic".to_owned(),
            )),
        };
        if worker_cancelled.load(Ordering::Acquire) {
            trace!("search finished after cancellation; result dropped");
            return;
        }
        // The receiver may already be gone if the handle was dropped.
        let _ = sender.send(result);
    });

    SearchHandle {
        receiver,
        cancelled,
        worker: Some(worker),
    }
}

impl SearchHandle {
    /// Non-blocking poll. `None` while the worker is still thinking.
    pub fn try_result(&mut self) -> Option<ChessResult<EngineOutput>> {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.join_worker();
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(self.worker_failure())),
        }
    }

    /// Block until the worker delivers its result.
    pub fn wait(mut self) -> ChessResult<EngineOutput> {
        match self.receiver.recv() {
            Ok(result) => {
                self.join_worker();
                result
            }
            Err(_) => Err(self.worker_failure()),
        }
    }

    /// Abandon the search. The worker finishes in the background and its
    /// result is discarded.
    pub fn cancel(self) {
        self.cancelled.store(true, Ordering::Release);
        debug!("background search cancelled");
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

    fn worker_failure(&mut self) -> ChessError {
        let panicked = self
            .worker
            .take()
            .is_some_and(|worker| worker.join().is_err());
        if panicked {
            ChessError::SearchWorker("search thread panicked".to_owned())
        } else {
            ChessError::SearchWorker("search thread exited without a result".to_owned())
        }
    }
}
