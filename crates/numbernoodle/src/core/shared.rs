//! Thread-safe session for concurrent hosts

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::SessionConfig;
use crate::core::evaluator::Evaluator;
use crate::core::history::{History, HistoryEntry};
use crate::core::session::Evaluation;

/// A session shareable across threads
///
/// Evaluation runs outside the lock. Only the history append is
/// serialized, so entries appear in the order their appends happened.
#[derive(Debug, Default)]
pub struct SharedSession {
    evaluator: Evaluator,
    history: Mutex<History>,
}

impl SharedSession {
    /// Creates a shared session with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shared session from a configuration
    #[must_use]
    pub fn with_config(config: &SessionConfig) -> Self {
        Self {
            evaluator: config.evaluator(),
            history: Mutex::new(History::with_capacity(config.history_capacity)),
        }
    }

    // A panic while holding the lock cannot leave History half-updated.
    fn lock(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Evaluates `input` without touching history
    #[must_use]
    pub fn preview(&self, input: &str) -> Evaluation {
        Evaluation::run(&self.evaluator, input)
    }

    /// Evaluates `input` and records it on success
    pub fn submit(&self, input: &str) -> Evaluation {
        let evaluation = self.preview(input);
        if let Some(value) = evaluation.value() {
            self.lock().record(input, value);
        }
        evaluation
    }

    /// Snapshot of the history, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.lock().to_vec()
    }

    /// Number of history entries
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.lock().len()
    }

    /// Forgets every history entry
    pub fn clear_history(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shared_session_is_send_sync() {
        assert_send_sync::<SharedSession>();
    }

    #[test]
    fn test_submit_records_in_order() {
        let session = SharedSession::new();
        session.submit("1+1");
        session.submit("oops");
        session.submit("2*2");

        let history = session.history();
        assert_eq!(
            history,
            vec![HistoryEntry::new("1+1", 2.0), HistoryEntry::new("2*2", 4.0)]
        );
    }

    #[test]
    fn test_preview_does_not_record() {
        let session = SharedSession::new();
        assert!(session.preview("3 * 3").is_success());
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn test_concurrent_submits() {
        let session =
            SharedSession::with_config(&SessionConfig::default().with_history_capacity(1000));

        thread::scope(|s| {
            for worker in 0..4 {
                let session = &session;
                s.spawn(move || {
                    for i in 0..25 {
                        session.submit(&format!("{worker} * 100 + {i}"));
                    }
                });
            }
        });

        let history = session.history();
        assert_eq!(history.len(), 100);

        // Each worker's own entries keep their submission order
        for worker in 0..4_u32 {
            let mine: Vec<f64> = history
                .iter()
                .filter(|e| e.expression.starts_with(&format!("{worker} *")))
                .map(|e| e.result)
                .collect();
            let mut sorted = mine.clone();
            sorted.sort_by(f64::total_cmp);
            assert_eq!(mine, sorted);
            assert_eq!(mine.len(), 25);
        }
    }

    #[test]
    fn test_capacity_respected_under_contention() {
        let session =
            SharedSession::with_config(&SessionConfig::default().with_history_capacity(10));
        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..20 {
                        session.submit("1 + 1");
                    }
                });
            }
        });
        assert_eq!(session.history_len(), 10);
    }

    #[test]
    fn test_clear_history() {
        let session = SharedSession::new();
        session.submit("1");
        session.clear_history();
        assert!(session.history().is_empty());
    }
}
