//! Batch Upload Session
//!
//! Global single-slot session for staging products before a bulk commit.
//! The session is an explicit state machine behind a mutex rather than a
//! shared boolean, so every transition is checked in one place.
//!
//! State transitions:
//! - Idle   --start-->  Active (category must exist, checked by the caller)
//! - Active --append--> Active (item staged, catalog untouched)
//! - Active --finish--> Idle on success; stays Active with pending intact
//!   when the commit closure fails, so nothing is half-committed or lost

use parking_lot::Mutex;
use shared::models::{BatchStatus, ProductInput};
use shared::{AppError, AppResult, ErrorCode};

#[derive(Debug)]
enum BatchState {
    Idle,
    Active {
        category: String,
        pending: Vec<ProductInput>,
    },
}

#[derive(Debug)]
pub struct BatchSession {
    state: Mutex<BatchState>,
}

impl Default for BatchSession {
    fn default() -> Self {
        Self {
            state: Mutex::new(BatchState::Idle),
        }
    }
}

impl BatchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for the given category. Fails if one is already open.
    pub fn start(&self, category: String) -> AppResult<BatchStatus> {
        let mut state = self.state.lock();
        if let BatchState::Active { category, .. } = &*state {
            return Err(AppError::new(ErrorCode::BatchAlreadyActive)
                .with_detail("category", category.clone()));
        }
        *state = BatchState::Active {
            category,
            pending: Vec::new(),
        };
        Ok(status_of(&state))
    }

    /// Stage an item into the open session. The item is built by `build`
    /// against the session's category while the session lock is held, so
    /// the category it is checked against cannot change underneath it and
    /// no other append can interleave.
    pub fn append<F>(&self, build: F) -> AppResult<BatchStatus>
    where
        F: FnOnce(&str) -> AppResult<ProductInput>,
    {
        let mut state = self.state.lock();
        match &mut *state {
            BatchState::Idle => return Err(AppError::new(ErrorCode::BatchNotActive)),
            BatchState::Active { category, pending } => {
                let item = build(category)?;
                pending.push(item);
            }
        }
        Ok(status_of(&state))
    }

    pub fn status(&self) -> BatchStatus {
        status_of(&self.state.lock())
    }

    /// Commit the pending items through `commit` and return how many were
    /// written. On a closure error the session stays Active with its items,
    /// so the caller can retry or abandon explicitly; there is no partial
    /// commit from this layer's point of view.
    ///
    /// Finishing while Idle is a no-op that reports zero committed items.
    pub fn finish<F>(&self, commit: F) -> AppResult<usize>
    where
        F: FnOnce(&str, &[ProductInput]) -> AppResult<usize>,
    {
        let mut state = self.state.lock();
        let committed = match &*state {
            BatchState::Idle => return Ok(0),
            BatchState::Active { category, pending } => commit(category, pending)?,
        };
        *state = BatchState::Idle;
        Ok(committed)
    }
}

fn status_of(state: &BatchState) -> BatchStatus {
    match state {
        BatchState::Idle => BatchStatus {
            active: false,
            category: None,
            pending: Vec::new(),
        },
        BatchState::Active { category, pending } => BatchStatus {
            active: true,
            category: Some(category.clone()),
            pending: pending.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> ProductInput {
        ProductInput {
            id: format!("{}#0", name),
            name: name.to_string(),
            price: 500,
            category: "tools".to_string(),
            image: "/blobs/default".to_string(),
        }
    }

    #[test]
    fn test_start_twice_conflicts() {
        let session = BatchSession::new();
        session.start("tools".to_string()).unwrap();

        let err = session.start("garden".to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::BatchAlreadyActive);
        // The original session is untouched.
        assert_eq!(session.status().category.as_deref(), Some("tools"));
    }

    #[test]
    fn test_append_while_idle() {
        let session = BatchSession::new();
        let err = session.append(|_| Ok(item("Widget"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::BatchNotActive);
    }

    #[test]
    fn test_append_stages_without_commit() {
        let session = BatchSession::new();
        session.start("tools".to_string()).unwrap();

        let status = session.append(|_| Ok(item("Widget"))).unwrap();
        assert!(status.active);
        assert_eq!(status.pending.len(), 1);
        assert_eq!(status.pending[0].name, "Widget");
    }

    #[test]
    fn test_append_build_failure_stages_nothing() {
        let session = BatchSession::new();
        session.start("tools".to_string()).unwrap();

        let err = session
            .append(|category| {
                assert_eq!(category, "tools");
                Err(AppError::new(ErrorCode::PriceBelowFloor))
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PriceBelowFloor);
        assert!(session.status().pending.is_empty());
    }

    #[test]
    fn test_finish_while_idle_is_noop() {
        let session = BatchSession::new();
        let committed = session
            .finish(|_, _| panic!("commit must not run while idle"))
            .unwrap();
        assert_eq!(committed, 0);
        assert!(!session.status().active);
    }

    #[test]
    fn test_finish_commits_and_resets() {
        let session = BatchSession::new();
        session.start("tools".to_string()).unwrap();
        session.append(|_| Ok(item("Widget"))).unwrap();
        session.append(|_| Ok(item("Gadget"))).unwrap();

        let committed = session
            .finish(|category, pending| {
                assert_eq!(category, "tools");
                Ok(pending.len())
            })
            .unwrap();
        assert_eq!(committed, 2);

        let status = session.status();
        assert!(!status.active);
        assert!(status.pending.is_empty());
    }

    #[test]
    fn test_finish_failure_keeps_session() {
        let session = BatchSession::new();
        session.start("tools".to_string()).unwrap();
        session.append(|_| Ok(item("Widget"))).unwrap();

        let err = session
            .finish(|_, _| Err(AppError::new(ErrorCode::CategoryNotFound)))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);

        // Still active, items retained for a retry.
        let status = session.status();
        assert!(status.active);
        assert_eq!(status.pending.len(), 1);
    }
}
