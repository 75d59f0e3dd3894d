//! Session orchestration — one user request in, one display payload out.
//!
//! The [`Session`] state machine interprets a requested action (generate,
//! show saved, delete) against the rule table, generator, and store, and
//! emits a [`DisplayPayload`] for whichever output surface is active. It
//! returns to [`SessionState::AwaitInput`] after each request; the input
//! surface moves it to [`SessionState::Done`] when the user quits.

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::draw::{DrawLine, draw_many};
use crate::rules::{LotteryType, MAX_LINES, MIN_LINES};
use crate::store::{DeleteOutcome, ResultStore, SavedBatch, StoreError};

/// Display format for the saved-on timestamp.
pub const DATE_FORMAT: &str = "%A %d %B %Y at %X %Z";

// ── Requests ────────────────────────────────────────────────────────

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Generate fresh lines, optionally persisting them.
    Generate { save: bool },
    /// Display the previously saved batch.
    ShowSaved,
    /// Delete the saved batch.
    Delete,
}

/// One complete user request, gathered by the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRequest {
    pub action: SessionAction,
    pub lottery_type: LotteryType,
    pub lines: usize,
}

// ── States & outputs ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for the next user request.
    #[default]
    AwaitInput,
    Generate,
    ShowSaved,
    Delete,
    /// Terminal: the input surface signalled termination.
    Done,
}

/// What the output surface shows after a request: the game, a
/// human-readable message, and zero or more result lines. The line index
/// is the vector index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPayload {
    pub lottery_type: LotteryType,
    pub message: String,
    pub results: Vec<DrawLine>,
}

impl DisplayPayload {
    fn message_only(lottery_type: LotteryType, message: impl Into<String>) -> Self {
        Self {
            lottery_type,
            message: message.into(),
            results: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// Recoverable: the input surface re-prompts with the message.
    #[error("{lines} lines is invalid. The valid range is {MIN_LINES}-{MAX_LINES}")]
    InvalidLineCount { lines: usize },

    /// Store I/O failure; reported to the user, the session continues.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ── Orchestrator ────────────────────────────────────────────────────

/// Interprets user requests against the generator and the store.
pub struct Session {
    store: ResultStore,
    state: SessionState,
}

impl Session {
    pub fn new(store: ResultStore) -> Self {
        Self {
            store,
            state: SessionState::AwaitInput,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The store this session operates on.
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Mark the session terminated (user cancelled or closed the surface).
    pub fn finish(&mut self) {
        self.state = SessionState::Done;
    }

    /// Handle one request, returning to `AwaitInput` afterwards.
    ///
    /// Errors are recoverable at the session level: validation failures
    /// re-prompt, store failures are surfaced as a message.
    pub fn handle(&mut self, request: &SessionRequest) -> Result<DisplayPayload, SessionError> {
        debug!(?request, "handling session request");
        let result = match request.action {
            SessionAction::Generate { save } => {
                self.state = SessionState::Generate;
                self.generate(request.lottery_type, request.lines, save)
            }
            SessionAction::ShowSaved => {
                self.state = SessionState::ShowSaved;
                self.show_saved(request.lottery_type)
            }
            SessionAction::Delete => {
                self.state = SessionState::Delete;
                self.delete(request.lottery_type)
            }
        };
        self.state = SessionState::AwaitInput;
        result
    }

    /// Generate `lines` fresh lines, persisting them unless asked not to.
    fn generate(
        &self,
        lottery_type: LotteryType,
        lines: usize,
        save: bool,
    ) -> Result<DisplayPayload, SessionError> {
        if !(MIN_LINES..=MAX_LINES).contains(&lines) {
            return Err(SessionError::InvalidLineCount { lines });
        }

        let rule = lottery_type.rule();
        let results = draw_many(&rule, lines);

        let message = if save {
            let batch = SavedBatch {
                created_at: Utc::now(),
                lottery_type,
                line_count: lines,
                lines: results.clone(),
            };
            self.store.save(&batch)?;
            format!("The numbers have been saved and {lines} lines were generated")
        } else {
            "These generated numbers have not been saved".to_string()
        };

        Ok(DisplayPayload {
            lottery_type,
            message,
            results,
        })
    }

    /// Load and re-display the saved batch, if there is one.
    fn show_saved(&self, lottery_type: LotteryType) -> Result<DisplayPayload, SessionError> {
        match self.store.load(lottery_type) {
            Ok(batch) => Ok(DisplayPayload {
                lottery_type,
                message: format!("Saved on {}", batch.created_at.format(DATE_FORMAT)),
                results: batch.lines,
            }),
            // A missing file is a user-facing message, not a failure
            Err(StoreError::NotFound { .. }) => Ok(DisplayPayload::message_only(
                lottery_type,
                format!(
                    "{lottery_type} file <{}> is missing",
                    self.store.path_for(lottery_type).display()
                ),
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// Delete the saved batch, reporting either outcome.
    fn delete(&self, lottery_type: LotteryType) -> Result<DisplayPayload, SessionError> {
        let path = self.store.path_for(lottery_type);
        let verdict = match self.store.delete(lottery_type)? {
            DeleteOutcome::Deleted => "deleted",
            DeleteOutcome::NotFound => "not found",
        };
        Ok(DisplayPayload::message_only(
            lottery_type,
            format!("File: <{}> was {verdict}", path.display()),
        ))
    }
}
