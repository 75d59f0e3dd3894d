//! Core logic for the `genlottery` workspace.
//!
//! This crate owns everything that is not a terminal surface:
//!
//! - **[`rules`]** — the static table mapping each supported game to its
//!   drawing rule (primary max/quantity plus an optional secondary draw),
//!   and the shared line-count limits.
//!
//! - **[`draw`]** — sampling without replacement from a rule's ranges,
//!   producing sorted, zero-padded [`DrawLine`]s.
//!
//! - **[`store`]** — one whole-file record per game type under the save
//!   directory: [`ResultStore`] persists, loads, and deletes
//!   [`SavedBatch`]es.
//!
//! - **[`session`]** — the [`Session`] orchestrator that turns one user
//!   request (generate / show saved / delete) into a [`DisplayPayload`]
//!   for whichever output surface is active (plain text or the form).

pub mod draw;
pub mod rules;
pub mod session;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use draw::{DrawLine, draw, draw_many, draw_with};
pub use rules::{
    DEFAULT_LINES, ExtraRule, LotteryRule, LotteryType, MAX_LINES, MIN_LINES, RULE_START,
};
pub use session::{DisplayPayload, Session, SessionAction, SessionError, SessionRequest, SessionState};
pub use store::{DeleteOutcome, ResultStore, SavedBatch, StoreError};
