//! `shield-escalation` — decide when a hazard is serious enough to wake
//! someone up, and make sure they are woken exactly once.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`engine`]   | `EscalationEngine::on_hazard_mutated`, `EscalationOutcome`  |
//! | [`tier`]     | `escalate_by_tier`, `TierDecision`, `TierOutcome`           |
//! | [`expiry`]   | `expire`, the periodic archival sweep                        |
//! | [`ledger`]   | `EscalationLedger` trait, `MemoryLedger`                    |
//! | [`notifier`] | `Alert`, `Notifier` trait, `LogNotifier`                    |
//!
//! The engine never persists hazards.  It reads the caller's snapshot and
//! reports the status changes the caller should write back.  The only
//! shared mutable state is the ledger, whose `try_claim` is the single
//! atomic check-and-insert that makes escalation at-most-once.

pub mod engine;
pub mod expiry;
pub mod ledger;
pub mod notifier;
pub mod tier;


pub use engine::{EscalationEngine, EscalationOutcome};
pub use expiry::expire;
pub use ledger::{EscalationLedger, MemoryLedger};
pub use notifier::{Alert, LogNotifier, Notifier};
pub use tier::{TierDecision, TierOutcome, responders_for};
