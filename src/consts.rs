//! Shared defaults for the board engine.

// ── Reset confirmation ──────────────────────────────────────────

/// How long the "confirm clear" state stays armed before reverting, in milliseconds.
pub const DEFAULT_RESET_CONFIRM_MS: u64 = 3000;

// ── Session ─────────────────────────────────────────────────────

/// Bounded capacity of the session intent queue.
pub const DEFAULT_INTENT_QUEUE_CAPACITY: usize = 64;
