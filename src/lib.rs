//! State engine for the learning-design board.
//!
//! A palette of fixed concept cards is dragged onto a grid whose columns are
//! created by dropping a card on the "Learning Approach" header row and whose
//! remaining rows collect cards per column. This crate owns that state model
//! and nothing else: the presentation layer renders from [`snapshot::Snapshot`]
//! values and feeds user intents back in.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Synchronous, testable [`engine::EngineCore`] and its `Action`s |
//! | [`session`] | Tokio event loop that serializes intents and owns the reset timer |
//! | [`board`] | Columns and their per-category card cells |
//! | [`card`] | Card vocabulary and placed card instances |
//! | [`row`] | Row and category vocabulary |
//! | [`drag`] | Drag payloads, sources, and drop zones |
//! | [`palette`] | Shuffled palette of reusable card templates |
//! | [`reset`] | Arm/commit state for the destructive board wipe |
//! | [`timer`] | Cancelable handle for the pending disarm |
//! | [`snapshot`] | Read-only state published after every transition |
//! | [`config`] | Environment-driven settings |
//! | [`consts`] | Shared defaults |

pub mod board;
pub mod card;
pub mod config;
pub mod consts;
pub mod drag;
pub mod engine;
pub mod palette;
pub mod reset;
pub mod row;
pub mod session;
pub mod snapshot;
pub mod timer;
