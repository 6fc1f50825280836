//! # verity-engine
//!
//! The Verification & Audit Engine for Verity.
//!
//! The pure decision functions live in [`aggregate`], [`policy`],
//! [`recommend`] and [`report`]. [`JournalService`] owns the journal state
//! and applies commands to it: each applied mutation appends its audit entry
//! and saves the document through a [`store::KeyValueStore`] before the
//! command returns. [`SharedJournal`] wraps a service for use from
//! concurrent tasks.
//!
//! Commands never fail. A reference to an unknown submission or analysis
//! is reported as [`Outcome::NotFound`] and leaves the state untouched.
//! Persistence failures are logged and the in-memory state stays
//! authoritative.

pub mod aggregate;
pub mod commands;
pub mod deadline;
pub mod error;
pub mod export;
pub mod ledger;
pub mod outcome;
pub mod policy;
pub mod recommend;
pub mod report;
pub mod service;
pub mod shared;
pub mod store;
pub mod updates;

mod test_support;

pub use error::StoreError;
pub use outcome::Outcome;
pub use service::JournalService;
pub use shared::SharedJournal;
