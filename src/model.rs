//! Game activity records and the pure helpers that derive views from them.

/// Records plus formatting and selection helpers.
pub mod game;
