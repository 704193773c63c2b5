//! Where game activity comes from.

/// Steam Web API client.
pub mod steam;
