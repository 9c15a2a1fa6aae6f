//! Playlist sessions for the command-line front-end
//!
//! A session loads the playlist file, applies one command and writes the
//! result back.

pub mod config;
mod runner;

pub use config::SessionConfig;
pub use runner::{Command, Outcome, Session};
