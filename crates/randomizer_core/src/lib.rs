//! Core data types for the randomizer.
//!
//! This crate provides the types shared by the parser, the handlers and the
//! collaborators they call:
//!
//! - [`Context`] - cancellation and deadline signal carried by every call
//! - [`Operation`] - the closed set of things a command can do
//! - [`Request`] - one parsed command invocation
//! - [`Outcome`] - what a handler produced, ready for rendering

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod operation;
mod outcome;
mod request;

pub use context::Context;
pub use operation::Operation;
pub use outcome::Outcome;
pub use request::Request;
