//! gimmeanuuid - client for the gimme-an-uuid HTTP service
//!
//! Fetches version 1-5 UUIDs as plain text from a remote service. The
//! [`client`] module is the library proper; [`config`], [`logging`] and
//! [`cli`] back the `gimmeanuuid` binary.

pub mod cli;
pub mod client;
pub mod config;
pub mod logging;

pub use client::{ClientError, DceDomain, HttpTransport, UuidClient, UuidGenerator};
