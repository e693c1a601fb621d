#![forbid(unsafe_code)]

//! Ring topology for island-model optimization runs.
//!
//! Each vertex stands for one worker (island). Vertices are appended one at a time and kept
//! connected as a single cycle in insertion order, with one uniform weight on every edge.
//! The state is just `(num_vertices, weight)`, so checkpoints are tiny and exact.

pub mod config;
pub mod error;
pub mod ring;

pub use config::RingConfig;
pub use error::{Error, Result};
pub use ring::{EdgePair, MAX_VERTICES, NAME, PushBackDelta, RingTopology};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
