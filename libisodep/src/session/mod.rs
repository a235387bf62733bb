// libisodep/src/session/mod.rs

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::SessionBuilder;
pub use config::SessionConfig;
pub use handle::{Active, Idle, Session};
