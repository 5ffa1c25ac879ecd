//! HTTP handlers for hello-api.
//!
//! Every handler is a pure function of its extractors; the service carries
//! no shared state across requests.

pub mod echo;
pub mod greet;
pub mod health;

pub use echo::echo;
pub use greet::greet;
pub use health::{health_check, ping};
