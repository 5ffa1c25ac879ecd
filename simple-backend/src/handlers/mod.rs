//! HTTP handlers for simple-backend.

pub mod add;
pub mod health;
pub mod hello;
pub mod root;

pub use add::add;
pub use health::health_check;
pub use hello::hello;
pub use root::root;
