//! Request handlers.

pub mod health;
pub mod pages;
pub mod scenario;
pub mod videos;

pub use health::*;
pub use pages::*;
pub use scenario::*;
pub use videos::*;
