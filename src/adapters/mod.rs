//! Adapters layer - connects the application to the outside world.

pub mod http;
