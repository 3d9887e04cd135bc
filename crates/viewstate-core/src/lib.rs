pub mod config;
pub mod consts;
pub mod error;
pub mod overlay;
pub mod presentation;
pub mod viewport;
