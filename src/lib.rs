pub mod api;
pub mod assignment;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod problem;
pub mod scorer;
// cmd and reports are binary modules (see main.rs).
