pub mod config;
pub mod controller;
pub mod cookies;
pub mod error;
pub mod report;
pub mod state;
