pub mod client;

pub use client::AuditClient;
