pub mod health;
pub mod scan;
