pub mod handlers;
pub mod persistence;
