pub mod activity;
pub mod command;
pub mod error;
