pub mod commands;
pub mod directory;
pub mod engine;
pub mod events;
pub mod http;
pub mod requests;
