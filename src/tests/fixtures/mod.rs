pub mod commands;
pub mod employees;
pub mod events;
