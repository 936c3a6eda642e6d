pub mod commands;
pub mod page;
