pub mod commands;
pub mod helper;
pub mod utils;
