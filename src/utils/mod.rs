pub mod command;
pub mod parsing;
