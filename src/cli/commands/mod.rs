mod command_result;
pub mod generate;
mod helper;
pub mod init;
pub mod page;

pub use command_result::*;
