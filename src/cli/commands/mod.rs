mod command_result;
pub mod extract;
pub mod helper;
pub mod init;
pub mod print;
pub mod rewrite;

pub use command_result::*;
