pub mod check;
mod command_result;
pub mod helper;
pub mod init;
pub mod merge;
pub mod release;
pub mod stats;
pub mod translate;

pub use command_result::*;
