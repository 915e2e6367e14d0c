mod memory_dbg_helper;
mod wide_string;

pub use memory_dbg_helper::*;
pub use wide_string::*;
