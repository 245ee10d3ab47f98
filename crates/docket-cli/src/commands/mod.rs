//! Command implementations.

pub mod info;
pub mod list;
pub mod process;

pub use self::info::execute_info;
pub use self::list::execute_list;
pub use self::process::execute_process;
