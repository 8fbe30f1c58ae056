//! Command implementations

pub mod apply;
pub mod init;
pub mod list;
pub mod select;
pub mod status;

pub use apply::run_apply;
pub use init::run_init;
pub use list::run_list;
pub use select::{run_clear, run_select};
pub use status::run_status;
