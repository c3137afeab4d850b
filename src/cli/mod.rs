pub mod demo;
pub mod handle;
pub mod info;
pub mod output;
pub mod runtime;
pub mod stages;

pub use demo::cmd_demo;
pub use handle::{cmd_handle, HandleArgs};
pub use info::cmd_info;
pub use output::OutputFormat;
pub use stages::cmd_stages;
