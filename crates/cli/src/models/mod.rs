mod cli_args;
mod cli_error;
mod operation;

pub use cli_args::*;
pub use cli_error::*;
pub use operation::*;
