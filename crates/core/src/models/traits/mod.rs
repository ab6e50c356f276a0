mod chain_querier;
mod to_debug_string;
mod wallet;

pub use chain_querier::*;
pub use to_debug_string::*;
pub use wallet::*;
