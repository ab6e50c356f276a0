mod bridge_wallet;
mod rest_querier;

pub use bridge_wallet::*;
pub use rest_querier::*;
