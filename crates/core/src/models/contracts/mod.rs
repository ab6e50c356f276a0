mod cw20;
mod cw721;
mod name_registry;

pub use cw20::*;
pub use cw721::*;
pub use name_registry::*;
