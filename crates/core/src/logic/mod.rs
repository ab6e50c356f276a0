mod airdrop;
mod build_batch;
mod name_service;
mod read_spreadsheet;
mod resolve_recipients;
mod submit_batch;
mod token_factory;
mod wallet_session;

pub use airdrop::*;
pub use build_batch::*;
pub use name_service::*;
pub use read_spreadsheet::*;
pub use resolve_recipients::*;
pub use submit_batch::*;
pub use token_factory::*;
