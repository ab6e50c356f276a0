mod address;
mod airdrop_parameters;
mod amount;
mod batch_request;
mod chain_config;
mod contracts;
mod error;
mod fee;
mod recipient;
mod submission;
mod token;
mod token_parameters;
mod traits;
mod transfer_instruction;
mod wallet_session;
mod wire_message;

pub use address::*;
pub use airdrop_parameters::*;
pub use amount::*;
pub use batch_request::*;
pub use chain_config::*;
pub use contracts::*;
pub use error::*;
pub use fee::*;
pub use recipient::*;
pub use submission::*;
pub use token::*;
pub use token_parameters::*;
pub use traits::*;
pub use transfer_instruction::*;
pub use wallet_session::*;
pub use wire_message::*;
