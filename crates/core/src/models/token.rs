use crate::prelude::*;

/// The asset being distributed: a native bank denomination or a CW20 contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Token {
    #[display("{denom}")]
    Native { denom: String },

    #[display("cw20:{contract}")]
    Cw20 { contract: Address },
}

impl Token {
    pub fn native(denom: impl Into<String>) -> Result<Self, InvalidInput> {
        let denom = denom.into().trim().to_owned();
        if denom.is_empty() {
            return Err(InvalidInput::TokenFieldInvalid {
                field: "denom",
                reason: "must not be empty".to_owned(),
            });
        }
        Ok(Self::Native { denom })
    }

    pub fn cw20(contract: Address) -> Self {
        Self::Cw20 { contract }
    }
}
