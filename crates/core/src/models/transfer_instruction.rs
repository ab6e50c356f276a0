use crate::prelude::*;

/// One transfer of `amount` of `token` from `sender` to `recipient`.
#[derive(Debug, Clone, Builder, Getters, PartialEq, Eq, Hash, derive_more::Display)]
#[display("Transfer {{ from: {sender}, to: {recipient}, amount: {amount}, token: {token} }}")]
pub struct TransferInstruction {
    #[getset(get = "pub")]
    sender: Address,

    #[getset(get = "pub")]
    recipient: Address,

    #[getset(get = "pub")]
    token: Token,

    #[getset(get = "pub")]
    amount: BaseAmount,
}

impl TransferInstruction {
    /// The ledger message carrying this transfer: a bank send for native
    /// denominations, a CW20 `transfer` execution otherwise.
    pub fn to_wire_message(&self) -> Result<WireMessage> {
        match &self.token {
            Token::Native { denom } => Ok(WireMessage::Send(MsgSend {
                from_address: self.sender.clone(),
                to_address: self.recipient.clone(),
                amount: vec![Coin::new(self.amount, denom.clone())],
            })),
            Token::Cw20 { contract } => WireMessage::execute(
                self.sender.clone(),
                contract.as_str(),
                &Cw20ExecuteMsg::Transfer {
                    recipient: self.recipient.clone(),
                    amount: self.amount,
                },
                Vec::new(),
            ),
        }
    }
}
