use crate::prelude::*;

/// The ordered transfers of one airdrop submission.
///
/// Built once by [`build_batch`] and never modified afterwards; it is always
/// broadcast as a single transaction.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BatchRequest {
    #[getset(get = "pub")]
    sender: Address,

    #[getset(get = "pub")]
    token: Token,

    #[getset(get = "pub")]
    amount_per_recipient: BaseAmount,

    #[getset(get = "pub")]
    instructions: Vec<TransferInstruction>,
}

impl BatchRequest {
    pub(crate) fn new(
        sender: Address,
        token: Token,
        amount_per_recipient: BaseAmount,
        instructions: Vec<TransferInstruction>,
    ) -> Self {
        Self {
            sender,
            token,
            amount_per_recipient,
            instructions,
        }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn to_wire_messages(&self) -> Result<Vec<WireMessage>> {
        self.instructions
            .iter()
            .map(TransferInstruction::to_wire_message)
            .collect()
    }
}
