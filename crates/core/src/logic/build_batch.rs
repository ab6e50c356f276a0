use crate::prelude::*;

/// Builds one transfer per recipient, in order, after checking that
/// `balance` covers `amount * recipients.len()`.
///
/// Repeated recipients are kept as separate transfers.
pub fn build_batch(
    sender: &Address,
    recipients: &[Address],
    token: &Token,
    amount: BaseAmount,
    balance: BaseAmount,
) -> Result<BatchRequest> {
    if amount.is_zero() {
        return Err(InvalidInput::AmountMustBePositive.into());
    }
    let required = amount
        .checked_mul(recipients.len() as u128)
        .ok_or(BuildBatchError::TotalOverflow {
            recipients: recipients.len(),
        })?;
    if balance < required {
        return Err(BuildBatchError::InsufficientFunds {
            required,
            available: balance,
        }
        .into());
    }

    let instructions = recipients
        .iter()
        .map(|recipient| {
            TransferInstruction::builder()
                .sender(sender.clone())
                .recipient(recipient.clone())
                .token(token.clone())
                .amount(amount)
                .build()
        })
        .collect::<Vec<_>>();
    debug!(
        "Built batch of {} transfers of {amount} {token}",
        instructions.len()
    );

    Ok(BatchRequest::new(
        sender.clone(),
        token.clone(),
        amount,
        instructions,
    ))
}

/// Current balance of `owner` in `token`.
pub async fn query_token_balance(
    session: &WalletSession,
    owner: &Address,
    token: &Token,
) -> Result<BaseAmount> {
    let balance = match token {
        Token::Native { denom } => session.querier().balance(owner, denom).await?,
        Token::Cw20 { contract } => {
            let response: Cw20BalanceResponse = query_smart(
                session.querier().as_ref(),
                contract.as_str(),
                &Cw20QueryMsg::Balance {
                    address: owner.clone(),
                },
            )
            .await?;
            response.balance
        }
    };
    debug!("Balance of {owner} in {token}: {balance}");
    Ok(balance)
}

/// Number of decimals of `token`: from the chain config for native
/// denominations, from `token_info` for CW20 contracts.
pub async fn query_token_decimals(session: &WalletSession, token: &Token) -> Result<u8> {
    match token {
        Token::Native { denom } => session.config().decimals_of(denom).ok_or_else(|| {
            InvalidInput::TokenFieldInvalid {
                field: "decimals",
                reason: format!("denom `{denom}` is not in the chain config, pass decimals explicitly"),
            }
            .into()
        }),
        Token::Cw20 { contract } => {
            let info: Cw20TokenInfoResponse = query_smart(
                session.querier().as_ref(),
                contract.as_str(),
                &Cw20QueryMsg::TokenInfo {},
            )
            .await?;
            Ok(info.decimals)
        }
    }
}
