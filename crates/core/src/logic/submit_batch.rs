use crate::prelude::*;

/// Picks the fee for `messages`, simulating first when the fee is computed
/// locally.
async fn select_fee(
    session: &WalletSession,
    messages: &[WireMessage],
    strategy: FeeStrategy,
    memo: &str,
) -> Result<Fee> {
    match strategy {
        FeeStrategy::Auto => Ok(Fee::Auto),
        FeeStrategy::Fixed => {
            let gas = session
                .wallet()
                .simulate(session.account(), messages, memo)
                .await?;
            let config = session.config();
            let fee = Fee::fixed(gas, config.fixed_gas_price(), config.fee_denom()?)?;
            debug!("Simulated {gas} gas, fee {fee:?}");
            Ok(fee)
        }
    }
}

/// Signs and broadcasts `messages` as one transaction from the session
/// account. A non zero ledger code is reported in the result, not retried.
pub async fn broadcast_messages(
    session: &WalletSession,
    messages: Vec<WireMessage>,
    strategy: FeeStrategy,
    memo: &str,
) -> Result<SubmissionResult> {
    let fee = select_fee(session, &messages, strategy, memo).await?;
    info!(
        "📡 Broadcasting {} message(s) from {}",
        messages.len(),
        session.account()
    );
    let response = session
        .wallet()
        .sign_and_broadcast(session.account(), &messages, &fee, memo)
        .await?;
    let result = SubmissionResult::from(&response);
    if result.succeeded() {
        info!("✅ {result}");
    } else {
        warn!("❌ {result}");
    }
    Ok(result)
}

/// Submits every transfer of `batch` in a single transaction.
pub async fn submit_batch(
    session: &WalletSession,
    batch: BatchRequest,
    strategy: FeeStrategy,
    memo: &str,
) -> Result<SubmissionResult> {
    if batch.is_empty() {
        return Err(SubmitError::EmptyBatch.into());
    }
    let messages = batch.to_wire_messages()?;
    broadcast_messages(session, messages, strategy, memo).await
}
