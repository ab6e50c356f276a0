use crate::prelude::*;

use tokio::sync::Mutex;

/// Runs airdrops for one session, one at a time.
#[derive(Debug)]
pub struct AirdropLauncher {
    session: WalletSession,
    in_flight: Mutex<()>,
}

impl AirdropLauncher {
    pub fn new(session: WalletSession) -> Self {
        Self {
            session,
            in_flight: Mutex::new(()),
        }
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    /// Resolves recipients, checks the balance, builds the batch and submits
    /// it as one transaction.
    ///
    /// Fails with [`SubmitError::SubmissionInProgress`] while another launch
    /// on the same launcher has not finished.
    pub async fn launch(&self, parameters: AirdropParameters) -> Result<SubmissionResult> {
        parameters.validate()?;
        let Ok(_guard) = self.in_flight.try_lock() else {
            return Err(SubmitError::SubmissionInProgress.into());
        };
        let session = &self.session;

        let kind = if parameters.resolve_names() {
            RecipientKind::Name
        } else {
            RecipientKind::Address
        };
        let entries = RecipientEntry::from_raw(parameters.raw_recipients(), kind);

        let token = parameters.token();
        let decimals = match parameters.decimals() {
            Some(decimals) => decimals,
            None => query_token_decimals(session, token).await?,
        };
        let amount = scale_positive(parameters.amount(), decimals)?;
        info!(
            "🪂 Airdrop of {} {token} to {} recipient(s)",
            unscale(amount, decimals),
            entries.len()
        );

        let recipients =
            resolve_recipients(session, entries, parameters.resolve_concurrency()).await?;
        let balance = query_token_balance(session, session.account(), token).await?;
        let batch = build_batch(session.account(), &recipients, token, amount, balance)?;

        submit_batch(
            session,
            batch,
            parameters.fee_strategy(),
            parameters.memo(),
        )
        .await
    }
}
