use crate::prelude::*;
use std::{process::ExitCode, sync::Arc};

async fn open_session(bridge_url: Url, config: ChainConfig) -> Result<WalletSession, CliError> {
    let wallet = BridgeWallet::connect(bridge_url).await.map_err(Error::from)?;
    let querier = RestQuerier::new(config.rest().clone());
    let session = WalletSession::connect(Arc::new(wallet), Arc::new(querier), config).await?;
    Ok(session)
}

fn fee_amount(session: &WalletSession, amount: BaseAmount) -> Result<String, CliError> {
    let currency = session.config().fee_currency().map_err(Error::from)?;
    Ok(format!(
        "{} {}",
        unscale(amount, currency.coin_decimals),
        currency.coin_denom
    ))
}

fn report(result: &SubmissionResult) {
    if result.succeeded() {
        info!("✅ {result}");
    } else {
        error!("❌ {result}");
    }
}

async fn run_connect(session: &WalletSession) -> Result<(), CliError> {
    let denom = session.config().fee_denom().map_err(Error::from)?;
    let balance = session
        .querier()
        .balance(session.account(), denom)
        .await
        .map_err(Error::from)?;
    info!(
        "👛 {} holds {}",
        session.account(),
        fee_amount(session, balance)?
    );
    Ok(())
}

async fn run_airdrop(session: WalletSession, parameters: AirdropParameters) -> Result<(), CliError> {
    let launcher = AirdropLauncher::new(session);
    let result = launcher.launch(parameters).await?;
    report(&result);
    Ok(())
}

async fn run_create_token(
    session: &WalletSession,
    parameters: TokenParameters,
) -> Result<(), CliError> {
    let creation = create_token(session, &parameters).await?;
    report(creation.result());
    Ok(())
}

async fn run_name(session: &WalletSession, operation: NameOperation) -> Result<(), CliError> {
    let names = NameService::new(session);
    match operation {
        NameOperation::Cost { years } => {
            let cost = names.registration_cost(years).await?;
            info!(
                "💰 Registering a name for {} year(s) costs {}",
                clamp_years(years),
                fee_amount(session, cost)?
            );
        }
        NameOperation::Register { name, years } => report(&names.register(&name, years).await?),
        NameOperation::Renew { name, years } => report(&names.renew(&name, years).await?),
        NameOperation::Resolve { name } => match names.resolve_record(&name).await?.address {
            Some(address) => info!("{name} -> {address}"),
            None => warn!("{name} is not registered"),
        },
        NameOperation::Reverse { address } => {
            let resolved = names.resolve_address(&address).await?;
            if resolved.names.is_empty() {
                warn!("No names point to {address}");
            } else {
                info!("{address} <- {}", resolved.names.join(", "));
            }
        }
        NameOperation::Metadata { name } => {
            let nft = names.domain_metadata(&name).await?;
            info!("{name} metadata:\n{:#}", nft.extension);
        }
        NameOperation::UpdateResolver { name, resolver } => {
            report(&names.update_resolver(&name, resolver).await?);
        }
        NameOperation::UpdateData { name, metadata } => {
            report(&names.update_user_domain_data(&name, metadata).await?);
        }
        NameOperation::RegisterSubdomain(parameters) => {
            report(&names.register_subdomain(&parameters).await?);
        }
    }
    Ok(())
}

/// Arguments are checked against the chain config before the wallet bridge is
/// contacted, so bad input never triggers a wallet prompt.
async fn run_subcommand(cli_args: CliArgs) -> Result<(), CliError> {
    let config = ChainConfig::load(cli_args.chain_config()).map_err(Error::from)?;
    let bridge_url = cli_args.wallet_bridge_url()?;
    let operation = cli_args.command.operation(&config)?;
    let session = open_session(bridge_url, config).await?;
    match operation {
        Operation::Connect => run_connect(&session).await,
        Operation::Airdrop(parameters) => run_airdrop(session, parameters).await,
        Operation::CreateToken(parameters) => run_create_token(&session, parameters).await,
        Operation::Name(operation) => run_name(&session, operation).await,
    }
}

pub async fn run(cli_args: CliArgs) -> ExitCode {
    match run_subcommand(cli_args).await {
        Ok(_) => {
            info!("{} ran successfully", BINARY_NAME);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error running {}: {}", BINARY_NAME, e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const CHAIN_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs/constantine.json");
    /// Nothing listens here, reaching the bridge would fail with a connect error.
    const CLOSED_BRIDGE: &str = "ws://127.0.0.1:1";
    const RECIPIENT: &str = "archway1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn";

    fn cli_args(args: &[&str]) -> CliArgs {
        let mut argv = vec![
            BINARY_NAME,
            "--chain-config",
            CHAIN_CONFIG,
            "--wallet-bridge",
            CLOSED_BRIDGE,
        ];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[tokio::test]
    async fn missing_recipients_fail_without_wallet() {
        let result = run_subcommand(cli_args(&["airdrop", "--amount", "ten"])).await;
        assert!(matches!(
            result,
            Err(CliError::InvalidCliArgs(InvalidCliArgs::RecipientsMissing))
        ));
    }

    #[tokio::test]
    async fn malformed_amount_fails_without_wallet() {
        let result =
            run_subcommand(cli_args(&["airdrop", "--recipients", RECIPIENT, "--amount", "ten"]))
                .await;
        assert!(matches!(
            result,
            Err(CliError::CoreError(Error::InvalidInput(
                InvalidInput::AmountNotNumeric { .. }
            )))
        ));
    }

    #[tokio::test]
    async fn bad_metadata_fails_without_wallet() {
        let result = run_subcommand(cli_args(&[
            "name",
            "update-data",
            "alice.arch",
            "--metadata",
            "twitter=@arch",
        ]))
        .await;
        assert!(matches!(
            result,
            Err(CliError::InvalidCliArgs(InvalidCliArgs::MetadataNotJson { .. }))
        ));
    }

    #[tokio::test]
    async fn valid_args_reach_the_wallet_bridge() {
        let result =
            run_subcommand(cli_args(&["airdrop", "--recipients", RECIPIENT, "--amount", "1"]))
                .await;
        assert!(matches!(
            result,
            Err(CliError::CoreError(Error::Wallet(WalletError::ConnectFailed { .. })))
        ));
    }

    #[tokio::test]
    async fn failure_exits_non_zero() {
        let code = run(cli_args(&["airdrop", "--amount", "1"])).await;
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
    }
}
