use crate::prelude::*;

pub const MIN_REGISTRATION_YEARS: i64 = 1;
pub const MAX_REGISTRATION_YEARS: i64 = 3;

/// Registrations and renewals are paid per year, between one and three years.
pub fn clamp_years(years: i64) -> u32 {
    years.clamp(MIN_REGISTRATION_YEARS, MAX_REGISTRATION_YEARS) as u32
}

/// `base_cost * clamp_years(years)`.
pub fn registration_cost_for(base_cost: BaseAmount, years: i64) -> Result<BaseAmount> {
    let years = clamp_years(years);
    base_cost.checked_mul(years as u128).ok_or_else(|| {
        InvalidInput::AmountOverflow {
            bad_value: format!("{base_cost} * {years}"),
        }
        .into()
    })
}

fn non_empty_name(name: &str) -> Result<String, InvalidInput> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InvalidInput::EmptyName);
    }
    Ok(name.to_owned())
}

/// Client for the name registry contract and its domain NFTs.
#[derive(Debug, Clone, Copy)]
pub struct NameService<'a> {
    session: &'a WalletSession,
}

impl<'a> NameService<'a> {
    pub fn new(session: &'a WalletSession) -> Self {
        Self { session }
    }

    fn registry(&self) -> &'a str {
        self.session.config().contracts().name_registry()
    }

    async fn query<R: serde::de::DeserializeOwned>(
        &self,
        contract: &str,
        msg: &(impl serde::Serialize + Sync),
    ) -> Result<R> {
        Ok(query_smart(self.session.querier().as_ref(), contract, msg).await?)
    }

    async fn execute(
        &self,
        msg: &RegistryExecuteMsg,
        funds: Vec<Coin>,
        memo: &str,
    ) -> Result<SubmissionResult> {
        let message = WireMessage::execute(
            self.session.account().clone(),
            self.registry(),
            msg,
            funds,
        )?;
        broadcast_messages(self.session, vec![message], FeeStrategy::Auto, memo).await
    }

    pub async fn registry_config(&self) -> Result<RegistryConfigResponse> {
        self.query(self.registry(), &RegistryQueryMsg::Config {})
            .await
    }

    pub async fn registration_cost(&self, years: i64) -> Result<BaseAmount> {
        let config = self.registry_config().await?;
        registration_cost_for(config.base_cost, years)
    }

    pub async fn resolve_record(&self, name: &str) -> Result<ResolveRecordResponse> {
        let name = non_empty_name(name)?;
        self.query(self.registry(), &RegistryQueryMsg::ResolveRecord { name })
            .await
    }

    pub async fn resolve_address(&self, address: &Address) -> Result<ResolveAddressResponse> {
        self.query(
            self.registry(),
            &RegistryQueryMsg::ResolveAddress {
                address: address.clone(),
            },
        )
        .await
    }

    /// Metadata of the domain NFT minted for `name`.
    pub async fn domain_metadata(&self, name: &str) -> Result<NftInfoResponse> {
        let token_id = non_empty_name(name)?;
        let domain_nft = self.session.config().contracts().domain_nft();
        self.query(domain_nft, &Cw721QueryMsg::NftInfo { token_id })
            .await
    }

    fn payment(&self, cost: BaseAmount) -> Result<Vec<Coin>> {
        Ok(vec![Coin::new(cost, self.session.config().fee_denom()?)])
    }

    pub async fn register(&self, name: &str, years: i64) -> Result<SubmissionResult> {
        let name = non_empty_name(name)?;
        let cost = self.registration_cost(years).await?;
        info!("📝 Registering {name} for {} year(s), cost {cost}", clamp_years(years));
        self.execute(
            &RegistryExecuteMsg::Register { name },
            self.payment(cost)?,
            "Registering domain",
        )
        .await
    }

    pub async fn renew(&self, name: &str, years: i64) -> Result<SubmissionResult> {
        let name = non_empty_name(name)?;
        let cost = self.registration_cost(years).await?;
        info!("🔁 Renewing {name} for {} year(s), cost {cost}", clamp_years(years));
        self.execute(
            &RegistryExecuteMsg::RenewRegistration { name },
            self.payment(cost)?,
            "Renewing domain registration",
        )
        .await
    }

    pub async fn update_resolver(
        &self,
        name: &str,
        new_resolver: Address,
    ) -> Result<SubmissionResult> {
        let name = non_empty_name(name)?;
        self.execute(
            &RegistryExecuteMsg::UpdateResolver { name, new_resolver },
            Vec::new(),
            "Updating resolver",
        )
        .await
    }

    pub async fn update_user_domain_data(
        &self,
        name: &str,
        metadata_update: serde_json::Value,
    ) -> Result<SubmissionResult> {
        let name = non_empty_name(name)?;
        if !metadata_update.is_object() {
            return Err(InvalidInput::MetadataNotObject.into());
        }
        self.execute(
            &RegistryExecuteMsg::UpdateUserDomainData {
                name,
                metadata_update,
            },
            Vec::new(),
            "Updating user domain data",
        )
        .await
    }

    pub async fn register_subdomain(
        &self,
        parameters: &SubdomainParameters,
    ) -> Result<SubmissionResult> {
        let domain = non_empty_name(parameters.domain())?;
        let subdomain = non_empty_name(parameters.subdomain())?;
        self.execute(
            &RegistryExecuteMsg::RegisterSubdomain {
                domain,
                subdomain,
                new_resolver: parameters.new_resolver().clone(),
                new_owner: parameters.new_owner().clone(),
                mint: parameters.mint(),
                expiration: parameters.expiration(),
            },
            Vec::new(),
            "Registering subdomain",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use serde_json::json;

    #[test]
    fn years_are_clamped() {
        assert_eq!(clamp_years(-4), 1);
        assert_eq!(clamp_years(0), 1);
        assert_eq!(clamp_years(2), 2);
        assert_eq!(clamp_years(5), 3);
    }

    #[test]
    fn five_years_cost_three() {
        let cost = registration_cost_for(BaseAmount::new(250), 5).unwrap();
        assert_eq!(cost, BaseAmount::new(750));
    }

    #[tokio::test]
    async fn register_pays_clamped_cost_in_fee_denom() {
        let wallet = MockWallet::new();
        let querier = MockQuerier::new().with_base_cost(1_000);
        let session = session_with(wallet.clone(), querier);

        let result = NameService::new(&session)
            .register(" alice.arch ", 7)
            .await
            .unwrap();

        assert!(result.succeeded());
        let broadcasts = wallet.broadcasts();
        let broadcast = &broadcasts[0];
        assert_eq!(broadcast.memo, "Registering domain");
        let WireMessage::ExecuteContract(execute) = &broadcast.messages[0] else {
            panic!("expected contract execution");
        };
        assert_eq!(execute.contract, *session.config().contracts().name_registry());
        assert_eq!(execute.msg, json!({ "register": { "name": "alice.arch" } }));
        assert_eq!(execute.funds, vec![Coin::new(3_000u128, "aconst")]);
    }

    #[tokio::test]
    async fn renew_uses_renew_entrypoint() {
        let wallet = MockWallet::new();
        let session = session_with(wallet.clone(), MockQuerier::new().with_base_cost(10));

        NameService::new(&session).renew("alice.arch", 2).await.unwrap();

        let broadcasts = wallet.broadcasts();
        let WireMessage::ExecuteContract(execute) = &broadcasts[0].messages[0] else {
            panic!("expected contract execution");
        };
        assert_eq!(
            execute.msg,
            json!({ "renew_registration": { "name": "alice.arch" } })
        );
        assert_eq!(execute.funds, vec![Coin::new(20u128, "aconst")]);
    }

    #[tokio::test]
    async fn resolve_and_reverse_lookup() {
        let querier = MockQuerier::new().with_name("alice.arch", ALICE);
        let session = session_with(MockWallet::new(), querier);
        let names = NameService::new(&session);

        let record = names.resolve_record("alice.arch").await.unwrap();
        assert_eq!(record.address.as_deref(), Some(ALICE));

        let reverse = names
            .resolve_address(&Address::from_trusted(ALICE))
            .await
            .unwrap();
        assert_eq!(reverse.names, vec!["alice.arch".to_owned()]);
    }

    #[tokio::test]
    async fn metadata_update_must_be_object() {
        let wallet = MockWallet::new();
        let session = session_with(wallet.clone(), MockQuerier::new());

        let result = NameService::new(&session)
            .update_user_domain_data("alice.arch", json!(["not", "an", "object"]))
            .await;

        assert!(matches!(
            result,
            Err(Error::InvalidInput(InvalidInput::MetadataNotObject))
        ));
        assert!(wallet.broadcasts().is_empty());
    }

    #[tokio::test]
    async fn domain_metadata_reads_nft_extension() {
        let querier = MockQuerier::new().with_nft("alice.arch", json!({ "description": "hi" }));
        let session = session_with(MockWallet::new(), querier);

        let info = NameService::new(&session)
            .domain_metadata("alice.arch")
            .await
            .unwrap();

        assert_eq!(info.extension["description"], "hi");
    }

    #[tokio::test]
    async fn registration_without_fee_currency_is_an_error() {
        let wallet = MockWallet::new();
        let session = WalletSession::new(
            std::sync::Arc::new(config_without_fee_currency()),
            sender(),
            wallet.clone(),
            MockQuerier::new().with_base_cost(10),
        );

        let result = NameService::new(&session).register("alice.arch", 1).await;

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::NoFeeCurrency))
        ));
        assert!(wallet.broadcasts().is_empty());
    }

    #[tokio::test]
    async fn missing_registry_config_fails_registration() {
        let wallet = MockWallet::new();
        let session = session_with(wallet.clone(), MockQuerier::new());

        let result = NameService::new(&session).register("alice.arch", 1).await;

        assert!(matches!(
            result,
            Err(Error::Query(QueryError::ContractError { .. }))
        ));
        assert!(wallet.broadcasts().is_empty());
    }
}
