use crate::prelude::*;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct YearsArg {
    /// Registration period, clamped to 1..=3 years.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub years: i64,
}

#[derive(Subcommand, Debug)]
pub enum NameCommand {
    /// Show the cost of registering a name.
    Cost(YearsArg),

    /// Register a name for the connected account.
    Register {
        name: String,
        #[command(flatten)]
        years: YearsArg,
    },

    /// Extend the registration of a name.
    Renew {
        name: String,
        #[command(flatten)]
        years: YearsArg,
    },

    /// Look up the address a name points to.
    Resolve { name: String },

    /// List the names pointing to an address.
    Reverse { address: String },

    /// Show the metadata stored on the domain NFT.
    Metadata { name: String },

    /// Point a name at a new address.
    UpdateResolver {
        name: String,
        #[arg(long)]
        resolver: String,
    },

    /// Merge a JSON object into the domain's user data.
    UpdateData {
        name: String,
        #[arg(long)]
        metadata: String,
    },

    /// Create a subdomain under a name owned by the connected account.
    RegisterSubdomain {
        domain: String,
        subdomain: String,
        #[arg(long)]
        resolver: String,
        #[arg(long)]
        owner: String,
        /// Also mint the subdomain NFT to `owner`.
        #[arg(long, default_value_t = false)]
        mint: bool,
        /// Expiration as a unix timestamp in seconds.
        #[arg(long)]
        expiration: u64,
    },
}

/// Parses the `--metadata` argument, which must be a JSON object.
pub fn parse_metadata(metadata: &str) -> Result<serde_json::Value, CliError> {
    let value: serde_json::Value =
        serde_json::from_str(metadata).map_err(|e| InvalidCliArgs::MetadataNotJson {
            underlying: e.to_string(),
        })?;
    if !value.is_object() {
        return Err(InvalidInput::MetadataNotObject.into());
    }
    Ok(value)
}

pub fn subdomain_parameters(
    config: &ChainConfig,
    domain: String,
    subdomain: String,
    resolver: &str,
    owner: &str,
    mint: bool,
    expiration: u64,
) -> Result<SubdomainParameters, CliError> {
    Ok(SubdomainParameters::builder()
        .domain(domain)
        .subdomain(subdomain)
        .new_resolver(config.parse_address(resolver)?)
        .new_owner(config.parse_address(owner)?)
        .mint(mint)
        .expiration(expiration)
        .build())
}
