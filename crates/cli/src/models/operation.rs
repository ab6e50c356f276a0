use crate::prelude::*;
use serde_json::Value;

/// A subcommand whose arguments are parsed and checked against the chain
/// config, ready to run once the wallet is connected.
#[derive(Debug)]
pub enum Operation {
    Connect,
    Airdrop(AirdropParameters),
    CreateToken(TokenParameters),
    Name(NameOperation),
}

#[derive(Debug)]
pub enum NameOperation {
    Cost { years: i64 },
    Register { name: String, years: i64 },
    Renew { name: String, years: i64 },
    Resolve { name: String },
    Reverse { address: Address },
    Metadata { name: String },
    UpdateResolver { name: String, resolver: Address },
    UpdateData { name: String, metadata: Value },
    RegisterSubdomain(SubdomainParameters),
}

impl Command {
    pub fn operation(self, config: &ChainConfig) -> Result<Operation, CliError> {
        let operation = match self {
            Command::Connect => Operation::Connect,
            Command::Airdrop(args) => {
                let parameters = args.parameters(config)?;
                parameters.validate()?;
                Operation::Airdrop(parameters)
            }
            Command::CreateToken(args) => {
                let parameters = TokenParameters::from(args);
                parameters.validate()?;
                Operation::CreateToken(parameters)
            }
            Command::Name(command) => Operation::Name(command.operation(config)?),
        };
        Ok(operation)
    }
}

impl NameCommand {
    pub fn operation(self, config: &ChainConfig) -> Result<NameOperation, CliError> {
        let operation = match self {
            NameCommand::Cost(YearsArg { years }) => NameOperation::Cost { years },
            NameCommand::Register { name, years } => NameOperation::Register {
                name,
                years: years.years,
            },
            NameCommand::Renew { name, years } => NameOperation::Renew {
                name,
                years: years.years,
            },
            NameCommand::Resolve { name } => NameOperation::Resolve { name },
            NameCommand::Reverse { address } => NameOperation::Reverse {
                address: config.parse_address(&address)?,
            },
            NameCommand::Metadata { name } => NameOperation::Metadata { name },
            NameCommand::UpdateResolver { name, resolver } => NameOperation::UpdateResolver {
                name,
                resolver: config.parse_address(&resolver)?,
            },
            NameCommand::UpdateData { name, metadata } => NameOperation::UpdateData {
                name,
                metadata: parse_metadata(&metadata)?,
            },
            NameCommand::RegisterSubdomain {
                domain,
                subdomain,
                resolver,
                owner,
                mint,
                expiration,
            } => NameOperation::RegisterSubdomain(subdomain_parameters(
                config,
                domain,
                subdomain,
                &resolver,
                &owner,
                mint,
                expiration,
            )?),
        };
        Ok(operation)
    }
}
