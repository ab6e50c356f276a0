use crate::prelude::*;

use futures::{stream, StreamExt, TryStreamExt};

/// Looks up the current owner address of a registry name.
pub async fn resolve_name(session: &WalletSession, name: &str) -> Result<Address, ResolveError> {
    let registry = session.config().contracts().name_registry();
    let response: ResolveRecordResponse = query_smart(
        session.querier().as_ref(),
        registry,
        &RegistryQueryMsg::ResolveRecord {
            name: name.to_owned(),
        },
    )
    .await
    .map_err(|e| ResolveError::LookupFailed {
        name: name.to_owned(),
        underlying: e.to_string(),
    })?;

    match response.address {
        Some(address) if !address.trim().is_empty() => {
            debug!("Resolved {name} to {address}");
            Ok(Address::from_trusted(address))
        }
        _ => Err(ResolveError::NameNotFound {
            name: name.to_owned(),
        }),
    }
}

async fn resolve_entry(session: &WalletSession, entry: RecipientEntry) -> Result<Address> {
    match entry.kind() {
        RecipientKind::Address => Ok(session.config().parse_address(entry.value())?),
        RecipientKind::Name => Ok(resolve_name(session, entry.value()).await?),
    }
}

/// Turns entries into addresses, in input order.
///
/// At most `concurrency` lookups run at once. The first failure aborts the
/// whole list, no partial result is returned.
pub async fn resolve_recipients(
    session: &WalletSession,
    entries: Vec<RecipientEntry>,
    concurrency: usize,
) -> Result<Vec<Address>> {
    let total = entries.len();
    let addresses = stream::iter(entries)
        .map(|entry| resolve_entry(session, entry))
        .buffered(concurrency.max(1))
        .try_collect::<Vec<_>>()
        .await?;
    info!("Resolved {} of {} recipients", addresses.len(), total);
    Ok(addresses)
}
