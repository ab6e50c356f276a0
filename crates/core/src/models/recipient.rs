use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipientKind {
    Address,
    Name,
}

/// A recipient as typed or uploaded by the user, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_more::Display)]
#[display("{value}")]
pub struct RecipientEntry {
    #[getset(get = "pub")]
    kind: RecipientKind,

    #[getset(get = "pub")]
    value: String,
}

impl RecipientEntry {
    pub fn new(kind: RecipientKind, value: impl AsRef<str>) -> Result<Self, InvalidInput> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(InvalidInput::EmptyRecipient);
        }
        Ok(Self {
            kind,
            value: value.to_owned(),
        })
    }

    /// Turns raw cells or list items into entries, skipping blank ones.
    pub fn from_raw<I, S>(raw: I, kind: RecipientKind) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .filter_map(|value| Self::new(kind, value).ok())
            .collect()
    }
}
