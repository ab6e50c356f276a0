use crate::prelude::*;

pub const DEFAULT_RESOLVE_CONCURRENCY: usize = 4;

#[derive(Debug, Clone, Getters, CopyGetters, Builder)]
pub struct AirdropParameters {
    /// Raw recipient strings, one per address or name, blanks allowed.
    #[getset(get = "pub")]
    #[builder(into)]
    raw_recipients: Vec<String>,

    /// Treat every recipient as a registry name to resolve.
    #[getset(get_copy = "pub")]
    #[builder(default)]
    resolve_names: bool,

    /// Per recipient amount as typed by the user, in whole tokens.
    #[getset(get = "pub")]
    #[builder(into)]
    amount: String,

    #[getset(get = "pub")]
    token: Token,

    /// Overrides the decimals looked up for `token`.
    #[getset(get_copy = "pub")]
    decimals: Option<u8>,

    #[getset(get_copy = "pub")]
    #[builder(default)]
    fee_strategy: FeeStrategy,

    #[getset(get_copy = "pub")]
    #[builder(default = DEFAULT_RESOLVE_CONCURRENCY)]
    resolve_concurrency: usize,

    #[getset(get = "pub")]
    #[builder(into, default)]
    memo: String,
}

impl AirdropParameters {
    /// Checks the amount as far as possible without the chain, scaling it when
    /// the decimals are already known.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        match self.decimals {
            Some(decimals) => scale_positive(&self.amount, decimals).map(|_| ()),
            None => check_amount(&self.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameters(amount: &str, decimals: Option<u8>) -> AirdropParameters {
        AirdropParameters::builder()
            .raw_recipients(vec!["alice.arch".to_owned()])
            .amount(amount)
            .token(Token::native("aconst").unwrap())
            .maybe_decimals(decimals)
            .build()
    }

    #[test]
    fn builder_defaults() {
        let parameters = parameters("1", None);
        assert!(!parameters.resolve_names());
        assert_eq!(parameters.decimals(), None);
        assert_eq!(parameters.fee_strategy(), FeeStrategy::default());
        assert_eq!(parameters.resolve_concurrency(), DEFAULT_RESOLVE_CONCURRENCY);
        assert_eq!(parameters.memo(), "");
    }

    #[test]
    fn validates_amount_with_known_decimals() {
        assert_eq!(parameters("1.5", Some(6)).validate(), Ok(()));
        assert!(matches!(
            parameters("1.1234567", Some(6)).validate(),
            Err(InvalidInput::AmountTooPrecise { .. })
        ));
        assert_eq!(
            parameters("0", Some(6)).validate(),
            Err(InvalidInput::AmountMustBePositive)
        );
    }

    #[test]
    fn validates_amount_syntax_with_unknown_decimals() {
        assert_eq!(parameters("1.1234567", None).validate(), Ok(()));
        assert!(matches!(
            parameters("ten", None).validate(),
            Err(InvalidInput::AmountNotNumeric { .. })
        ));
    }
}
