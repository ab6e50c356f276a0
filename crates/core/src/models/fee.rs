use crate::prelude::*;

use serde::{Serialize, Serializer};

/// Fixed point scale used for gas prices.
const GAS_PRICE_DECIMALS: u8 = 18;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeeStrategy {
    /// Let the wallet simulate and price the transaction.
    #[default]
    Auto,

    /// Simulate locally and pay `gas * fixed_gas_price` from the chain config.
    Fixed,
}

/// The fee attached to a broadcast. Serializes to `"auto"` or to
/// `{ amount, gas }`, the two forms signing clients accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fee {
    Auto,
    Fixed { amount: Vec<Coin>, gas: u64 },
}

impl Serialize for Fee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct StdFee<'a> {
            amount: &'a [Coin],
            gas: String,
        }
        match self {
            Fee::Auto => serializer.serialize_str("auto"),
            Fee::Fixed { amount, gas } => StdFee {
                amount,
                gas: gas.to_string(),
            }
            .serialize(serializer),
        }
    }
}

impl Fee {
    /// `ceil(gas * gas_price)` in `denom`, computed without floating point.
    pub fn fixed(gas: u64, gas_price: &str, denom: &str) -> Result<Self> {
        let price = scale(gas_price, GAS_PRICE_DECIMALS)?;
        let unit = 10u128.pow(GAS_PRICE_DECIMALS as u32);
        let numerator = price
            .get()
            .checked_mul(gas as u128)
            .ok_or(SubmitError::FeeOverflow { gas })?;
        let amount = numerator.div_ceil(unit);
        Ok(Self::Fixed {
            amount: vec![Coin::new(amount, denom)],
            gas,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fixed_fee_multiplies_gas_by_price() {
        let fee = Fee::fixed(200_000, "0.025", "uarch").unwrap();
        assert_eq!(
            fee,
            Fee::Fixed {
                amount: vec![Coin::new(5_000u128, "uarch")],
                gas: 200_000
            }
        );
    }

    #[test]
    fn fixed_fee_rounds_up() {
        let Fee::Fixed { amount, .. } = Fee::fixed(3, "0.025", "uarch").unwrap() else {
            panic!("expected fixed fee");
        };
        assert_eq!(amount[0].amount, BaseAmount::new(1));
    }

    #[test]
    fn rejects_malformed_gas_price() {
        assert!(matches!(
            Fee::fixed(1, "cheap", "uarch"),
            Err(Error::InvalidInput(InvalidInput::AmountNotNumeric { .. }))
        ));
    }

    #[test]
    fn wire_forms() {
        assert_eq!(serde_json::to_value(Fee::Auto).unwrap(), json!("auto"));
        let fee = Fee::fixed(100, "1", "uarch").unwrap();
        assert_eq!(
            serde_json::to_value(fee).unwrap(),
            json!({ "amount": [{ "denom": "uarch", "amount": "100" }], "gas": "100" })
        );
    }
}
