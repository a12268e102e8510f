use crate::core::currency::{Currency, CurrencyRateProvider, RateTable};
use anyhow::{Result, anyhow};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// Units of each currency per one USD.
pub fn usd_rates() -> [(Currency, Decimal); 4] {
    [
        (Currency::Usd, Decimal::ONE),
        (Currency::Eur, Decimal::new(85, 2)),
        (Currency::Gbp, Decimal::new(75, 2)),
        (Currency::Sek, Decimal::new(85, 1)),
    ]
}

/// Rates from a fixed table, normalized against the requested base currency.
#[derive(Debug, Clone)]
pub struct StaticRateProvider {
    rates: HashMap<Currency, Decimal>,
}

impl StaticRateProvider {
    pub fn new() -> Self {
        Self::from_rates(usd_rates())
    }

    pub fn from_rates(rates: impl IntoIterator<Item = (Currency, Decimal)>) -> Self {
        Self {
            rates: rates.into_iter().collect(),
        }
    }
}

impl Default for StaticRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyRateProvider for StaticRateProvider {
    fn rates(&self, base: Currency) -> Result<RateTable> {
        let base_rate = self
            .rates
            .get(&base)
            .copied()
            .filter(|r| !r.is_zero())
            .ok_or_else(|| anyhow!("No conversion rate for base currency {base}"))?;

        let multipliers = self
            .rates
            .iter()
            .map(|(currency, rate)| (*currency, *rate / base_rate))
            .collect();
        debug!(%base, "Computed conversion rates");
        Ok(RateTable::new(base, multipliers))
    }
}
