//! Currency conversion abstractions

use anyhow::{Result, anyhow};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Sek,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Sek];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Sek => "SEK",
        }
    }

    /// Formats an amount the way prices are shown for this currency, two
    /// decimals with midpoints rounded away from zero.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        match self {
            Currency::Usd => format!("${amount:.2}"),
            Currency::Gbp => format!("£{amount:.2}"),
            Currency::Eur => format!("{amount:.2} EUR"),
            Currency::Sek => format!("{amount:.2} kr"),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| anyhow!("Unsupported currency code: {s}"))
    }
}

/// Multipliers that turn a USD price into each currency, relative to a base.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: Currency,
    multipliers: HashMap<Currency, Decimal>,
}

impl RateTable {
    pub fn new(base: Currency, multipliers: HashMap<Currency, Decimal>) -> Self {
        Self { base, multipliers }
    }

    #[cfg(test)]
    pub(crate) fn base(&self) -> Currency {
        self.base
    }

    pub fn get(&self, currency: Currency) -> Option<Decimal> {
        self.multipliers.get(&currency).copied()
    }

    /// Multiplier for `currency`, or 1 when the table has no entry for it.
    pub fn multiplier(&self, currency: Currency) -> Decimal {
        self.get(currency).unwrap_or(Decimal::ONE)
    }

    pub fn convert(&self, usd_amount: Decimal, currency: Currency) -> Decimal {
        usd_amount * self.multiplier(currency)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.multipliers.len()
    }
}

pub trait CurrencyRateProvider {
    fn rates(&self, base: Currency) -> Result<RateTable>;

    /// Same as [`CurrencyRateProvider::rates`] for a textual currency code.
    fn rates_for_code(&self, code: &str) -> Result<RateTable> {
        self.rates(code.parse()?)
    }
}
