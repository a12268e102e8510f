use super::menu::{self, MenuChoice, Prompt};
use super::report;
use super::ui;
use crate::core::{AssetFilter, Currency, CurrencyRateProvider, Location};
use crate::store::AssetRepository;
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Prices are stored in this currency.
pub const STORE_CURRENCY: Currency = Currency::Usd;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    SelectLocation,
    SelectAssetType(Location),
    Display(AssetFilter),
    Continue,
    Done,
}

/// Interactive search over an owned asset repository.
pub struct Session<S, C> {
    store: S,
    rates: C,
}

impl<S, C> Session<S, C>
where
    S: AssetRepository,
    C: CurrencyRateProvider,
{
    pub fn new(store: S, rates: C) -> Self {
        Self { store, rates }
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    /// Runs filter cycles until the user declines to continue or input ends.
    pub fn run<P: Prompt, W: Write>(&self, prompt: &mut P, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "{}\n",
            ui::style_text("Välkommen till Asset Tracking System", ui::StyleType::Title)
        )?;

        let mut step = Step::SelectLocation;
        while step != Step::Done {
            step = self.advance(step, prompt, out)?;
        }

        debug!("Session ended");
        Ok(())
    }

    fn advance<P: Prompt, W: Write>(&self, step: Step, prompt: &mut P, out: &mut W) -> Result<Step> {
        let next = match step {
            Step::SelectLocation => {
                writeln!(out, "{}", menu::location_menu())?;
                match prompt.read_line()? {
                    None => Step::Done,
                    Some(input) => match menu::parse_location(&input) {
                        MenuChoice::Selected(location) => Step::SelectAssetType(location),
                        MenuChoice::Invalid => {
                            debug!(%input, "Invalid location choice");
                            Step::SelectLocation
                        }
                    },
                }
            }
            Step::SelectAssetType(country) => {
                writeln!(out, "{}", menu::asset_type_menu())?;
                match prompt.read_line()? {
                    None => Step::Done,
                    Some(input) => match menu::parse_asset_type(&input) {
                        MenuChoice::Selected(asset_type) => Step::Display(AssetFilter {
                            country,
                            asset_type,
                        }),
                        MenuChoice::Invalid => {
                            debug!(%input, "Invalid asset type choice");
                            Step::SelectLocation
                        }
                    },
                }
            }
            Step::Display(filter) => {
                let assets = self.store.query(&filter)?;
                let currency = filter.country.currency();
                let rates = self.rates.rates(STORE_CURRENCY)?;
                let table = report::render_assets(&assets, &rates, currency);
                writeln!(out, "\n{table}")?;
                Step::Continue
            }
            Step::Continue => {
                writeln!(
                    out,
                    "\n{}",
                    ui::style_text("Vill du söka igen? (Y/N)", ui::StyleType::Prompt)
                )?;
                match prompt.read_key()? {
                    Some(key) if menu::is_affirmative(key) => Step::SelectLocation,
                    _ => Step::Done,
                }
            }
            Step::Done => Step::Done,
        };
        Ok(next)
    }
}
