use super::ui;
use crate::core::{Asset, Currency, RateTable};
use comfy_table::{Cell, ColumnConstraint, Table, Width};

const MIN_WIDTHS: [u16; 4] = [12, 10, 10, 15];

/// Builds the result listing: one row per asset with its price converted
/// from USD into `currency` using `rates`.
pub fn render_assets(assets: &[Asset], rates: &RateTable, currency: Currency) -> Table {
    let mut table = ui::new_listing_table();

    table.set_header(vec![
        ui::header_cell("Tillgång"),
        ui::header_cell("Märke"),
        ui::header_cell("Modell"),
        ui::header_cell(&format!("Pris i {currency}")),
        ui::header_cell("Datum"),
    ]);

    for asset in assets {
        let price = rates.convert(asset.price, currency);
        table.add_row(vec![
            Cell::new(asset.asset_type),
            Cell::new(&asset.brand),
            Cell::new(&asset.model),
            Cell::new(currency.format_amount(price)),
            Cell::new(asset.purchase_date.format("%Y-%m-%d")),
        ]);
    }

    table.set_constraints(
        MIN_WIDTHS
            .into_iter()
            .map(|w| ColumnConstraint::LowerBoundary(Width::Fixed(w))),
    );
    table
}
