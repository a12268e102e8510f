pub mod static_rates;
