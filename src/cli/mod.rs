pub mod menu;
pub mod report;
pub mod session;
pub mod ui;
