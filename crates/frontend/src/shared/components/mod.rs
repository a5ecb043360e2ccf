pub mod date_input;
pub mod search_input;
pub mod stat_card;
pub mod table_cell_money;
pub mod ui;
