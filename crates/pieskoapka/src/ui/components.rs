pub mod counts_bar;
pub mod footer_bar;
pub mod search_bar;
pub mod status_bar;
