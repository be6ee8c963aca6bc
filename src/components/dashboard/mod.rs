mod chart;
mod prediction_card;
mod ticker_form;
mod view;

pub use view::Dashboard;
