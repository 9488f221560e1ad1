pub mod chart;
pub mod indicator;
pub mod stock;
pub mod view;
