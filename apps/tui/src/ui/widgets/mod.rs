pub mod chart;
pub mod popup;
pub mod score;
pub mod tables;
