pub mod chart;
pub mod palette;
pub mod record;
pub mod sample;
pub mod summary;
