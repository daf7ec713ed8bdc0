pub mod location_info;
pub mod pulse_indicator;

pub use location_info::*;
pub use pulse_indicator::*;
