//! HTTP request handlers for the diurnal API.

pub mod estimate;
pub mod heartbeat;
pub mod series;
pub mod table;
pub mod trace;

pub use estimate::estimate_handler;
pub use heartbeat::heartbeat_handler;
pub use series::series_handler;
pub use table::table_handler;
pub use trace::trace_handler;
