pub use crate::app::App;
pub use surplus_types::error::{Error, SpResult};
pub use surplus_types::types::Timestamp;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
