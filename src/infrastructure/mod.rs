pub mod error;
pub mod logging;

pub use error::ReviewError;
pub use logging::{setup_logging, LogFormat, LoggingConfig};
