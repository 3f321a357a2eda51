pub mod config;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

// 导出主要 API
pub use config::FormatterConfig;
pub use error::{ConfigError, PatternError};
pub use formatter::*;
pub use types::Value;
