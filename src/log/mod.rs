pub mod format;
pub mod global;
pub mod log_arg;
pub mod log_config;
pub mod log_level;
mod log_macros;
pub mod logger;
pub mod record;
pub mod shared_buffer;
pub mod timestamp;
pub use log_arg::LogArg;
pub use log_config::{LogOutput, LoggerConfig};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use record::Record;
pub use shared_buffer::SharedBuffer;
pub use timestamp::TimestampFormat;
