use std::time::Duration;

pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

pub const DEFAULT_LOG_DIRECTIVE: &str = "geoduel_server=info";

pub const QUICKWIT_LOGGING_CHANNEL_CAPACITY: usize = 10_000;
pub const DEFAULT_LOGGING_BATCH_SIZE: usize = 100;
pub const QUICKWIT_FLUSH_PERIOD: Duration = Duration::from_secs(5);
