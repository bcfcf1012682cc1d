pub mod config;
pub mod error;
pub mod util;

/// fio reports bandwidth in KiB/s
pub const KIB_PER_MIB: f64 = 1024.0;
