pub mod error;
pub mod history;
pub mod sample;

pub use error::{PulseError, Result};
pub use history::{Histories, History, HISTORY_LEN};
pub use sample::{clamp_percent, Battery, HostInfo, Sample};
