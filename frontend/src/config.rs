use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Where contact messages are posted. Set `CONTACT_ENDPOINT` at build time;
/// without it submissions are simulated.
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("CONTACT_ENDPOINT").filter(|url| !url.trim().is_empty())
}

/// Latency of a simulated contact delivery, in ms.
pub const SIMULATED_DELIVERY_MS: u32 = 1_000;

pub const PRACTICE_EMAIL: &str = "hello@sanctuarytherapy.com";
pub const PRACTICE_PHONE: &str = "(555) 123-4567";
