//! Hiscores client abstractions and the HTTP implementation.
//!
//! - [`HiscoresSource`]: the fetch contract, with batch fetch and game mode
//!   detection provided on top of a single-player fetch
//! - [`HiscoresClient`]: the reqwest implementation against the public endpoints

mod config;
mod http;
mod traits;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use http::HiscoresClient;
pub use traits::{probe_order, HiscoresSource, ProbeOptions};
