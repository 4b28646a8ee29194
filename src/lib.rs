pub mod api_client;
pub mod config;
pub mod error;
pub mod mapper;
pub mod query;
pub mod transport;
pub mod types;

pub use api_client::FootballDataClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use query::{TimeFrame, Venue};
