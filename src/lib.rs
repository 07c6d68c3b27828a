pub mod cleanup;
pub mod config;
pub mod cors;
pub mod error;
pub mod preflight;
pub mod report;
pub mod uploader;

pub use config::Config;
pub use cors::{CorsConfiguration, CorsRule};
pub use error::{Error, Result};
pub use uploader::{Applied, CorsUploader};
