// src/scan/mod.rs
use thiserror::Error;

pub mod reputation;

pub use reputation::{check_url, UrlCheckReport, UrlStatus};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("URL is empty")]
    EmptyUrl,
}

pub type Result<T> = std::result::Result<T, ScanError>;
