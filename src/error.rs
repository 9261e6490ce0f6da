use std::path::PathBuf;

use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not reach {0}, please check your internet connection.")]
    Internet(Url),

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error("Failed to parse response body: {0}.")]
    ResponseParseFailed(#[from] serde_path_to_error::Error<serde_json::Error>),

    #[error("Failed to parse URL: {0}. (Error: {1:?})")]
    UrlParsingFailed(String, url::ParseError),

    #[error("Yahoo Finance response is missing {0}.")]
    YahooResponseIncomplete(&'static str),

    #[error("Failed to get base directories.")]
    BaseDirsFailed,

    #[error("Failed to read the file: {0:?}. (Error: {1:?})")]
    FileReadFailed(PathBuf, std::io::Error),

    #[error("Failed to write to the file: {0:?}. (Error: {1:?})")]
    FileWriteFailed(PathBuf, std::io::Error),

    #[error("Formatting to toml format failed: {0}. (Error: {1:?})")]
    TomlFormattingFailed(String, toml::ser::Error),

    #[error("Formatting to json format failed: {0}. (Error: {1:?})")]
    JsonFormattingFailed(String, serde_json::Error),

    #[error("Failed to bind to port {0}. (Error: {1})")]
    PortBindingFailed(u16, std::io::Error),

    #[error("Server crashed. (Error: {0})")]
    ServerCrashed(std::io::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Event channel closed. (Error: {0})")]
    EventChannelClosed(#[from] std::sync::mpsc::RecvError),
}
