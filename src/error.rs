use std::{path::PathBuf, string::FromUtf8Error};

use byte_unit::Byte;

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("Serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("Serialized document is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("File is too large: {size:#} exceeds the {limit:#} limit")]
    FileTooLarge { size: Byte, limit: Byte },
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Top-level value is {kind}, expected an object")]
    DocumentNotAnObject { kind: &'static str },
    #[error("Section \"{section}\" is {kind}, expected an object")]
    SectionNotAnObject {
        section: String,
        kind: &'static str,
    },
    #[error(transparent)]
    Dump(#[from] DumpError),
    #[error("Write error: {0}")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    IO {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
