use std::path::PathBuf;

use dotboy_core::CpuError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read ROM {}: {source}", path.display())]
    Rom {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid address {0:?}, expected up to four hex digits")]
    Address(String),

    #[error("invalid palette colour {0:?}, expected #RRGGBB")]
    Colour(String),

    #[error(transparent)]
    Emulation(#[from] CpuError),
}
