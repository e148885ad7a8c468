use camino::Utf8PathBuf;
use thiserror::Error;

use cct::error::CctError;

#[derive(Error, Debug)]
pub enum AppError {
    /* mapped errors */
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    SerdeYaml(#[from] serde_yml::Error),

    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),

    #[error(transparent)]
    SetLoggerError(#[from] log::SetLoggerError),

    #[error(transparent)]
    CctError(#[from] CctError),

    /* cctool errors */
    #[error("Cannot write table to {0}: {1}")]
    TableWrite(Utf8PathBuf, std::io::Error),

    #[error("Temperature {0}K is outside the supported range")]
    TemperatureOutOfRange(f64),

    #[error("Sweep range is empty: {0}K to {1}K with step ratio {2}")]
    EmptySweep(f64, f64, f64),
}

pub type AppResult<T> = Result<T, AppError>;
