use thiserror::Error;

#[derive(Error, Debug)]
pub enum CctError {
    /* mapped errors */
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    FromHexError(#[from] hex::FromHexError),

    #[error("Invalid hex color")]
    InvalidHexColor,

    #[error("Unknown estimation method: {0:?}")]
    UnknownMethod(String),

    /* isotherm table errors */
    #[error("Isotherm table needs at least {0} entries")]
    TableTooShort(usize),

    #[error("Isotherm table must start with the infinite temperature anchor (mired 0)")]
    TableMissingAnchor,

    #[error("Isotherm table is not ascending by mired at entry {0}")]
    TableNotSorted(usize),

    #[error("Isotherm table entry {0} does not have a unit normal")]
    TableInvalidNormal(usize),
}

pub type CctResult<T> = Result<T, CctError>;
