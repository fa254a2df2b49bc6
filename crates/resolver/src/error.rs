use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("Unknown time zone: {0}")]
    UnknownTimezone(String),
}
