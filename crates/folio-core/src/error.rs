pub type FolioResult<T> = Result<T, FolioError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    #[error("unknown section: {0:?}")]
    UnknownSection(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl FolioError {
    pub fn unknown_section(id: impl Into<String>) -> Self {
        Self::UnknownSection(id.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
