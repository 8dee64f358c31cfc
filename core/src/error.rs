pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    SqlxError(#[from] sqlx::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("column {column:?} has no characters usable in an identifier")]
    EmptyIdentifier { column: String },

    #[error("table name {0:?} cannot be used as a file name")]
    InvalidTableName(String),

    #[error("unsupported database url: {0}")]
    UnsupportedDatabase(String),

    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
}
