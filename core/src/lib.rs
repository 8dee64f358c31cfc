pub use self::dialect::Dialect;
pub use self::error::{Error, Result};
pub use self::generate::{GenerationReport, Generator, TableFailure};
pub use self::schema::{CatalogListing, ColumnDescriptor, ConnectionContext, SchemaSource, TableDescriptor};
pub use self::source::SqlxSource;

mod error;
pub mod config;
pub mod dialect;
pub mod generate;
pub mod ident;
pub mod render;
pub mod schema;
pub mod source;
pub mod typemap;
