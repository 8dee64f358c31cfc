use std::borrow::Cow;
use std::fmt;

use crate::{Error, Result};

/// The database engines we know how to reflect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    /// Pick the dialect from the scheme of a connection url.
    pub fn from_url(url: &str) -> Result<Self> {
        let scheme = url.split(':').next().unwrap_or_default().to_ascii_lowercase();
        match scheme.as_str() {
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "sqlite" => Ok(Dialect::Sqlite),
            _ => Err(Error::UnsupportedDatabase(scheme)),
        }
    }

    pub fn default_schema(&self) -> &'static str {
        match self {
            Dialect::Postgres => "public",
            Dialect::Sqlite => "main",
        }
    }

    /// Quote an identifier for use in a query. Both engines accept ANSI double quotes.
    pub fn quote_ident(&self, ident: &str) -> String {
        format!("\"{}\"", ident.replace('"', "\"\""))
    }

    /// A query that selects every column of the table and never returns a row, so preparing it
    /// yields the column metadata without touching the data.
    pub fn describe_query(&self, schema: &str, table: &str) -> String {
        format!(
            "SELECT * FROM {}.{} WHERE 1 = 0",
            self.quote_ident(schema),
            self.quote_ident(table)
        )
    }

    /// Translate a type name as reported by the driver into the vocabulary of
    /// [`crate::typemap::CSharpType::from_native`]. Unknown names are passed through lowercased.
    pub fn normalize_type_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        let lower = name.to_ascii_lowercase();
        let alias = match self {
            Dialect::Postgres => match lower.as_str() {
                "int2" => Some("smallint"),
                "int4" => Some("int"),
                "int8" => Some("bigint"),
                "bool" | "boolean" => Some("bit"),
                "bytea" => Some("varbinary"),
                "float4" => Some("real"),
                "float8" | "double precision" => Some("float"),
                "timestamp" => Some("datetime2"),
                "timestamptz" => Some("datetimeoffset"),
                "uuid" => Some("uniqueidentifier"),
                "name" | "bpchar" | "\"char\"" | "citext" => Some("varchar"),
                _ => None,
            },
            Dialect::Sqlite => match lower.as_str() {
                "integer" => Some("bigint"),
                "real" => Some("float"),
                "blob" => Some("varbinary"),
                "boolean" => Some("bit"),
                _ => None,
            },
        };
        match alias {
            Some(alias) => Cow::Borrowed(alias),
            None if lower == name => Cow::Borrowed(name),
            None => Cow::Owned(lower),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Postgres => write!(f, "postgres"),
            Dialect::Sqlite => write!(f, "sqlite"),
        }
    }
}
