use async_trait::async_trait;
use sqlx::{Column, TypeInfo};
use tracing::debug;

use crate::config::Settings;
use crate::{CatalogListing, ColumnDescriptor, ConnectionContext, Dialect, Error, Result, SchemaSource, TableDescriptor};

/// Reflects a live database through sqlx. Every call opens its own connection and closes it
/// before returning, on the error path as well.
#[derive(Clone, Debug)]
pub struct SqlxSource {
    url: String,
    schema: String,
    dialect: Dialect,
}

impl SqlxSource {
    pub fn new(url: impl Into<String>, schema: Option<String>) -> Result<Self> {
        let url = url.into();
        let dialect = Dialect::from_url(&url)?;
        let schema = schema.unwrap_or_else(|| dialect.default_schema().to_string());
        Ok(Self { url, schema, dialect })
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            url: settings.database_url.clone(),
            schema: settings.schema.clone(),
            dialect: settings.dialect,
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }
}

#[async_trait]
impl SchemaSource for SqlxSource {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn read_catalog(&self) -> Result<CatalogListing> {
        let (catalog, tables): (String, Vec<TableDescriptor>) = match self.dialect {
            #[cfg(feature = "postgres")]
            Dialect::Postgres => postgres::read_catalog(&self.url).await?,
            #[cfg(feature = "sqlite")]
            Dialect::Sqlite => sqlite::read_catalog(&self.url).await?,
            #[allow(unreachable_patterns)]
            other => return Err(Error::UnsupportedDatabase(other.to_string())),
        };
        debug!(catalog = %catalog, tables = tables.len(), "Read tables view");
        Ok(CatalogListing {
            context: ConnectionContext {
                catalog,
                schema: self.schema.clone(),
            },
            tables,
        })
    }

    async fn describe_table(&self, context: &ConnectionContext, table: &TableDescriptor) -> Result<Vec<ColumnDescriptor>> {
        let sql = self.dialect.describe_query(&context.schema, &table.name);
        debug!(%sql, "Describing table");
        match self.dialect {
            #[cfg(feature = "postgres")]
            Dialect::Postgres => postgres::describe(&self.url, &sql).await,
            #[cfg(feature = "sqlite")]
            Dialect::Sqlite => sqlite::describe(&self.url, &sql).await,
            #[allow(unreachable_patterns)]
            other => Err(Error::UnsupportedDatabase(other.to_string())),
        }
    }
}

/// Driver nullability is `None` when it cannot be inferred; treat that as nullable.
#[allow(dead_code)]
fn to_descriptors<C: Column>(columns: &[C], nullable: impl Fn(usize) -> Option<bool>) -> Vec<ColumnDescriptor> {
    columns
        .iter()
        .enumerate()
        .map(|(i, c)| ColumnDescriptor::new(c.name(), c.type_info().name(), nullable(i).unwrap_or(true)))
        .collect()
}

/// Close the connection whatever happened, but report the query error first.
#[allow(dead_code)]
fn finish<T>(result: Result<T>, closed: std::result::Result<(), sqlx::Error>) -> Result<T> {
    let value = result?;
    closed?;
    Ok(value)
}

#[cfg(feature = "postgres")]
mod postgres {
    use sqlx::{Connection, Executor, PgConnection};

    use super::{finish, to_descriptors};
    use crate::{ColumnDescriptor, Result, TableDescriptor};

    const CURRENT_CATALOG: &str = "SELECT current_database()::text";

    const TABLES_VIEW: &str = r#"
SELECT table_name::text, table_catalog::text
FROM information_schema.tables
WHERE table_schema NOT IN ('pg_catalog', 'information_schema')
ORDER BY table_name
"#;

    pub async fn read_catalog(url: &str) -> Result<(String, Vec<TableDescriptor>)> {
        let mut conn = PgConnection::connect(url).await?;
        let result = read(&mut conn).await;
        finish(result, conn.close().await)
    }

    async fn read(conn: &mut PgConnection) -> Result<(String, Vec<TableDescriptor>)> {
        let catalog: String = sqlx::query_scalar(CURRENT_CATALOG).fetch_one(&mut *conn).await?;
        let rows: Vec<(String, String)> = sqlx::query_as(TABLES_VIEW).fetch_all(&mut *conn).await?;
        let tables = rows
            .into_iter()
            .map(|(name, catalog)| TableDescriptor::new(name, catalog))
            .collect();
        Ok((catalog, tables))
    }

    pub async fn describe(url: &str, sql: &str) -> Result<Vec<ColumnDescriptor>> {
        let mut conn = PgConnection::connect(url).await?;
        let result = match (&mut conn).describe(sql).await {
            Ok(d) => Ok(to_descriptors(d.columns(), |i| d.nullable(i))),
            Err(e) => Err(e.into()),
        };
        finish(result, conn.close().await)
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use sqlx::{Connection, Executor, SqliteConnection};

    use super::{finish, to_descriptors};
    use crate::{ColumnDescriptor, Dialect, Result, TableDescriptor};

    /// The database a connection is opened on is always listed first.
    const CURRENT_CATALOG: &str = "SELECT name FROM pragma_database_list WHERE seq = 0";

    const DATABASES: &str = "SELECT name FROM pragma_database_list ORDER BY seq";

    pub async fn read_catalog(url: &str) -> Result<(String, Vec<TableDescriptor>)> {
        let mut conn = SqliteConnection::connect(url).await?;
        let result = read(&mut conn).await;
        finish(result, conn.close().await)
    }

    async fn read(conn: &mut SqliteConnection) -> Result<(String, Vec<TableDescriptor>)> {
        let catalog: String = sqlx::query_scalar(CURRENT_CATALOG).fetch_one(&mut *conn).await?;
        let databases: Vec<String> = sqlx::query_scalar(DATABASES).fetch_all(&mut *conn).await?;
        let mut tables = Vec::new();
        for database in databases {
            let sql = format!(
                "SELECT name FROM {}.sqlite_master WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%' ORDER BY name",
                Dialect::Sqlite.quote_ident(&database)
            );
            let names: Vec<String> = sqlx::query_scalar(&sql).fetch_all(&mut *conn).await?;
            tables.extend(names.into_iter().map(|name| TableDescriptor::new(name, database.clone())));
        }
        Ok((catalog, tables))
    }

    pub async fn describe(url: &str, sql: &str) -> Result<Vec<ColumnDescriptor>> {
        let mut conn = SqliteConnection::connect(url).await?;
        let result = match (&mut conn).describe(sql).await {
            Ok(d) => Ok(to_descriptors(d.columns(), |i| d.nullable(i))),
            Err(e) => Err(e.into()),
        };
        finish(result, conn.close().await)
    }
}
