use crate::ident::sanitize_identifier;
use crate::typemap::{map_type, PropertyType};
use crate::{ColumnDescriptor, Dialect, Error, Result};

/// File extension of generated models.
pub const MODEL_EXTENSION: &str = "cs";

/// A single rendered property line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    pub ty: PropertyType,
    pub ident: String,
}

impl Property {
    pub fn from_column(column: &ColumnDescriptor, dialect: Dialect) -> Result<Self> {
        let ident = sanitize_identifier(&column.name);
        if ident.is_empty() {
            return Err(Error::EmptyIdentifier {
                column: column.name.clone(),
            });
        }
        let native = dialect.normalize_type_name(&column.native_type_name);
        Ok(Self {
            ty: map_type(&native, column.is_nullable),
            ident,
        })
    }
}

/// Render the C# class for a table. The class takes the table name verbatim, properties keep
/// the driver's column order.
pub fn render_model(table: &str, columns: &[ColumnDescriptor], dialect: Dialect) -> Result<String> {
    let properties = columns
        .iter()
        .map(|c| Property::from_column(c, dialect))
        .collect::<Result<Vec<_>>>()?;

    let mut code = format!("using System;\n\npublic class {table}\n{{\n");
    for p in &properties {
        code.push_str(&format!("    public {} {} {{ get; set; }}\n", p.ty, p.ident));
    }
    code.push_str("}\n");
    Ok(code)
}
