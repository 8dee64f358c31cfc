use std::fmt;

/// The C# types a column can be rendered as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CSharpType {
    Long,
    ByteArray,
    Bool,
    String,
    DateTime,
    Decimal,
    Double,
    Int,
    Float,
    Guid,
    Short,
    Byte,
    TimeSpan,
    DateTimeOffset,
    Object,
}

impl CSharpType {
    /// Map a native type name (case-insensitive) to a C# type. Anything unknown is `object`.
    pub fn from_native(native: &str) -> Self {
        match native.to_ascii_lowercase().as_str() {
            "bigint" | "int64" => CSharpType::Long,
            "binary" | "image" | "timestamp" | "varbinary" => CSharpType::ByteArray,
            "bit" => CSharpType::Bool,
            "char" | "nchar" | "nvarchar" | "varchar" | "text" | "ntext" | "string" => CSharpType::String,
            "datetime" | "smalldatetime" | "date" | "datetime2" => CSharpType::DateTime,
            "decimal" | "money" | "numeric" | "smallmoney" => CSharpType::Decimal,
            "float" => CSharpType::Double,
            "int" => CSharpType::Int,
            "real" => CSharpType::Float,
            "uniqueidentifier" => CSharpType::Guid,
            "smallint" => CSharpType::Short,
            "tinyint" => CSharpType::Byte,
            "time" => CSharpType::TimeSpan,
            "datetimeoffset" => CSharpType::DateTimeOffset,
            _ => CSharpType::Object,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CSharpType::Long => "long",
            CSharpType::ByteArray => "byte[]",
            CSharpType::Bool => "bool",
            CSharpType::String => "string",
            CSharpType::DateTime => "DateTime",
            CSharpType::Decimal => "decimal",
            CSharpType::Double => "double",
            CSharpType::Int => "int",
            CSharpType::Float => "float",
            CSharpType::Guid => "Guid",
            CSharpType::Short => "short",
            CSharpType::Byte => "byte",
            CSharpType::TimeSpan => "TimeSpan",
            CSharpType::DateTimeOffset => "DateTimeOffset",
            CSharpType::Object => "object",
        }
    }

    /// Reference types already admit null and never take a `?`.
    pub fn is_value_type(&self) -> bool {
        !matches!(self, CSharpType::String | CSharpType::ByteArray | CSharpType::Object)
    }
}

/// Type of a generated property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Nullable(CSharpType),
    Plain(CSharpType),
}

impl PropertyType {
    pub fn new(ty: CSharpType, is_nullable: bool) -> Self {
        if is_nullable && ty.is_value_type() {
            PropertyType::Nullable(ty)
        } else {
            PropertyType::Plain(ty)
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, PropertyType::Nullable(_))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Nullable(ty) => write!(f, "{}?", ty.name()),
            PropertyType::Plain(ty) => f.write_str(ty.name()),
        }
    }
}

/// Resolve the property type for a column. `native` must already be in the vocabulary above,
/// see [`crate::Dialect::normalize_type_name`].
pub fn map_type(native: &str, is_nullable: bool) -> PropertyType {
    PropertyType::new(CSharpType::from_native(native), is_nullable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const TABLE: &[(&str, &str)] = &[
        ("bigint", "long"),
        ("binary", "byte[]"),
        ("image", "byte[]"),
        ("timestamp", "byte[]"),
        ("varbinary", "byte[]"),
        ("bit", "bool"),
        ("char", "string"),
        ("nchar", "string"),
        ("nvarchar", "string"),
        ("varchar", "string"),
        ("text", "string"),
        ("ntext", "string"),
        ("string", "string"),
        ("datetime", "DateTime"),
        ("smalldatetime", "DateTime"),
        ("date", "DateTime"),
        ("datetime2", "DateTime"),
        ("decimal", "decimal"),
        ("money", "decimal"),
        ("numeric", "decimal"),
        ("smallmoney", "decimal"),
        ("float", "double"),
        ("int", "int"),
        ("int64", "long"),
        ("real", "float"),
        ("uniqueidentifier", "Guid"),
        ("smallint", "short"),
        ("tinyint", "byte"),
        ("time", "TimeSpan"),
        ("datetimeoffset", "DateTimeOffset"),
        ("geography", "object"),
        ("xml", "object"),
    ];

    #[test]
    fn test_mapping_table() {
        for (native, expected) in TABLE {
            assert_eq!(map_type(native, false).to_string(), *expected, "{native}");
            assert_eq!(map_type(&native.to_uppercase(), false).to_string(), *expected, "{native}");
        }
    }

    #[test]
    fn test_nullable_marker() {
        for (native, expected) in TABLE {
            let ty = map_type(native, true);
            let reference = matches!(*expected, "string" | "byte[]" | "object");
            if reference {
                assert_eq!(ty.to_string(), *expected, "{native}");
            } else {
                assert_eq!(ty.to_string(), format!("{expected}?"), "{native}");
            }
            assert_eq!(ty.is_nullable(), !reference);
        }
    }

    #[test]
    fn test_int64_is_long() {
        assert_matches!(map_type("Int64", true), PropertyType::Nullable(CSharpType::Long));
        assert_matches!(map_type("int", true), PropertyType::Nullable(CSharpType::Int));
    }
}
