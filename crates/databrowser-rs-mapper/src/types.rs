//! Column type descriptors.
//!
//! Each [`ColumnType`] carries a precomputed identifier *lineage*: the list
//! of type identifiers from the concrete type up through its ancestors,
//! most specific first. Converter lookup walks this list instead of
//! introspecting a type hierarchy at call time, so the chain is resolved
//! exactly once, when the column metadata is constructed.
//!
//! Type-specific attributes the converters consult (character length,
//! enumerated values, decimal scale, signedness) live alongside the
//! lineage rather than on separate subtype structs.

use serde::Serialize;

/// A type identifier: a module-qualified name plus its short form.
///
/// Converter registrations may target either form; the qualified form wins
/// across an entire lineage before short names are consulted at all.
/// Identifiers are static data, so serialization is one-way: schemas are
/// exported for inspection, never read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeIdent {
    /// The module-qualified identifier, e.g. `"types.String"`.
    pub qualified: &'static str,
    /// The short identifier, e.g. `"String"`.
    pub name: &'static str,
}

impl TypeIdent {
    /// Creates a type identifier from its qualified and short forms.
    pub const fn new(qualified: &'static str, name: &'static str) -> Self {
        Self { qualified, name }
    }
}

/// Root of every lineage.
pub const TYPE_ENGINE: TypeIdent = TypeIdent::new("types.TypeEngine", "TypeEngine");
/// Bounded text.
pub const STRING: TypeIdent = TypeIdent::new("types.String", "String");
/// Bounded text, unicode-aware.
pub const UNICODE: TypeIdent = TypeIdent::new("types.Unicode", "Unicode");
/// Unbounded text.
pub const TEXT: TypeIdent = TypeIdent::new("types.Text", "Text");
/// Unbounded text, unicode-aware.
pub const UNICODE_TEXT: TypeIdent = TypeIdent::new("types.UnicodeText", "UnicodeText");
/// Raw binary data.
pub const BINARY: TypeIdent = TypeIdent::new("types.Binary", "Binary");
/// Raw binary data with an explicit length bound.
pub const LARGE_BINARY: TypeIdent = TypeIdent::new("types.LargeBinary", "LargeBinary");
/// Boolean.
pub const BOOLEAN: TypeIdent = TypeIdent::new("types.Boolean", "Boolean");
/// Date without time.
pub const DATE: TypeIdent = TypeIdent::new("types.Date", "Date");
/// Date and time.
pub const DATE_TIME: TypeIdent = TypeIdent::new("types.DateTime", "DateTime");
/// Time of day.
pub const TIME: TypeIdent = TypeIdent::new("types.Time", "Time");
/// 32-bit integer.
pub const INTEGER: TypeIdent = TypeIdent::new("types.Integer", "Integer");
/// 16-bit integer.
pub const SMALL_INTEGER: TypeIdent = TypeIdent::new("types.SmallInteger", "SmallInteger");
/// 64-bit integer.
pub const BIG_INTEGER: TypeIdent = TypeIdent::new("types.BigInteger", "BigInteger");
/// Fixed-precision decimal.
pub const NUMERIC: TypeIdent = TypeIdent::new("types.Numeric", "Numeric");
/// Floating-point number.
pub const FLOAT: TypeIdent = TypeIdent::new("types.Float", "Float");
/// String constrained to an enumerated set of values.
pub const ENUM: TypeIdent = TypeIdent::new("types.Enum", "Enum");
/// MySQL year-only integer.
pub const MYSQL_YEAR: TypeIdent = TypeIdent::new("dialects.mysql.Year", "Year");
/// PostgreSQL IPv4/IPv6 address.
pub const PG_INET: TypeIdent = TypeIdent::new("dialects.postgresql.Inet", "Inet");
/// PostgreSQL MAC address.
pub const PG_MACADDR: TypeIdent = TypeIdent::new("dialects.postgresql.MacAddr", "MacAddr");
/// PostgreSQL UUID.
pub const PG_UUID: TypeIdent = TypeIdent::new("dialects.postgresql.Uuid", "Uuid");
/// PostgreSQL homogeneous array.
pub const PG_ARRAY: TypeIdent = TypeIdent::new("dialects.postgresql.Array", "Array");

/// The runtime type of a column, as reported by the mapping layer.
///
/// Constructed through the per-type constructors below, each of which
/// fixes the identifier lineage for that concrete type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnType {
    lineage: Vec<TypeIdent>,
    /// Maximum character length, for bounded text types.
    pub length: Option<usize>,
    /// Enumerated values, for enumeration types.
    pub enums: Option<Vec<String>>,
    /// Declared decimal scale, for fixed-precision types.
    pub scale: Option<u32>,
    /// Whether the type is unsigned (integer dialects).
    pub unsigned: bool,
    /// Element type, for array types.
    pub item: Option<Box<ColumnType>>,
}

impl ColumnType {
    fn with_lineage(lineage: Vec<TypeIdent>) -> Self {
        debug_assert!(!lineage.is_empty());
        Self {
            lineage,
            length: None,
            enums: None,
            scale: None,
            unsigned: false,
            item: None,
        }
    }

    /// Creates a column type from an explicit lineage, most derived first.
    ///
    /// This is the escape hatch for dialect types this crate does not ship
    /// a constructor for; the built-in constructors are preferred.
    pub fn from_lineage(lineage: Vec<TypeIdent>) -> Self {
        Self::with_lineage(lineage)
    }

    /// Bounded text.
    pub fn string(length: Option<usize>) -> Self {
        let mut t = Self::with_lineage(vec![STRING, TYPE_ENGINE]);
        t.length = length;
        t
    }

    /// Bounded unicode text.
    pub fn unicode(length: Option<usize>) -> Self {
        let mut t = Self::with_lineage(vec![UNICODE, STRING, TYPE_ENGINE]);
        t.length = length;
        t
    }

    /// Unbounded text.
    pub fn text() -> Self {
        Self::with_lineage(vec![TEXT, STRING, TYPE_ENGINE])
    }

    /// Unbounded unicode text.
    pub fn unicode_text() -> Self {
        Self::with_lineage(vec![UNICODE_TEXT, TEXT, STRING, TYPE_ENGINE])
    }

    /// Raw binary data.
    pub fn large_binary() -> Self {
        Self::with_lineage(vec![LARGE_BINARY, BINARY, TYPE_ENGINE])
    }

    /// Boolean.
    pub fn boolean() -> Self {
        Self::with_lineage(vec![BOOLEAN, TYPE_ENGINE])
    }

    /// Date without time.
    pub fn date() -> Self {
        Self::with_lineage(vec![DATE, TYPE_ENGINE])
    }

    /// Date and time.
    pub fn date_time() -> Self {
        Self::with_lineage(vec![DATE_TIME, TYPE_ENGINE])
    }

    /// Time of day.
    pub fn time() -> Self {
        Self::with_lineage(vec![TIME, TYPE_ENGINE])
    }

    /// 32-bit integer.
    pub fn integer() -> Self {
        Self::with_lineage(vec![INTEGER, TYPE_ENGINE])
    }

    /// 16-bit integer.
    pub fn small_integer() -> Self {
        Self::with_lineage(vec![SMALL_INTEGER, INTEGER, TYPE_ENGINE])
    }

    /// 64-bit integer.
    pub fn big_integer() -> Self {
        Self::with_lineage(vec![BIG_INTEGER, INTEGER, TYPE_ENGINE])
    }

    /// Fixed-precision decimal with the given scale.
    pub fn numeric(scale: Option<u32>) -> Self {
        let mut t = Self::with_lineage(vec![NUMERIC, TYPE_ENGINE]);
        t.scale = scale;
        t
    }

    /// Floating-point number.
    pub fn float() -> Self {
        Self::with_lineage(vec![FLOAT, NUMERIC, TYPE_ENGINE])
    }

    /// String constrained to an enumerated set of values.
    pub fn enumeration(values: Vec<String>) -> Self {
        let mut t = Self::with_lineage(vec![ENUM, STRING, TYPE_ENGINE]);
        t.enums = Some(values);
        t
    }

    /// MySQL year-only integer.
    pub fn mysql_year() -> Self {
        Self::with_lineage(vec![MYSQL_YEAR, INTEGER, TYPE_ENGINE])
    }

    /// PostgreSQL IPv4/IPv6 address.
    pub fn pg_inet() -> Self {
        Self::with_lineage(vec![PG_INET, TYPE_ENGINE])
    }

    /// PostgreSQL MAC address.
    pub fn pg_macaddr() -> Self {
        Self::with_lineage(vec![PG_MACADDR, TYPE_ENGINE])
    }

    /// PostgreSQL UUID.
    pub fn pg_uuid() -> Self {
        Self::with_lineage(vec![PG_UUID, TYPE_ENGINE])
    }

    /// PostgreSQL homogeneous array of the given element type.
    pub fn pg_array(item: ColumnType) -> Self {
        let mut t = Self::with_lineage(vec![PG_ARRAY, TYPE_ENGINE]);
        t.item = Some(Box::new(item));
        t
    }

    /// Marks an integer type as unsigned.
    #[must_use]
    pub const fn with_unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    /// The identifier lineage, most derived first.
    pub fn lineage(&self) -> &[TypeIdent] {
        &self.lineage
    }

    /// The concrete (most derived) type identifier.
    pub fn concrete(&self) -> TypeIdent {
        self.lineage[0]
    }

    /// Returns `true` if the boolean type appears anywhere in the lineage.
    pub fn is_boolean(&self) -> bool {
        self.lineage.iter().any(|t| *t == BOOLEAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_is_first() {
        let t = ColumnType::unicode(Some(120));
        assert_eq!(t.concrete(), UNICODE);
        assert_eq!(t.lineage(), &[UNICODE, STRING, TYPE_ENGINE]);
    }

    #[test]
    fn test_string_length() {
        let t = ColumnType::string(Some(50));
        assert_eq!(t.length, Some(50));
        assert_eq!(ColumnType::text().length, None);
    }

    #[test]
    fn test_enumeration_descends_from_string() {
        let t = ColumnType::enumeration(vec!["a".into(), "b".into()]);
        assert!(t.lineage().contains(&STRING));
        assert_eq!(t.enums.as_deref(), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn test_big_integer_descends_from_integer() {
        let t = ColumnType::big_integer();
        assert_eq!(t.lineage(), &[BIG_INTEGER, INTEGER, TYPE_ENGINE]);
    }

    #[test]
    fn test_float_descends_from_numeric() {
        let t = ColumnType::float();
        assert!(t.lineage().contains(&NUMERIC));
    }

    #[test]
    fn test_is_boolean() {
        assert!(ColumnType::boolean().is_boolean());
        assert!(!ColumnType::integer().is_boolean());
    }

    #[test]
    fn test_unsigned_builder() {
        let t = ColumnType::integer().with_unsigned();
        assert!(t.unsigned);
        assert!(!ColumnType::integer().unsigned);
    }

    #[test]
    fn test_array_item_type() {
        let t = ColumnType::pg_array(ColumnType::text());
        assert_eq!(t.concrete(), PG_ARRAY);
        assert_eq!(t.item.as_deref().map(ColumnType::concrete), Some(TEXT));
    }

    #[test]
    fn test_from_lineage_escape_hatch() {
        const CITEXT: TypeIdent = TypeIdent::new("dialects.postgresql.CiText", "CiText");
        let t = ColumnType::from_lineage(vec![CITEXT, TEXT, STRING, TYPE_ENGINE]);
        assert_eq!(t.concrete(), CITEXT);
        assert!(t.lineage().contains(&STRING));
    }
}
