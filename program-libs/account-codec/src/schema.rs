use std::{collections::HashSet, fmt, sync::Arc};

use crate::{errors::SchemaError, pubkey::PUBKEY_BYTES};

/// Fixed width scalar types. Multi byte scalars are little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
}

impl Primitive {
    pub const fn width(&self) -> usize {
        match self {
            Primitive::Bool | Primitive::U8 | Primitive::I8 => 1,
            Primitive::U16 | Primitive::I16 => 2,
            Primitive::U32 | Primitive::I32 => 4,
            Primitive::U64 | Primitive::I64 => 8,
            Primitive::U128 | Primitive::I128 => 16,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::U8 => "u8",
            Primitive::U16 => "u16",
            Primitive::U32 => "u32",
            Primitive::U64 => "u64",
            Primitive::U128 => "u128",
            Primitive::I8 => "i8",
            Primitive::I16 => "i16",
            Primitive::I32 => "i32",
            Primitive::I64 => "i64",
            Primitive::I128 => "i128",
        }
    }

    const fn is_ordinal_width(&self) -> bool {
        matches!(self, Primitive::U8 | Primitive::U16 | Primitive::U32)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumVariant {
    pub name: String,
    pub ordinal: u32,
}

/// Enum encoded as a fixed width unsigned ordinal.
///
/// Ordinals live in an explicit table so reordering variants in code cannot
/// silently change the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: String,
    ordinal_width: Primitive,
    variants: Vec<EnumVariant>,
}

impl EnumDescriptor {
    /// Assigns ordinals 0.. in declaration order.
    pub fn new<V: Into<String>>(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::with_ordinals(
            name,
            variants
                .into_iter()
                .zip(0u32..)
                .map(|(variant, ordinal)| (variant.into(), ordinal)),
        )
    }

    pub fn with_ordinals(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = (String, u32)>,
    ) -> Self {
        Self {
            name: name.into(),
            ordinal_width: Primitive::U8,
            variants: variants
                .into_iter()
                .map(|(name, ordinal)| EnumVariant { name, ordinal })
                .collect(),
        }
    }

    pub fn ordinal_width(mut self, width: Primitive) -> Self {
        self.ordinal_width = width;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> Primitive {
        self.ordinal_width
    }

    pub fn variants(&self) -> &[EnumVariant] {
        &self.variants
    }

    pub fn variant(&self, ordinal: u32) -> Option<&EnumVariant> {
        self.variants.iter().find(|v| v.ordinal == ordinal)
    }

    pub fn ordinal_of(&self, name: &str) -> Option<u32> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.ordinal)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if !self.ordinal_width.is_ordinal_width() {
            return Err(SchemaError::InvalidOrdinalWidth(self.name.clone()));
        }
        if self.variants.is_empty() {
            return Err(SchemaError::EmptyEnum(self.name.clone()));
        }
        let width = self.ordinal_width.width();
        let max = if width >= 4 {
            u32::MAX
        } else {
            (1u32 << (width * 8)) - 1
        };
        let mut names = HashSet::new();
        let mut ordinals = HashSet::new();
        for variant in self.variants.iter() {
            if !names.insert(variant.name.as_str()) {
                return Err(SchemaError::DuplicateVariant(
                    self.name.clone(),
                    variant.name.clone(),
                ));
            }
            if !ordinals.insert(variant.ordinal) {
                return Err(SchemaError::DuplicateOrdinal(
                    self.name.clone(),
                    variant.ordinal,
                ));
            }
            if variant.ordinal > max {
                return Err(SchemaError::OrdinalOutOfRange(
                    self.name.clone(),
                    variant.ordinal,
                    width,
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Primitive(Primitive),
    /// 32 raw identifier bytes.
    Pubkey,
    FixedArray {
        element: Primitive,
        len: usize,
    },
    Enum(EnumDescriptor),
    /// Nested record, already validated by [`SchemaDescriptor::describe`].
    Composite(Arc<SchemaDescriptor>),
}

impl FieldKind {
    /// `None` if the width overflows.
    pub fn byte_width(&self) -> Option<usize> {
        match self {
            FieldKind::Primitive(p) => Some(p.width()),
            FieldKind::Pubkey => Some(PUBKEY_BYTES),
            FieldKind::FixedArray { element, len } => element.width().checked_mul(*len),
            FieldKind::Enum(descriptor) => Some(descriptor.width().width()),
            FieldKind::Composite(schema) => Some(schema.byte_size()),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Primitive(p) => write!(f, "{}", p.name()),
            FieldKind::Pubkey => write!(f, "pubkey"),
            FieldKind::FixedArray { element, len } => write!(f, "[{}; {}]", element.name(), len),
            FieldKind::Enum(descriptor) => write!(f, "enum {}", descriptor.name()),
            FieldKind::Composite(schema) => write!(f, "struct {}", schema.type_name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    byte_width: usize,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        // Width is checked again in `describe`, overflow maps to 0 here.
        let byte_width = kind.byte_width().unwrap_or(0);
        Self {
            name: name.into(),
            kind,
            byte_width,
        }
    }

    pub fn primitive(name: impl Into<String>, primitive: Primitive) -> Self {
        Self::new(name, FieldKind::Primitive(primitive))
    }

    pub fn pubkey(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Pubkey)
    }

    pub fn fixed_array(name: impl Into<String>, element: Primitive, len: usize) -> Self {
        Self::new(name, FieldKind::FixedArray { element, len })
    }

    pub fn enumeration(name: impl Into<String>, descriptor: EnumDescriptor) -> Self {
        Self::new(name, FieldKind::Enum(descriptor))
    }

    pub fn composite(name: impl Into<String>, schema: Arc<SchemaDescriptor>) -> Self {
        Self::new(name, FieldKind::Composite(schema))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn byte_width(&self) -> usize {
        self.byte_width
    }

    /// Checks the enum table and width of this field, returns the width.
    pub fn validate(&self) -> Result<usize, SchemaError> {
        if let FieldKind::Enum(descriptor) = &self.kind {
            descriptor.validate()?;
        }
        let width = self
            .kind
            .byte_width()
            .ok_or_else(|| SchemaError::WidthOverflow(self.name.clone()))?;
        if width == 0 {
            return Err(SchemaError::ZeroWidthField(self.name.clone()));
        }
        Ok(width)
    }
}

/// Immutable wire layout of one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    type_name: String,
    fields: Vec<FieldDescriptor>,
    offsets: Vec<usize>,
    byte_size: usize,
}

impl SchemaDescriptor {
    pub fn describe(
        type_name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Result<Self, SchemaError> {
        let mut names = HashSet::new();
        let mut offsets = Vec::with_capacity(fields.len());
        let mut byte_size = 0usize;
        for field in fields.iter() {
            if !names.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
            let width = field.validate()?;
            offsets.push(byte_size);
            byte_size = byte_size
                .checked_add(width)
                .ok_or_else(|| SchemaError::WidthOverflow(field.name.clone()))?;
        }
        Ok(Self {
            type_name: type_name.into(),
            fields,
            offsets,
            byte_size,
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Byte offset of `name` from the start of the record.
    pub fn field_offset(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.name == name)
            .map(|i| self.offsets[i])
    }

    /// Fields paired with their offsets, in declaration order.
    pub fn iter_with_offsets(&self) -> impl Iterator<Item = (usize, &FieldDescriptor)> {
        self.offsets.iter().copied().zip(self.fields.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_enum() -> EnumDescriptor {
        EnumDescriptor::new("State", ["Uninitialized", "Initialized", "Updated"])
    }

    #[test]
    fn test_describe_offsets() {
        let schema = SchemaDescriptor::describe(
            "MyState",
            vec![
                FieldDescriptor::primitive("is_initialized", Primitive::U8),
                FieldDescriptor::pubkey("owner"),
                FieldDescriptor::enumeration("state", state_enum()),
                FieldDescriptor::fixed_array("data", Primitive::U8, 32),
                FieldDescriptor::primitive("update_count", Primitive::U32),
                FieldDescriptor::primitive("bump", Primitive::U8),
            ],
        )
        .unwrap();
        assert_eq!(schema.byte_size(), 71);
        assert_eq!(schema.field_offset("owner"), Some(1));
        assert_eq!(schema.field_offset("state"), Some(33));
        assert_eq!(schema.field_offset("data"), Some(34));
        assert_eq!(schema.field_offset("update_count"), Some(66));
        assert_eq!(schema.field_offset("bump"), Some(70));
        assert_eq!(schema.field_offset("missing"), None);
    }

    #[test]
    fn test_empty_schema() {
        let schema = SchemaDescriptor::describe("Empty", vec![]).unwrap();
        assert_eq!(schema.byte_size(), 0);
        assert!(schema.is_empty());
    }

    #[test]
    fn test_zero_width_fields() {
        let result = SchemaDescriptor::describe(
            "Bad",
            vec![FieldDescriptor::fixed_array("data", Primitive::U8, 0)],
        );
        assert_eq!(
            result,
            Err(SchemaError::ZeroWidthField("data".to_string()))
        );

        let empty = Arc::new(SchemaDescriptor::describe("Empty", vec![]).unwrap());
        let result = SchemaDescriptor::describe(
            "Outer",
            vec![FieldDescriptor::composite("inner", empty)],
        );
        assert_eq!(
            result,
            Err(SchemaError::ZeroWidthField("inner".to_string()))
        );
    }

    #[test]
    fn test_width_overflow() {
        let result = SchemaDescriptor::describe(
            "Huge",
            vec![FieldDescriptor::fixed_array("data", Primitive::U64, usize::MAX)],
        );
        assert_eq!(result, Err(SchemaError::WidthOverflow("data".to_string())));
    }

    #[test]
    fn test_duplicate_field() {
        let result = SchemaDescriptor::describe(
            "Dup",
            vec![
                FieldDescriptor::primitive("bump", Primitive::U8),
                FieldDescriptor::primitive("bump", Primitive::U16),
            ],
        );
        assert_eq!(result, Err(SchemaError::DuplicateField("bump".to_string())));
    }

    #[test]
    fn test_invalid_enums() {
        let describe = |descriptor: EnumDescriptor| {
            SchemaDescriptor::describe(
                "E",
                vec![FieldDescriptor::enumeration("state", descriptor)],
            )
        };
        assert_eq!(
            describe(EnumDescriptor::new("State", Vec::<String>::new())),
            Err(SchemaError::EmptyEnum("State".to_string()))
        );
        assert_eq!(
            describe(state_enum().ordinal_width(Primitive::I8)),
            Err(SchemaError::InvalidOrdinalWidth("State".to_string()))
        );
        assert_eq!(
            describe(EnumDescriptor::with_ordinals(
                "State",
                [("A".to_string(), 0), ("B".to_string(), 0)]
            )),
            Err(SchemaError::DuplicateOrdinal("State".to_string(), 0))
        );
        assert_eq!(
            describe(EnumDescriptor::with_ordinals(
                "State",
                [("A".to_string(), 0), ("A".to_string(), 1)]
            )),
            Err(SchemaError::DuplicateVariant(
                "State".to_string(),
                "A".to_string()
            ))
        );
        assert_eq!(
            describe(EnumDescriptor::with_ordinals(
                "State",
                [("A".to_string(), 256)]
            )),
            Err(SchemaError::OrdinalOutOfRange("State".to_string(), 256, 1))
        );
        let wide = describe(
            EnumDescriptor::with_ordinals("State", [("A".to_string(), 256)])
                .ordinal_width(Primitive::U16),
        )
        .unwrap();
        assert_eq!(wide.byte_size(), 2);
    }

    #[test]
    fn test_nested_composite_width() {
        let inner = Arc::new(
            SchemaDescriptor::describe(
                "Inner",
                vec![
                    FieldDescriptor::primitive("a", Primitive::U64),
                    FieldDescriptor::primitive("b", Primitive::Bool),
                ],
            )
            .unwrap(),
        );
        let outer = SchemaDescriptor::describe(
            "Outer",
            vec![
                FieldDescriptor::composite("inner", inner),
                FieldDescriptor::primitive("c", Primitive::I16),
            ],
        )
        .unwrap();
        assert_eq!(outer.byte_size(), 11);
        assert_eq!(outer.field_offset("c"), Some(9));
        assert_eq!(
            outer.field("inner").unwrap().kind().to_string(),
            "struct Inner"
        );
    }
}
