use crate::{
    codec,
    errors::AccountCodecError,
    schema::{EnumDescriptor, Primitive, SchemaDescriptor},
    value::{Record, Value},
};

/// Rust enum stored as a fixed width ordinal.
pub trait OrdinalEnum: Sized + Copy {
    const NAME: &'static str;
    const ORDINAL_WIDTH: Primitive = Primitive::U8;
    /// Stable `(variant, ordinal)` table, the wire contract of the enum.
    const VARIANTS: &'static [(&'static str, u32)];

    fn ordinal(self) -> u32;

    fn from_ordinal(ordinal: u32) -> Option<Self>;

    fn descriptor() -> EnumDescriptor {
        EnumDescriptor::with_ordinals(
            Self::NAME,
            Self::VARIANTS
                .iter()
                .map(|(name, ordinal)| (name.to_string(), *ordinal)),
        )
        .ordinal_width(Self::ORDINAL_WIDTH)
    }

    fn variant_name(self) -> &'static str {
        let ordinal = self.ordinal();
        Self::VARIANTS
            .iter()
            .find(|(_, o)| *o == ordinal)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    fn to_value(self) -> Value {
        Value::Enum(self.ordinal())
    }

    fn from_value(field: &str, value: Value) -> Result<Self, AccountCodecError> {
        match value {
            Value::Enum(ordinal) => Self::from_ordinal(ordinal).ok_or_else(|| {
                AccountCodecError::InvalidEnumOrdinal {
                    field: field.to_string(),
                    ordinal,
                }
            }),
            _ => Err(AccountCodecError::FieldTypeMismatch {
                field: field.to_string(),
                expected: format!("enum {}", Self::NAME),
            }),
        }
    }
}

/// Typed account record with a static schema.
///
/// Implementors only map between `Self` and a [`Record`]; all offset
/// arithmetic lives in [`codec`].
pub trait AccountLayout: Sized {
    fn schema() -> &'static SchemaDescriptor;

    fn to_record(&self) -> Record;

    fn from_record(record: Record) -> Result<Self, AccountCodecError>;

    fn byte_size() -> usize {
        Self::schema().byte_size()
    }

    /// Returns the account and the offset up to which `buffer` was read.
    fn deserialize(buffer: &[u8], offset: usize) -> Result<(Self, usize), AccountCodecError> {
        let (record, offset) = codec::deserialize(buffer, offset, Self::schema())?;
        Ok((Self::from_record(record)?, offset))
    }

    /// Returns the encoded account and the number of bytes written.
    fn serialize(&self) -> Result<(Vec<u8>, usize), AccountCodecError> {
        codec::serialize(&self.to_record(), Self::schema())
    }

    fn has_correct_byte_size(buffer: &[u8], offset: usize) -> bool {
        codec::has_correct_byte_size(buffer, offset, Self::schema())
    }
}
