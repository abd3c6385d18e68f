use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SchemaError {
    #[error("Field `{0}` has a zero byte width.")]
    ZeroWidthField(String),
    #[error("Byte width of field `{0}` overflows usize.")]
    WidthOverflow(String),
    #[error("Field `{0}` is declared more than once.")]
    DuplicateField(String),
    #[error("Enum `{0}` declares no variants.")]
    EmptyEnum(String),
    #[error("Enum `{0}` declares variant `{1}` more than once.")]
    DuplicateVariant(String, String),
    #[error("Enum `{0}` assigns ordinal {1} to more than one variant.")]
    DuplicateOrdinal(String, u32),
    #[error("Ordinal {1} of enum `{0}` does not fit in {2} bytes.")]
    OrdinalOutOfRange(String, u32, usize),
    #[error("Enum `{0}` needs an unsigned ordinal of 1, 2 or 4 bytes.")]
    InvalidOrdinalWidth(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AccountCodecError {
    #[error("Invalid schema: {0}")]
    Schema(#[from] SchemaError),
    #[error("Buffer holds {available} bytes, {required} bytes required.")]
    BufferUnderrun { required: usize, available: usize },
    #[error("Ordinal {ordinal} of field `{field}` has no enum variant.")]
    InvalidEnumOrdinal { field: String, ordinal: u32 },
    #[error("Field `{field}` expects {expected} elements, got {actual}.")]
    FieldArity {
        field: String,
        expected: usize,
        actual: usize,
    },
    #[error("Field `{field}` expects a value of kind {expected}.")]
    FieldTypeMismatch { field: String, expected: String },
    #[error("Record is missing field `{0}`.")]
    MissingField(String),
    #[error("Record field `{0}` is not part of the schema.")]
    UnknownField(String),
    #[error("Invalid bool byte {byte} in field `{field}`.")]
    InvalidBool { field: String, byte: u8 },
}

impl From<SchemaError> for u32 {
    fn from(e: SchemaError) -> u32 {
        match e {
            SchemaError::ZeroWidthField(_) => 16001,
            SchemaError::WidthOverflow(_) => 16002,
            SchemaError::DuplicateField(_) => 16003,
            SchemaError::EmptyEnum(_) => 16004,
            SchemaError::DuplicateVariant(_, _) => 16005,
            SchemaError::DuplicateOrdinal(_, _) => 16006,
            SchemaError::OrdinalOutOfRange(_, _, _) => 16007,
            SchemaError::InvalidOrdinalWidth(_) => 16008,
        }
    }
}

impl From<AccountCodecError> for u32 {
    fn from(e: AccountCodecError) -> u32 {
        match e {
            AccountCodecError::Schema(e) => e.into(),
            AccountCodecError::BufferUnderrun { .. } => 16101,
            AccountCodecError::InvalidEnumOrdinal { .. } => 16102,
            AccountCodecError::FieldArity { .. } => 16103,
            AccountCodecError::FieldTypeMismatch { .. } => 16104,
            AccountCodecError::MissingField(_) => 16105,
            AccountCodecError::UnknownField(_) => 16106,
            AccountCodecError::InvalidBool { .. } => 16107,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            u32::from(AccountCodecError::BufferUnderrun {
                required: 71,
                available: 70
            }),
            16101
        );
        assert_eq!(
            u32::from(AccountCodecError::Schema(SchemaError::EmptyEnum(
                "State".to_string()
            ))),
            16004
        );
        assert_eq!(
            AccountCodecError::FieldArity {
                field: "data".to_string(),
                expected: 32,
                actual: 31
            }
            .to_string(),
            "Field `data` expects 32 elements, got 31."
        );
    }
}
