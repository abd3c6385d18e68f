use crate::{errors::AccountCodecError, pubkey::Pubkey};

/// Decoded value of one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Pubkey(Pubkey),
    Array(Vec<Value>),
    /// Enum variant by ordinal.
    Enum(u32),
    Struct(Record),
}

impl Value {
    pub fn bytes(bytes: &[u8]) -> Self {
        Value::Array(bytes.iter().copied().map(Value::U8).collect())
    }

    /// Returns the raw bytes of a `u8` array value.
    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::U8(b) => Some(*b),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_value {
    ($($t:ty => $variant:ident),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::$variant(value)
                }
            }

            impl FromValue for $t {
                fn from_value(field: &str, value: Value) -> Result<Self, AccountCodecError> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        _ => Err(AccountCodecError::FieldTypeMismatch {
                            field: field.to_string(),
                            expected: stringify!($t).to_string(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_from_for_value!(
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    Pubkey => Pubkey,
    Record => Struct
);

impl<const N: usize> From<[u8; N]> for Value {
    fn from(bytes: [u8; N]) -> Self {
        Value::bytes(&bytes)
    }
}

/// Typed extraction of a field value.
pub trait FromValue: Sized {
    fn from_value(field: &str, value: Value) -> Result<Self, AccountCodecError>;
}

impl FromValue for Value {
    fn from_value(_field: &str, value: Value) -> Result<Self, AccountCodecError> {
        Ok(value)
    }
}

impl<const N: usize> FromValue for [u8; N] {
    fn from_value(field: &str, value: Value) -> Result<Self, AccountCodecError> {
        let bytes = value
            .as_bytes()
            .ok_or_else(|| AccountCodecError::FieldTypeMismatch {
                field: field.to_string(),
                expected: format!("[u8; {}]", N),
            })?;
        let actual = bytes.len();
        bytes
            .try_into()
            .map_err(|_| AccountCodecError::FieldArity {
                field: field.to_string(),
                expected: N,
                actual,
            })
    }
}

/// Ordered set of named field values.
///
/// Equality compares fields by name, insertion order is ignored.
#[derive(Debug, Clone, Default, Eq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Replaces the previous value if `name` is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let index = self.fields.iter().position(|(n, _)| n == name)?;
        Some(self.fields.remove(index).1)
    }

    /// Removes `name` and converts it into `T`.
    pub fn take<T: FromValue>(&mut self, name: &str) -> Result<T, AccountCodecError> {
        let value = self
            .remove(name)
            .ok_or_else(|| AccountCodecError::MissingField(name.to_string()))?;
        T::from_value(name, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}
