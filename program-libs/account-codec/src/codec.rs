use zerocopy::{
    little_endian::{I128, I16, I32, I64, U128, U16, U32, U64},
    FromBytes, IntoBytes,
};

use crate::{
    errors::AccountCodecError,
    pubkey::Pubkey,
    schema::{EnumDescriptor, FieldDescriptor, FieldKind, Primitive, SchemaDescriptor},
    value::{Record, Value},
};

/// Decodes one record starting at `offset`.
///
/// Returns the record and the offset right after it, so records packed back
/// to back can be decoded by feeding the returned offset into the next call.
pub fn deserialize(
    buffer: &[u8],
    offset: usize,
    schema: &SchemaDescriptor,
) -> Result<(Record, usize), AccountCodecError> {
    let end = checked_end(buffer.len(), offset, schema.byte_size())?;
    let record = read_record(&buffer[offset..end], schema)?;
    Ok((record, end))
}

/// Encodes `record` into a fresh buffer of exactly `schema.byte_size()` bytes.
pub fn serialize(
    record: &Record,
    schema: &SchemaDescriptor,
) -> Result<(Vec<u8>, usize), AccountCodecError> {
    let mut buffer = vec![0u8; schema.byte_size()];
    let written = serialize_into(record, schema, &mut buffer, 0)?;
    Ok((buffer, written))
}

/// Encodes `record` into `buffer` at `offset` and returns the offset after it.
///
/// The record is validated before any byte is written, `buffer` is left
/// untouched on error.
pub fn serialize_into(
    record: &Record,
    schema: &SchemaDescriptor,
    buffer: &mut [u8],
    offset: usize,
) -> Result<usize, AccountCodecError> {
    let end = checked_end(buffer.len(), offset, schema.byte_size())?;
    validate_record(record, schema)?;
    write_record(record, schema, &mut buffer[offset..end]);
    Ok(end)
}

/// Encodes a single field value, e.g. for memcmp filters.
///
/// `field` need not come from a described schema, so it is validated first.
pub fn encode_field(field: &FieldDescriptor, value: &Value) -> Result<Vec<u8>, AccountCodecError> {
    field.validate()?;
    validate_value(field.name(), field.kind(), value)?;
    let mut bytes = vec![0u8; field.byte_width()];
    write_value(field.kind(), value, &mut bytes);
    Ok(bytes)
}

pub fn has_correct_byte_size(buffer: &[u8], offset: usize, schema: &SchemaDescriptor) -> bool {
    buffer.len().checked_sub(offset) == Some(schema.byte_size())
}

fn checked_end(len: usize, offset: usize, size: usize) -> Result<usize, AccountCodecError> {
    match offset.checked_add(size) {
        Some(end) if end <= len => Ok(end),
        _ => Err(AccountCodecError::BufferUnderrun {
            required: offset.saturating_add(size),
            available: len,
        }),
    }
}

/// `bytes` is exactly `schema.byte_size()` long.
fn read_record(bytes: &[u8], schema: &SchemaDescriptor) -> Result<Record, AccountCodecError> {
    let mut record = Record::with_capacity(schema.len());
    for (offset, field) in schema.iter_with_offsets() {
        let bytes = &bytes[offset..offset + field.byte_width()];
        let value = read_value(field.name(), field.kind(), bytes)?;
        record.insert(field.name(), value);
    }
    Ok(record)
}

fn read_value(field: &str, kind: &FieldKind, bytes: &[u8]) -> Result<Value, AccountCodecError> {
    match kind {
        FieldKind::Primitive(primitive) => read_primitive(field, *primitive, bytes),
        FieldKind::Pubkey => {
            // Width is fixed by the schema.
            let pubkey = Pubkey::read_from_bytes(bytes).map_err(|_| underrun(32, bytes.len()))?;
            Ok(Value::Pubkey(pubkey))
        }
        FieldKind::FixedArray { element, .. } => bytes
            .chunks_exact(element.width())
            .map(|chunk| read_primitive(field, *element, chunk))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        FieldKind::Enum(descriptor) => {
            let ordinal = read_ordinal(descriptor, bytes)?;
            if descriptor.variant(ordinal).is_none() {
                return Err(AccountCodecError::InvalidEnumOrdinal {
                    field: field.to_string(),
                    ordinal,
                });
            }
            Ok(Value::Enum(ordinal))
        }
        FieldKind::Composite(schema) => read_record(bytes, schema).map(Value::Struct),
    }
}

macro_rules! read_le {
    ($t:ty, $bytes:expr) => {
        <$t>::read_from_bytes($bytes)
            .map_err(|_| underrun(core::mem::size_of::<$t>(), $bytes.len()))?
            .get()
    };
}

fn read_primitive(
    field: &str,
    primitive: Primitive,
    bytes: &[u8],
) -> Result<Value, AccountCodecError> {
    Ok(match primitive {
        Primitive::Bool => match bytes[0] {
            0 => Value::Bool(false),
            1 => Value::Bool(true),
            byte => {
                return Err(AccountCodecError::InvalidBool {
                    field: field.to_string(),
                    byte,
                })
            }
        },
        Primitive::U8 => Value::U8(bytes[0]),
        Primitive::I8 => Value::I8(bytes[0] as i8),
        Primitive::U16 => Value::U16(read_le!(U16, bytes)),
        Primitive::U32 => Value::U32(read_le!(U32, bytes)),
        Primitive::U64 => Value::U64(read_le!(U64, bytes)),
        Primitive::U128 => Value::U128(read_le!(U128, bytes)),
        Primitive::I16 => Value::I16(read_le!(I16, bytes)),
        Primitive::I32 => Value::I32(read_le!(I32, bytes)),
        Primitive::I64 => Value::I64(read_le!(I64, bytes)),
        Primitive::I128 => Value::I128(read_le!(I128, bytes)),
    })
}

fn read_ordinal(descriptor: &EnumDescriptor, bytes: &[u8]) -> Result<u32, AccountCodecError> {
    Ok(match descriptor.width() {
        Primitive::U16 => u32::from(read_le!(U16, bytes)),
        Primitive::U32 => read_le!(U32, bytes),
        _ => u32::from(bytes[0]),
    })
}

fn underrun(required: usize, available: usize) -> AccountCodecError {
    AccountCodecError::BufferUnderrun {
        required,
        available,
    }
}

fn validate_record(record: &Record, schema: &SchemaDescriptor) -> Result<(), AccountCodecError> {
    if let Some((name, _)) = record.iter().find(|(name, _)| schema.field(name).is_none()) {
        return Err(AccountCodecError::UnknownField(name.to_string()));
    }
    for field in schema.fields() {
        let value = record
            .get(field.name())
            .ok_or_else(|| AccountCodecError::MissingField(field.name().to_string()))?;
        validate_value(field.name(), field.kind(), value)?;
    }
    Ok(())
}

fn validate_value(field: &str, kind: &FieldKind, value: &Value) -> Result<(), AccountCodecError> {
    match (kind, value) {
        (FieldKind::Primitive(primitive), value) if primitive_matches(*primitive, value) => Ok(()),
        (FieldKind::Pubkey, Value::Pubkey(_)) => Ok(()),
        (FieldKind::FixedArray { element, len }, Value::Array(items)) => {
            if items.len() != *len {
                return Err(AccountCodecError::FieldArity {
                    field: field.to_string(),
                    expected: *len,
                    actual: items.len(),
                });
            }
            if items.iter().all(|item| primitive_matches(*element, item)) {
                Ok(())
            } else {
                Err(mismatch(field, kind))
            }
        }
        (FieldKind::Enum(descriptor), Value::Enum(ordinal)) => {
            match descriptor.variant(*ordinal) {
                Some(_) => Ok(()),
                None => Err(AccountCodecError::InvalidEnumOrdinal {
                    field: field.to_string(),
                    ordinal: *ordinal,
                }),
            }
        }
        (FieldKind::Composite(schema), Value::Struct(record)) => validate_record(record, schema),
        _ => Err(mismatch(field, kind)),
    }
}

fn mismatch(field: &str, kind: &FieldKind) -> AccountCodecError {
    AccountCodecError::FieldTypeMismatch {
        field: field.to_string(),
        expected: kind.to_string(),
    }
}

fn primitive_matches(primitive: Primitive, value: &Value) -> bool {
    matches!(
        (primitive, value),
        (Primitive::Bool, Value::Bool(_))
            | (Primitive::U8, Value::U8(_))
            | (Primitive::U16, Value::U16(_))
            | (Primitive::U32, Value::U32(_))
            | (Primitive::U64, Value::U64(_))
            | (Primitive::U128, Value::U128(_))
            | (Primitive::I8, Value::I8(_))
            | (Primitive::I16, Value::I16(_))
            | (Primitive::I32, Value::I32(_))
            | (Primitive::I64, Value::I64(_))
            | (Primitive::I128, Value::I128(_))
    )
}

/// Infallible once `validate_record` passed, `bytes` is exactly
/// `schema.byte_size()` long.
fn write_record(record: &Record, schema: &SchemaDescriptor, bytes: &mut [u8]) {
    for (offset, field) in schema.iter_with_offsets() {
        if let Some(value) = record.get(field.name()) {
            write_value(
                field.kind(),
                value,
                &mut bytes[offset..offset + field.byte_width()],
            );
        }
    }
}

fn write_value(kind: &FieldKind, value: &Value, bytes: &mut [u8]) {
    match (kind, value) {
        (FieldKind::Primitive(_), value) => write_primitive(value, bytes),
        (FieldKind::Pubkey, Value::Pubkey(pubkey)) => bytes.copy_from_slice(pubkey.as_bytes()),
        (FieldKind::FixedArray { element, .. }, Value::Array(items)) => {
            for (chunk, item) in bytes.chunks_exact_mut(element.width()).zip(items) {
                write_primitive(item, chunk);
            }
        }
        (FieldKind::Enum(descriptor), Value::Enum(ordinal)) => match descriptor.width() {
            Primitive::U16 => bytes.copy_from_slice(U16::new(*ordinal as u16).as_bytes()),
            Primitive::U32 => bytes.copy_from_slice(U32::new(*ordinal).as_bytes()),
            _ => bytes[0] = *ordinal as u8,
        },
        (FieldKind::Composite(schema), Value::Struct(record)) => {
            write_record(record, schema, bytes)
        }
        _ => {}
    }
}

fn write_primitive(value: &Value, bytes: &mut [u8]) {
    match value {
        Value::Bool(v) => bytes[0] = u8::from(*v),
        Value::U8(v) => bytes[0] = *v,
        Value::I8(v) => bytes[0] = *v as u8,
        Value::U16(v) => bytes.copy_from_slice(U16::new(*v).as_bytes()),
        Value::U32(v) => bytes.copy_from_slice(U32::new(*v).as_bytes()),
        Value::U64(v) => bytes.copy_from_slice(U64::new(*v).as_bytes()),
        Value::U128(v) => bytes.copy_from_slice(U128::new(*v).as_bytes()),
        Value::I16(v) => bytes.copy_from_slice(I16::new(*v).as_bytes()),
        Value::I32(v) => bytes.copy_from_slice(I32::new(*v).as_bytes()),
        Value::I64(v) => bytes.copy_from_slice(I64::new(*v).as_bytes()),
        Value::I128(v) => bytes.copy_from_slice(I128::new(*v).as_bytes()),
        _ => {}
    }
}
