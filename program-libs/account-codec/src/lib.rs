//! Schema driven encoding of fixed layout account data.
//!
//! A [`SchemaDescriptor`] lists the fields of one account type in wire order.
//! [`codec::deserialize`] and [`codec::serialize`] walk that list and convert
//! between byte buffers and [`Record`]s. Typed accounts implement
//! [`AccountLayout`] on top of it.
pub mod codec;
pub mod errors;
pub mod pubkey;
pub mod schema;
pub mod traits;
pub mod value;

pub use codec::{deserialize, encode_field, has_correct_byte_size, serialize, serialize_into};
pub use errors::{AccountCodecError, SchemaError};
pub use pubkey::Pubkey;
pub use schema::{
    EnumDescriptor, EnumVariant, FieldDescriptor, FieldKind, Primitive, SchemaDescriptor,
};
pub use traits::{AccountLayout, OrdinalEnum};
pub use value::{FromValue, Record, Value};
