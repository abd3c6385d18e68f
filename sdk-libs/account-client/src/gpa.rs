use light_account_codec::{codec::encode_field, Pubkey, SchemaDescriptor, Value};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::{base58::Base58Conversions, errors::AccountClientError};

/// Server side account filter, serialized in the `getProgramAccounts` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RpcFilter {
    DataSize(u64),
    Memcmp {
        offset: usize,
        #[serde(serialize_with = "serialize_base58")]
        bytes: Vec<u8>,
    },
}

fn serialize_base58<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&bs58::encode(bytes).into_string())
}

impl RpcFilter {
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            RpcFilter::DataSize(size) => data.len() as u64 == *size,
            RpcFilter::Memcmp { offset, bytes } => offset
                .checked_add(bytes.len())
                .and_then(|end| data.get(*offset..end))
                .is_some_and(|slice| slice == bytes.as_slice()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramAccountsConfig {
    #[serde(serialize_with = "serialize_pubkey")]
    pub program_id: Pubkey,
    pub filters: Vec<RpcFilter>,
}

fn serialize_pubkey<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&pubkey.to_base58())
}

impl ProgramAccountsConfig {
    /// True if `data` passes every filter.
    pub fn matches(&self, data: &[u8]) -> bool {
        self.filters.iter().all(|filter| filter.matches(data))
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Builds `getProgramAccounts` filters from the fields of one account schema.
#[derive(Debug, Clone)]
pub struct GpaBuilder {
    program_id: Pubkey,
    schema: &'static SchemaDescriptor,
    filters: Vec<RpcFilter>,
}

impl GpaBuilder {
    pub fn new(program_id: Pubkey, schema: &'static SchemaDescriptor) -> Self {
        Self {
            program_id,
            schema,
            filters: Vec::new(),
        }
    }

    /// Matches accounts whose `field` encodes to the same bytes as `value`.
    pub fn add_filter(
        mut self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Self, AccountClientError> {
        let (offset, descriptor) = self
            .schema
            .iter_with_offsets()
            .find(|(_, f)| f.name() == field)
            .ok_or_else(|| AccountClientError::UnknownFilterField {
                type_name: self.schema.type_name().to_string(),
                field: field.to_string(),
            })?;
        let bytes = encode_field(descriptor, &value.into())?;
        debug!(
            "{} gpa filter on {} at offset {} ({} bytes)",
            self.schema.type_name(),
            field,
            offset,
            bytes.len()
        );
        self.filters.push(RpcFilter::Memcmp { offset, bytes });
        Ok(self)
    }

    pub fn add_raw_filter(mut self, filter: RpcFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn data_size(self, size: u64) -> Self {
        self.add_raw_filter(RpcFilter::DataSize(size))
    }

    pub fn data_size_of_schema(self) -> Self {
        let size = self.schema.byte_size() as u64;
        self.data_size(size)
    }

    pub fn build(self) -> ProgramAccountsConfig {
        ProgramAccountsConfig {
            program_id: self.program_id,
            filters: self.filters,
        }
    }
}
