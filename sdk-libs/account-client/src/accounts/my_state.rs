use lazy_static::lazy_static;
use light_account_codec::{
    AccountCodecError, AccountLayout, FieldDescriptor, OrdinalEnum, Primitive, Pubkey, Record,
    SchemaDescriptor,
};
use serde::Serialize;

use crate::{
    base58::Base58Conversions,
    client::{decode_account, AccountClient},
    errors::AccountClientError,
    gpa::GpaBuilder,
    rpc::{Account, AccountRpc},
    types::State,
};

lazy_static! {
    static ref MY_STATE_SCHEMA: SchemaDescriptor = SchemaDescriptor::describe(
        "MyState",
        vec![
            FieldDescriptor::primitive("is_initialized", Primitive::U8),
            FieldDescriptor::pubkey("owner"),
            FieldDescriptor::enumeration("state", State::descriptor()),
            FieldDescriptor::fixed_array("data", Primitive::U8, 32),
            FieldDescriptor::primitive("update_count", Primitive::U32),
            FieldDescriptor::primitive("bump", Primitive::U8),
        ],
    )
    .expect("MyState schema");
}

/// Per-owner state account, 71 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MyState {
    pub is_initialized: u8,
    pub owner: Pubkey,
    pub state: State,
    pub data: [u8; 32],
    pub update_count: u32,
    pub bump: u8,
}

/// Readable [`MyState`], for logging and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyStatePretty {
    pub is_initialized: u8,
    pub owner: String,
    pub state: String,
    pub data: Vec<u8>,
    pub update_count: u32,
    pub bump: u8,
}

impl AccountLayout for MyState {
    fn schema() -> &'static SchemaDescriptor {
        &MY_STATE_SCHEMA
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("is_initialized", self.is_initialized)
            .with("owner", self.owner)
            .with("state", self.state.to_value())
            .with("data", self.data)
            .with("update_count", self.update_count)
            .with("bump", self.bump)
    }

    fn from_record(mut record: Record) -> Result<Self, AccountCodecError> {
        Ok(Self {
            is_initialized: record.take("is_initialized")?,
            owner: record.take("owner")?,
            state: State::from_value("state", record.take("state")?)?,
            data: record.take("data")?,
            update_count: record.take("update_count")?,
            bump: record.take("bump")?,
        })
    }
}

impl MyState {
    pub const SEED: &'static str = "mystate";

    pub fn is_initialized(&self) -> bool {
        self.is_initialized > 0
    }

    /// Returns the account and the offset up to which its data was read.
    pub fn from_account_info(
        account: &Account,
        offset: usize,
    ) -> Result<(Self, usize), AccountClientError> {
        decode_account(account, offset)
    }

    pub async fn from_account_address<R: AccountRpc>(
        client: &AccountClient<R>,
        address: &Pubkey,
    ) -> Result<Self, AccountClientError> {
        client.get_account::<Self>(address).await
    }

    pub fn gpa_builder(program_id: Pubkey) -> GpaBuilder {
        GpaBuilder::new(program_id, Self::schema())
    }

    pub async fn get_minimum_balance_for_rent_exemption<R: AccountRpc>(
        client: &AccountClient<R>,
    ) -> Result<u64, AccountClientError> {
        client.get_minimum_balance_for_rent_exemption::<Self>().await
    }

    pub fn pretty(&self) -> MyStatePretty {
        MyStatePretty {
            is_initialized: self.is_initialized,
            owner: self.owner.to_base58(),
            state: self.state.pretty(),
            data: self.data.to_vec(),
            update_count: self.update_count,
            bump: self.bump,
        }
    }
}
