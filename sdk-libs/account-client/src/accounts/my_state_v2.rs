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
    static ref MY_STATE_V2_SCHEMA: SchemaDescriptor = SchemaDescriptor::describe(
        "MyStateV2",
        vec![
            FieldDescriptor::pubkey("owner"),
            FieldDescriptor::fixed_array("data", Primitive::U8, 32),
            FieldDescriptor::primitive("update_count", Primitive::U32),
            FieldDescriptor::enumeration("state", State::descriptor()),
            FieldDescriptor::primitive("is_initialized", Primitive::U8),
            FieldDescriptor::primitive("bump", Primitive::U8),
            FieldDescriptor::primitive("padding", Primitive::U8),
        ],
    )
    .expect("MyStateV2 schema");
}

/// Second version of the state account. Wide fields come first and a
/// trailing pad byte keeps the size at 72 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MyStateV2 {
    pub owner: Pubkey,
    pub data: [u8; 32],
    pub update_count: u32,
    pub state: State,
    pub is_initialized: u8,
    pub bump: u8,
    pub padding: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyStateV2Pretty {
    pub owner: String,
    pub data: Vec<u8>,
    pub update_count: u32,
    pub state: String,
    pub is_initialized: u8,
    pub bump: u8,
}

impl AccountLayout for MyStateV2 {
    fn schema() -> &'static SchemaDescriptor {
        &MY_STATE_V2_SCHEMA
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("owner", self.owner)
            .with("data", self.data)
            .with("update_count", self.update_count)
            .with("state", self.state.to_value())
            .with("is_initialized", self.is_initialized)
            .with("bump", self.bump)
            .with("padding", self.padding)
    }

    fn from_record(mut record: Record) -> Result<Self, AccountCodecError> {
        Ok(Self {
            owner: record.take("owner")?,
            data: record.take("data")?,
            update_count: record.take("update_count")?,
            state: State::from_value("state", record.take("state")?)?,
            is_initialized: record.take("is_initialized")?,
            bump: record.take("bump")?,
            padding: record.take("padding")?,
        })
    }
}

impl MyStateV2 {
    pub const SEED: &'static str = "mystatev2";

    pub fn is_initialized(&self) -> bool {
        self.is_initialized > 0
    }

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

    pub fn pretty(&self) -> MyStateV2Pretty {
        MyStateV2Pretty {
            owner: self.owner.to_base58(),
            data: self.data.to_vec(),
            update_count: self.update_count,
            state: self.state.pretty(),
            is_initialized: self.is_initialized,
            bump: self.bump,
        }
    }
}
