use light_account_codec::AccountCodecError;
use thiserror::Error;

use crate::rpc::RpcError;

#[derive(Error, Debug)]
pub enum AccountClientError {
    #[error("Codec error: {0}")]
    Codec(#[from] AccountCodecError),

    #[error("RpcError: {0}")]
    Rpc(#[from] RpcError),

    #[error("Unable to find {type_name} account at {address}")]
    AccountNotFound { type_name: String, address: String },

    #[error("Field `{field}` is not part of {type_name}")]
    UnknownFilterField { type_name: String, field: String },

    #[error("Invalid base58 string: {0}")]
    InvalidBase58(String),

    #[error("Invalid config value for {0}: {1}")]
    InvalidConfig(String, String),
}
