pub mod errors;
pub mod test_rpc;

use std::fmt::Debug;

use async_trait::async_trait;
pub use errors::RpcError;
use light_account_codec::Pubkey;
pub use test_rpc::TestRpc;

use crate::gpa::ProgramAccountsConfig;

/// Account as returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Account {
    pub lamports: u64,
    pub data: Vec<u8>,
    pub owner: Pubkey,
    pub executable: bool,
    pub rent_epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitmentLevel {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl CommitmentLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitmentLevel::Processed => "processed",
            CommitmentLevel::Confirmed => "confirmed",
            CommitmentLevel::Finalized => "finalized",
        }
    }
}

impl std::str::FromStr for CommitmentLevel {
    type Err = RpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processed" => Ok(CommitmentLevel::Processed),
            "confirmed" => Ok(CommitmentLevel::Confirmed),
            "finalized" => Ok(CommitmentLevel::Finalized),
            _ => Err(RpcError::CustomError(format!(
                "unknown commitment level {}",
                s
            ))),
        }
    }
}

/// Account reads the typed clients need from a cluster connection.
///
/// The codec never talks to the network, implementations own transport,
/// retries and timeouts.
#[async_trait]
pub trait AccountRpc: Send + Sync + Debug {
    async fn get_account(
        &self,
        address: &Pubkey,
        commitment: CommitmentLevel,
    ) -> Result<Option<Account>, RpcError>;

    async fn get_program_accounts(
        &self,
        config: &ProgramAccountsConfig,
        commitment: CommitmentLevel,
    ) -> Result<Vec<(Pubkey, Account)>, RpcError>;

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
        commitment: CommitmentLevel,
    ) -> Result<u64, RpcError>;
}
