use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use light_account_codec::Pubkey;

use super::{Account, AccountRpc, CommitmentLevel, RpcError};
use crate::{gpa::ProgramAccountsConfig, rent::Rent};

/// In memory account store, used in tests and local tooling.
#[derive(Debug, Clone, Default)]
pub struct TestRpc {
    accounts: Arc<RwLock<BTreeMap<Pubkey, Account>>>,
    rent: Rent,
}

impl TestRpc {
    pub fn new(rent: Rent) -> Self {
        Self {
            accounts: Arc::default(),
            rent,
        }
    }

    pub fn set_account(&self, address: Pubkey, account: Account) -> Result<(), RpcError> {
        self.accounts
            .write()
            .map_err(|e| RpcError::CustomError(e.to_string()))?
            .insert(address, account);
        Ok(())
    }

    pub fn remove_account(&self, address: &Pubkey) -> Result<Option<Account>, RpcError> {
        Ok(self
            .accounts
            .write()
            .map_err(|e| RpcError::CustomError(e.to_string()))?
            .remove(address))
    }
}

#[async_trait]
impl AccountRpc for TestRpc {
    async fn get_account(
        &self,
        address: &Pubkey,
        _commitment: CommitmentLevel,
    ) -> Result<Option<Account>, RpcError> {
        Ok(self
            .accounts
            .read()
            .map_err(|e| RpcError::CustomError(e.to_string()))?
            .get(address)
            .cloned())
    }

    async fn get_program_accounts(
        &self,
        config: &ProgramAccountsConfig,
        _commitment: CommitmentLevel,
    ) -> Result<Vec<(Pubkey, Account)>, RpcError> {
        Ok(self
            .accounts
            .read()
            .map_err(|e| RpcError::CustomError(e.to_string()))?
            .iter()
            .filter(|(_, account)| account.owner == config.program_id)
            .filter(|(_, account)| config.matches(&account.data))
            .map(|(address, account)| (*address, account.clone()))
            .collect())
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
        _commitment: CommitmentLevel,
    ) -> Result<u64, RpcError> {
        Ok(self.rent.minimum_balance(data_len))
    }
}
