use light_account_codec::{AccountLayout, Pubkey};
use tracing::{debug, warn};

use crate::{
    base58::Base58Conversions,
    config::ClientConfig,
    errors::AccountClientError,
    gpa::{GpaBuilder, ProgramAccountsConfig},
    rpc::{Account, AccountRpc},
};

/// Decodes `T` from the data of `account`, starting at `offset`.
pub fn decode_account<T: AccountLayout>(
    account: &Account,
    offset: usize,
) -> Result<(T, usize), AccountClientError> {
    if !T::has_correct_byte_size(&account.data, offset) {
        debug!(
            "{} expects {} bytes, account holds {} bytes after offset {}",
            T::schema().type_name(),
            T::byte_size(),
            account.data.len(),
            offset
        );
    }
    Ok(T::deserialize(&account.data, offset)?)
}

/// Fetches and decodes typed accounts through an [`AccountRpc`].
#[derive(Debug, Clone)]
pub struct AccountClient<R: AccountRpc> {
    rpc: R,
    config: ClientConfig,
}

impl<R: AccountRpc> AccountClient<R> {
    pub fn new(rpc: R, config: ClientConfig) -> Self {
        Self { rpc, config }
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get_account<T: AccountLayout>(
        &self,
        address: &Pubkey,
    ) -> Result<T, AccountClientError> {
        let type_name = T::schema().type_name();
        let account = self
            .rpc
            .get_account(address, self.config.commitment)
            .await?
            .ok_or_else(|| {
                warn!("{} account {} not found", type_name, address.to_base58());
                AccountClientError::AccountNotFound {
                    type_name: type_name.to_string(),
                    address: address.to_base58(),
                }
            })?;
        debug!(
            "fetched {} account {} ({} bytes)",
            type_name,
            address.to_base58(),
            account.data.len()
        );
        Ok(decode_account::<T>(&account, 0)?.0)
    }

    /// Builder for `T` accounts owned by the configured program.
    pub fn gpa_builder<T: AccountLayout>(&self) -> GpaBuilder {
        GpaBuilder::new(self.config.program_id, T::schema())
    }

    /// Fetches and decodes every account matching `config`.
    pub async fn get_program_accounts<T: AccountLayout>(
        &self,
        config: &ProgramAccountsConfig,
    ) -> Result<Vec<(Pubkey, T)>, AccountClientError> {
        let accounts = self
            .rpc
            .get_program_accounts(config, self.config.commitment)
            .await?;
        debug!(
            "{} program accounts matched {} filters",
            accounts.len(),
            config.filters.len()
        );
        accounts
            .iter()
            .map(|(address, account)| {
                decode_account::<T>(account, 0).map(|(decoded, _)| (*address, decoded))
            })
            .collect()
    }

    pub async fn get_minimum_balance_for_rent_exemption<T: AccountLayout>(
        &self,
    ) -> Result<u64, AccountClientError> {
        Ok(self
            .rpc
            .get_minimum_balance_for_rent_exemption(T::byte_size(), self.config.commitment)
            .await?)
    }
}
