use light_account_codec::Pubkey;

use crate::{
    base58::Base58Conversions, errors::AccountClientError, rent::Rent, rpc::CommitmentLevel,
};

pub const PROGRAM_ID_ENV: &str = "LIGHT_ACCOUNT_PROGRAM_ID";
pub const COMMITMENT_ENV: &str = "LIGHT_ACCOUNT_COMMITMENT";

/// ENrRns55VechXJiq4bMbdx7idzQh7tvaEJoYeWxRNe7Y
pub const DEFAULT_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    198, 193, 3, 202, 27, 79, 171, 11, 215, 177, 137, 186, 113, 225, 94, 47, 40, 27, 167, 209, 65,
    71, 81, 210, 172, 62, 114, 226, 73, 81, 108, 151,
]);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Program owning the accounts, used as the default for gpa queries.
    pub program_id: Pubkey,
    pub commitment: CommitmentLevel,
    pub rent: Rent,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID,
            commitment: CommitmentLevel::default(),
            rent: Rent::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            ..Default::default()
        }
    }

    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = commitment;
        self
    }

    /// Overrides the defaults with `LIGHT_ACCOUNT_PROGRAM_ID` and
    /// `LIGHT_ACCOUNT_COMMITMENT` when set.
    pub fn from_env() -> Result<Self, AccountClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AccountClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(program_id) = lookup(PROGRAM_ID_ENV) {
            config.program_id = Pubkey::from_base58(&program_id).map_err(|_| {
                AccountClientError::InvalidConfig(PROGRAM_ID_ENV.to_string(), program_id.clone())
            })?;
        }
        if let Some(commitment) = lookup(COMMITMENT_ENV) {
            config.commitment = commitment.parse().map_err(|_| {
                AccountClientError::InvalidConfig(COMMITMENT_ENV.to_string(), commitment.clone())
            })?;
        }
        Ok(config)
    }
}
