use light_account_codec::Pubkey;

use crate::errors::AccountClientError;

pub trait Base58Conversions {
    fn to_base58(&self) -> String;
    fn from_base58(s: &str) -> Result<Self, AccountClientError>
    where
        Self: Sized;
}

impl Base58Conversions for Pubkey {
    fn to_base58(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }

    fn from_base58(s: &str) -> Result<Self, AccountClientError> {
        decode_base58_to_fixed_array(s).map(Pubkey::new_from_array)
    }
}

pub fn decode_base58_to_fixed_array<const N: usize>(
    input: &str,
) -> Result<[u8; N], AccountClientError> {
    let decoded = bs58::decode(input)
        .into_vec()
        .map_err(|_| AccountClientError::InvalidBase58(input.to_string()))?;
    decoded
        .try_into()
        .map_err(|_| AccountClientError::InvalidBase58(input.to_string()))
}
