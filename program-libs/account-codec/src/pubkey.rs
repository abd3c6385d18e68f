use borsh::{BorshDeserialize, BorshSerialize};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

pub const PUBKEY_BYTES: usize = 32;

/// Raw 32 byte account identifier as stored in account data.
#[derive(
    Debug,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Clone,
    Immutable,
    FromBytes,
    IntoBytes,
    KnownLayout,
    BorshDeserialize,
    BorshSerialize,
    Default,
    Unaligned,
)]
#[repr(C)]
pub struct Pubkey(pub(crate) [u8; PUBKEY_BYTES]);

impl Pubkey {
    pub const fn new_from_array(array: [u8; PUBKEY_BYTES]) -> Self {
        Self(array)
    }

    /// Returns `None` unless `slice` is exactly 32 bytes long.
    pub fn try_new_from_slice(slice: &[u8]) -> Option<Self> {
        <[u8; PUBKEY_BYTES]>::try_from(slice).ok().map(Self)
    }

    pub fn to_bytes(&self) -> [u8; PUBKEY_BYTES] {
        self.0
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; PUBKEY_BYTES]> for Pubkey {
    fn from(array: [u8; PUBKEY_BYTES]) -> Self {
        Self(array)
    }
}

impl From<Pubkey> for [u8; PUBKEY_BYTES] {
    fn from(pubkey: Pubkey) -> Self {
        pubkey.0
    }
}

#[cfg(feature = "solana")]
impl From<solana_pubkey::Pubkey> for Pubkey {
    fn from(pubkey: solana_pubkey::Pubkey) -> Self {
        Self(pubkey.to_bytes())
    }
}

#[cfg(feature = "solana")]
impl From<&solana_pubkey::Pubkey> for Pubkey {
    fn from(pubkey: &solana_pubkey::Pubkey) -> Self {
        Self(pubkey.to_bytes())
    }
}

#[cfg(feature = "solana")]
impl From<Pubkey> for solana_pubkey::Pubkey {
    fn from(pubkey: Pubkey) -> Self {
        solana_pubkey::Pubkey::new_from_array(pubkey.to_bytes())
    }
}
