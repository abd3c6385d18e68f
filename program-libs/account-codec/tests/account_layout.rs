use borsh::{BorshDeserialize, BorshSerialize};
use lazy_static::lazy_static;
use light_account_codec::{
    AccountCodecError, AccountLayout, FieldDescriptor, OrdinalEnum, Primitive, Pubkey, Record,
    SchemaDescriptor, Value,
};
use rand::{thread_rng, Rng};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, BorshSerialize, BorshDeserialize)]
enum Status {
    Open,
    Frozen,
    Closed,
}

impl OrdinalEnum for Status {
    const NAME: &'static str = "Status";
    const VARIANTS: &'static [(&'static str, u32)] = &[("Open", 0), ("Frozen", 1), ("Closed", 2)];

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Status::Open),
            1 => Some(Status::Frozen),
            2 => Some(Status::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Vault {
    authority: Pubkey,
    status: Status,
    balance: u64,
    delta: i32,
    history: [u8; 8],
    bump: u8,
}

lazy_static! {
    static ref VAULT_SCHEMA: SchemaDescriptor = SchemaDescriptor::describe(
        "Vault",
        vec![
            FieldDescriptor::pubkey("authority"),
            FieldDescriptor::enumeration("status", Status::descriptor()),
            FieldDescriptor::primitive("balance", Primitive::U64),
            FieldDescriptor::primitive("delta", Primitive::I32),
            FieldDescriptor::fixed_array("history", Primitive::U8, 8),
            FieldDescriptor::primitive("bump", Primitive::U8),
        ],
    )
    .unwrap();
}

impl AccountLayout for Vault {
    fn schema() -> &'static SchemaDescriptor {
        &VAULT_SCHEMA
    }

    fn to_record(&self) -> Record {
        Record::new()
            .with("authority", self.authority)
            .with("status", self.status.to_value())
            .with("balance", self.balance)
            .with("delta", self.delta)
            .with("history", self.history)
            .with("bump", self.bump)
    }

    fn from_record(mut record: Record) -> Result<Self, AccountCodecError> {
        Ok(Self {
            authority: record.take("authority")?,
            status: Status::from_value("status", record.take("status")?)?,
            balance: record.take("balance")?,
            delta: record.take("delta")?,
            history: record.take("history")?,
            bump: record.take("bump")?,
        })
    }
}

fn random_vault<R: Rng>(rng: &mut R) -> Vault {
    Vault {
        authority: Pubkey::new_from_array(rng.gen()),
        status: Status::from_ordinal(rng.gen_range(0..3)).unwrap(),
        balance: rng.gen(),
        delta: rng.gen(),
        history: rng.gen(),
        bump: rng.gen(),
    }
}

#[test]
fn test_vault_byte_size() {
    assert_eq!(Vault::byte_size(), 32 + 1 + 8 + 4 + 8 + 1);
    assert_eq!(Status::descriptor().variants().len(), 3);
    assert_eq!(Status::Frozen.variant_name(), "Frozen");
}

#[test]
fn test_randomized_round_trip_matches_borsh() {
    let mut rng = thread_rng();
    for _ in 0..1000 {
        let vault = random_vault(&mut rng);
        let (bytes, written) = vault.serialize().unwrap();
        assert_eq!(written, Vault::byte_size());
        assert!(Vault::has_correct_byte_size(&bytes, 0));
        // Borsh lays out fixed size fields identically.
        let fields = (
            vault.authority,
            vault.status,
            vault.balance,
            vault.delta,
            vault.history,
            vault.bump,
        );
        assert_eq!(bytes, fields.try_to_vec().unwrap());
        assert_eq!(
            <(Pubkey, Status, u64, i32, [u8; 8], u8)>::try_from_slice(&bytes).unwrap(),
            fields
        );

        let (decoded, offset) = Vault::deserialize(&bytes, 0).unwrap();
        assert_eq!(decoded, vault);
        assert_eq!(offset, Vault::byte_size());
    }
}

#[test]
fn test_packed_accounts() {
    let mut rng = thread_rng();
    let vaults = (0..5).map(|_| random_vault(&mut rng)).collect::<Vec<_>>();
    let mut buffer = Vec::new();
    for vault in vaults.iter() {
        buffer.extend_from_slice(&vault.serialize().unwrap().0);
    }
    let mut offset = 0;
    for vault in vaults.iter() {
        let (decoded, next) = Vault::deserialize(&buffer, offset).unwrap();
        assert_eq!(&decoded, vault);
        assert_eq!(next, offset + Vault::byte_size());
        offset = next;
    }
    assert_eq!(offset, buffer.len());
    assert!(matches!(
        Vault::deserialize(&buffer, offset),
        Err(AccountCodecError::BufferUnderrun { .. })
    ));
}

#[test]
fn test_truncated_buffers_never_decode() {
    let vault = random_vault(&mut thread_rng());
    let (bytes, _) = vault.serialize().unwrap();
    for len in 0..bytes.len() {
        assert_eq!(
            Vault::deserialize(&bytes[..len], 0),
            Err(AccountCodecError::BufferUnderrun {
                required: Vault::byte_size(),
                available: len
            })
        );
        assert!(!Vault::has_correct_byte_size(&bytes[..len], 0));
    }
}

#[test]
fn test_invalid_status_ordinal() {
    let vault = random_vault(&mut thread_rng());
    let (mut bytes, _) = vault.serialize().unwrap();
    bytes[32] = 3;
    assert_eq!(
        Vault::deserialize(&bytes, 0),
        Err(AccountCodecError::InvalidEnumOrdinal {
            field: "status".to_string(),
            ordinal: 3
        })
    );
}

#[test]
fn test_from_record_type_mismatch() {
    let record = Vault::schema()
        .fields()
        .iter()
        .fold(Record::new(), |record, field| {
            record.with(field.name(), Value::U8(0))
        });
    assert_eq!(
        Vault::from_record(record),
        Err(AccountCodecError::FieldTypeMismatch {
            field: "authority".to_string(),
            expected: "Pubkey".to_string()
        })
    );
}
