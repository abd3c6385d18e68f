use borsh::{BorshDeserialize, BorshSerialize};
use light_account_codec::OrdinalEnum;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, BorshSerialize, BorshDeserialize)]
pub enum State {
    #[default]
    Uninitialized,
    Initialized,
    Updated,
}

impl OrdinalEnum for State {
    const NAME: &'static str = "State";
    const VARIANTS: &'static [(&'static str, u32)] = &[
        ("Uninitialized", State::Uninitialized as u32),
        ("Initialized", State::Initialized as u32),
        ("Updated", State::Updated as u32),
    ];

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(State::Uninitialized),
            1 => Some(State::Initialized),
            2 => Some(State::Updated),
            _ => None,
        }
    }
}

impl State {
    /// Readable form, e.g. `State.Initialized`.
    pub fn pretty(self) -> String {
        format!("{}.{}", Self::NAME, self.variant_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_table() {
        for (name, ordinal) in State::VARIANTS {
            let state = State::from_ordinal(*ordinal).unwrap();
            assert_eq!(state.ordinal(), *ordinal);
            assert_eq!(state.variant_name(), *name);
        }
        assert_eq!(State::from_ordinal(3), None);
        assert_eq!(State::Updated.pretty(), "State.Updated");
        assert_eq!(State::descriptor().ordinal_of("Initialized"), Some(1));
    }
}
