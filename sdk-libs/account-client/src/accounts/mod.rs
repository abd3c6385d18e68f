pub mod my_state;
pub mod my_state_v2;

pub use my_state::{MyState, MyStatePretty};
pub use my_state_v2::{MyStateV2, MyStateV2Pretty};
