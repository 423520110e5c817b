#![allow(dead_code)]

pub mod contract;
pub mod wallet;

use alloy_primitives::Address;

/// Account used by the scripted wallet.
pub const USER: Address = Address::repeat_byte(0xab);

/// Address the betting contract is bound at in tests.
pub const BETTING: Address = Address::repeat_byte(0x01);

/// Address the token contract is bound at in tests.
pub const TOKEN: Address = Address::repeat_byte(0x02);

/// Chain id shared by the scripted wallet and the test deployments.
pub const CHAIN_ID: u64 = 1337;
