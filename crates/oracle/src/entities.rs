//! Names and constants of the symbolic entities in the constraint model.
//!
//! Every entity is an unbound solver variable; the names here are the
//! identifiers the SMT script declares and the witness reports.

use num_bigint::BigInt;
use num_traits::One;

// Contract ownership identity tracking.
pub const OWNER: &str = "owner";
pub const CALLER: &str = "caller";
pub const INITIAL_OWNER: &str = "initial_owner";

// The two traded assets and the two swap venues.
pub const TOKEN1: &str = "token1";
pub const TOKEN2: &str = "token2";
pub const ROUTER1: &str = "router1";
pub const ROUTER2: &str = "router2";

// Trade quantities. Each swap output is a single solver constant used
// by every predicate that references it.
pub const AMOUNT: &str = "amount";
pub const AMOUNT_RECEIVED_1: &str = "amountReceived1";
pub const AMOUNT_RECEIVED_2: &str = "amountReceived2";

// Gas accounting endpoints and the derived spend.
pub const GAS_ON_START: &str = "gasOnStart";
pub const GAS_LEFT: &str = "gasLeft";
pub const GAS_SPENT: &str = "gasSpent";

// Tracked values of the two queried allowance applications, bound to
// nullary constants so they show up in the witness dump.
pub const ALLOWANCE1: &str = "allowance1";
pub const ALLOWANCE2: &str = "allowance2";

// Uninterpreted mapping functions.
pub const BALANCES: &str = "balances";
pub const ALLOWANCES: &str = "allowances";

/// The account identifier holding the contract's own funds, used as
/// the owner-account key in allowance lookups.
pub const CONTRACT_ACCOUNT: &str = "contract";

/// The `2^256 - 1` sentinel meaning "unlimited prior approval". By
/// ERC-20 convention this exact value is distinct from any real
/// allowance that happens to be large.
pub fn infinite_approval() -> BigInt {
    (BigInt::one() << 256u32) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_max_uint256() {
        assert_eq!(
            infinite_approval().to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }

    #[test]
    fn sentinel_is_odd() {
        assert_eq!(infinite_approval() % BigInt::from(2), BigInt::one());
    }
}
