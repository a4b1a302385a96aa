//! # Ledger Configuration & Constants
//!
//! Every magic number in CLINK lives here. If you're hardcoding a constant
//! somewhere else, you're doing it wrong and you owe the team coffee.
//!
//! The supply figures are fixed-point: 18 decimal places, so one whole
//! token is [`UNIT`] base units. The ledger itself never divides — decimals
//! exist purely so front ends can render `1.5 CLINK` instead of a
//! nineteen-digit integer.

// ---------------------------------------------------------------------------
// Token Metadata
// ---------------------------------------------------------------------------

/// Human-readable token name.
pub const TOKEN_NAME: &str = "Clink";

/// Ticker symbol.
pub const TOKEN_SYMBOL: &str = "CLINK";

/// Display decimal places. 18, the de-facto standard for fungible tokens —
/// interop beats originality here.
pub const TOKEN_DECIMALS: u8 = 18;

/// One whole token in base units: 10^18.
pub const UNIT: u128 = 10u128.pow(18);

// ---------------------------------------------------------------------------
// Supply Parameters
// ---------------------------------------------------------------------------

/// Default genesis issuance: 100 million whole tokens, credited in full to
/// the constructing account.
pub const DEFAULT_INITIAL_SUPPLY: u128 = 100_000_000 * UNIT;

/// Default hard cap: 1 billion whole tokens. Ten times genesis leaves the
/// minter room to work while keeping dilution bounded.
pub const DEFAULT_MAX_SUPPLY: u128 = 1_000_000_000 * UNIT;

/// Converts a whole-token count to base units. Takes `u64` so the
/// multiplication cannot overflow `u128`.
pub const fn whole_tokens(count: u64) -> u128 {
    count as u128 * UNIT
}
