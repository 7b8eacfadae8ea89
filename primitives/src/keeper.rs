//! Keeper Protocol Constants
//!
//! Centralizes pallet identifiers and the default economic parameters shared by the
//! registry, registrar and execution engine pallets.
//!
//! Every value here is only a default: runtimes pass them into pallet `Config` constants
//! and governance can override the engine and registrar parameters at runtime.

/// Balance type alias for consistency across the keeper pallets
pub type Balance = u128;

/// Metered resource units reported by a target callback.
pub type CostUnits = u64;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Runtimes with 8-byte account ids truncate `modl ++ PalletId` to its first 8 bytes, so
/// the first four bytes of every id below are distinct.
pub mod pallet_ids {
  /// Execution engine pallet ID (escrow and treasury holder)
  pub const ENGINE_PALLET_ID: &[u8; 8] = b"kengine0";

  /// Registrar pallet ID (the account holding the registrar role)
  pub const REGISTRAR_PALLET_ID: &[u8; 8] = b"kregistr";
}

/// Default economic parameters.
pub mod params {
  use super::{Balance, CostUnits};
  use sp_arithmetic::Permill;

  /// One whole native unit (10^18 base units).
  pub const UNIT: Balance = 1_000_000_000_000_000_000;

  /// One billionth of a unit, the customary denomination for unit cost prices.
  pub const GWEI: Balance = 1_000_000_000;

  /// Protocol fee charged on top of the raw execution cost (70%).
  pub const PROTOCOL_FEE_RATE: Permill = Permill::from_percent(70);

  /// Share of the protocol fee paid to the executing controller (40%).
  ///
  /// The remaining 60% accrues to the protocol treasury.
  pub const CONTROLLER_FEE_RATE: Permill = Permill::from_percent(40);

  /// Fixed units added to every metered callback to cover the engine's own bookkeeping.
  pub const COST_OVERHEAD: CostUnits = 102_134;

  /// Cost cap applied to targets registered without an explicit cap.
  pub const DEFAULT_MAX_COST: CostUnits = 2_000_000;

  /// Hard upper bound for any per-target cost cap.
  pub const MAX_COST_LIMIT: CostUnits = 30_000_000;

  /// Highest unit cost price a controller may settle at (40 000 gwei).
  pub const UNIT_PRICE_CEILING: Balance = 40_000 * GWEI;

  /// Fee a controller pays to register (0.0001 unit). Zero makes registration free.
  pub const CONTROLLER_REGISTRATION_FEE: Balance = UNIT / 10_000;
}
