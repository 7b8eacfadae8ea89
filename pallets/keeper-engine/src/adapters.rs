//! Target-facing seam of the execution engine.

use alloc::vec::Vec;
use frame::prelude::*;
use primitives::CostUnits;

/// Execution surface every automatable target exposes.
///
/// `probe` must be a pure read. `callback` runs the target's periodic work and reports the
/// cost units it consumed; the engine passes the effective per-target cap as `limit` and
/// rejects any report above it.
pub trait KeeperTarget<AccountId> {
  /// Returns `(ready, payload)`. An error is treated as "not ready".
  fn probe(target: &AccountId) -> Result<(bool, Vec<u8>), DispatchError>;

  fn callback(target: &AccountId, payload: Vec<u8>, limit: CostUnits)
  -> Result<CostUnits, DispatchError>;
}

/// No target is ever ready.
impl<AccountId> KeeperTarget<AccountId> for () {
  fn probe(_: &AccountId) -> Result<(bool, Vec<u8>), DispatchError> {
    Ok((false, Vec::new()))
  }

  fn callback(_: &AccountId, _: Vec<u8>, _: CostUnits) -> Result<CostUnits, DispatchError> {
    Err(DispatchError::Other("no keeper targets configured"))
  }
}
