//! Execution cost and fee split arithmetic.
//!
//! `raw_cost = cost_consumed * unit_price`, `fee = raw_cost * protocol_rate`,
//! `controller_share = fee * controller_rate`, `protocol_share = fee - controller_share`.
//! The target is debited `raw_cost + fee`, which is exactly what the controller and the
//! treasury receive between them.

use crate::keeper::{Balance, CostUnits};
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_arithmetic::Permill;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeeError {
  /// An intermediate amount does not fit in `Balance`.
  Overflow,
}

/// Breakdown of a single settlement.
#[derive(
  Clone,
  Copy,
  Debug,
  Default,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
)]
pub struct ExecutionCost {
  pub cost_consumed: CostUnits,
  pub unit_price: Balance,
  pub raw_cost: Balance,
  pub fee: Balance,
  pub controller_share: Balance,
  pub protocol_share: Balance,
  pub total_debit: Balance,
}

impl ExecutionCost {
  /// What the executing controller receives: its cost refund plus its fee share.
  pub fn controller_payout(&self) -> Balance {
    // Cannot overflow: raw_cost + controller_share <= total_debit.
    self.raw_cost.saturating_add(self.controller_share)
  }
}

pub fn split_execution_cost(
  cost_consumed: CostUnits,
  unit_price: Balance,
  protocol_fee_rate: Permill,
  controller_fee_rate: Permill,
) -> Result<ExecutionCost, FeeError> {
  let raw_cost = Balance::from(cost_consumed)
    .checked_mul(unit_price)
    .ok_or(FeeError::Overflow)?;
  let fee = protocol_fee_rate.mul_floor(raw_cost);
  let controller_share = controller_fee_rate.mul_floor(fee);
  let protocol_share = fee.saturating_sub(controller_share);
  let total_debit = raw_cost.checked_add(fee).ok_or(FeeError::Overflow)?;
  Ok(ExecutionCost {
    cost_consumed,
    unit_price,
    raw_cost,
    fee,
    controller_share,
    protocol_share,
    total_debit,
  })
}
