//! Seams between the registrar and the ledgers it drives.
//!
//! The registrar never touches registry or engine storage directly. Both traits are implemented
//! for the registry and engine pallets below, so a runtime sets `Registry = KeeperRegistry` and
//! `Engine = KeeperEngine`. The registrar's pallet account is passed as `caller`; that account
//! must hold `Role::Registrar` on both sides.

use frame::prelude::*;
use primitives::{Balance, CostUnits};

/// Membership operations of the registry.
pub trait RegistryOps<AccountId> {
  fn register_target(caller: &AccountId, target: &AccountId, admin: &AccountId) -> DispatchResult;

  /// Returns the admin the target had been registered under.
  fn unregister_target(caller: &AccountId, target: &AccountId) -> Result<AccountId, DispatchError>;

  fn register_controller(caller: &AccountId, controller: &AccountId) -> DispatchResult;

  fn unregister_controller(caller: &AccountId, controller: &AccountId) -> DispatchResult;

  fn is_registered_target(target: &AccountId) -> bool;

  fn is_registered_controller(controller: &AccountId) -> bool;
}

/// Escrow, cap and controller-role operations of the execution engine.
pub trait EngineOps<AccountId> {
  /// `cap == 0` resets the target to the engine's global default.
  fn set_max_cost_for(caller: &AccountId, target: &AccountId, cap: CostUnits) -> DispatchResult;

  fn deposit(
    caller: &AccountId,
    from: &AccountId,
    target: &AccountId,
    amount: Balance,
  ) -> DispatchResult;

  fn deposit_protocol(caller: &AccountId, from: &AccountId, amount: Balance) -> DispatchResult;

  fn withdraw_escrow(
    caller: &AccountId,
    target: &AccountId,
    to: &AccountId,
    amount: Balance,
  ) -> DispatchResult;

  fn balance_of(target: &AccountId) -> Balance;

  fn add_controller(caller: &AccountId, controller: &AccountId) -> DispatchResult;

  fn remove_controller(caller: &AccountId, controller: &AccountId) -> DispatchResult;
}

impl<T: pallet_keeper_registry::Config> RegistryOps<T::AccountId>
  for pallet_keeper_registry::Pallet<T>
{
  fn register_target(
    caller: &T::AccountId,
    target: &T::AccountId,
    admin: &T::AccountId,
  ) -> DispatchResult {
    Self::do_register_target(caller, target.clone(), admin.clone())
  }

  fn unregister_target(
    caller: &T::AccountId,
    target: &T::AccountId,
  ) -> Result<T::AccountId, DispatchError> {
    Self::do_unregister_target(caller, target)
  }

  fn register_controller(caller: &T::AccountId, controller: &T::AccountId) -> DispatchResult {
    Self::do_register_controller(caller, controller.clone())
  }

  fn unregister_controller(caller: &T::AccountId, controller: &T::AccountId) -> DispatchResult {
    Self::do_unregister_controller(caller, controller)
  }

  fn is_registered_target(target: &T::AccountId) -> bool {
    pallet_keeper_registry::Pallet::<T>::is_registered_target(target)
  }

  fn is_registered_controller(controller: &T::AccountId) -> bool {
    pallet_keeper_registry::Pallet::<T>::is_registered_controller(controller)
  }
}

impl<T: pallet_keeper_engine::Config> EngineOps<T::AccountId> for pallet_keeper_engine::Pallet<T> {
  fn set_max_cost_for(
    caller: &T::AccountId,
    target: &T::AccountId,
    cap: CostUnits,
  ) -> DispatchResult {
    Self::do_set_max_cost_for(caller, target, cap)
  }

  fn deposit(
    caller: &T::AccountId,
    from: &T::AccountId,
    target: &T::AccountId,
    amount: Balance,
  ) -> DispatchResult {
    Self::do_deposit(caller, from, target, amount)
  }

  fn deposit_protocol(caller: &T::AccountId, from: &T::AccountId, amount: Balance) -> DispatchResult {
    Self::do_deposit_protocol(caller, from, amount)
  }

  fn withdraw_escrow(
    caller: &T::AccountId,
    target: &T::AccountId,
    to: &T::AccountId,
    amount: Balance,
  ) -> DispatchResult {
    Self::do_withdraw_escrow(caller, target, to, amount)
  }

  fn balance_of(target: &T::AccountId) -> Balance {
    pallet_keeper_engine::Pallet::<T>::balance_of(target)
  }

  fn add_controller(caller: &T::AccountId, controller: &T::AccountId) -> DispatchResult {
    Self::do_add_controller(caller, controller)
  }

  fn remove_controller(caller: &T::AccountId, controller: &T::AccountId) -> DispatchResult {
    Self::do_remove_controller(caller, controller)
  }
}

/// Registry that knows nothing and accepts nothing.
impl<AccountId> RegistryOps<AccountId> for () {
  fn register_target(_: &AccountId, _: &AccountId, _: &AccountId) -> DispatchResult {
    Err(DispatchError::Other("RegistryOps not configured"))
  }

  fn unregister_target(_: &AccountId, _: &AccountId) -> Result<AccountId, DispatchError> {
    Err(DispatchError::Other("RegistryOps not configured"))
  }

  fn register_controller(_: &AccountId, _: &AccountId) -> DispatchResult {
    Err(DispatchError::Other("RegistryOps not configured"))
  }

  fn unregister_controller(_: &AccountId, _: &AccountId) -> DispatchResult {
    Err(DispatchError::Other("RegistryOps not configured"))
  }

  fn is_registered_target(_: &AccountId) -> bool {
    false
  }

  fn is_registered_controller(_: &AccountId) -> bool {
    false
  }
}

/// Engine that holds no escrow and grants no roles.
impl<AccountId> EngineOps<AccountId> for () {
  fn set_max_cost_for(_: &AccountId, _: &AccountId, _: CostUnits) -> DispatchResult {
    Ok(())
  }

  fn deposit(_: &AccountId, _: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
    Err(DispatchError::Other("EngineOps not configured"))
  }

  fn deposit_protocol(_: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
    Err(DispatchError::Other("EngineOps not configured"))
  }

  fn withdraw_escrow(_: &AccountId, _: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
    Err(DispatchError::Other("EngineOps not configured"))
  }

  fn balance_of(_: &AccountId) -> Balance {
    0
  }

  fn add_controller(_: &AccountId, _: &AccountId) -> DispatchResult {
    Ok(())
  }

  fn remove_controller(_: &AccountId, _: &AccountId) -> DispatchResult {
    Ok(())
  }
}
