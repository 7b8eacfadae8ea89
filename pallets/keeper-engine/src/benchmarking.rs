#![cfg(feature = "runtime-benchmarks")]

extern crate alloc;

use crate::*;
use alloc::vec;
use frame::prelude::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_support::traits::fungible::Mutate;
use polkadot_sdk::frame_system::RawOrigin;
use polkadot_sdk::sp_runtime::Permill;
use primitives::{Role, RoleTable, keeper::params::UNIT};

#[benchmarks]
mod benches {
  use super::*;

  fn funded<T: Config>(who: &T::AccountId) {
    let _ = T::Currency::set_balance(who, 1_000 * UNIT);
  }

  fn admin<T: Config>() -> T::AccountId {
    let caller: T::AccountId = whitelisted_caller();
    T::Roles::grant(Role::Admin, &caller);
    caller
  }

  fn registrar<T: Config>() -> T::AccountId {
    let caller: T::AccountId = whitelisted_caller();
    T::Roles::grant(Role::Registrar, &caller);
    funded::<T>(&caller);
    caller
  }

  #[benchmark]
  fn execute() {
    let registrar = registrar::<T>();
    let controller: T::AccountId = account("controller", 0, 0);
    let target: T::AccountId = account("target", 0, 0);
    T::Roles::grant(Role::Controller, &controller);
    funded::<T>(&controller);
    T::BenchmarkHelper::setup_target(&target);
    Pallet::<T>::do_deposit(&registrar, &registrar, &target, 100 * UNIT).unwrap();
    let payload = BoundedVec::truncate_from(vec![0u8; T::MaxPayloadLen::get() as usize]);
    let price = UnitPriceCeiling::<T>::get();

    #[extrinsic_call]
    execute(RawOrigin::Signed(controller), target.clone(), payload, price);

    assert_eq!(ExecutionNonce::<T>::get(&target), 1);
  }

  #[benchmark]
  fn set_cost_price_ceiling() {
    let caller = admin::<T>();

    #[extrinsic_call]
    set_cost_price_ceiling(RawOrigin::Signed(caller), 1_000);

    assert_eq!(UnitPriceCeiling::<T>::get(), 1_000);
  }

  #[benchmark]
  fn set_cost_overhead() {
    let caller = admin::<T>();

    #[extrinsic_call]
    set_cost_overhead(RawOrigin::Signed(caller), 50_000);

    assert_eq!(CostOverhead::<T>::get(), 50_000);
  }

  #[benchmark]
  fn set_default_max_cost() {
    let caller = admin::<T>();
    let cap = T::MaxCostLimit::get();

    #[extrinsic_call]
    set_default_max_cost(RawOrigin::Signed(caller), cap);

    assert_eq!(GlobalMaxCost::<T>::get(), cap);
  }

  #[benchmark]
  fn set_fee_rates() {
    let caller = admin::<T>();

    #[extrinsic_call]
    set_fee_rates(
      RawOrigin::Signed(caller),
      Permill::from_percent(50),
      Permill::from_percent(50),
    );

    assert_eq!(ProtocolFeeRate::<T>::get(), Permill::from_percent(50));
  }

  #[benchmark]
  fn withdraw_protocol_balance() {
    let registrar = registrar::<T>();
    Pallet::<T>::do_deposit_protocol(&registrar, &registrar, UNIT).unwrap();
    let caller = admin::<T>();
    let to: T::AccountId = account("treasury", 0, 0);

    #[extrinsic_call]
    withdraw_protocol_balance(RawOrigin::Signed(caller), to, UNIT);

    assert_eq!(ProtocolBalance::<T>::get(), 0);
  }

  #[benchmark]
  fn set_max_cost_for() {
    let caller = registrar::<T>();
    let target: T::AccountId = account("target", 0, 0);

    #[extrinsic_call]
    set_max_cost_for(RawOrigin::Signed(caller), target.clone(), 1_000_000);

    assert_eq!(MaxCost::<T>::get(&target), Some(1_000_000));
  }

  #[benchmark]
  fn deposit() {
    let caller = registrar::<T>();
    let target: T::AccountId = account("target", 0, 0);

    #[extrinsic_call]
    deposit(RawOrigin::Signed(caller), target.clone(), UNIT);

    assert_eq!(Escrow::<T>::get(&target), UNIT);
  }

  #[benchmark]
  fn deposit_protocol() {
    let caller = registrar::<T>();

    #[extrinsic_call]
    deposit_protocol(RawOrigin::Signed(caller), UNIT);

    assert_eq!(ProtocolBalance::<T>::get(), UNIT);
  }

  #[benchmark]
  fn withdraw_escrow() {
    let caller = registrar::<T>();
    let target: T::AccountId = account("target", 0, 0);
    let to: T::AccountId = account("admin", 0, 0);
    Pallet::<T>::do_deposit(&caller, &caller, &target, UNIT).unwrap();

    #[extrinsic_call]
    withdraw_escrow(RawOrigin::Signed(caller), target.clone(), to, UNIT);

    assert_eq!(Escrow::<T>::get(&target), 0);
  }

  #[benchmark]
  fn add_controller() {
    let caller = registrar::<T>();
    let controller: T::AccountId = account("controller", 0, 0);

    #[extrinsic_call]
    add_controller(RawOrigin::Signed(caller), controller.clone());

    assert!(T::Roles::has_role(Role::Controller, &controller));
  }

  #[benchmark]
  fn remove_controller() {
    let caller = registrar::<T>();
    let controller: T::AccountId = account("controller", 0, 0);
    T::Roles::grant(Role::Controller, &controller);

    #[extrinsic_call]
    remove_controller(RawOrigin::Signed(caller), controller.clone());

    assert!(!T::Roles::has_role(Role::Controller, &controller));
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
