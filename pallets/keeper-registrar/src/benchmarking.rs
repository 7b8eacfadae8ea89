#![cfg(feature = "runtime-benchmarks")]

use crate::*;
use frame::prelude::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{Role, RoleTable, keeper::params::UNIT};

#[benchmarks]
mod benches {
  use super::*;

  fn authority_of_new_target<T: Config>(index: u32) -> (T::AccountId, T::AccountId) {
    let authority: T::AccountId = whitelisted_caller();
    let target: T::AccountId = account("target", index, 0);
    T::BenchmarkHelper::set_authority(&target, &authority);
    T::BenchmarkHelper::fund(&authority, 1_000 * UNIT);
    (authority, target)
  }

  fn registered_target<T: Config>() -> (T::AccountId, T::AccountId) {
    let (authority, target) = authority_of_new_target::<T>(0);
    Pallet::<T>::register_target_for(
      RawOrigin::Signed(authority.clone()).into(),
      target.clone(),
      0,
    )
    .unwrap();
    (authority, target)
  }

  #[benchmark]
  fn register_target_for() {
    let (authority, target) = authority_of_new_target::<T>(0);

    #[extrinsic_call]
    register_target_for(RawOrigin::Signed(authority), target.clone(), 1_000_000);

    assert!(T::Registry::is_registered_target(&target));
  }

  #[benchmark]
  fn unregister_target_for() {
    let (authority, target) = registered_target::<T>();

    #[extrinsic_call]
    unregister_target_for(RawOrigin::Signed(authority), target.clone());

    assert!(!T::Registry::is_registered_target(&target));
  }

  #[benchmark]
  fn deregister_target_for() {
    let (authority, target) = registered_target::<T>();
    Pallet::<T>::deposit(
      RawOrigin::Signed(authority.clone()).into(),
      target.clone(),
      10 * UNIT,
    )
    .unwrap();

    #[extrinsic_call]
    deregister_target_for(RawOrigin::Signed(authority), target.clone());

    assert_eq!(T::Engine::balance_of(&target), 0);
  }

  #[benchmark]
  fn register_controller() {
    let controller: T::AccountId = account("controller", 0, 0);
    T::BenchmarkHelper::fund(&controller, 1_000 * UNIT);
    let fee = RegistrationFee::<T>::get();

    #[extrinsic_call]
    register_controller(RawOrigin::Signed(controller.clone()), fee);

    assert!(T::Registry::is_registered_controller(&controller));
  }

  #[benchmark]
  fn unregister_controller() {
    let controller: T::AccountId = account("controller", 0, 0);
    T::BenchmarkHelper::fund(&controller, 1_000 * UNIT);
    Pallet::<T>::register_controller(
      RawOrigin::Signed(controller.clone()).into(),
      RegistrationFee::<T>::get(),
    )
    .unwrap();

    #[extrinsic_call]
    unregister_controller(RawOrigin::Signed(controller.clone()));

    assert!(!T::Registry::is_registered_controller(&controller));
  }

  #[benchmark]
  fn deposit() {
    let (_, target) = registered_target::<T>();
    let depositor: T::AccountId = account("depositor", 0, 0);
    T::BenchmarkHelper::fund(&depositor, 1_000 * UNIT);

    #[extrinsic_call]
    deposit(RawOrigin::Signed(depositor), target.clone(), UNIT);

    assert_eq!(T::Engine::balance_of(&target), UNIT);
  }

  #[benchmark]
  fn set_registration_fee() {
    let caller: T::AccountId = whitelisted_caller();
    T::Roles::grant(Role::Admin, &caller);

    #[extrinsic_call]
    set_registration_fee(RawOrigin::Signed(caller), UNIT);

    assert_eq!(RegistrationFee::<T>::get(), UNIT);
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
