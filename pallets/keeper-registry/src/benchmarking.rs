#![cfg(feature = "runtime-benchmarks")]

use crate::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_support::traits::Get;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{Role, RoleTable};

#[benchmarks]
mod benches {
  use super::*;

  fn registrar<T: Config>() -> T::AccountId {
    let caller: T::AccountId = whitelisted_caller();
    T::Roles::grant(Role::Registrar, &caller);
    caller
  }

  // Fills the admin index up to the last slot so the slot scan is as long as it gets.
  fn prefill_admin_index<T: Config>(admin: &T::AccountId) {
    let fill = T::MaxTargetsPerAdmin::get().saturating_sub(1);
    AdminIndex::<T>::mutate(admin, |slots| {
      for i in 0..fill {
        let _ = slots.try_push(AdminSlot {
          target: account("filler", i, 0),
          active: false,
        });
      }
    });
  }

  #[benchmark]
  fn register_target() {
    let caller = registrar::<T>();
    let admin: T::AccountId = account("admin", 0, 0);
    let target: T::AccountId = account("target", 0, 0);
    prefill_admin_index::<T>(&admin);

    #[extrinsic_call]
    register_target(RawOrigin::Signed(caller), target.clone(), admin);

    assert!(Pallet::<T>::is_registered_target(&target));
  }

  #[benchmark]
  fn unregister_target() {
    let caller = registrar::<T>();
    let admin: T::AccountId = account("admin", 0, 0);
    let target: T::AccountId = account("target", 0, 0);
    prefill_admin_index::<T>(&admin);
    Pallet::<T>::do_register_target(&caller, target.clone(), admin).unwrap();

    #[extrinsic_call]
    unregister_target(RawOrigin::Signed(caller), target.clone());

    assert!(!Pallet::<T>::is_registered_target(&target));
  }

  #[benchmark]
  fn register_controller() {
    let caller = registrar::<T>();
    let controller: T::AccountId = account("controller", 0, 0);

    #[extrinsic_call]
    register_controller(RawOrigin::Signed(caller), controller.clone());

    assert!(Pallet::<T>::is_registered_controller(&controller));
  }

  #[benchmark]
  fn unregister_controller() {
    let caller = registrar::<T>();
    let controller: T::AccountId = account("controller", 0, 0);
    Pallet::<T>::do_register_controller(&caller, controller.clone()).unwrap();

    #[extrinsic_call]
    unregister_controller(RawOrigin::Signed(caller), controller.clone());

    assert!(!Pallet::<T>::is_registered_controller(&controller));
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
