#![cfg(feature = "runtime-benchmarks")]

use crate::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::Role;

#[instance_benchmarks]
mod benches {
  use super::*;

  fn admin<T: Config<I>, I: 'static>() -> T::AccountId {
    let caller: T::AccountId = whitelisted_caller();
    Pallet::<T, I>::do_grant(Role::Admin, &caller);
    caller
  }

  #[benchmark]
  fn grant_role() {
    let caller = admin::<T, I>();
    let who: T::AccountId = account("controller", 0, 0);

    #[extrinsic_call]
    grant_role(RawOrigin::Signed(caller), Role::Controller, who.clone());

    assert!(Pallet::<T, I>::has(Role::Controller, &who));
  }

  #[benchmark]
  fn revoke_role() {
    let caller = admin::<T, I>();
    let who: T::AccountId = account("controller", 0, 0);
    Pallet::<T, I>::do_grant(Role::Controller, &who);

    #[extrinsic_call]
    revoke_role(RawOrigin::Signed(caller), Role::Controller, who.clone());

    assert!(!Pallet::<T, I>::has(Role::Controller, &who));
  }

  #[benchmark]
  fn renounce_role() {
    let who: T::AccountId = whitelisted_caller();
    Pallet::<T, I>::do_grant(Role::Registrar, &who);

    #[extrinsic_call]
    renounce_role(RawOrigin::Signed(who.clone()), Role::Registrar);

    assert!(RegistrarHolder::<T, I>::get().is_none());
  }

  // Worst case displaces an existing registrar.
  #[benchmark]
  fn set_registrar() {
    let caller = admin::<T, I>();
    let old: T::AccountId = account("registrar", 0, 0);
    let new: T::AccountId = account("registrar", 1, 0);
    Pallet::<T, I>::do_grant(Role::Registrar, &old);

    #[extrinsic_call]
    set_registrar(RawOrigin::Signed(caller), new.clone());

    assert_eq!(RegistrarHolder::<T, I>::get(), Some(new));
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
