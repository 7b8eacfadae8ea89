//! Keeper Roles Pallet
//!
//! Capability table mapping `(Role, holder)` to a grant. The registry, the registrar and the
//! execution engine each get their own instance and receive it through `Config::Roles`,
//! so access control lives in one place instead of being repeated per component.
//!
//! The `Registrar` role is a singleton: granting it to a new account takes it away from the
//! previous holder, which is how a component is pointed at a replacement registrar without
//! migrating any data.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::keeper-roles";

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use alloc::vec::Vec;
  use frame::prelude::*;
  use polkadot_sdk::frame_support::traits::EnsureOrigin;
  use primitives::{Role, RoleTable};

  #[pallet::config]
  pub trait Config<I: 'static = ()>: frame_system::Config {
    /// Origin that may manage grants without holding `Role::Admin` (e.g. Root or governance)
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T, I = ()>(PhantomData<(T, I)>);

  /// Granted roles.
  #[pallet::storage]
  pub type Holders<T: Config<I>, I: 'static = ()> =
    StorageDoubleMap<_, Blake2_128Concat, Role, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  /// Current holder of the singleton registrar role.
  #[pallet::storage]
  #[pallet::getter(fn registrar_holder)]
  pub type RegistrarHolder<T: Config<I>, I: 'static = ()> =
    StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config<I>, I: 'static = ()> {
    RoleGranted {
      role: Role,
      who: T::AccountId,
    },
    RoleRevoked {
      role: Role,
      who: T::AccountId,
    },
    /// The registrar role moved to a new account.
    RegistrarChanged {
      old: Option<T::AccountId>,
      new: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T, I = ()> {
    /// Caller neither passes `AdminOrigin` nor holds `Role::Admin`.
    NotAdmin,
    /// The account does not hold the role.
    RoleNotHeld,
    /// The account already holds the role.
    RoleAlreadyHeld,
  }

  #[pallet::call]
  impl<T: Config<I>, I: 'static> Pallet<T, I> {
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::grant_role())]
    pub fn grant_role(origin: OriginFor<T>, role: Role, who: T::AccountId) -> DispatchResult {
      Self::ensure_admin(origin)?;
      ensure!(!Self::has(role, &who), Error::<T, I>::RoleAlreadyHeld);
      Self::do_grant(role, &who);
      Ok(())
    }

    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::revoke_role())]
    pub fn revoke_role(origin: OriginFor<T>, role: Role, who: T::AccountId) -> DispatchResult {
      Self::ensure_admin(origin)?;
      ensure!(Self::has(role, &who), Error::<T, I>::RoleNotHeld);
      Self::do_revoke(role, &who);
      Ok(())
    }

    /// Drop a role the caller holds.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::renounce_role())]
    pub fn renounce_role(origin: OriginFor<T>, role: Role) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(Self::has(role, &who), Error::<T, I>::RoleNotHeld);
      Self::do_revoke(role, &who);
      Ok(())
    }

    /// Point this component at a (new) registrar. The previous holder loses the role.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_registrar())]
    pub fn set_registrar(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
      Self::ensure_admin(origin)?;
      Self::do_grant(Role::Registrar, &who);
      Ok(())
    }
  }

  impl<T: Config<I>, I: 'static> Pallet<T, I> {
    pub fn has(role: Role, who: &T::AccountId) -> bool {
      Holders::<T, I>::contains_key(role, who)
    }

    pub fn holders_of(role: Role) -> Vec<T::AccountId> {
      Holders::<T, I>::iter_key_prefix(role).collect()
    }

    fn ensure_admin(origin: OriginFor<T>) -> DispatchResult {
      if T::AdminOrigin::ensure_origin(origin.clone()).is_ok() {
        return Ok(());
      }
      let who = ensure_signed(origin)?;
      ensure!(Self::has(Role::Admin, &who), Error::<T, I>::NotAdmin);
      Ok(())
    }

    pub(crate) fn do_grant(role: Role, who: &T::AccountId) {
      if role.is_singleton() {
        let old = RegistrarHolder::<T, I>::get();
        if old.as_ref() == Some(who) {
          return;
        }
        if let Some(ref previous) = old {
          Holders::<T, I>::remove(role, previous);
          Self::deposit_event(Event::RoleRevoked {
            role,
            who: previous.clone(),
          });
        }
        RegistrarHolder::<T, I>::put(who);
        Self::deposit_event(Event::RegistrarChanged {
          old,
          new: who.clone(),
        });
      }
      Holders::<T, I>::insert(role, who, ());
      log::debug!(target: LOG_TARGET, "granted {:?} to {:?}", role, who);
      Self::deposit_event(Event::RoleGranted {
        role,
        who: who.clone(),
      });
    }

    pub(crate) fn do_revoke(role: Role, who: &T::AccountId) {
      if !Self::has(role, who) {
        return;
      }
      Holders::<T, I>::remove(role, who);
      if role.is_singleton() && RegistrarHolder::<T, I>::get().as_ref() == Some(who) {
        RegistrarHolder::<T, I>::kill();
      }
      log::debug!(target: LOG_TARGET, "revoked {:?} from {:?}", role, who);
      Self::deposit_event(Event::RoleRevoked {
        role,
        who: who.clone(),
      });
    }
  }

  impl<T: Config<I>, I: 'static> RoleTable<T::AccountId> for Pallet<T, I> {
    fn has_role(role: Role, who: &T::AccountId) -> bool {
      Self::has(role, who)
    }

    fn grant(role: Role, who: &T::AccountId) {
      Self::do_grant(role, who)
    }

    fn revoke(role: Role, who: &T::AccountId) {
      Self::do_revoke(role, who)
    }

    fn registrar() -> Option<T::AccountId> {
      RegistrarHolder::<T, I>::get()
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config<I>, I: 'static = ()> {
    pub admins: Vec<T::AccountId>,
    pub registrar: Option<T::AccountId>,
    pub controllers: Vec<T::AccountId>,
    #[serde(skip)]
    pub _marker: PhantomData<I>,
  }

  #[pallet::genesis_build]
  impl<T: Config<I>, I: 'static> BuildGenesisConfig for GenesisConfig<T, I> {
    fn build(&self) {
      for admin in &self.admins {
        Pallet::<T, I>::do_grant(Role::Admin, admin);
      }
      if let Some(ref registrar) = self.registrar {
        Pallet::<T, I>::do_grant(Role::Registrar, registrar);
      }
      for controller in &self.controllers {
        Pallet::<T, I>::do_grant(Role::Controller, controller);
      }
    }
  }
}
