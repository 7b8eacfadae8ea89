//! Keeper Registrar Pallet
//!
//! The policy layer in front of the registry. It decides who may register what and forwards
//! the resulting mutations to the registry and the execution engine through `RegistryOps` and
//! `EngineOps`, acting as its own pallet account. Pointing the registry and engine at a new
//! registrar replaces the policy without migrating membership data.
//!
//! - Targets are registered by whoever the target itself names as its authority.
//! - Controllers register themselves, optionally paying a fee into the engine treasury.
//! - Anyone may fund a registered target's escrow.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapters;
pub use adapters::{EngineOps, RegistryOps};

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::keeper-registrar";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  /// Makes `authority` the authority of `target`.
  fn set_authority(target: &AccountId, authority: &AccountId);
  fn fund(who: &AccountId, amount: primitives::Balance);
}

#[frame::pallet]
pub mod pallet {
  use super::{EngineOps, LOG_TARGET, RegistryOps, WeightInfo};
  use frame::deps::{
    frame_support::storage::with_storage_layer,
    sp_runtime::traits::{AccountIdConversion, Zero},
  };
  use frame::prelude::*;
  use primitives::{Balance, CostUnits, Role, RoleTable, TargetAuthority};

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Registry the registrar mutates
    type Registry: RegistryOps<Self::AccountId>;

    /// Engine holding caps, escrow and the controller role
    type Engine: EngineOps<Self::AccountId>;

    /// Authority queries answered by the targets themselves
    type Targets: TargetAuthority<Self::AccountId>;

    /// The registrar's own role table, for its configuration
    type Roles: RoleTable<Self::AccountId>;

    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Controller registration fee until governance sets another
    #[pallet::constant]
    type DefaultRegistrationFee: Get<Balance>;

    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Fee a controller pays to register. Zero makes registration free.
  #[pallet::storage]
  #[pallet::getter(fn registration_fee)]
  pub type RegistrationFee<T: Config> =
    StorageValue<_, Balance, ValueQuery, T::DefaultRegistrationFee>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    TargetRegistered {
      target: T::AccountId,
      admin: T::AccountId,
      max_cost: CostUnits,
    },
    /// `admin` is the account the target had been registered under.
    TargetUnregistered {
      target: T::AccountId,
      admin: T::AccountId,
    },
    /// Unregistered and the remaining escrow paid to the target's current authority.
    TargetDeregistered {
      target: T::AccountId,
      admin: T::AccountId,
      refunded_to: T::AccountId,
      refunded: Balance,
    },
    ControllerRegistered {
      controller: T::AccountId,
      fee: Balance,
    },
    ControllerUnregistered {
      controller: T::AccountId,
    },
    Deposited {
      target: T::AccountId,
      from: T::AccountId,
      amount: Balance,
    },
    RegistrationFeeUpdated {
      old: Balance,
      new: Balance,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// The target does not name the caller as its authority
    NotTargetAuthority,
    /// Caller neither passes `AdminOrigin` nor holds `Role::Admin`
    NotAdmin,
    /// Offered fee is below `RegistrationFee`
    InsufficientRegistrationFee,
    ControllerAlreadyRegistered,
    ControllerNotRegistered,
    TargetNotRegistered,
    ZeroAmount,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Register a target the caller is authority of. `max_cost == 0` uses the engine default.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::register_target_for())]
    pub fn register_target_for(
      origin: OriginFor<T>,
      target: T::AccountId,
      max_cost: CostUnits,
    ) -> DispatchResult {
      let requester = ensure_signed(origin)?;
      Self::ensure_authority(&requester, &target)?;
      let registrar = Self::account_id();

      with_storage_layer(|| {
        T::Registry::register_target(&registrar, &target, &requester)?;
        T::Engine::set_max_cost_for(&registrar, &target, max_cost)
      })?;

      log::debug!(target: LOG_TARGET, "{:?} registered {:?}", requester, target);
      Self::deposit_event(Event::TargetRegistered {
        target,
        admin: requester,
        max_cost,
      });
      Ok(())
    }

    /// Unregister a target. Its escrow stays with the engine.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::unregister_target_for())]
    pub fn unregister_target_for(origin: OriginFor<T>, target: T::AccountId) -> DispatchResult {
      let requester = ensure_signed(origin)?;
      Self::ensure_authority(&requester, &target)?;
      let admin = with_storage_layer(|| Self::do_unregister(&target))?;

      log::debug!(target: LOG_TARGET, "{:?} unregistered {:?}", requester, target);
      Self::deposit_event(Event::TargetUnregistered { target, admin });
      Ok(())
    }

    /// Unregister a target and pay its remaining escrow out to the caller.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::deregister_target_for())]
    pub fn deregister_target_for(origin: OriginFor<T>, target: T::AccountId) -> DispatchResult {
      let requester = ensure_signed(origin)?;
      Self::ensure_authority(&requester, &target)?;
      let registrar = Self::account_id();

      let (admin, refunded) = with_storage_layer(|| -> Result<_, DispatchError> {
        let admin = Self::do_unregister(&target)?;
        let refund = T::Engine::balance_of(&target);
        if !refund.is_zero() {
          T::Engine::withdraw_escrow(&registrar, &target, &requester, refund)?;
        }
        Ok((admin, refund))
      })?;

      log::debug!(
        target: LOG_TARGET,
        "{:?} deregistered {:?}, refunded {}",
        requester,
        target,
        refunded
      );
      Self::deposit_event(Event::TargetDeregistered {
        target,
        admin,
        refunded_to: requester,
        refunded,
      });
      Ok(())
    }

    /// Register the caller as a controller. `fee` is what the caller is willing to pay; all
    /// of it goes to the engine treasury.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::register_controller())]
    pub fn register_controller(origin: OriginFor<T>, fee: Balance) -> DispatchResult {
      let controller = ensure_signed(origin)?;
      ensure!(
        Self::can_register_controller(&controller),
        Error::<T>::ControllerAlreadyRegistered
      );
      ensure!(
        fee >= RegistrationFee::<T>::get(),
        Error::<T>::InsufficientRegistrationFee
      );
      let registrar = Self::account_id();

      with_storage_layer(|| {
        if !fee.is_zero() {
          T::Engine::deposit_protocol(&registrar, &controller, fee)?;
        }
        T::Registry::register_controller(&registrar, &controller)?;
        T::Engine::add_controller(&registrar, &controller)
      })?;

      log::debug!(target: LOG_TARGET, "controller {:?} joined for {}", controller, fee);
      Self::deposit_event(Event::ControllerRegistered { controller, fee });
      Ok(())
    }

    /// Leave the controller set. The registration fee is not returned.
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::unregister_controller())]
    pub fn unregister_controller(origin: OriginFor<T>) -> DispatchResult {
      let controller = ensure_signed(origin)?;
      ensure!(
        T::Registry::is_registered_controller(&controller),
        Error::<T>::ControllerNotRegistered
      );
      let registrar = Self::account_id();

      with_storage_layer(|| {
        T::Registry::unregister_controller(&registrar, &controller)?;
        T::Engine::remove_controller(&registrar, &controller)
      })?;

      Self::deposit_event(Event::ControllerUnregistered { controller });
      Ok(())
    }

    /// Fund a registered target's escrow from the caller's balance.
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::deposit())]
    pub fn deposit(origin: OriginFor<T>, target: T::AccountId, amount: Balance) -> DispatchResult {
      let from = ensure_signed(origin)?;
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      ensure!(
        T::Registry::is_registered_target(&target),
        Error::<T>::TargetNotRegistered
      );
      T::Engine::deposit(&Self::account_id(), &from, &target, amount)?;
      Self::deposit_event(Event::Deposited {
        target,
        from,
        amount,
      });
      Ok(())
    }

    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::set_registration_fee())]
    pub fn set_registration_fee(origin: OriginFor<T>, fee: Balance) -> DispatchResult {
      Self::ensure_admin(origin)?;
      let old = RegistrationFee::<T>::get();
      RegistrationFee::<T>::put(fee);
      Self::deposit_event(Event::RegistrationFeeUpdated { old, new: fee });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// The account the registrar acts as towards registry and engine.
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Whether `requester` currently administers `target`, as reported by the target.
    pub fn can_register_target(requester: &T::AccountId, target: &T::AccountId) -> bool {
      T::Targets::is_authority(target, requester)
    }

    pub fn can_register_controller(who: &T::AccountId) -> bool {
      !T::Registry::is_registered_controller(who)
    }

    fn ensure_authority(requester: &T::AccountId, target: &T::AccountId) -> DispatchResult {
      ensure!(
        Self::can_register_target(requester, target),
        Error::<T>::NotTargetAuthority
      );
      Ok(())
    }

    fn ensure_admin(origin: OriginFor<T>) -> DispatchResult {
      if T::AdminOrigin::ensure_origin(origin.clone()).is_ok() {
        return Ok(());
      }
      let who = ensure_signed(origin)?;
      ensure!(T::Roles::has_role(Role::Admin, &who), Error::<T>::NotAdmin);
      Ok(())
    }

    /// Returns the admin the target had been registered under.
    fn do_unregister(target: &T::AccountId) -> Result<T::AccountId, DispatchError> {
      let registrar = Self::account_id();
      let admin = T::Registry::unregister_target(&registrar, target)?;
      T::Engine::set_max_cost_for(&registrar, target, 0)?;
      Ok(admin)
    }
  }
}
