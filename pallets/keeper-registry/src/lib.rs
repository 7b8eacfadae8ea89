//! Keeper Registry Pallet
//!
//! Canonical membership of automatable targets and the controllers allowed to trigger them.
//! The registry carries no policy of its own: every mutation must come from the single account
//! holding `Role::Registrar` in the injected role table, which is normally the registrar
//! pallet's account.
//!
//! Each target remembers the admin that registered it and its position in that admin's index.
//! Unregistering tombstones the slot instead of compacting the index, so positions handed out
//! by `indices_for` stay valid and `target_at` keeps resolving them; re-registering the same
//! target under the same admin reactivates the original slot.
//!
//! Slots are never reclaimed. Tombstones count toward `MaxTargetsPerAdmin`, so an admin that has
//! ever held that many distinct targets can only re-register those targets, even after all of
//! them were unregistered. Such an admin registers new targets under another account.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::keeper-registry";

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use alloc::vec::Vec;
  use frame::prelude::*;
  use polkadot_sdk::frame_support::traits::Contains;
  use primitives::{Role, RoleTable};

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Role table deciding who may mutate the registry
    type Roles: RoleTable<Self::AccountId>;

    /// Upper bound on simultaneously registered targets
    #[pallet::constant]
    type MaxTargets: Get<u32>;

    /// Upper bound on index slots per admin, tombstones included
    #[pallet::constant]
    type MaxTargetsPerAdmin: Get<u32>;

    #[pallet::constant]
    type MaxControllers: Get<u32>;

    /// Longest allow/block list accepted by the filtered views
    #[pallet::constant]
    type MaxQueryListLength: Get<u32>;

    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  #[derive(Clone, Debug, Decode, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo)]
  pub struct TargetRecord<AccountId, BlockNumber> {
    /// Account that registered the target
    pub admin: AccountId,
    /// Position of the target in the admin's index
    pub admin_slot: u32,
    pub registered_at: BlockNumber,
  }

  #[derive(Clone, Debug, Decode, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo)]
  pub struct AdminSlot<AccountId> {
    pub target: AccountId,
    /// False once the target has been unregistered
    pub active: bool,
  }

  pub type TargetRecordOf<T> =
    TargetRecord<<T as frame_system::Config>::AccountId, BlockNumberFor<T>>;

  /// Registered targets. Presence is the registration flag.
  #[pallet::storage]
  pub type Targets<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, TargetRecordOf<T>, OptionQuery>;

  /// Registered targets in registration order.
  #[pallet::storage]
  #[pallet::getter(fn target_list)]
  pub type TargetList<T: Config> =
    StorageValue<_, BoundedVec<T::AccountId, T::MaxTargets>, ValueQuery>;

  /// Per-admin index of registered targets with tombstoned gaps.
  #[pallet::storage]
  pub type AdminIndex<T: Config> = StorageMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    BoundedVec<AdminSlot<T::AccountId>, T::MaxTargetsPerAdmin>,
    ValueQuery,
  >;

  /// Registered controllers and the block they joined at.
  #[pallet::storage]
  pub type Controllers<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, BlockNumberFor<T>, OptionQuery>;

  #[pallet::storage]
  #[pallet::getter(fn controller_count)]
  pub type ControllerCount<T: Config> = StorageValue<_, u32, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    TargetRegistered {
      target: T::AccountId,
      admin: T::AccountId,
    },
    TargetUnregistered {
      target: T::AccountId,
      admin: T::AccountId,
    },
    ControllerRegistered {
      controller: T::AccountId,
    },
    ControllerUnregistered {
      controller: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Caller does not hold the registrar role
    NotRegistrar,
    AlreadyRegistered,
    NotRegistered,
    /// `MaxTargets` reached
    TooManyTargets,
    /// The admin has no free index slot left
    AdminIndexFull,
    /// `MaxControllers` reached
    TooManyControllers,
    /// Allow/block list exceeds `MaxQueryListLength`
    QueryListTooLong,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::register_target())]
    pub fn register_target(
      origin: OriginFor<T>,
      target: T::AccountId,
      admin: T::AccountId,
    ) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_register_target(&caller, target, admin)
    }

    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::unregister_target())]
    pub fn unregister_target(origin: OriginFor<T>, target: T::AccountId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_unregister_target(&caller, &target).map(|_| ())
    }

    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::register_controller())]
    pub fn register_controller(origin: OriginFor<T>, controller: T::AccountId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_register_controller(&caller, controller)
    }

    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::unregister_controller())]
    pub fn unregister_controller(
      origin: OriginFor<T>,
      controller: T::AccountId,
    ) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_unregister_controller(&caller, &controller)
    }
  }

  impl<T: Config> Pallet<T> {
    fn ensure_registrar(caller: &T::AccountId) -> DispatchResult {
      ensure!(
        T::Roles::has_role(Role::Registrar, caller),
        Error::<T>::NotRegistrar
      );
      Ok(())
    }

    pub fn do_register_target(
      caller: &T::AccountId,
      target: T::AccountId,
      admin: T::AccountId,
    ) -> DispatchResult {
      Self::ensure_registrar(caller)?;
      ensure!(
        !Targets::<T>::contains_key(&target),
        Error::<T>::AlreadyRegistered
      );
      ensure!(
        Self::target_count() < T::MaxTargets::get(),
        Error::<T>::TooManyTargets
      );

      let admin_slot = AdminIndex::<T>::try_mutate(&admin, |slots| -> Result<u32, DispatchError> {
        if let Some((pos, slot)) = slots
          .iter_mut()
          .enumerate()
          .find(|(_, slot)| slot.target == target)
        {
          slot.active = true;
          return Ok(pos as u32);
        }
        slots
          .try_push(AdminSlot {
            target: target.clone(),
            active: true,
          })
          .map_err(|_| Error::<T>::AdminIndexFull)?;
        Ok(slots.len().saturating_sub(1) as u32)
      })?;

      TargetList::<T>::try_mutate(|list| list.try_push(target.clone()))
        .map_err(|_| Error::<T>::TooManyTargets)?;
      Targets::<T>::insert(
        &target,
        TargetRecord {
          admin: admin.clone(),
          admin_slot,
          registered_at: frame_system::Pallet::<T>::block_number(),
        },
      );

      log::debug!(
        target: LOG_TARGET,
        "registered target {:?} for admin {:?} at slot {}",
        target,
        admin,
        admin_slot
      );
      Self::deposit_event(Event::TargetRegistered { target, admin });
      Ok(())
    }

    /// Returns the admin the target was registered under.
    pub fn do_unregister_target(
      caller: &T::AccountId,
      target: &T::AccountId,
    ) -> Result<T::AccountId, DispatchError> {
      Self::ensure_registrar(caller)?;
      let record = Targets::<T>::take(target).ok_or(Error::<T>::NotRegistered)?;

      TargetList::<T>::mutate(|list| list.retain(|t| t != target));
      AdminIndex::<T>::mutate(&record.admin, |slots| {
        if let Some(slot) = slots.get_mut(record.admin_slot as usize) {
          slot.active = false;
        }
      });

      log::debug!(target: LOG_TARGET, "unregistered target {:?}", target);
      Self::deposit_event(Event::TargetUnregistered {
        target: target.clone(),
        admin: record.admin.clone(),
      });
      Ok(record.admin)
    }

    pub fn do_register_controller(caller: &T::AccountId, controller: T::AccountId) -> DispatchResult {
      Self::ensure_registrar(caller)?;
      ensure!(
        !Controllers::<T>::contains_key(&controller),
        Error::<T>::AlreadyRegistered
      );
      let count = ControllerCount::<T>::get();
      ensure!(
        count < T::MaxControllers::get(),
        Error::<T>::TooManyControllers
      );

      Controllers::<T>::insert(&controller, frame_system::Pallet::<T>::block_number());
      ControllerCount::<T>::put(count.saturating_add(1));

      log::debug!(target: LOG_TARGET, "registered controller {:?}", controller);
      Self::deposit_event(Event::ControllerRegistered { controller });
      Ok(())
    }

    pub fn do_unregister_controller(
      caller: &T::AccountId,
      controller: &T::AccountId,
    ) -> DispatchResult {
      Self::ensure_registrar(caller)?;
      ensure!(
        Controllers::<T>::take(controller).is_some(),
        Error::<T>::NotRegistered
      );
      ControllerCount::<T>::mutate(|count| *count = count.saturating_sub(1));

      log::debug!(target: LOG_TARGET, "unregistered controller {:?}", controller);
      Self::deposit_event(Event::ControllerUnregistered {
        controller: controller.clone(),
      });
      Ok(())
    }

    pub fn is_registered_target(target: &T::AccountId) -> bool {
      Targets::<T>::contains_key(target)
    }

    pub fn is_registered_controller(controller: &T::AccountId) -> bool {
      Controllers::<T>::contains_key(controller)
    }

    pub fn all_targets() -> Vec<T::AccountId> {
      TargetList::<T>::get().into_inner()
    }

    pub fn target_count() -> u32 {
      TargetList::<T>::decode_len().unwrap_or(0) as u32
    }

    pub fn admin_of(target: &T::AccountId) -> Option<T::AccountId> {
      Targets::<T>::get(target).map(|record| record.admin)
    }

    /// Targets currently registered under `admin`, in slot order.
    pub fn targets_for(admin: &T::AccountId) -> Vec<T::AccountId> {
      AdminIndex::<T>::get(admin)
        .into_iter()
        .filter(|slot| slot.active)
        .map(|slot| slot.target)
        .collect()
    }

    /// Slot positions of the targets returned by `targets_for`.
    pub fn indices_for(admin: &T::AccountId) -> Vec<u32> {
      AdminIndex::<T>::get(admin)
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.active)
        .map(|(pos, _)| pos as u32)
        .collect()
    }

    /// Target registered at `index` of `admin`'s index, `None` for tombstones and out of range.
    pub fn target_at(admin: &T::AccountId, index: u32) -> Option<T::AccountId> {
      AdminIndex::<T>::get(admin)
        .get(index as usize)
        .filter(|slot| slot.active)
        .map(|slot| slot.target.clone())
    }

    /// Registered members of `allow`, in `allow` order and without duplicates.
    pub fn targets_from_list(allow: &[T::AccountId]) -> Result<Vec<T::AccountId>, DispatchError> {
      Self::ensure_query_len(allow)?;
      let mut found: Vec<T::AccountId> = Vec::with_capacity(allow.len());
      for target in allow {
        if Self::is_registered_target(target) && !found.contains(target) {
          found.push(target.clone());
        }
      }
      Ok(found)
    }

    /// Registered targets not in `block`, in registration order.
    pub fn targets_excluding(block: &[T::AccountId]) -> Result<Vec<T::AccountId>, DispatchError> {
      Self::ensure_query_len(block)?;
      Ok(
        TargetList::<T>::get()
          .into_iter()
          .filter(|target| !block.contains(target))
          .collect(),
      )
    }

    fn ensure_query_len(list: &[T::AccountId]) -> DispatchResult {
      ensure!(
        list.len() <= T::MaxQueryListLength::get() as usize,
        Error::<T>::QueryListTooLong
      );
      Ok(())
    }
  }

  /// Membership check handed to the execution engine.
  pub struct RegisteredTargets<T>(PhantomData<T>);

  impl<T: Config> Contains<T::AccountId> for RegisteredTargets<T> {
    fn contains(target: &T::AccountId) -> bool {
      Pallet::<T>::is_registered_target(target)
    }
  }
}
