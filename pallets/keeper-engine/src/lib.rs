//! Keeper Execution Engine Pallet
//!
//! Holds per-target escrow and the protocol treasury, and performs metered executions of
//! registered targets on behalf of controllers.
//!
//! An execution is validated, probed, marked as done for the current block and only then handed
//! to the target's callback. The callback runs inside its own storage layer with the effective
//! per-target cap as limit. The reported units plus the fixed overhead are priced at the
//! controller-supplied unit price, a protocol fee is added on top and the whole amount is debited
//! from the target's escrow. The controller gets its cost back plus its share of the fee, the
//! rest of the fee goes to the treasury. Any failure reverts the whole attempt, the callback's
//! own writes included.
//!
//! All funds sit on the pallet account. Every credit and debit of escrow and treasury goes
//! through this pallet, so `sum(escrow) + treasury` always equals the account balance.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapters;
pub use adapters::KeeperTarget;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::keeper-engine";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  /// Makes `target` a registered target whose probe reports ready.
  fn setup_target(target: &AccountId);
}

#[frame::pallet]
pub mod pallet {
  use super::{KeeperTarget, LOG_TARGET, WeightInfo};
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::{
      storage::with_storage_layer,
      traits::{
        Contains,
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        tokens::Preservation,
      },
      weights::Weight,
    },
    sp_runtime::{
      Permill,
      traits::{AccountIdConversion, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{Balance, CostUnits, ExecutionCost, Role, RoleTable, split_execution_cost};

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Native currency escrow and treasury are held in
    type Currency: NativeInspect<Self::AccountId, Balance = Balance>
      + NativeMutate<Self::AccountId, Balance = Balance>;

    /// Probe and callback of the automatable targets
    type Targets: KeeperTarget<Self::AccountId>;

    /// Registry membership; only members can be executed
    type Membership: Contains<Self::AccountId>;

    /// This engine's role table
    type Roles: RoleTable<Self::AccountId>;

    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Default share of the raw cost charged on top as protocol fee
    #[pallet::constant]
    type DefaultProtocolFeeRate: Get<Permill>;

    /// Default share of the protocol fee paid to the executing controller
    #[pallet::constant]
    type DefaultControllerFeeRate: Get<Permill>;

    /// Default fixed units added to every execution's metered cost
    #[pallet::constant]
    type DefaultCostOverhead: Get<CostUnits>;

    /// Default cap for targets without an explicit one
    #[pallet::constant]
    type DefaultGlobalMaxCost: Get<CostUnits>;

    /// Default highest unit price a controller may settle at
    #[pallet::constant]
    type DefaultUnitPriceCeiling: Get<Balance>;

    /// No cap, per-target or global, may exceed this
    #[pallet::constant]
    type MaxCostLimit: Get<CostUnits>;

    #[pallet::constant]
    type MaxPayloadLen: Get<u32>;

    /// Origin allowed to change engine configuration besides `Role::Admin` holders
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Escrowed funds per target.
  #[pallet::storage]
  pub type Escrow<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

  /// Accumulated protocol share of fees plus registration fees.
  #[pallet::storage]
  #[pallet::getter(fn protocol_balance)]
  pub type ProtocolBalance<T: Config> = StorageValue<_, Balance, ValueQuery>;

  /// Explicit per-target caps. Absent means `GlobalMaxCost`.
  #[pallet::storage]
  pub type MaxCost<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, CostUnits, OptionQuery>;

  /// Block of the last settled execution per target.
  #[pallet::storage]
  #[pallet::getter(fn last_executed)]
  pub type LastExecuted<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, BlockNumberFor<T>, OptionQuery>;

  /// Number of settled executions per target.
  #[pallet::storage]
  #[pallet::getter(fn execution_nonce)]
  pub type ExecutionNonce<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u64, ValueQuery>;

  /// Set while a target callback is running.
  #[pallet::storage]
  pub type ExecutionLock<T: Config> = StorageValue<_, bool, ValueQuery>;

  #[pallet::storage]
  #[pallet::getter(fn protocol_fee_rate)]
  pub type ProtocolFeeRate<T: Config> =
    StorageValue<_, Permill, ValueQuery, T::DefaultProtocolFeeRate>;

  #[pallet::storage]
  #[pallet::getter(fn controller_fee_rate)]
  pub type ControllerFeeRate<T: Config> =
    StorageValue<_, Permill, ValueQuery, T::DefaultControllerFeeRate>;

  #[pallet::storage]
  #[pallet::getter(fn cost_overhead)]
  pub type CostOverhead<T: Config> = StorageValue<_, CostUnits, ValueQuery, T::DefaultCostOverhead>;

  #[pallet::storage]
  #[pallet::getter(fn global_max_cost)]
  pub type GlobalMaxCost<T: Config> =
    StorageValue<_, CostUnits, ValueQuery, T::DefaultGlobalMaxCost>;

  #[pallet::storage]
  #[pallet::getter(fn unit_price_ceiling)]
  pub type UnitPriceCeiling<T: Config> =
    StorageValue<_, Balance, ValueQuery, T::DefaultUnitPriceCeiling>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    ExecutionSettled {
      target: T::AccountId,
      period: BlockNumberFor<T>,
      controller: T::AccountId,
      cost_consumed: CostUnits,
      unit_price: Balance,
      raw_cost: Balance,
      fee: Balance,
    },
    Deposited {
      target: T::AccountId,
      from: T::AccountId,
      amount: Balance,
    },
    EscrowWithdrawn {
      target: T::AccountId,
      to: T::AccountId,
      amount: Balance,
    },
    ProtocolDeposited {
      from: T::AccountId,
      amount: Balance,
    },
    ProtocolWithdrawn {
      to: T::AccountId,
      amount: Balance,
    },
    /// `cap == 0` means the target follows the global default again.
    MaxCostSet {
      target: T::AccountId,
      cap: CostUnits,
    },
    ControllerAdded {
      controller: T::AccountId,
    },
    ControllerRemoved {
      controller: T::AccountId,
    },
    UnitPriceCeilingSet {
      ceiling: Balance,
    },
    CostOverheadSet {
      overhead: CostUnits,
    },
    GlobalMaxCostSet {
      cap: CostUnits,
    },
    FeeRatesSet {
      protocol: Permill,
      controller: Permill,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Caller does not hold `Role::Controller`
    NotController,
    /// Caller does not hold `Role::Registrar`
    NotRegistrar,
    /// Caller neither passes `AdminOrigin` nor holds `Role::Admin`
    NotAdmin,
    /// An execution is already in progress
    ReentrantExecution,
    /// Unit price above the configured ceiling
    PriceTooHigh,
    TargetNotRegistered,
    /// The target already settled in this block
    AlreadyExecutedThisPeriod,
    /// Probe failed or reported the target as not ready
    NotReady,
    /// Escrow does not cover the debit
    InsufficientBalance,
    /// The target callback returned an error
    CallbackFailed,
    /// Reported units exceed the cap, or a cap exceeds `MaxCostLimit`
    CapExceeded,
    ArithmeticOverflow,
    InsufficientProtocolBalance,
    ZeroAmount,
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    #[cfg(feature = "try-runtime")]
    fn try_state(_n: BlockNumberFor<T>) -> Result<(), polkadot_sdk::sp_runtime::TryRuntimeError> {
      ensure!(
        Self::conservation_holds(),
        "escrow and treasury do not add up to the engine account balance"
      );
      ensure!(!ExecutionLock::<T>::get(), "execution lock left set");
      Ok(())
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Execute a registered, ready target and settle its cost.
    ///
    /// Charged up front for the target's full cap; the unused part of the cap is refunded.
    #[pallet::call_index(0)]
    #[pallet::weight(Pallet::<T>::execute_weight(&target))]
    pub fn execute(
      origin: OriginFor<T>,
      target: T::AccountId,
      payload: BoundedVec<u8, T::MaxPayloadLen>,
      unit_price: Balance,
    ) -> DispatchResultWithPostInfo {
      let controller = ensure_signed(origin)?;
      let overhead = CostOverhead::<T>::get();
      let cost = Self::do_execute(&controller, &target, payload.into_inner(), unit_price)?;
      let units = cost.cost_consumed.saturating_sub(overhead);
      Ok(Some(T::WeightInfo::execute().saturating_add(Self::callback_weight(units))).into())
    }

    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::set_cost_price_ceiling())]
    pub fn set_cost_price_ceiling(origin: OriginFor<T>, ceiling: Balance) -> DispatchResult {
      Self::ensure_admin(origin)?;
      UnitPriceCeiling::<T>::put(ceiling);
      Self::deposit_event(Event::UnitPriceCeilingSet { ceiling });
      Ok(())
    }

    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::set_cost_overhead())]
    pub fn set_cost_overhead(origin: OriginFor<T>, overhead: CostUnits) -> DispatchResult {
      Self::ensure_admin(origin)?;
      CostOverhead::<T>::put(overhead);
      Self::deposit_event(Event::CostOverheadSet { overhead });
      Ok(())
    }

    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_default_max_cost())]
    pub fn set_default_max_cost(origin: OriginFor<T>, cap: CostUnits) -> DispatchResult {
      Self::ensure_admin(origin)?;
      ensure!(
        !cap.is_zero() && cap <= T::MaxCostLimit::get(),
        Error::<T>::CapExceeded
      );
      GlobalMaxCost::<T>::put(cap);
      Self::deposit_event(Event::GlobalMaxCostSet { cap });
      Ok(())
    }

    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::set_fee_rates())]
    pub fn set_fee_rates(
      origin: OriginFor<T>,
      protocol: Permill,
      controller: Permill,
    ) -> DispatchResult {
      Self::ensure_admin(origin)?;
      ProtocolFeeRate::<T>::put(protocol);
      ControllerFeeRate::<T>::put(controller);
      Self::deposit_event(Event::FeeRatesSet {
        protocol,
        controller,
      });
      Ok(())
    }

    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::withdraw_protocol_balance())]
    pub fn withdraw_protocol_balance(
      origin: OriginFor<T>,
      to: T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      Self::ensure_admin(origin)?;
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      with_storage_layer(|| {
        ProtocolBalance::<T>::try_mutate(|balance| -> DispatchResult {
          *balance = balance
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientProtocolBalance)?;
          Ok(())
        })?;
        T::Currency::transfer(&Self::account_id(), &to, amount, Preservation::Expendable)?;
        Ok::<(), DispatchError>(())
      })?;
      log::debug!(target: LOG_TARGET, "treasury paid {} to {:?}", amount, to);
      Self::deposit_event(Event::ProtocolWithdrawn { to, amount });
      Ok(())
    }

    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::set_max_cost_for())]
    pub fn set_max_cost_for(
      origin: OriginFor<T>,
      target: T::AccountId,
      cap: CostUnits,
    ) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_set_max_cost_for(&caller, &target, cap)
    }

    /// Fund `target`'s escrow from the caller's own balance.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::deposit())]
    pub fn deposit(origin: OriginFor<T>, target: T::AccountId, amount: Balance) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_deposit(&caller, &caller, &target, amount)
    }

    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::deposit_protocol())]
    pub fn deposit_protocol(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_deposit_protocol(&caller, &caller, amount)
    }

    #[pallet::call_index(9)]
    #[pallet::weight(T::WeightInfo::withdraw_escrow())]
    pub fn withdraw_escrow(
      origin: OriginFor<T>,
      target: T::AccountId,
      to: T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_withdraw_escrow(&caller, &target, &to, amount)
    }

    #[pallet::call_index(10)]
    #[pallet::weight(T::WeightInfo::add_controller())]
    pub fn add_controller(origin: OriginFor<T>, controller: T::AccountId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_add_controller(&caller, &controller)
    }

    #[pallet::call_index(11)]
    #[pallet::weight(T::WeightInfo::remove_controller())]
    pub fn remove_controller(origin: OriginFor<T>, controller: T::AccountId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_remove_controller(&caller, &controller)
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    fn ensure_admin(origin: OriginFor<T>) -> DispatchResult {
      if T::AdminOrigin::ensure_origin(origin.clone()).is_ok() {
        return Ok(());
      }
      let who = ensure_signed(origin)?;
      ensure!(T::Roles::has_role(Role::Admin, &who), Error::<T>::NotAdmin);
      Ok(())
    }

    fn ensure_registrar(caller: &T::AccountId) -> DispatchResult {
      ensure!(
        T::Roles::has_role(Role::Registrar, caller),
        Error::<T>::NotRegistrar
      );
      Ok(())
    }

    /// Runs one execution attempt. Nothing it wrote survives an error.
    pub fn do_execute(
      controller: &T::AccountId,
      target: &T::AccountId,
      payload: Vec<u8>,
      unit_price: Balance,
    ) -> Result<ExecutionCost, DispatchError> {
      with_storage_layer(|| Self::try_execute(controller, target, payload, unit_price))
    }

    fn try_execute(
      controller: &T::AccountId,
      target: &T::AccountId,
      payload: Vec<u8>,
      unit_price: Balance,
    ) -> Result<ExecutionCost, DispatchError> {
      ensure!(
        T::Roles::has_role(Role::Controller, controller),
        Error::<T>::NotController
      );
      ensure!(
        !ExecutionLock::<T>::get(),
        Error::<T>::ReentrantExecution
      );
      ensure!(
        unit_price <= UnitPriceCeiling::<T>::get(),
        Error::<T>::PriceTooHigh
      );
      ensure!(
        T::Membership::contains(target),
        Error::<T>::TargetNotRegistered
      );
      let now = frame_system::Pallet::<T>::block_number();
      ensure!(
        LastExecuted::<T>::get(target) != Some(now),
        Error::<T>::AlreadyExecutedThisPeriod
      );

      let (ready, _) = T::Targets::probe(target).map_err(|e| {
        log::warn!(target: LOG_TARGET, "probe of {:?} failed: {:?}", target, e);
        Error::<T>::NotReady
      })?;
      ensure!(ready, Error::<T>::NotReady);

      // Refuse to call into a target that could not even pay for the overhead.
      let overhead = CostOverhead::<T>::get();
      let escrow = Escrow::<T>::get(target);
      let floor = Self::quote(overhead, unit_price)?;
      ensure!(
        !escrow.is_zero() && escrow >= floor.total_debit,
        Error::<T>::InsufficientBalance
      );

      LastExecuted::<T>::insert(target, now);
      ExecutionLock::<T>::put(true);

      let limit = Self::max_cost_for(target);
      let units = with_storage_layer(|| T::Targets::callback(target, payload, limit)).map_err(|e| {
        log::warn!(target: LOG_TARGET, "callback of {:?} failed: {:?}", target, e);
        Error::<T>::CallbackFailed
      })?;
      ensure!(units <= limit, Error::<T>::CapExceeded);

      let cost_consumed = units
        .checked_add(overhead)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      let cost = Self::quote(cost_consumed, unit_price)?;
      Self::settle(target, controller, &cost)?;

      ExecutionNonce::<T>::mutate(target, |nonce| *nonce = nonce.saturating_add(1));
      ExecutionLock::<T>::kill();

      log::debug!(
        target: LOG_TARGET,
        "settled {:?}: {} units at {}, debit {}, controller {:?} paid {}",
        target,
        cost_consumed,
        unit_price,
        cost.total_debit,
        controller,
        cost.controller_payout()
      );
      Self::deposit_event(Event::ExecutionSettled {
        target: target.clone(),
        period: now,
        controller: controller.clone(),
        cost_consumed,
        unit_price,
        raw_cost: cost.raw_cost,
        fee: cost.fee,
      });
      Ok(cost)
    }

    /// The only place a settlement moves funds: escrow down by the total debit, controller paid
    /// from the pallet account, treasury credited with the rest.
    fn settle(
      target: &T::AccountId,
      controller: &T::AccountId,
      cost: &ExecutionCost,
    ) -> DispatchResult {
      Escrow::<T>::try_mutate(target, |balance| -> DispatchResult {
        *balance = balance
          .checked_sub(cost.total_debit)
          .ok_or(Error::<T>::InsufficientBalance)?;
        Ok(())
      })?;

      let payout = cost.controller_payout();
      if !payout.is_zero() {
        T::Currency::transfer(
          &Self::account_id(),
          controller,
          payout,
          Preservation::Expendable,
        )?;
      }
      ProtocolBalance::<T>::try_mutate(|balance| -> DispatchResult {
        *balance = balance
          .checked_add(cost.protocol_share)
          .ok_or(Error::<T>::ArithmeticOverflow)?;
        Ok(())
      })
    }

    /// Sets or, with `cap == 0`, clears the target's explicit cap.
    pub fn do_set_max_cost_for(
      caller: &T::AccountId,
      target: &T::AccountId,
      cap: CostUnits,
    ) -> DispatchResult {
      Self::ensure_registrar(caller)?;
      ensure!(cap <= T::MaxCostLimit::get(), Error::<T>::CapExceeded);
      if cap.is_zero() {
        MaxCost::<T>::remove(target);
      } else {
        MaxCost::<T>::insert(target, cap);
      }
      Self::deposit_event(Event::MaxCostSet {
        target: target.clone(),
        cap,
      });
      Ok(())
    }

    /// Moves `amount` from `from` into `target`'s escrow.
    pub fn do_deposit(
      caller: &T::AccountId,
      from: &T::AccountId,
      target: &T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      Self::ensure_registrar(caller)?;
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      with_storage_layer(|| {
        T::Currency::transfer(from, &Self::account_id(), amount, Preservation::Preserve)?;
        Escrow::<T>::try_mutate(target, |balance| -> DispatchResult {
          *balance = balance
            .checked_add(amount)
            .ok_or(Error::<T>::ArithmeticOverflow)?;
          Ok(())
        })
      })?;
      log::debug!(target: LOG_TARGET, "{:?} funded {:?} with {}", from, target, amount);
      Self::deposit_event(Event::Deposited {
        target: target.clone(),
        from: from.clone(),
        amount,
      });
      Ok(())
    }

    /// Moves `amount` from `from` into the treasury.
    pub fn do_deposit_protocol(
      caller: &T::AccountId,
      from: &T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      Self::ensure_registrar(caller)?;
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      with_storage_layer(|| {
        T::Currency::transfer(from, &Self::account_id(), amount, Preservation::Preserve)?;
        ProtocolBalance::<T>::try_mutate(|balance| -> DispatchResult {
          *balance = balance
            .checked_add(amount)
            .ok_or(Error::<T>::ArithmeticOverflow)?;
          Ok(())
        })
      })?;
      Self::deposit_event(Event::ProtocolDeposited {
        from: from.clone(),
        amount,
      });
      Ok(())
    }

    /// Pays `amount` of `target`'s escrow out to `to`.
    pub fn do_withdraw_escrow(
      caller: &T::AccountId,
      target: &T::AccountId,
      to: &T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      Self::ensure_registrar(caller)?;
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      with_storage_layer(|| {
        Escrow::<T>::try_mutate(target, |balance| -> DispatchResult {
          *balance = balance
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
          Ok(())
        })?;
        T::Currency::transfer(&Self::account_id(), to, amount, Preservation::Expendable)?;
        Ok::<(), DispatchError>(())
      })?;
      log::debug!(target: LOG_TARGET, "withdrew {} of {:?} escrow to {:?}", amount, target, to);
      Self::deposit_event(Event::EscrowWithdrawn {
        target: target.clone(),
        to: to.clone(),
        amount,
      });
      Ok(())
    }

    pub fn do_add_controller(caller: &T::AccountId, controller: &T::AccountId) -> DispatchResult {
      Self::ensure_registrar(caller)?;
      T::Roles::grant(Role::Controller, controller);
      Self::deposit_event(Event::ControllerAdded {
        controller: controller.clone(),
      });
      Ok(())
    }

    pub fn do_remove_controller(caller: &T::AccountId, controller: &T::AccountId) -> DispatchResult {
      Self::ensure_registrar(caller)?;
      T::Roles::revoke(Role::Controller, controller);
      Self::deposit_event(Event::ControllerRemoved {
        controller: controller.clone(),
      });
      Ok(())
    }

    /// Weight `execute` declares for `target`: the pipeline plus the target's effective cap.
    pub fn execute_weight(target: &T::AccountId) -> Weight {
      T::WeightInfo::execute().saturating_add(Self::callback_weight(Self::max_cost_for(target)))
    }

    /// One ref-time unit per cost unit.
    fn callback_weight(units: CostUnits) -> Weight {
      Weight::from_parts(units, 0)
    }

    pub fn balance_of(target: &T::AccountId) -> Balance {
      Escrow::<T>::get(target)
    }

    /// Cap the target's callback runs under.
    pub fn max_cost_for(target: &T::AccountId) -> CostUnits {
      MaxCost::<T>::get(target).unwrap_or_else(GlobalMaxCost::<T>::get)
    }

    /// Readiness as a worker should see it; probe errors read as "not ready".
    pub fn probe_target(target: &T::AccountId) -> (bool, Vec<u8>) {
      T::Targets::probe(target).unwrap_or_else(|e| {
        log::warn!(target: LOG_TARGET, "probe of {:?} failed: {:?}", target, e);
        (false, Vec::new())
      })
    }

    /// Fee split a settlement of `cost_consumed` units at `unit_price` would produce under the
    /// current rates.
    pub fn quote(cost_consumed: CostUnits, unit_price: Balance) -> Result<ExecutionCost, DispatchError> {
      split_execution_cost(
        cost_consumed,
        unit_price,
        ProtocolFeeRate::<T>::get(),
        ControllerFeeRate::<T>::get(),
      )
      .map_err(|_| Error::<T>::ArithmeticOverflow.into())
    }

    /// Sum of all escrow plus the treasury.
    pub fn ledger_total() -> Balance {
      Escrow::<T>::iter_values()
        .fold(ProtocolBalance::<T>::get(), |acc, balance| acc.saturating_add(balance))
    }

    pub fn conservation_holds() -> bool {
      Self::ledger_total() == T::Currency::balance(&Self::account_id())
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
