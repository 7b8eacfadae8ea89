use crate as pallet_keeper_engine;
use codec::Encode;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl, parameter_types,
  storage::unhashed,
  traits::{ConstU32, ConstU64, ConstU128, Contains},
};
use polkadot_sdk::frame_system::{self, EnsureRoot};
use polkadot_sdk::sp_runtime::{BuildStorage, DispatchError, Permill, traits::IdentityLookup};
use primitives::{
  CostUnits, Role, RoleTable,
  keeper::{pallet_ids, params},
};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;

pub const ADMIN: AccountId = 1;
pub const REGISTRAR: AccountId = 2;
pub const CONTROLLER: AccountId = 3;
pub const RIVAL_CONTROLLER: AccountId = 4;
pub const OUTSIDER: AccountId = 5;

pub const TARGET: AccountId = 100;
pub const OTHER_TARGET: AccountId = 101;

pub const INITIAL_BALANCE: u128 = 1_000 * params::UNIT;

/// Behaviour of a mock target.
#[derive(Clone, Debug)]
pub struct TargetState {
  pub ready: bool,
  pub payload: Vec<u8>,
  pub probe_fails: bool,
  pub callback_fails: bool,
  /// Units the callback reports
  pub units: CostUnits,
  /// Target the callback tries to execute again as `CONTROLLER`
  pub reenter: Option<AccountId>,
}

impl Default for TargetState {
  fn default() -> Self {
    Self {
      ready: true,
      payload: b"tick".to_vec(),
      probe_fails: false,
      callback_fails: false,
      units: 50_000,
      reenter: None,
    }
  }
}

thread_local! {
    static TARGETS: RefCell<BTreeMap<AccountId, TargetState>> = const { RefCell::new(BTreeMap::new()) };
    static MEMBERS: RefCell<BTreeSet<AccountId>> = const { RefCell::new(BTreeSet::new()) };
    static GRANTS: RefCell<BTreeSet<(Role, AccountId)>> = const { RefCell::new(BTreeSet::new()) };
    static LAST_PAYLOAD: RefCell<Option<Vec<u8>>> = const { RefCell::new(None) };
    static REENTRY_RESULT: RefCell<Option<Result<(), DispatchError>>> = const { RefCell::new(None) };
}

pub fn set_target(target: AccountId, state: TargetState) {
  TARGETS.with(|t| t.borrow_mut().insert(target, state));
}

pub fn update_target(target: AccountId, f: impl FnOnce(&mut TargetState)) {
  TARGETS.with(|t| {
    if let Some(state) = t.borrow_mut().get_mut(&target) {
      f(state);
    }
  });
}

pub fn set_member(target: AccountId, member: bool) {
  MEMBERS.with(|m| {
    if member {
      m.borrow_mut().insert(target);
    } else {
      m.borrow_mut().remove(&target);
    }
  });
}

pub fn last_payload() -> Option<Vec<u8>> {
  LAST_PAYLOAD.with(|p| p.borrow().clone())
}

pub fn reentry_result() -> Option<Result<(), DispatchError>> {
  REENTRY_RESULT.with(|r| r.borrow().clone())
}

fn runs_key(target: &AccountId) -> Vec<u8> {
  (b"mock:runs", target).encode()
}

/// Callback runs that survived in storage.
pub fn runs(target: AccountId) -> u32 {
  unhashed::get(&runs_key(&target)).unwrap_or(0)
}

pub struct MockTargets;

impl pallet_keeper_engine::KeeperTarget<AccountId> for MockTargets {
  fn probe(target: &AccountId) -> Result<(bool, Vec<u8>), DispatchError> {
    let state = TARGETS
      .with(|t| t.borrow().get(target).cloned())
      .ok_or(DispatchError::Other("unknown target"))?;
    if state.probe_fails {
      return Err(DispatchError::Other("probe reverted"));
    }
    Ok((state.ready, state.payload))
  }

  fn callback(
    target: &AccountId,
    payload: Vec<u8>,
    _limit: CostUnits,
  ) -> Result<CostUnits, DispatchError> {
    let state = TARGETS
      .with(|t| t.borrow().get(target).cloned())
      .ok_or(DispatchError::Other("unknown target"))?;

    // The target's own state change, kept in storage so rollbacks are visible.
    let key = runs_key(target);
    let runs: u32 = unhashed::get(&key).unwrap_or(0);
    unhashed::put(&key, &(runs + 1));
    LAST_PAYLOAD.with(|p| *p.borrow_mut() = Some(payload));

    if let Some(inner) = state.reenter {
      let result = KeeperEngine::do_execute(&CONTROLLER, &inner, Vec::new(), 0).map(|_| ());
      REENTRY_RESULT.with(|r| *r.borrow_mut() = Some(result));
    }

    if state.callback_fails {
      return Err(DispatchError::Other("callback reverted"));
    }
    Ok(state.units)
  }
}

pub struct MockMembership;

impl Contains<AccountId> for MockMembership {
  fn contains(target: &AccountId) -> bool {
    MEMBERS.with(|m| m.borrow().contains(target))
  }
}

pub struct MockRoles;

impl RoleTable<AccountId> for MockRoles {
  fn has_role(role: Role, who: &AccountId) -> bool {
    GRANTS.with(|g| g.borrow().contains(&(role, *who)))
  }

  fn grant(role: Role, who: &AccountId) {
    GRANTS.with(|g| {
      let mut grants = g.borrow_mut();
      if role.is_singleton() {
        grants.retain(|(r, _)| *r != role);
      }
      grants.insert((role, *who));
    });
  }

  fn revoke(role: Role, who: &AccountId) {
    GRANTS.with(|g| {
      g.borrow_mut().remove(&(role, *who));
    });
  }

  fn registrar() -> Option<AccountId> {
    GRANTS.with(|g| {
      g.borrow()
        .iter()
        .find(|(role, _)| *role == Role::Registrar)
        .map(|(_, who)| *who)
    })
  }
}

construct_runtime!(
  pub enum Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    KeeperEngine: pallet_keeper_engine,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

parameter_types! {
  pub const EnginePalletId: PalletId = PalletId(*pallet_ids::ENGINE_PALLET_ID);
  pub const ProtocolFeeRate: Permill = params::PROTOCOL_FEE_RATE;
  pub const ControllerFeeRate: Permill = params::CONTROLLER_FEE_RATE;
}

impl pallet_keeper_engine::Config for Test {
  type Currency = Balances;
  type Targets = MockTargets;
  type Membership = MockMembership;
  type Roles = MockRoles;
  type PalletId = EnginePalletId;
  type DefaultProtocolFeeRate = ProtocolFeeRate;
  type DefaultControllerFeeRate = ControllerFeeRate;
  type DefaultCostOverhead = ConstU64<{ params::COST_OVERHEAD }>;
  type DefaultGlobalMaxCost = ConstU64<{ params::DEFAULT_MAX_COST }>;
  type DefaultUnitPriceCeiling = ConstU128<{ params::UNIT_PRICE_CEILING }>;
  type MaxCostLimit = ConstU64<{ params::MAX_COST_LIMIT }>;
  type MaxPayloadLen = ConstU32<256>;
  type AdminOrigin = EnsureRoot<AccountId>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = EngineBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct EngineBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<AccountId> for EngineBenchmarkHelper {
  fn setup_target(target: &AccountId) {
    set_target(*target, TargetState::default());
    set_member(*target, true);
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  TARGETS.with(|t| t.borrow_mut().clear());
  MEMBERS.with(|m| m.borrow_mut().clear());
  GRANTS.with(|g| g.borrow_mut().clear());
  LAST_PAYLOAD.with(|p| *p.borrow_mut() = None);
  REENTRY_RESULT.with(|r| *r.borrow_mut() = None);

  MockRoles::grant(Role::Admin, &ADMIN);
  MockRoles::grant(Role::Registrar, &REGISTRAR);
  MockRoles::grant(Role::Controller, &CONTROLLER);
  MockRoles::grant(Role::Controller, &RIVAL_CONTROLLER);

  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: vec![
      (ADMIN, INITIAL_BALANCE),
      (REGISTRAR, INITIAL_BALANCE),
      (CONTROLLER, INITIAL_BALANCE),
      (RIVAL_CONTROLLER, INITIAL_BALANCE),
      (OUTSIDER, INITIAL_BALANCE),
    ],
    ..Default::default()
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_keeper_engine::GenesisConfig::<Test>::default()
    .assimilate_storage(&mut t)
    .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
