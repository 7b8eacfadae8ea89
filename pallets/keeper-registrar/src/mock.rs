//! Full keeper stack: three role tables, registry, engine and registrar wired together, with
//! stateful mock targets that own their authority handshake.

use crate as pallet_keeper_registrar;
use codec::Encode;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  instances::{Instance1, Instance2, Instance3},
  parameter_types,
  storage::unhashed,
  traits::{ConstU32, ConstU64, ConstU128},
};
use polkadot_sdk::frame_system::{self, EnsureRoot};
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, Permill,
  traits::{AccountIdConversion, IdentityLookup},
};
use primitives::{
  AuthorityHandshake, Balance, CostUnits, HandshakeError, TargetAuthority,
  keeper::{pallet_ids, params},
};
use std::cell::RefCell;
use std::collections::BTreeMap;

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;

pub const ADMIN: AccountId = 1;
pub const ALICE: AccountId = 10;
pub const BOB: AccountId = 11;
pub const DEPOSITOR: AccountId = 12;
pub const CONTROLLER: AccountId = 20;
pub const RIVAL_CONTROLLER: AccountId = 21;
pub const OUTSIDER: AccountId = 99;

pub const INITIAL_BALANCE: Balance = 1_000 * params::UNIT;

/// A target contract: authority slot plus the state its probe and callback read.
#[derive(Clone, Debug)]
pub struct MockTarget {
  pub authority: AuthorityHandshake<AccountId>,
  pub ready: bool,
  pub units: CostUnits,
}

thread_local! {
    static TARGETS: RefCell<BTreeMap<AccountId, MockTarget>> = const { RefCell::new(BTreeMap::new()) };
}

/// Deploys a target administered by `authority`.
pub fn deploy_target(target: AccountId, authority: AccountId) {
  TARGETS.with(|t| {
    t.borrow_mut().insert(
      target,
      MockTarget {
        authority: AuthorityHandshake::new(authority),
        ready: true,
        units: 50_000,
      },
    )
  });
}

pub fn set_ready(target: AccountId, ready: bool) {
  TARGETS.with(|t| {
    if let Some(state) = t.borrow_mut().get_mut(&target) {
      state.ready = ready;
    }
  });
}

/// First phase of the target's authority transfer.
pub fn propose_authority(
  target: AccountId,
  caller: AccountId,
  successor: AccountId,
) -> Result<(), HandshakeError> {
  TARGETS.with(|t| {
    t.borrow_mut()
      .get_mut(&target)
      .ok_or(HandshakeError::NotAuthority)?
      .authority
      .propose(&caller, successor)
  })
}

/// Second phase of the target's authority transfer.
pub fn accept_authority(target: AccountId, caller: AccountId) -> Result<AccountId, HandshakeError> {
  TARGETS.with(|t| {
    t.borrow_mut()
      .get_mut(&target)
      .ok_or(HandshakeError::NotPendingAuthority)?
      .authority
      .accept(&caller)
  })
}

fn counter_key(target: &AccountId) -> Vec<u8> {
  (b"mock:counter", target).encode()
}

/// How many times the target's callback has taken effect.
pub fn counter(target: AccountId) -> u32 {
  unhashed::get(&counter_key(&target)).unwrap_or(0)
}

pub struct MockTargets;

impl TargetAuthority<AccountId> for MockTargets {
  fn authority_of(target: &AccountId) -> Option<AccountId> {
    TARGETS.with(|t| t.borrow().get(target).map(|s| *s.authority.authority()))
  }
}

impl pallet_keeper_engine::KeeperTarget<AccountId> for MockTargets {
  fn probe(target: &AccountId) -> Result<(bool, Vec<u8>), DispatchError> {
    let ready = TARGETS
      .with(|t| t.borrow().get(target).map(|s| s.ready))
      .ok_or(DispatchError::Other("unknown target"))?;
    Ok((ready, counter(*target).encode()))
  }

  fn callback(
    target: &AccountId,
    _payload: Vec<u8>,
    _limit: CostUnits,
  ) -> Result<CostUnits, DispatchError> {
    let units = TARGETS
      .with(|t| t.borrow().get(target).map(|s| s.units))
      .ok_or(DispatchError::Other("unknown target"))?;
    let key = counter_key(target);
    unhashed::put(&key, &(counter(*target) + 1));
    Ok(units)
  }
}

construct_runtime!(
  pub enum Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    RegistryRoles: pallet_keeper_roles::<Instance1>,
    EngineRoles: pallet_keeper_roles::<Instance2>,
    RegistrarRoles: pallet_keeper_roles::<Instance3>,
    KeeperRegistry: pallet_keeper_registry,
    KeeperEngine: pallet_keeper_engine,
    KeeperRegistrar: pallet_keeper_registrar,
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

impl pallet_keeper_roles::Config<Instance1> for Test {
  type AdminOrigin = EnsureRoot<AccountId>;
  type WeightInfo = ();
}

impl pallet_keeper_roles::Config<Instance2> for Test {
  type AdminOrigin = EnsureRoot<AccountId>;
  type WeightInfo = ();
}

impl pallet_keeper_roles::Config<Instance3> for Test {
  type AdminOrigin = EnsureRoot<AccountId>;
  type WeightInfo = ();
}

impl pallet_keeper_registry::Config for Test {
  type Roles = RegistryRoles;
  type MaxTargets = ConstU32<64>;
  type MaxTargetsPerAdmin = ConstU32<16>;
  type MaxControllers = ConstU32<16>;
  type MaxQueryListLength = ConstU32<32>;
  type WeightInfo = ();
}

parameter_types! {
  pub const EnginePalletId: PalletId = PalletId(*pallet_ids::ENGINE_PALLET_ID);
  pub const RegistrarPalletId: PalletId = PalletId(*pallet_ids::REGISTRAR_PALLET_ID);
  pub const ProtocolFeeRate: Permill = params::PROTOCOL_FEE_RATE;
  pub const ControllerFeeRate: Permill = params::CONTROLLER_FEE_RATE;
}

impl pallet_keeper_engine::Config for Test {
  type Currency = Balances;
  type Targets = MockTargets;
  type Membership = pallet_keeper_registry::RegisteredTargets<Test>;
  type Roles = EngineRoles;
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
  type BenchmarkHelper = KeeperBenchmarkHelper;
}

impl pallet_keeper_registrar::Config for Test {
  type Registry = KeeperRegistry;
  type Engine = KeeperEngine;
  type Targets = MockTargets;
  type Roles = RegistrarRoles;
  type PalletId = RegistrarPalletId;
  type DefaultRegistrationFee = ConstU128<{ params::CONTROLLER_REGISTRATION_FEE }>;
  type AdminOrigin = EnsureRoot<AccountId>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = KeeperBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct KeeperBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_keeper_engine::BenchmarkHelper<AccountId> for KeeperBenchmarkHelper {
  fn setup_target(target: &AccountId) {
    deploy_target(*target, ADMIN);
    let _ = KeeperRegistry::do_register_target(&registrar_account(), *target, ADMIN);
  }
}

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<AccountId> for KeeperBenchmarkHelper {
  fn set_authority(target: &AccountId, authority: &AccountId) {
    deploy_target(*target, *authority);
  }

  fn fund(who: &AccountId, amount: Balance) {
    use polkadot_sdk::frame_support::traits::fungible::Mutate;
    let _ = Balances::set_balance(who, amount);
  }
}

pub fn registrar_account() -> AccountId {
  RegistrarPalletId::get().into_account_truncating()
}

pub fn engine_account() -> AccountId {
  EnginePalletId::get().into_account_truncating()
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  TARGETS.with(|t| t.borrow_mut().clear());

  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: vec![
      (ADMIN, INITIAL_BALANCE),
      (ALICE, INITIAL_BALANCE),
      (BOB, INITIAL_BALANCE),
      (DEPOSITOR, INITIAL_BALANCE),
      (CONTROLLER, INITIAL_BALANCE),
      (RIVAL_CONTROLLER, INITIAL_BALANCE),
      (OUTSIDER, INITIAL_BALANCE),
    ],
    ..Default::default()
  }
  .assimilate_storage(&mut t)
  .unwrap();

  // The registrar account is the only registrar of both ledgers.
  pallet_keeper_roles::GenesisConfig::<Test, Instance1> {
    admins: vec![ADMIN],
    registrar: Some(registrar_account()),
    controllers: vec![],
    _marker: Default::default(),
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_keeper_roles::GenesisConfig::<Test, Instance2> {
    admins: vec![ADMIN],
    registrar: Some(registrar_account()),
    controllers: vec![],
    _marker: Default::default(),
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_keeper_roles::GenesisConfig::<Test, Instance3> {
    admins: vec![ADMIN],
    registrar: None,
    controllers: vec![],
    _marker: Default::default(),
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
