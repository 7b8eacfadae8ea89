use crate as pallet_keeper_roles;
use polkadot_sdk::frame_support::{construct_runtime, derive_impl, instances::Instance1};
use polkadot_sdk::frame_system::{self, EnsureRoot};
use polkadot_sdk::sp_runtime::{BuildStorage, traits::IdentityLookup};

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;

pub const ADMIN: AccountId = 1;
pub const REGISTRAR: AccountId = 2;
pub const CONTROLLER: AccountId = 3;
pub const OUTSIDER: AccountId = 4;
pub const NEW_REGISTRAR: AccountId = 5;

construct_runtime!(
  pub enum Test {
    System: frame_system,
    Roles: pallet_keeper_roles,
    OtherRoles: pallet_keeper_roles::<Instance1>,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
}

impl pallet_keeper_roles::Config for Test {
  type AdminOrigin = EnsureRoot<AccountId>;
  type WeightInfo = ();
}

impl pallet_keeper_roles::Config<Instance1> for Test {
  type AdminOrigin = EnsureRoot<AccountId>;
  type WeightInfo = ();
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  pallet_keeper_roles::GenesisConfig::<Test> {
    admins: vec![ADMIN],
    registrar: Some(REGISTRAR),
    controllers: vec![CONTROLLER],
    _marker: Default::default(),
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
