use crate as pallet_keeper_registry;
use polkadot_sdk::frame_support::{
  construct_runtime, derive_impl,
  traits::ConstU32,
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{BuildStorage, traits::IdentityLookup};
use primitives::{Role, RoleTable};
use std::cell::RefCell;
use std::collections::BTreeSet;

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;

pub const REGISTRAR: AccountId = 1;
pub const ADMIN_A: AccountId = 10;
pub const ADMIN_B: AccountId = 11;
pub const CONTROLLER: AccountId = 20;
pub const OUTSIDER: AccountId = 99;

thread_local! {
    // Grants other than the registrar singleton
    static GRANTS: RefCell<BTreeSet<(Role, AccountId)>> = const { RefCell::new(BTreeSet::new()) };
    static REGISTRAR_HOLDER: RefCell<Option<AccountId>> = const { RefCell::new(None) };
}

/// Role table with a single swappable registrar.
pub struct MockRoles;

impl RoleTable<AccountId> for MockRoles {
  fn has_role(role: Role, who: &AccountId) -> bool {
    match role {
      Role::Registrar => REGISTRAR_HOLDER.with(|r| r.borrow().as_ref() == Some(who)),
      _ => GRANTS.with(|g| g.borrow().contains(&(role, *who))),
    }
  }

  fn grant(role: Role, who: &AccountId) {
    match role {
      Role::Registrar => REGISTRAR_HOLDER.with(|r| *r.borrow_mut() = Some(*who)),
      _ => GRANTS.with(|g| {
        g.borrow_mut().insert((role, *who));
      }),
    }
  }

  fn revoke(role: Role, who: &AccountId) {
    match role {
      Role::Registrar => REGISTRAR_HOLDER.with(|r| {
        let mut holder = r.borrow_mut();
        if holder.as_ref() == Some(who) {
          *holder = None;
        }
      }),
      _ => GRANTS.with(|g| {
        g.borrow_mut().remove(&(role, *who));
      }),
    }
  }

  fn registrar() -> Option<AccountId> {
    REGISTRAR_HOLDER.with(|r| *r.borrow())
  }
}

construct_runtime!(
  pub enum Test {
    System: frame_system,
    KeeperRegistry: pallet_keeper_registry,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
}

impl pallet_keeper_registry::Config for Test {
  type Roles = MockRoles;
  type MaxTargets = ConstU32<16>;
  type MaxTargetsPerAdmin = ConstU32<4>;
  type MaxControllers = ConstU32<3>;
  type MaxQueryListLength = ConstU32<8>;
  type WeightInfo = ();
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  GRANTS.with(|g| g.borrow_mut().clear());
  MockRoles::grant(Role::Registrar, &REGISTRAR);

  let t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();
  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
