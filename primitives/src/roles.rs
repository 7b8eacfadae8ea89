use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Capability kinds shared by every keeper component.
///
/// Each component owns its own table of `(Role, holder)` grants; the same role name
/// means "may call the privileged surface of this component" everywhere.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum Role {
  /// May change component configuration and manage grants.
  Admin,
  /// The single account allowed to mutate membership and per-target settings.
  Registrar,
  /// May trigger target execution on the engine.
  Controller,
}

impl Role {
  /// Roles that at most one account may hold at a time.
  pub fn is_singleton(&self) -> bool {
    matches!(self, Role::Registrar)
  }
}

/// Read/write access to a component's role table.
///
/// Implemented by `pallet-keeper-roles`; injected into the registry, registrar and engine
/// through their `Config::Roles` so none of them carries its own access-control code.
pub trait RoleTable<AccountId> {
  fn has_role(role: Role, who: &AccountId) -> bool;

  /// Grants `role`. For singleton roles the previous holder loses it.
  fn grant(role: Role, who: &AccountId);

  fn revoke(role: Role, who: &AccountId);

  /// Current holder of the registrar role, if any.
  fn registrar() -> Option<AccountId>;
}

/// Table that grants nothing. Useful for components that are driven only through `Root`.
impl<AccountId> RoleTable<AccountId> for () {
  fn has_role(_: Role, _: &AccountId) -> bool {
    false
  }

  fn grant(_: Role, _: &AccountId) {}

  fn revoke(_: Role, _: &AccountId) {}

  fn registrar() -> Option<AccountId> {
    None
  }
}
