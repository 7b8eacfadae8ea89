//! Target-side administrative authority.
//!
//! Registration rights are decided by asking the target who administers it, never by
//! looking at registry state. Authority changes hands through a two-phase handshake: the
//! current authority proposes a successor, which only takes over once it accepts. Until
//! then the old authority keeps every right it had.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Authority query exposed by every automatable target.
pub trait TargetAuthority<AccountId> {
  /// The account currently administering `target`, if the target is known.
  fn authority_of(target: &AccountId) -> Option<AccountId>;

  fn is_authority(target: &AccountId, candidate: &AccountId) -> bool
  where
    AccountId: PartialEq,
  {
    Self::authority_of(target).as_ref() == Some(candidate)
  }
}

impl<AccountId> TargetAuthority<AccountId> for () {
  fn authority_of(_: &AccountId) -> Option<AccountId> {
    None
  }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HandshakeError {
  /// Caller is not the current authority.
  NotAuthority,
  /// Caller is not the proposed successor.
  NotPendingAuthority,
  /// No transfer has been proposed.
  NoPendingTransfer,
  /// The proposed successor already is the authority.
  AlreadyAuthority,
}

/// Authority slot with an explicit pending-transfer field.
#[derive(
  Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo,
)]
pub struct AuthorityHandshake<AccountId> {
  authority: AccountId,
  pending: Option<AccountId>,
}

impl<AccountId: Clone + PartialEq> AuthorityHandshake<AccountId> {
  pub fn new(authority: AccountId) -> Self {
    Self {
      authority,
      pending: None,
    }
  }

  pub fn authority(&self) -> &AccountId {
    &self.authority
  }

  pub fn pending(&self) -> Option<&AccountId> {
    self.pending.as_ref()
  }

  pub fn is_authority(&self, who: &AccountId) -> bool {
    &self.authority == who
  }

  /// Phase one: the current authority names its successor. A later proposal replaces an
  /// earlier one.
  pub fn propose(&mut self, caller: &AccountId, successor: AccountId) -> Result<(), HandshakeError> {
    if !self.is_authority(caller) {
      return Err(HandshakeError::NotAuthority);
    }
    if self.is_authority(&successor) {
      return Err(HandshakeError::AlreadyAuthority);
    }
    self.pending = Some(successor);
    Ok(())
  }

  /// Phase two: the successor accepts. Returns the previous authority.
  pub fn accept(&mut self, caller: &AccountId) -> Result<AccountId, HandshakeError> {
    let pending = self
      .pending
      .as_ref()
      .ok_or(HandshakeError::NoPendingTransfer)?;
    if pending != caller {
      return Err(HandshakeError::NotPendingAuthority);
    }
    self.pending = None;
    Ok(core::mem::replace(&mut self.authority, caller.clone()))
  }

  /// Withdraws a pending proposal. Only the current authority may cancel.
  pub fn cancel(&mut self, caller: &AccountId) -> Result<AccountId, HandshakeError> {
    if !self.is_authority(caller) {
      return Err(HandshakeError::NotAuthority);
    }
    self.pending.take().ok_or(HandshakeError::NoPendingTransfer)
  }
}
