#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn register_target() -> Weight;
	fn unregister_target() -> Weight;
	fn register_controller() -> Weight;
	fn unregister_controller() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `KeeperRegistry::Targets` (r:1 w:1)
	/// Storage: `KeeperRegistry::TargetList` (r:1 w:1)
	/// Storage: `KeeperRegistry::AdminIndex` (r:1 w:1)
	fn register_target() -> Weight {
		Weight::from_parts(24_000_000, 40_000)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	/// Storage: `KeeperRegistry::Targets` (r:1 w:1)
	/// Storage: `KeeperRegistry::TargetList` (r:1 w:1)
	/// Storage: `KeeperRegistry::AdminIndex` (r:1 w:1)
	fn unregister_target() -> Weight {
		Weight::from_parts(26_000_000, 40_000)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	/// Storage: `KeeperRegistry::Controllers` (r:1 w:1)
	/// Storage: `KeeperRegistry::ControllerCount` (r:1 w:1)
	fn register_controller() -> Weight {
		Weight::from_parts(14_000_000, 3_500)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn unregister_controller() -> Weight {
		Weight::from_parts(14_000_000, 3_500)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(2))
	}
}

impl WeightInfo for () {
	fn register_target() -> Weight {
		Weight::from_parts(24_000_000, 40_000)
			.saturating_add(RocksDbWeight::get().reads(4))
			.saturating_add(RocksDbWeight::get().writes(3))
	}
	fn unregister_target() -> Weight {
		Weight::from_parts(26_000_000, 40_000)
			.saturating_add(RocksDbWeight::get().reads(4))
			.saturating_add(RocksDbWeight::get().writes(3))
	}
	fn register_controller() -> Weight {
		Weight::from_parts(14_000_000, 3_500)
			.saturating_add(RocksDbWeight::get().reads(3))
			.saturating_add(RocksDbWeight::get().writes(2))
	}
	fn unregister_controller() -> Weight {
		Weight::from_parts(14_000_000, 3_500)
			.saturating_add(RocksDbWeight::get().reads(3))
			.saturating_add(RocksDbWeight::get().writes(2))
	}
}
