#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn register_target_for() -> Weight;
	fn unregister_target_for() -> Weight;
	fn deregister_target_for() -> Weight;
	fn register_controller() -> Weight;
	fn unregister_controller() -> Weight;
	fn deposit() -> Weight;
	fn set_registration_fee() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `KeeperRegistry::Targets` (r:1 w:1)
	/// Storage: `KeeperRegistry::TargetList` (r:1 w:1)
	/// Storage: `KeeperRegistry::AdminIndex` (r:1 w:1)
	/// Storage: `KeeperEngine::MaxCost` (r:0 w:1)
	fn register_target_for() -> Weight {
		Weight::from_parts(48_000_000, 42000)
			.saturating_add(T::DbWeight::get().reads(6))
			.saturating_add(T::DbWeight::get().writes(5))
	}
	fn unregister_target_for() -> Weight {
		Weight::from_parts(45_000_000, 42000)
			.saturating_add(T::DbWeight::get().reads(6))
			.saturating_add(T::DbWeight::get().writes(5))
	}
	/// Storage: `KeeperEngine::Escrow` (r:1 w:1)
	/// Storage: `System::Account` (r:2 w:2)
	fn deregister_target_for() -> Weight {
		Weight::from_parts(78_000_000, 42000)
			.saturating_add(T::DbWeight::get().reads(9))
			.saturating_add(T::DbWeight::get().writes(8))
	}
	fn register_controller() -> Weight {
		Weight::from_parts(72_000_000, 7000)
			.saturating_add(T::DbWeight::get().reads(8))
			.saturating_add(T::DbWeight::get().writes(7))
	}
	fn unregister_controller() -> Weight {
		Weight::from_parts(34_000_000, 3600)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn deposit() -> Weight {
		Weight::from_parts(52_000_000, 3600)
			.saturating_add(T::DbWeight::get().reads(5))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn set_registration_fee() -> Weight {
		Weight::from_parts(10_000_000, 0)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn register_target_for() -> Weight {
		Weight::from_parts(48_000_000, 42000)
			.saturating_add(RocksDbWeight::get().reads(6))
			.saturating_add(RocksDbWeight::get().writes(5))
	}
	fn unregister_target_for() -> Weight {
		Weight::from_parts(45_000_000, 42000)
			.saturating_add(RocksDbWeight::get().reads(6))
			.saturating_add(RocksDbWeight::get().writes(5))
	}
	fn deregister_target_for() -> Weight {
		Weight::from_parts(78_000_000, 42000)
			.saturating_add(RocksDbWeight::get().reads(9))
			.saturating_add(RocksDbWeight::get().writes(8))
	}
	fn register_controller() -> Weight {
		Weight::from_parts(72_000_000, 7000)
			.saturating_add(RocksDbWeight::get().reads(8))
			.saturating_add(RocksDbWeight::get().writes(7))
	}
	fn unregister_controller() -> Weight {
		Weight::from_parts(34_000_000, 3600)
			.saturating_add(RocksDbWeight::get().reads(4))
			.saturating_add(RocksDbWeight::get().writes(3))
	}
	fn deposit() -> Weight {
		Weight::from_parts(52_000_000, 3600)
			.saturating_add(RocksDbWeight::get().reads(5))
			.saturating_add(RocksDbWeight::get().writes(3))
	}
	fn set_registration_fee() -> Weight {
		Weight::from_parts(10_000_000, 0)
			.saturating_add(RocksDbWeight::get().reads(1))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
}
