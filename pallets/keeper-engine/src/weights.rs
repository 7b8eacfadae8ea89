#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn execute() -> Weight;
	fn set_cost_price_ceiling() -> Weight;
	fn set_cost_overhead() -> Weight;
	fn set_default_max_cost() -> Weight;
	fn set_fee_rates() -> Weight;
	fn withdraw_protocol_balance() -> Weight;
	fn set_max_cost_for() -> Weight;
	fn deposit() -> Weight;
	fn deposit_protocol() -> Weight;
	fn withdraw_escrow() -> Weight;
	fn add_controller() -> Weight;
	fn remove_controller() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `KeeperEngine::Escrow` (r:1 w:1)
	/// Storage: `KeeperEngine::LastExecuted` (r:1 w:1)
	/// Storage: `KeeperEngine::ExecutionLock` (r:1 w:1)
	/// Storage: `KeeperEngine::ProtocolBalance` (r:1 w:1)
	/// Storage: `System::Account` (r:2 w:2)
	/// The target callback is added on top by `Pallet::execute_weight`.
	fn execute() -> Weight {
		Weight::from_parts(65_000_000, 8000)
			.saturating_add(T::DbWeight::get().reads(8))
			.saturating_add(T::DbWeight::get().writes(6))
	}
	fn set_cost_price_ceiling() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_cost_overhead() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_default_max_cost() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_fee_rates() -> Weight {
		Weight::from_parts(10_000_000, 0)
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn withdraw_protocol_balance() -> Weight {
		Weight::from_parts(42_000_000, 3593)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn set_max_cost_for() -> Weight {
		Weight::from_parts(14_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn deposit() -> Weight {
		Weight::from_parts(45_000_000, 3593)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn deposit_protocol() -> Weight {
		Weight::from_parts(43_000_000, 3593)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn withdraw_escrow() -> Weight {
		Weight::from_parts(44_000_000, 3593)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn add_controller() -> Weight {
		Weight::from_parts(15_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn remove_controller() -> Weight {
		Weight::from_parts(15_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn execute() -> Weight {
		Weight::from_parts(65_000_000, 8000)
			.saturating_add(RocksDbWeight::get().reads(8))
			.saturating_add(RocksDbWeight::get().writes(6))
	}
	fn set_cost_price_ceiling() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn set_cost_overhead() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn set_default_max_cost() -> Weight {
		Weight::from_parts(9_000_000, 0)
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn set_fee_rates() -> Weight {
		Weight::from_parts(10_000_000, 0)
			.saturating_add(RocksDbWeight::get().writes(2))
	}
	fn withdraw_protocol_balance() -> Weight {
		Weight::from_parts(42_000_000, 3593)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(2))
	}
	fn set_max_cost_for() -> Weight {
		Weight::from_parts(14_000_000, 3500)
			.saturating_add(RocksDbWeight::get().reads(1))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn deposit() -> Weight {
		Weight::from_parts(45_000_000, 3593)
			.saturating_add(RocksDbWeight::get().reads(3))
			.saturating_add(RocksDbWeight::get().writes(3))
	}
	fn deposit_protocol() -> Weight {
		Weight::from_parts(43_000_000, 3593)
			.saturating_add(RocksDbWeight::get().reads(3))
			.saturating_add(RocksDbWeight::get().writes(3))
	}
	fn withdraw_escrow() -> Weight {
		Weight::from_parts(44_000_000, 3593)
			.saturating_add(RocksDbWeight::get().reads(3))
			.saturating_add(RocksDbWeight::get().writes(3))
	}
	fn add_controller() -> Weight {
		Weight::from_parts(15_000_000, 3500)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn remove_controller() -> Weight {
		Weight::from_parts(15_000_000, 3500)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
}
