#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ability;
mod board;
mod common;
mod config;
mod game;
mod generator;
mod grid;
mod inventory;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod ship;

pub use ability::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
pub use inventory::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use ship::*;
