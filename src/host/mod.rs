//! # Host Adapters
//!
//! Thin readers for the live radio state the channel map is used with:
//!
//! - [`country`]: the regulatory country the driver was loaded with
//! - [`mmrc`]: average throughput from the rate-control debugfs table
//! - [`morse_cli`]: integer statistics from the `morse_cli` tool
//!
//! Each adapter reports failure through [`HalowError`](crate::error::HalowError)
//! and offers a helper that collapses it to an explicit "unavailable"
//! value, so display code never has to treat a missing radio as fatal.

pub mod country;
pub mod mmrc;
pub mod morse_cli;

pub use country::{active_table, read_country_code, CountrySource, FixedCountry, SysfsCountry};
pub use mmrc::MmrcReader;
pub use morse_cli::{MorseCli, StatSlot};
