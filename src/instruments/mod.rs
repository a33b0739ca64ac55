//! Option contract definitions.

pub mod digital;
pub mod vanilla;

pub use digital::CashOrNothingOption;
pub use vanilla::VanillaOption;
