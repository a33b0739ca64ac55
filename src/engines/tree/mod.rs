//! Lattice pricing engines.

pub mod binomial;

pub use binomial::{PayoffTree, ReplicatingPortfolio, TreeNode};
