//! Recombining multiplicative binomial lattice for vanilla options.
//!
//! Prices are risk-neutral expectations over the terminal leaves with a
//! single-shot discount, following Cox-Ross-Rubinstein style recursions
//! (Hull, Ch. 13) with one deliberate deviation: the per-step growth factor
//! is simple, `1 + rate * dt`, and the contract's `duration` field is the
//! length of ONE tree step, not the whole contract life. Both conventions
//! are load-bearing for the shipped regression vectors; do not normalize
//! them.

use crate::core::OptionType;
use crate::market::TreeParams;
use crate::math::binomial_coefficient;

#[inline]
fn intrinsic(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => (spot - strike).max(0.0),
        OptionType::Put => (strike - spot).max(0.0),
    }
}

/// Risk-neutral up-move probability, `(1 + rate*dt - down) / (up - down)`.
///
/// `up == down` is not guarded and yields a non-finite probability.
#[inline]
pub fn risk_neutral_probability(dt: f64, params: &TreeParams) -> f64 {
    (1.0 + params.rate * dt - params.down) / (params.up - params.down)
}

/// Terminal payoff at the leaf reached by `up_moves` up moves out of
/// `params.steps` total steps.
#[inline]
pub fn leaf_payoff(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    params: &TreeParams,
    up_moves: usize,
) -> f64 {
    let terminal = spot
        * params.up.powi(up_moves as i32)
        * params.down.powi((params.steps - up_moves) as i32);
    intrinsic(option_type, terminal, strike)
}

/// Discounted risk-neutral expectation over all terminal leaves.
///
/// The binomial mass `C(n, i) q^i (1-q)^(n-i)` weights each leaf and the
/// sum is discounted once by `(1 + rate*dt)^(-n)`.
pub fn binomial_price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    dt: f64,
    params: &TreeParams,
) -> f64 {
    let q = risk_neutral_probability(dt, params);
    let n = params.steps;

    let mut expectation = 0.0;
    for i in 0..=n {
        let mass = binomial_coefficient(n as u64, i as u64)
            * q.powi(i as i32)
            * (1.0 - q).powi((n - i) as i32);
        expectation += mass * leaf_payoff(option_type, spot, strike, params, i);
    }

    expectation / (1.0 + params.rate * dt).powi(n as i32)
}

/// One-step replicating portfolio: `stock_number` shares plus `debt` cash
/// reproduce the option payoff in both terminal states.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReplicatingPortfolio {
    /// Shares held.
    pub stock_number: f64,
    /// Cash position, negative when borrowing.
    pub debt: f64,
}

impl ReplicatingPortfolio {
    /// Portfolio value at inception, `stock_number * spot + debt`.
    pub fn value(&self, spot: f64) -> f64 {
        self.stock_number * spot + self.debt
    }
}

/// Replicating portfolio of a single-step tree.
///
/// `stock_number = (V_u - V_d) / (spot (u - d))` and
/// `debt = (V_d u - V_u d) / (u - d)` discounted by `1 / (1 + rate*dt)`.
/// The `steps` field of `params` is ignored; the move sizes describe the
/// one step.
pub fn one_step_replication(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    dt: f64,
    params: &TreeParams,
) -> ReplicatingPortfolio {
    let value_up = intrinsic(option_type, spot * params.up, strike);
    let value_down = intrinsic(option_type, spot * params.down, strike);
    let spread = params.up - params.down;
    let discount = 1.0 / (1.0 + params.rate * dt);

    ReplicatingPortfolio {
        stock_number: (value_up - value_down) / (spot * spread),
        debt: (value_down * params.up - value_up * params.down) / spread * discount,
    }
}

/// One node of a backward-induction lattice.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeNode {
    /// Underlying price at the node.
    pub underlying: f64,
    /// Terminal payoff at the leaves, discounted continuation value inside.
    pub value: f64,
    /// Local replicating delta; at the leaves +1/-1 for in-the-money
    /// call/put, 0 otherwise.
    pub delta: f64,
}

/// Full lattice produced by [`payoff_tree`].
///
/// `levels[i]` holds the `i + 1` nodes after `i` steps, ordered by the
/// number of up moves; `levels[0][0]` is the root and its value equals the
/// leaf-sum price up to floating-point error.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PayoffTree {
    /// Node layers from root to expiry.
    pub levels: Vec<Vec<TreeNode>>,
}

impl PayoffTree {
    /// Root node of the lattice.
    pub fn root(&self) -> &TreeNode {
        &self.levels[0][0]
    }
}

/// Backward induction over the whole lattice, recording underlying price,
/// value, and local delta at every node.
pub fn payoff_tree(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    dt: f64,
    params: &TreeParams,
) -> PayoffTree {
    let q = risk_neutral_probability(dt, params);
    let discount = 1.0 / (1.0 + params.rate * dt);
    let n = params.steps;

    let mut levels: Vec<Vec<TreeNode>> = Vec::with_capacity(n + 1);

    let terminal: Vec<TreeNode> = (0..=n)
        .map(|j| {
            let underlying = spot * params.up.powi(j as i32) * params.down.powi((n - j) as i32);
            let value = intrinsic(option_type, underlying, strike);
            let delta = if value > 0.0 { option_type.sign() } else { 0.0 };
            TreeNode {
                underlying,
                value,
                delta,
            }
        })
        .collect();
    levels.push(terminal);

    for i in (0..n).rev() {
        let next = &levels[levels.len() - 1];
        let layer: Vec<TreeNode> = (0..=i)
            .map(|j| {
                let underlying = spot * params.up.powi(j as i32) * params.down.powi((i - j) as i32);
                let value_up = next[j + 1].value;
                let value_down = next[j].value;
                TreeNode {
                    underlying,
                    value: discount * (q * value_up + (1.0 - q) * value_down),
                    delta: (value_up - value_down) / (underlying * (params.up - params.down)),
                }
            })
            .collect();
        levels.push(layer);
    }

    levels.reverse();
    PayoffTree { levels }
}
