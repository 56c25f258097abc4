//! Cox-Ross-Rubinstein binomial lattice pricer.
//!
//! ## Lattice Parameterisation
//!
//! - Δt = T / N
//! - u = e^(σ√Δt), d = 1/u
//! - p = (e^(rΔt) − d) / (u − d)   (risk-neutral up-probability)
//!
//! Payoffs are evaluated at the terminal layer only; interior steps are a
//! plain discounted expectation under p. European exercise means no
//! early-exercise comparison anywhere.

use super::error::LatticeError;
use crate::instruments::{MarketState, OptionContract};

/// Cox-Ross-Rubinstein lattice pricer for a single European option.
///
/// # Examples
/// ```
/// use quant_models::lattice::CrrLattice;
/// use quant_models::instruments::{MarketState, OptionContract, OptionType};
///
/// let contract = OptionContract::new(100.0, 1.0, OptionType::Call).unwrap();
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
///
/// let price = CrrLattice::new(contract, market).price(500).unwrap();
/// // Converges on the Black-Scholes value 10.4506 as N grows
/// assert!((price - 10.4506).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CrrLattice {
    contract: OptionContract,
    market: MarketState,
}

impl CrrLattice {
    /// Binds a contract to a market state.
    pub fn new(contract: OptionContract, market: MarketState) -> Self {
        Self { contract, market }
    }

    /// Prices the option on an N-step lattice by backward induction.
    ///
    /// O(N²) time, O(N) space: only the current layer of node values is
    /// retained, and the buffer is reduced in place. This is the one
    /// loop-bound computation in the engine.
    ///
    /// # Arguments
    /// * `steps` - Number of lattice steps N, must be at least 1
    ///
    /// # Errors
    /// - `LatticeError::InvalidStepCount` if `steps == 0`
    /// - `LatticeError::ArbitrageViolation` if the risk-neutral probability
    ///   falls outside [0, 1]
    pub fn price(&self, steps: u32) -> Result<f64, LatticeError> {
        if steps == 0 {
            return Err(LatticeError::InvalidStepCount { steps });
        }

        let s = self.market.spot();
        let k = self.contract.strike();
        let t = self.contract.expiry();
        let r = self.market.rate();
        let sigma = self.market.volatility();
        let option_type = self.contract.option_type();

        if sigma == 0.0 {
            // Degenerate lattice: u = d = 1 leaves p undefined, but the
            // terminal price is the deterministic forward. Matches the
            // Black-Scholes σ = 0 limit.
            let discount = (-r * t).exp();
            return Ok(option_type.payoff(s, k * discount));
        }

        let n = steps as usize;
        let dt = t / n as f64;
        let u = (sigma * dt.sqrt()).exp();
        let d = 1.0 / u;
        let growth = (r * dt).exp();
        let p = (growth - d) / (u - d);

        if !(0.0..=1.0).contains(&p) {
            return Err(LatticeError::ArbitrageViolation { probability: p });
        }

        let step_discount = (-r * dt).exp();

        // Terminal layer: node j carries j up-moves, S_T = S·u^j·d^(N−j)
        let mut values: Vec<f64> = (0..=n)
            .map(|j| {
                let terminal = s * u.powi(j as i32) * d.powi((n - j) as i32);
                option_type.payoff(terminal, k)
            })
            .collect();

        // Backward induction, reducing the layer in place
        for layer in (1..=n).rev() {
            for j in 0..layer {
                values[j] = step_discount * (p * values[j + 1] + (1.0 - p) * values[j]);
            }
        }

        Ok(values[0])
    }
}
