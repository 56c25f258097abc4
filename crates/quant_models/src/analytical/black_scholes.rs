//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call price**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! **Put price**:  P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use quant_core::math::distributions::norm_cdf;

use crate::instruments::{MarketState, OptionContract, OptionType};

/// Black-Scholes pricer for a single European option.
///
/// Binds validated contract terms to a validated market state; pricing itself
/// is infallible because every structural precondition is enforced by the
/// value-type constructors.
///
/// # Examples
/// ```
/// use quant_models::analytical::BlackScholes;
/// use quant_models::instruments::{MarketState, OptionContract, OptionType};
///
/// let contract = OptionContract::new(100.0, 1.0, OptionType::Call).unwrap();
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
///
/// let price = BlackScholes::new(contract, market).price();
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    contract: OptionContract,
    market: MarketState,
}

impl BlackScholes {
    /// Binds a contract to a market state.
    pub fn new(contract: OptionContract, market: MarketState) -> Self {
        Self { contract, market }
    }

    /// The d₁ term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Finite only for σ > 0; `price` never evaluates it in the σ = 0 branch.
    #[inline]
    pub fn d1(&self) -> f64 {
        let s = self.market.spot();
        let k = self.contract.strike();
        let t = self.contract.expiry();
        let r = self.market.rate();
        let sigma = self.market.volatility();

        let vol_sqrt_t = sigma * t.sqrt();
        ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t
    }

    /// The d₂ term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.market.volatility() * self.contract.expiry().sqrt()
    }

    /// Theoretical option price.
    ///
    /// The σ = 0 limit is handled before the formula: d₁/d₂ would divide by
    /// zero, but the contract's value is then deterministic, so the price is
    /// the discounted intrinsic value max(±(S − K·e^(−rT)), 0). No NaN or
    /// infinity can escape for valid inputs.
    ///
    /// # Examples
    /// ```
    /// use quant_models::analytical::BlackScholes;
    /// use quant_models::instruments::{MarketState, OptionContract, OptionType};
    ///
    /// let contract = OptionContract::new(100.0, 1.0, OptionType::Put).unwrap();
    /// let market = MarketState::new(100.0, 0.05, 0.0).unwrap();
    ///
    /// // σ = 0: discounted intrinsic, here max(100·e^(-0.05) - 100, 0) = 0
    /// assert_eq!(BlackScholes::new(contract, market).price(), 0.0);
    /// ```
    pub fn price(&self) -> f64 {
        let s = self.market.spot();
        let k = self.contract.strike();
        let t = self.contract.expiry();
        let r = self.market.rate();
        let discount = (-r * t).exp();

        if self.market.volatility() == 0.0 {
            // Deterministic payoff: discounted intrinsic on the forward
            return self.contract.option_type().payoff(s, k * discount);
        }

        let d1 = self.d1();
        let d2 = self.d2();

        match self.contract.option_type() {
            OptionType::Call => s * norm_cdf(d1) - k * discount * norm_cdf(d2),
            OptionType::Put => k * discount * norm_cdf(-d2) - s * norm_cdf(-d1),
        }
    }
}
