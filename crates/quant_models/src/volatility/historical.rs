//! Rolling historical volatility estimation.
//!
//! Assesses the variability of a price series: prices become relative
//! day-over-day changes, each window of changes is reduced to its population
//! standard deviation, and the per-period dispersion is annualised by
//! √(periods per year). The result is the realised counterpart of the σ the
//! pricers consume.

use quant_core::math::statistics::{population_std_dev, relative_changes};

use super::error::VolatilityError;

/// Default observation window, in periods.
const DEFAULT_WINDOW: usize = 20;

/// Default annualisation factor: trading days per year.
const DEFAULT_PERIODS_PER_YEAR: f64 = 255.0;

/// Rolling annualised volatility estimator for a price series.
///
/// # Examples
/// ```
/// use quant_models::volatility::HistoricalVolatility;
///
/// // 2% daily dispersion, annualised over 255 trading days
/// let prices: Vec<f64> = (0..30)
///     .map(|i| if i % 2 == 0 { 100.0 } else { 102.0 })
///     .collect();
///
/// let estimator = HistoricalVolatility::default();
/// let series = estimator.rolling(&prices).unwrap();
///
/// assert_eq!(series.len(), prices.len());
/// assert!(series[19].is_none());
/// assert!(series[20].unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalVolatility {
    window: usize,
    periods_per_year: f64,
}

impl Default for HistoricalVolatility {
    /// Defaults: 20-period window, 255 trading days per year.
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
        }
    }
}

impl HistoricalVolatility {
    /// Creates an estimator with the given window and annualisation factor.
    ///
    /// # Arguments
    /// * `window` - Number of relative changes per rolling window, at least 2
    /// * `periods_per_year` - Annualisation factor, e.g. 255 trading days
    ///
    /// # Errors
    /// - `VolatilityError::InvalidWindow` if `window < 2`
    /// - `VolatilityError::InvalidPeriodsPerYear` if `periods_per_year <= 0`
    ///   or non-finite
    pub fn new(window: usize, periods_per_year: f64) -> Result<Self, VolatilityError> {
        if window < 2 {
            return Err(VolatilityError::InvalidWindow { window });
        }
        if !periods_per_year.is_finite() || periods_per_year <= 0.0 {
            return Err(VolatilityError::InvalidPeriodsPerYear { periods_per_year });
        }
        Ok(Self {
            window,
            periods_per_year,
        })
    }

    /// Observation window length.
    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    /// Annualisation factor.
    #[inline]
    pub fn periods_per_year(&self) -> f64 {
        self.periods_per_year
    }

    /// Rolling annualised volatility, aligned 1:1 with the input series.
    ///
    /// Entry `i` is the population standard deviation of the `window` most
    /// recent relative changes ending at `i`, scaled by √(periods per year).
    /// Entries with fewer than `window` preceding changes are `None`; the
    /// first defined entry sits at index `window`.
    ///
    /// # Errors
    /// - `VolatilityError::InvalidPrice` if any price is non-positive or
    ///   non-finite
    /// - `VolatilityError::InsufficientData` if the series is shorter than
    ///   `window + 1` observations
    pub fn rolling(&self, prices: &[f64]) -> Result<Vec<Option<f64>>, VolatilityError> {
        for (index, &price) in prices.iter().enumerate() {
            if !price.is_finite() || price <= 0.0 {
                return Err(VolatilityError::InvalidPrice { index, price });
            }
        }

        let required = self.window + 1;
        if prices.len() < required {
            return Err(VolatilityError::InsufficientData {
                observations: prices.len(),
                required,
            });
        }

        // changes[i] pairs with prices[i]; changes[0] is the pinned zero and
        // never enters a window
        let changes = relative_changes(prices);
        let annualisation = self.periods_per_year.sqrt();

        let series = (0..prices.len())
            .map(|i| {
                if i < self.window {
                    return None;
                }
                let window = &changes[i - self.window + 1..=i];
                Some(population_std_dev(window) * annualisation)
            })
            .collect();

        Ok(series)
    }
}
