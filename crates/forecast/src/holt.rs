//! Holt's linear (additive-trend) exponential smoothing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised while fitting the smoothing model to one series.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitError {
    #[error("series too short: need at least {required} points, got {actual}")]
    TooShort { required: usize, actual: usize },

    #[error("series contains a non-finite value at index {index}")]
    NonFinite { index: usize },

    #[error("smoothing parameter {name} out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Additive-trend exponential smoothing (Holt's linear method), no
/// seasonal component.
///
/// Level and trend are smoothed through the whole history:
///
/// ```text
/// level_t = alpha * y_t + (1 - alpha) * (level_{t-1} + trend_{t-1})
/// trend_t = beta * (level_t - level_{t-1}) + (1 - beta) * trend_{t-1}
/// ```
///
/// and forecasts extrapolate linearly: `yhat_{t+h} = level + h * trend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoltLinear {
    alpha: f64,
    beta: f64,
    level: f64,
    trend: f64,
}

impl HoltLinear {
    /// Fewer points than this and the trend initialization is meaningless.
    pub const MIN_POINTS: usize = 3;

    /// Fit with fixed smoothing parameters, both in `(0, 1)` exclusive.
    pub fn fit(alpha: f64, beta: f64, values: &[f64]) -> Result<Self, FitError> {
        if !(0.0 < alpha && alpha < 1.0) {
            return Err(FitError::InvalidParameter {
                name: "alpha",
                value: alpha,
            });
        }
        if !(0.0 < beta && beta < 1.0) {
            return Err(FitError::InvalidParameter {
                name: "beta",
                value: beta,
            });
        }
        validate(values)?;

        let mut level = values[0];
        let mut trend = values[1] - values[0];
        for &y in &values[1..] {
            let prev_level = level;
            level = alpha * y + (1.0 - alpha) * (level + trend);
            trend = beta * (level - prev_level) + (1.0 - beta) * trend;
        }

        Ok(Self {
            alpha,
            beta,
            level,
            trend,
        })
    }

    /// Fit, selecting smoothing parameters by grid search over the
    /// in-sample one-step squared error.
    ///
    /// Deterministic: the grid is fixed (0.05 to 0.95 in 0.05 steps for
    /// both parameters) and ties keep the earlier candidate, so identical
    /// input always yields an identical model.
    pub fn fit_auto(values: &[f64]) -> Result<Self, FitError> {
        validate(values)?;

        let mut best_alpha = 0.05;
        let mut best_beta = 0.05;
        let mut best_sse = f64::INFINITY;
        for a in 1..20 {
            for b in 1..20 {
                let alpha = f64::from(a) * 0.05;
                let beta = f64::from(b) * 0.05;
                let sse = one_step_sse(alpha, beta, values);
                if sse < best_sse {
                    best_sse = sse;
                    best_alpha = alpha;
                    best_beta = beta;
                }
            }
        }

        Self::fit(best_alpha, best_beta, values)
    }

    /// Project the fitted model forward `steps` daily values.
    pub fn forecast(&self, steps: u32) -> Vec<f64> {
        (1..=steps)
            .map(|h| self.level + f64::from(h) * self.trend)
            .collect()
    }

    /// Fitted (level, trend) state.
    pub fn components(&self) -> (f64, f64) {
        (self.level, self.trend)
    }

    /// Selected (alpha, beta) smoothing parameters.
    pub fn params(&self) -> (f64, f64) {
        (self.alpha, self.beta)
    }
}

/// Squared one-step-ahead prediction error over the history, used as the
/// grid-search objective.
fn one_step_sse(alpha: f64, beta: f64, values: &[f64]) -> f64 {
    let mut level = values[0];
    let mut trend = values[1] - values[0];
    let mut sse = 0.0;
    for &y in &values[1..] {
        let err = y - (level + trend);
        sse += err * err;
        let prev_level = level;
        level = alpha * y + (1.0 - alpha) * (level + trend);
        trend = beta * (level - prev_level) + (1.0 - beta) * trend;
    }
    sse
}

fn validate(values: &[f64]) -> Result<(), FitError> {
    if values.len() < HoltLinear::MIN_POINTS {
        return Err(FitError::TooShort {
            required: HoltLinear::MIN_POINTS,
            actual: values.len(),
        });
    }
    for (index, v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(FitError::NonFinite { index });
        }
    }
    Ok(())
}
