//! # Dilution Settings Module
//!
//! ## Purpose
//! Holds every tunable constant of a dilution calculation in one serializable
//! structure, instead of scattering them as process-wide constants. Settings can be
//! persisted and reloaded as JSON.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "k_w": 1e-14,
//!   "init_volume": 0.1,
//!   "init_pH": 2.0,
//!   "dilution_factor": 100.0,
//!   "dilution_factors": [10.0, 100.0, 1000.0, 10000.0],
//!   "pH_range": [0.0, 14.0],
//!   "pH_points": 100,
//!   "conserve_hydroxide": true
//! }
//! ```
//! Missing keys fall back to the defaults listed above.
use crate::Solutions::aqueous_solution::{K_W, Solution};
use crate::Solutions::mixing::{Dilution, DilutionResult, dilute_with};
use crate::Solutions::solution_errors::DomainError;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// error types for loading, saving and validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Parameters of a single dilution and of a dilution sweep.
///
/// # Fields
/// * `k_w` - water dissociation constant
/// * `init_volume` - volume of the acidic solution, L
/// * `init_pH` - pH of the acidic solution for a single dilution
/// * `dilution_factor` - total volume / acid volume for a single dilution
/// * `dilution_factors` - factors compared in a sweep
/// * `pH_range` - initial pH interval of a sweep (inclusive)
/// * `pH_points` - number of evenly spaced initial pH values in a sweep
/// * `conserve_hydroxide` - rederive pOH of the mixture from conserved OH- moles;
///   `false` keeps pOH equilibrium-derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(non_snake_case)]
pub struct DilutionSettings {
    pub k_w: f64,
    pub init_volume: f64,
    pub init_pH: f64,
    pub dilution_factor: f64,
    pub dilution_factors: Vec<f64>,
    pub pH_range: (f64, f64),
    pub pH_points: usize,
    pub conserve_hydroxide: bool,
}

impl Default for DilutionSettings {
    fn default() -> Self {
        Self {
            k_w: K_W,
            init_volume: 0.1,
            init_pH: 2.0,
            dilution_factor: 100.0,
            dilution_factors: vec![10.0, 100.0, 1000.0, 10000.0],
            pH_range: (0.0, 14.0),
            pH_points: 100,
            conserve_hydroxide: true,
        }
    }
}

#[allow(non_snake_case)]
impl DilutionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates settings from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path.as_ref())?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        info!("dilution settings loaded from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn save_to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        info!("dilution settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Checks the values that would otherwise fail deep inside a calculation.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.k_w > 0.0 && self.k_w.is_finite()) {
            return Err(DomainError::NonPositiveDissociationConstant { k_w: self.k_w }.into());
        }
        if !(self.init_volume > 0.0 && self.init_volume.is_finite()) {
            return Err(DomainError::NonPositiveVolume {
                volume: self.init_volume,
            }
            .into());
        }
        if !self.init_pH.is_finite() {
            return Err(DomainError::NonFinite {
                quantity: "pH",
                value: self.init_pH,
            }
            .into());
        }
        for &factor in std::iter::once(&self.dilution_factor).chain(&self.dilution_factors) {
            if !(factor > 1.0 && factor.is_finite()) {
                return Err(SettingsError::Invalid {
                    name: "dilution_factor",
                    reason: format!("{} must be finite and greater than 1", factor),
                });
            }
        }
        let (start, end) = self.pH_range;
        if !(start.is_finite() && end.is_finite() && start <= end) {
            return Err(SettingsError::Invalid {
                name: "pH_range",
                reason: format!("({}, {}) is not an ordered finite interval", start, end),
            });
        }
        if self.pH_points == 0 {
            return Err(SettingsError::Invalid {
                name: "pH_points",
                reason: "at least one point is required".to_string(),
            });
        }
        Ok(())
    }

    /// Evenly spaced initial pH values over `pH_range`, both ends included.
    pub fn initial_pH_values(&self) -> Vec<f64> {
        let (start, end) = self.pH_range;
        match self.pH_points {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let step = (end - start) / (n - 1) as f64;
                (0..n).map(|i| start + step * i as f64).collect()
            }
        }
    }

    /// Acidic solution described by `init_volume`, `pH` and `k_w`.
    pub fn acid(&self, pH: f64) -> Result<Solution, DomainError> {
        Solution::with_k_w(self.init_volume, pH, None, self.k_w)
    }

    /// Dilution of an acid at `pH` by `factor` under these settings.
    pub fn dilute(&self, pH: f64, factor: f64) -> Result<DilutionResult, DomainError> {
        let acid = self.acid(pH)?;
        dilute_with(&acid, Dilution::Factor(factor), self.conserve_hydroxide)
    }

    /// The single dilution described by `init_pH` and `dilution_factor`.
    pub fn run_single(&self) -> Result<DilutionResult, DomainError> {
        self.dilute(self.init_pH, self.dilution_factor)
    }
}
