//! # Aqueous Solution Module
//!
//! ## Purpose
//! Value type describing a volume of water-based liquid by its acidity (pH) and
//! basicity (pOH), together with the molar concentrations and absolute mole counts
//! of H+ and OH- ions derived from them.
//!
//! ## Relations
//! - `[H+] = 10^-pH`, `n(H+) = [H+] * V`
//! - `[OH-] = 10^-pOH`, `n(OH-) = [OH-] * V`
//! - at equilibrium `pH + pOH = -log10(Kw)`, i.e. 14 at `Kw = 1e-14` (25 °C)
//!
//! ## Construction paths
//! - from pH (and optionally pOH): [`Solution::new`], [`Solution::with_k_w`]
//! - from a total H+ mole count: [`Solution::from_H_mole`]
//! - from an existing solution and a conserved OH- mole count: [`Solution::with_OH_mole`]
//!
//! Every path either returns a fully consistent value or a [`DomainError`].
use crate::Solutions::solution_errors::DomainError;
use serde::Serialize;

/// water dissociation constant at 25 °C
pub const K_W: f64 = 1e-14;

/// Volume of aqueous liquid with its acid/base state.
/// All fields are derived once at construction; the value is never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[allow(non_snake_case)]
pub struct Solution {
    /// liters
    volume: f64,
    pH: f64,
    pOH: f64,
    /// mol/L
    H_molarity: f64,
    /// mol
    H_mole: f64,
    /// mol/L
    OH_molarity: f64,
    /// mol
    OH_mole: f64,
    /// water dissociation constant used to derive pOH from pH
    k_w: f64,
}

#[allow(non_snake_case)]
impl Solution {
    /// Solution of given volume (L) and pH at the reference `Kw = 1e-14`.
    /// If `pOH` is `None` it is derived from the water dissociation equilibrium.
    ///
    /// # Examples
    /// ```
    /// use AcidDilution::Solutions::aqueous_solution::Solution;
    /// use approx::assert_relative_eq;
    /// let acid = Solution::new(0.1, 2.0, None).unwrap();
    /// assert_relative_eq!(acid.pOH(), 12.0, epsilon = 1e-9);
    /// assert_relative_eq!(acid.H_mole(), 1e-3, epsilon = 1e-15);
    /// ```
    pub fn new(volume: f64, pH: f64, pOH: Option<f64>) -> Result<Self, DomainError> {
        Self::with_k_w(volume, pH, pOH, K_W)
    }

    /// Same as [`Solution::new`] with an explicit water dissociation constant.
    pub fn with_k_w(
        volume: f64,
        pH: f64,
        pOH: Option<f64>,
        k_w: f64,
    ) -> Result<Self, DomainError> {
        check_volume(volume)?;
        check_k_w(k_w)?;
        let pH = check_finite("pH", pH)?;

        let H_molarity = 10f64.powf(-pH);
        let H_mole = H_molarity * volume;
        let pOH = match pOH {
            Some(pOH) => pOH,
            None => -(k_w / H_molarity).log10(),
        };
        let pOH = check_finite("pOH", pOH)?;
        let OH_molarity = 10f64.powf(-pOH);
        let OH_mole = OH_molarity * volume;

        Ok(Self {
            volume,
            pH,
            pOH,
            H_molarity,
            H_mole,
            OH_molarity,
            OH_mole,
            k_w,
        })
    }

    /// Inverse constructor: solution of given volume holding `H_mole` moles of H+.
    /// pOH is derived from the equilibrium relation, as in [`Solution::with_k_w`].
    ///
    /// # Examples
    /// ```
    /// use AcidDilution::Solutions::aqueous_solution::{Solution, K_W};
    /// use approx::assert_relative_eq;
    /// let s = Solution::from_H_mole(10.0, 1e-3, K_W).unwrap();
    /// assert_relative_eq!(s.pH(), 4.0, epsilon = 1e-9);
    /// assert!(Solution::from_H_mole(10.0, 0.0, K_W).is_err());
    /// ```
    pub fn from_H_mole(volume: f64, H_mole: f64, k_w: f64) -> Result<Self, DomainError> {
        check_volume(volume)?;
        let pH = p_value("H+", H_mole, volume)?;
        Self::with_k_w(volume, pH, None, k_w)
    }

    /// Returns the same solution with its OH- information rederived from a conserved
    /// mole count. The H+ side is kept as is, so the equilibrium relation is not
    /// enforced on the result.
    pub fn with_OH_mole(self, OH_mole: f64) -> Result<Self, DomainError> {
        let pOH = p_value("OH-", OH_mole, self.volume)?;
        Ok(Self {
            pOH,
            OH_molarity: OH_mole / self.volume,
            OH_mole,
            ..self
        })
    }

    /// Exactly neutral water, `pH = pOH = -log10(sqrt(Kw))`.
    pub fn neutral_water(volume: f64, k_w: f64) -> Result<Self, DomainError> {
        check_k_w(k_w)?;
        Self::with_k_w(volume, -k_w.sqrt().log10(), None, k_w)
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }
    pub fn pH(&self) -> f64 {
        self.pH
    }
    pub fn pOH(&self) -> f64 {
        self.pOH
    }
    pub fn H_molarity(&self) -> f64 {
        self.H_molarity
    }
    pub fn H_mole(&self) -> f64 {
        self.H_mole
    }
    pub fn OH_molarity(&self) -> f64 {
        self.OH_molarity
    }
    pub fn OH_mole(&self) -> f64 {
        self.OH_mole
    }
    pub fn k_w(&self) -> f64 {
        self.k_w
    }
    /// -log10(Kw), 14 at 25 °C
    pub fn pK_w(&self) -> f64 {
        -self.k_w.log10()
    }

    /// `pH + pOH - pKw`; zero for a solution in equilibrium
    pub fn equilibrium_deviation(&self) -> f64 {
        self.pH + self.pOH - self.pK_w()
    }

    pub fn is_at_equilibrium(&self, tolerance: f64) -> bool {
        self.equilibrium_deviation().abs() <= tolerance
    }
}

fn check_volume(volume: f64) -> Result<(), DomainError> {
    // NaN fails the comparison as well
    if volume > 0.0 && volume.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonPositiveVolume { volume })
    }
}

fn check_k_w(k_w: f64) -> Result<(), DomainError> {
    if k_w > 0.0 && k_w.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonPositiveDissociationConstant { k_w })
    }
}

fn check_finite(quantity: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { quantity, value })
    }
}

/// -log10(n / V) with explicit failure on zero and negative mole counts
fn p_value(species: &'static str, moles: f64, volume: f64) -> Result<f64, DomainError> {
    if moles == 0.0 {
        return Err(DomainError::ZeroConcentration { species });
    }
    let quantity = if species == "H+" { "pH" } else { "pOH" };
    check_finite(quantity, -(moles / volume).log10())
}
