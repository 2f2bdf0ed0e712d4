//! Mixing of aqueous solutions that share water as the solvent.
//!
//! Moles are additive, concentrations are not: the combined solution occupies the sum of
//! the volumes and holds the sum of the H+ moles and, independently, the sum of the OH-
//! moles. pH is rebuilt from the conserved H+ count, then pOH is overwritten from the
//! conserved OH- count. The input solutions carry equilibrium-derived pOH, only the
//! combined one carries a conservation-derived pOH, so `pH + pOH` of the result may drift
//! from `pKw`; see [`Solution::equilibrium_deviation`].
use crate::Solutions::aqueous_solution::{K_W, Solution};
use crate::Solutions::solution_errors::DomainError;
use log::debug;

/// How much water is added to the acid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dilution {
    /// total volume = acid volume * factor
    Factor(f64),
    /// volume of neutral water added, L
    DiluentVolume(f64),
}

/// Inputs and output of one dilution, kept together so conservation can be checked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DilutionResult {
    pub acid: Solution,
    pub diluent: Solution,
    pub combined: Solution,
}

impl DilutionResult {
    pub fn total_volume(&self) -> f64 {
        self.combined.volume()
    }
}

/// Combines solutions conserving H+ and OH- moles separately.
/// Kw of the first solution is used for the combined one.
///
/// # Examples
/// ```
/// use AcidDilution::Solutions::aqueous_solution::Solution;
/// use AcidDilution::Solutions::mixing::mix_solutions;
/// use approx::assert_relative_eq;
/// let a = Solution::new(1.0, 3.0, None).unwrap();
/// let b = Solution::new(1.0, 3.0, None).unwrap();
/// let ab = mix_solutions(&[a, b]).unwrap();
/// assert_relative_eq!(ab.volume(), 2.0);
/// assert_relative_eq!(ab.pH(), 3.0, epsilon = 1e-12);
/// ```
#[allow(non_snake_case)]
pub fn mix_solutions(solutions: &[Solution]) -> Result<Solution, DomainError> {
    let (total_volume, total_H_mole, total_OH_mole) = totals(solutions);
    let k_w = solutions.first().map_or(K_W, |s| s.k_w());
    let combined = Solution::from_H_mole(total_volume, total_H_mole, k_w)?;
    combined.with_OH_mole(total_OH_mole)
}

/// Combines solutions conserving H+ moles only; pOH of the result is taken
/// from the equilibrium relation instead of the OH- balance.
#[allow(non_snake_case)]
pub fn mix_hydrogen_only(solutions: &[Solution]) -> Result<Solution, DomainError> {
    let (total_volume, total_H_mole, _) = totals(solutions);
    let k_w = solutions.first().map_or(K_W, |s| s.k_w());
    Solution::from_H_mole(total_volume, total_H_mole, k_w)
}

fn totals(solutions: &[Solution]) -> (f64, f64, f64) {
    solutions.iter().fold((0.0, 0.0, 0.0), |(v, h, oh), s| {
        (v + s.volume(), h + s.H_mole(), oh + s.OH_mole())
    })
}

/// Dilutes `acid` with exactly neutral water and returns the combined solution
/// along with the diluent used.
///
/// # Examples
/// ```
/// use AcidDilution::Solutions::aqueous_solution::Solution;
/// use AcidDilution::Solutions::mixing::{Dilution, dilute};
/// use approx::assert_relative_eq;
/// let acid = Solution::new(0.1, 2.0, None).unwrap();
/// let result = dilute(&acid, Dilution::Factor(100.0)).unwrap();
/// assert_relative_eq!(result.total_volume(), 10.0, epsilon = 1e-12);
/// assert_relative_eq!(result.diluent.volume(), 9.9, epsilon = 1e-12);
/// assert_relative_eq!(result.combined.pH(), 3.9996, epsilon = 1e-4);
/// ```
pub fn dilute(acid: &Solution, dilution: Dilution) -> Result<DilutionResult, DomainError> {
    dilute_with(acid, dilution, true)
}

/// Like [`dilute`]; with `conserve_hydroxide == false` the combined pOH stays
/// equilibrium-derived.
pub fn dilute_with(
    acid: &Solution,
    dilution: Dilution,
    conserve_hydroxide: bool,
) -> Result<DilutionResult, DomainError> {
    let total_volume = match dilution {
        Dilution::Factor(factor) => acid.volume() * factor,
        Dilution::DiluentVolume(volume) => acid.volume() + volume,
    };
    let diluent = Solution::neutral_water(total_volume - acid.volume(), acid.k_w())?;
    let pair = [*acid, diluent];
    let combined = if conserve_hydroxide {
        mix_solutions(&pair)?
    } else {
        mix_hydrogen_only(&pair)?
    };
    debug!(
        "diluted pH {} ({} L) to {} L: pH {}, pOH {}",
        acid.pH(),
        acid.volume(),
        total_volume,
        combined.pH(),
        combined.pOH()
    );
    Ok(DilutionResult {
        acid: *acid,
        diluent,
        combined,
    })
}
