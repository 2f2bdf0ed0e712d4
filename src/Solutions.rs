/// value type of an aqueous solution characterized by pH and pOH
/// # Examples
/// ```
/// use AcidDilution::Solutions::aqueous_solution::{Solution, K_W};
/// use approx::assert_relative_eq;
/// // pOH is derived from the water dissociation equilibrium
/// let s = Solution::new(1.0, 3.0, None).unwrap();
/// assert_relative_eq!(s.pH() + s.pOH(), 14.0, epsilon = 1e-9);
/// // rebuilding from the mole count gives back the same pH
/// let same = Solution::from_H_mole(s.volume(), s.H_mole(), K_W).unwrap();
/// assert_relative_eq!(same.pH(), 3.0, epsilon = 1e-9);
/// // OH- information rederived from a conserved mole count
/// let basic = same.with_OH_mole(1e-9).unwrap();
/// assert_relative_eq!(basic.pOH(), 9.0, epsilon = 1e-9);
/// ```
pub mod aqueous_solution;
/// mixing and dilution by separate conservation of H+ and OH- moles
pub mod mixing;
pub mod solution_errors;
