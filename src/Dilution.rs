/// parameters of a dilution calculation, persisted as JSON
/// # Examples
/// ```
/// use AcidDilution::Dilution::dilution_settings::DilutionSettings;
/// use approx::assert_relative_eq;
/// let settings = DilutionSettings::new();
/// // 0.1 L at pH 2 diluted 100x
/// let result = settings.run_single().unwrap();
/// assert_relative_eq!(result.total_volume(), 10.0, epsilon = 1e-12);
/// assert!(result.combined.pH() > 3.99 && result.combined.pH() < 4.0);
/// ```
pub mod dilution_settings;
/// sweeps over initial pH values and dilution factors
/// # Examples
/// ```
/// use AcidDilution::Dilution::dilution_settings::DilutionSettings;
/// use AcidDilution::Dilution::dilution_sweep::DilutionSweep;
/// let mut settings = DilutionSettings::new();
/// settings.pH_points = 15;
/// let sweep = DilutionSweep::run(&settings).unwrap();
/// assert_eq!(sweep.total_pH.shape(), (15, 4));
/// sweep.print_table();
/// ```
pub mod dilution_sweep;
mod dilution_settings_tests;
mod dilution_sweep_tests;
