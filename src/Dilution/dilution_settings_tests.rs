#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use crate::Dilution::dilution_settings::{DilutionSettings, SettingsError};
    use crate::Solutions::aqueous_solution::K_W;
    use crate::Solutions::solution_errors::DomainError;
    use approx::assert_relative_eq;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = DilutionSettings::default();
        assert_eq!(settings.k_w, K_W);
        assert_eq!(settings.init_volume, 0.1);
        assert_eq!(settings.dilution_factor, 100.0);
        assert_eq!(settings.dilution_factors, vec![10.0, 100.0, 1000.0, 10000.0]);
        assert_eq!(settings.pH_points, 100);
        assert!(settings.conserve_hydroxide);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_initial_pH_values() {
        let settings = DilutionSettings::default();
        let values = settings.initial_pH_values();
        assert_eq!(values.len(), 100);
        assert_relative_eq!(values[0], 0.0);
        assert_relative_eq!(values[99], 14.0, epsilon = 1e-12);
        assert_relative_eq!(values[1] - values[0], 14.0 / 99.0, epsilon = 1e-12);

        let mut single = settings.clone();
        single.pH_points = 1;
        single.pH_range = (3.0, 5.0);
        assert_eq!(single.initial_pH_values(), vec![3.0]);
    }

    #[test]
    fn test_run_single_trace_acid() {
        let settings = DilutionSettings {
            init_volume: 0.01,
            init_pH: 6.0,
            ..DilutionSettings::default()
        };
        let result = settings.run_single().unwrap();
        assert_relative_eq!(result.total_volume(), 1.0, epsilon = 1e-12);
        assert!(result.combined.pH() > 6.0 && result.combined.pH() < 7.0);
    }

    #[test]
    fn test_hydrogen_only_setting() {
        let settings = DilutionSettings {
            conserve_hydroxide: false,
            ..DilutionSettings::default()
        };
        let combined = settings.run_single().unwrap().combined;
        assert_relative_eq!(combined.pH() + combined.pOH(), 14.0, epsilon = 1e-9);
    }

    #[test]
    fn test_save_and_load() {
        let settings = DilutionSettings {
            k_w: 5.5e-14,
            init_volume: 0.05,
            dilution_factors: vec![2.0, 20.0],
            pH_points: 8,
            ..DilutionSettings::default()
        };
        let file = NamedTempFile::new().unwrap();
        settings.save_to_json_file(file.path()).unwrap();
        let loaded = DilutionSettings::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{ "init_volume": 0.01, "init_pH": 6.0 }"#).unwrap();
        let loaded = DilutionSettings::from_json_file(file.path()).unwrap();
        assert_eq!(loaded.init_volume, 0.01);
        assert_eq!(loaded.init_pH, 6.0);
        assert_eq!(loaded.dilution_factor, 100.0);
        assert_eq!(loaded.pH_range, (0.0, 14.0));
    }

    #[test]
    fn test_load_errors() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "not json").unwrap();
        assert!(matches!(
            DilutionSettings::from_json_file(file.path()),
            Err(SettingsError::Json(_))
        ));

        fs::write(file.path(), r#"{ "init_volume": -1.0 }"#).unwrap();
        assert!(matches!(
            DilutionSettings::from_json_file(file.path()),
            Err(SettingsError::Domain(DomainError::NonPositiveVolume { .. }))
        ));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            DilutionSettings::from_json_file(missing),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            DilutionSettings {
                k_w: 0.0,
                ..DilutionSettings::default()
            },
            DilutionSettings {
                init_pH: f64::NAN,
                ..DilutionSettings::default()
            },
            DilutionSettings {
                dilution_factor: 1.0,
                ..DilutionSettings::default()
            },
            DilutionSettings {
                dilution_factors: vec![10.0, 0.5],
                ..DilutionSettings::default()
            },
            DilutionSettings {
                pH_range: (14.0, 0.0),
                ..DilutionSettings::default()
            },
            DilutionSettings {
                pH_points: 0,
                ..DilutionSettings::default()
            },
        ];
        for settings in bad {
            assert!(settings.validate().is_err(), "{:?} passed validation", settings);
        }
        let err = DilutionSettings {
            pH_points: 0,
            ..DilutionSettings::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("pH_points"));
    }
}
