#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use crate::Dilution::dilution_settings::DilutionSettings;
    use crate::Dilution::dilution_sweep::DilutionSweep;
    use approx::assert_relative_eq;

    fn small_settings() -> DilutionSettings {
        DilutionSettings {
            pH_range: (0.0, 14.0),
            pH_points: 15,
            ..DilutionSettings::default()
        }
    }

    #[test]
    fn test_sweep_shape_and_axis() {
        let sweep = DilutionSweep::run(&small_settings()).unwrap();
        assert_eq!(sweep.initial_pH.len(), 15);
        assert_eq!(sweep.total_pH.shape(), (15, 4));
        assert_eq!(sweep.total_pOH.shape(), (15, 4));
        assert_eq!(sweep.pH_plus_pOH.shape(), (15, 4));
        assert_eq!(sweep.skipped, 0);
        assert_relative_eq!(sweep.initial_pH[2], 2.0, epsilon = 1e-12);
        assert_relative_eq!(sweep.pK_w, 14.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sweep_matches_single_dilution() {
        let settings = small_settings();
        let sweep = DilutionSweep::run(&settings).unwrap();
        let column = sweep.pH_column(100.0).unwrap();
        let single = settings.dilute(2.0, 100.0).unwrap().combined;
        assert_relative_eq!(column[2], single.pH(), epsilon = 1e-12);
        let pOH_column = sweep.pOH_column(100.0).unwrap();
        assert_relative_eq!(pOH_column[2], single.pOH(), epsilon = 1e-12);
        assert!(sweep.pH_column(7.0).is_none());
    }

    #[test]
    fn test_stronger_dilution_moves_acid_towards_neutral() {
        let sweep = DilutionSweep::run(&small_settings()).unwrap();
        // initial pH 0..6 are acidic
        for i in 0..7 {
            for j in 1..sweep.dilution_factors.len() {
                assert!(sweep.total_pH[(i, j)] >= sweep.total_pH[(i, j - 1)]);
                assert!(sweep.total_pH[(i, j)] < 7.0);
            }
        }
    }

    #[test]
    fn test_sums_compared_with_pK_w() {
        let sweep = DilutionSweep::run(&small_settings()).unwrap();
        for j in 0..sweep.dilution_factors.len() {
            assert_relative_eq!(
                sweep.pH_plus_pOH[(j, j)],
                sweep.total_pH[(j, j)] + sweep.total_pOH[(j, j)],
                epsilon = 1e-12
            );
        }
        assert!(sweep.max_equilibrium_deviation() > 0.0);

        let equilibrium = DilutionSettings {
            conserve_hydroxide: false,
            ..small_settings()
        };
        let sweep = DilutionSweep::run(&equilibrium).unwrap();
        assert!(sweep.max_equilibrium_deviation() < 1e-9);
    }

    #[test]
    fn test_invalid_points_are_skipped() {
        let settings = DilutionSettings {
            pH_range: (0.0, 400.0),
            pH_points: 3,
            dilution_factors: vec![10.0, 100.0],
            ..DilutionSettings::default()
        };
        let sweep = DilutionSweep::run(&settings).unwrap();
        // initial pH 400 cannot be represented
        assert_eq!(sweep.skipped, 2);
        assert!(sweep.total_pH[(2, 0)].is_nan());
        assert!(sweep.total_pH[(0, 0)].is_finite());
        assert!(sweep.total_pH[(1, 1)].is_finite());

        let json = sweep.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["series"].as_array().unwrap().len(), 2);
        assert!(value["series"][0]["total_pH"][2].is_null());
        assert!(value["series"][0]["total_pH"][0].is_number());
        assert_eq!(value["initial_pH"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = DilutionSettings {
            dilution_factors: vec![0.1],
            ..DilutionSettings::default()
        };
        assert!(DilutionSweep::run(&settings).is_err());
    }

    #[test]
    fn test_series_and_table() {
        let sweep = DilutionSweep::run(&small_settings()).unwrap();
        let series = sweep.series();
        assert_eq!(series.len(), 4);
        assert_eq!(series[3].dilution_factor, 10000.0);
        assert_eq!(series[0].total_pH.len(), 15);
        assert!(series.iter().all(|s| s.total_pOH.iter().all(|v| v.is_some())));
        sweep.print_table();
    }
}
