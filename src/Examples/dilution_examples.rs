use crate::Dilution::dilution_settings::DilutionSettings;
use crate::Dilution::dilution_sweep::DilutionSweep;
use crate::Solutions::aqueous_solution::{K_W, Solution};
use crate::Solutions::mixing::{Dilution, dilute, dilute_with};
use log::{LevelFilter, SetLoggerError, info};
use prettytable::{Table, row};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::error::Error;
use tempfile::NamedTempFile;

/// Terminal logger at `Info` level; fails if a logger is already installed.
pub fn init_logger() -> Result<(), SetLoggerError> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
}

pub fn dilution_examples(task: usize) -> Result<(), Box<dyn Error>> {
    match task {
        0 => {
            // STRONG ACID: 0.1 L at pH 2 diluted 100x with neutral water
            let acid = Solution::new(0.1, 2.0, None)?;
            let result = dilute(&acid, Dilution::Factor(100.0))?;
            let combined = result.combined;
            let mut table = Table::new();
            table.add_row(row!["Quantity", "Acid", "Diluent", "Mixture", "Units"]);
            table.add_row(row![
                "Volume",
                format!("{:.3}", acid.volume()),
                format!("{:.3}", result.diluent.volume()),
                format!("{:.3}", combined.volume()),
                "L"
            ]);
            table.add_row(row![
                "pH",
                format!("{:.4}", acid.pH()),
                format!("{:.4}", result.diluent.pH()),
                format!("{:.4}", combined.pH()),
                "-"
            ]);
            table.add_row(row![
                "pOH",
                format!("{:.4}", acid.pOH()),
                format!("{:.4}", result.diluent.pOH()),
                format!("{:.4}", combined.pOH()),
                "-"
            ]);
            table.add_row(row![
                "n(H+)",
                format!("{:.4e}", acid.H_mole()),
                format!("{:.4e}", result.diluent.H_mole()),
                format!("{:.4e}", combined.H_mole()),
                "mol"
            ]);
            table.add_row(row![
                "n(OH-)",
                format!("{:.4e}", acid.OH_mole()),
                format!("{:.4e}", result.diluent.OH_mole()),
                format!("{:.4e}", combined.OH_mole()),
                "mol"
            ]);
            table.printstd();
            info!(
                "pH + pOH of the mixture deviates from pKw by {:.4}",
                combined.equilibrium_deviation()
            );
        }
        1 => {
            // TRACE ACID: the diluent's own H+ is comparable to the acid's
            let acid = Solution::new(0.01, 6.0, None)?;
            for factor in [10.0, 100.0, 1000.0, 10000.0] {
                let combined = dilute_with(&acid, Dilution::Factor(factor), false)?.combined;
                println!("{}x dilution: pH {:.4}", factor, combined.pH());
            }
        }
        2 => {
            // same dilution from settings stored in a JSON file
            let file = NamedTempFile::new()?;
            let path = file.path();
            let settings = DilutionSettings {
                init_volume: 0.01,
                init_pH: 6.0,
                ..DilutionSettings::default()
            };
            settings.save_to_json_file(path)?;
            let loaded = DilutionSettings::from_json_file(path)?;
            let combined = loaded.run_single()?.combined;
            println!("pH {:.4}, pOH {:.4}", combined.pH(), combined.pOH());
        }
        3 => {
            // SWEEP: initial pH 0..14 at 10x, 100x, 1000x, 10000x
            let settings = DilutionSettings {
                pH_points: 15,
                ..DilutionSettings::default()
            };
            let sweep = DilutionSweep::run(&settings)?;
            sweep.print_table();
            println!(
                "max |pH + pOH - {:.1}|: {:.4}",
                -K_W.log10(),
                sweep.max_equilibrium_deviation()
            );
        }
        _ => {
            println!("no such example: {}", task);
        }
    }
    Ok(())
}
