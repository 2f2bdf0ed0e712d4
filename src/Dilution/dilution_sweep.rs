//! Evaluation of the dilution model over a grid of initial pH values and dilution factors.
//!
//! Every grid point is an independent, pure calculation. A point that cannot be computed
//! (e.g. an initial pH so extreme that a concentration underflows) is stored as NaN,
//! counted in [`DilutionSweep::skipped`] and logged; the rest of the sweep goes on.
//! Results are plain matrices (rows: initial pH, columns: dilution factor) meant for an
//! external plotting or reporting consumer.
use crate::Dilution::dilution_settings::{DilutionSettings, SettingsError};
use log::{info, warn};
use nalgebra::{DMatrix, DVector};
use serde::Serialize;

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct DilutionSweep {
    pub initial_pH: DVector<f64>,
    pub dilution_factors: Vec<f64>,
    /// pH of the diluted solution
    pub total_pH: DMatrix<f64>,
    /// pOH of the diluted solution
    pub total_pOH: DMatrix<f64>,
    pub pH_plus_pOH: DMatrix<f64>,
    /// -log10(Kw) the sums are compared with
    pub pK_w: f64,
    pub skipped: usize,
}

/// one curve of the sweep: all initial pH values at a fixed dilution factor
#[derive(Debug, Clone, Serialize)]
#[allow(non_snake_case)]
pub struct SweepSeries {
    pub dilution_factor: f64,
    pub total_pH: Vec<Option<f64>>,
    pub total_pOH: Vec<Option<f64>>,
    pub pH_plus_pOH: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize)]
#[allow(non_snake_case)]
struct SweepExport {
    initial_pH: Vec<f64>,
    pK_w: f64,
    series: Vec<SweepSeries>,
}

#[allow(non_snake_case)]
impl DilutionSweep {
    pub fn run(settings: &DilutionSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let initial_pH = DVector::from_vec(settings.initial_pH_values());
        let factors = settings.dilution_factors.clone();
        let (rows, cols) = (initial_pH.len(), factors.len());
        let mut total_pH = DMatrix::from_element(rows, cols, f64::NAN);
        let mut total_pOH = DMatrix::from_element(rows, cols, f64::NAN);
        let mut pH_plus_pOH = DMatrix::from_element(rows, cols, f64::NAN);
        let mut skipped = 0;

        for (i, &pH) in initial_pH.iter().enumerate() {
            for (j, &factor) in factors.iter().enumerate() {
                match settings.dilute(pH, factor) {
                    Ok(result) => {
                        let combined = result.combined;
                        total_pH[(i, j)] = combined.pH();
                        total_pOH[(i, j)] = combined.pOH();
                        pH_plus_pOH[(i, j)] = combined.pH() + combined.pOH();
                    }
                    Err(e) => {
                        warn!("skipping initial pH {} at {}x dilution: {}", pH, factor, e);
                        skipped += 1;
                    }
                }
            }
        }
        info!(
            "dilution sweep: {} initial pH values x {} dilution factors, {} points skipped",
            rows, cols, skipped
        );
        Ok(Self {
            initial_pH,
            dilution_factors: factors,
            total_pH,
            total_pOH,
            pH_plus_pOH,
            pK_w: -settings.k_w.log10(),
            skipped,
        })
    }

    fn factor_index(&self, factor: f64) -> Option<usize> {
        self.dilution_factors.iter().position(|&f| f == factor)
    }

    /// total pH over all initial pH values for one dilution factor
    pub fn pH_column(&self, factor: f64) -> Option<DVector<f64>> {
        self.factor_index(factor)
            .map(|j| self.total_pH.column(j).into_owned())
    }

    pub fn pOH_column(&self, factor: f64) -> Option<DVector<f64>> {
        self.factor_index(factor)
            .map(|j| self.total_pOH.column(j).into_owned())
    }

    /// largest |pH + pOH - pKw| among computed points
    pub fn max_equilibrium_deviation(&self) -> f64 {
        self.pH_plus_pOH
            .iter()
            .filter(|v| v.is_finite())
            .map(|v| (v - self.pK_w).abs())
            .fold(0.0, f64::max)
    }

    pub fn series(&self) -> Vec<SweepSeries> {
        let finite = |v: &f64| if v.is_finite() { Some(*v) } else { None };
        self.dilution_factors
            .iter()
            .enumerate()
            .map(|(j, &dilution_factor)| SweepSeries {
                dilution_factor,
                total_pH: self.total_pH.column(j).iter().map(finite).collect(),
                total_pOH: self.total_pOH.column(j).iter().map(finite).collect(),
                pH_plus_pOH: self.pH_plus_pOH.column(j).iter().map(finite).collect(),
            })
            .collect()
    }

    /// JSON document with the initial pH axis and one series per dilution factor;
    /// skipped points are `null`
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let export = SweepExport {
            initial_pH: self.initial_pH.iter().copied().collect(),
            pK_w: self.pK_w,
            series: self.series(),
        };
        serde_json::to_string_pretty(&export)
    }

    pub fn print_table(&self) {
        use prettytable::{Cell, Row, Table};
        let mut table = Table::new();
        let mut header = vec![Cell::new("initial pH")];
        for factor in &self.dilution_factors {
            header.push(Cell::new(&format!("{}x pH / pOH", factor)));
        }
        table.add_row(Row::new(header));
        for (i, pH) in self.initial_pH.iter().enumerate() {
            let mut row = vec![Cell::new(&format!("{:.3}", pH))];
            for j in 0..self.dilution_factors.len() {
                let cell = if self.total_pH[(i, j)].is_finite() {
                    format!("{:.4} / {:.4}", self.total_pH[(i, j)], self.total_pOH[(i, j)])
                } else {
                    "-".to_string()
                };
                row.push(Cell::new(&cell));
            }
            table.add_row(Row::new(row));
        }
        println!("\n=== DILUTION SWEEP ===");
        table.printstd();
    }
}
