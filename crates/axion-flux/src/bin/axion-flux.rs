// ─────────────────────────────────────────────────────────────────────
// Solar Axion Flux — Command Line
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use anyhow::{bail, Context, Result};
use axion_flux::approx::ApproxFluxParams;
use axion_flux::fit::fit_approx_flux;
use axion_flux::flux::PrimakoffFlux;
use axion_flux::table::{generate_flux_table, read_flux_table, write_flux_table};
use axion_math::optimize::NelderMeadConfig;
use axion_solar::SolarModel;
use axion_types::config::{FluxConfig, TableConfig};
use axion_types::constants::FLUX_UNIT_PREFIX;
use axion_types::units::UnitSystem;
use clap::{Parser, Subcommand};
use ndarray::Array1;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "axion-flux")]
#[command(about = "Solar axion flux from the Primakoff process", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the flux spectrum as CSV (keV, 1e10 cm^-2 s^-1 keV^-1)
    Spectrum {
        #[arg(long, default_value_t = 0.5)]
        energy_min: f64,

        #[arg(long, default_value_t = 15.0)]
        energy_max: f64,

        #[arg(long, default_value_t = 30)]
        points: usize,

        /// Axion mass in keV (overrides the config file)
        #[arg(long)]
        mass_kev: Option<f64>,

        /// Flux configuration JSON
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Standard solar model table (built-in reference profile if omitted)
        #[arg(long, value_name = "FILE")]
        solar_model: Option<PathBuf>,
    },
    /// Generate a flux table over energy and axion mass
    Table {
        #[arg(short, long)]
        output: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Sampling plan JSON
        #[arg(long)]
        table_config: Option<PathBuf>,

        #[arg(long, value_name = "FILE")]
        solar_model: Option<PathBuf>,
    },
    /// Fit the four-parameter surrogate to a flux table
    Fit {
        #[arg(short, long)]
        input: PathBuf,

        /// Write the fitted parameters as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .with_context(|| format!("path is not valid UTF-8: {}", path.display()))
}

fn load_solar_model(path: Option<&PathBuf>) -> Result<SolarModel> {
    let solar = match path {
        Some(p) => SolarModel::from_file(path_str(p)?)
            .with_context(|| format!("failed to load solar model {}", p.display()))?,
        None => SolarModel::reference(),
    };
    log::info!("solar model with {} radial nodes", solar.node_count());
    Ok(solar)
}

fn load_flux_config(path: Option<&PathBuf>) -> Result<FluxConfig> {
    match path {
        Some(p) => FluxConfig::from_file(path_str(p)?)
            .with_context(|| format!("failed to load flux config {}", p.display())),
        None => Ok(FluxConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let units = UnitSystem::default();

    match cli.command {
        Commands::Spectrum {
            energy_min,
            energy_max,
            points,
            mass_kev,
            config,
            solar_model,
        } => {
            if points < 2 || !(energy_min > 0.0 && energy_max > energy_min) {
                bail!("need points >= 2 and 0 < energy-min < energy-max");
            }
            let solar = load_solar_model(solar_model.as_ref())?;
            let mut flux_config = load_flux_config(config.as_ref())?;
            if let Some(m) = mass_kev {
                flux_config.axion_mass_kev = m;
            }
            let evaluator = PrimakoffFlux::from_config(&solar, units, &flux_config)?;

            println!("photon_energy,flux");
            for e_kev in Array1::linspace(energy_min, energy_max, points).iter() {
                let phi = evaluator.flux_in_units(e_kev * units.kev, FLUX_UNIT_PREFIX);
                println!("{e_kev},{phi}");
            }
        }
        Commands::Table {
            output,
            config,
            table_config,
            solar_model,
        } => {
            let solar = load_solar_model(solar_model.as_ref())?;
            let flux_config = load_flux_config(config.as_ref())?;
            let table = match table_config {
                Some(p) => TableConfig::from_file(path_str(&p)?)
                    .with_context(|| format!("failed to load table config {}", p.display()))?,
                None => TableConfig::default(),
            };

            let samples = generate_flux_table(&solar, &units, &flux_config, &table)?;
            write_flux_table(path_str(&output)?, &samples)?;
            log::info!("wrote {} samples to {}", samples.len(), output.display());
        }
        Commands::Fit { input, output } => {
            let samples = read_flux_table(path_str(&input)?)
                .with_context(|| format!("failed to read flux table {}", input.display()))?;
            let fit = fit_approx_flux(
                &samples,
                ApproxFluxParams::CAST_2007,
                &NelderMeadConfig::default(),
            )?;

            println!("{}", serde_json::to_string_pretty(&fit)?);
            if let Some(path) = output {
                std::fs::write(&path, serde_json::to_string_pretty(&fit.params)?)?;
                log::info!("wrote fitted parameters to {}", path.display());
            }
        }
    }

    Ok(())
}
