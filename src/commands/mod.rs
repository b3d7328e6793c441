//! Command-line front end
//!
//! Every invocation builds a configuration (default or stored profile, then
//! flag overrides), draws or seeds the noise buffer, and runs one subcommand
//! against a [`Session`].

pub mod export;
pub mod interactive;
pub mod profiles;
pub mod summary;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::adapters::JsonProfileStore;
use crate::domain::{Configuration, FilterKind, HarmonicResult};
use crate::dsp::{NoiseSource, SAMPLE_COUNT};
use crate::ports::ProfileStore;
use crate::state::Session;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Noisy harmonic generator with smoothing filters", long_about = None)]
pub struct Cli {
    #[clap(flatten)]
    pub params: ParamArgs,

    /// Seed for the noise buffer (random if omitted)
    #[clap(long, global = true)]
    pub seed: Option<u64>,

    /// Start from a stored profile instead of the defaults
    #[clap(short = 'p', long, global = true)]
    pub profile: Option<String>,

    /// Directory holding profile JSON files
    #[clap(long, global = true, default_value = "profiles")]
    pub profiles_dir: PathBuf,

    /// Enable debug logging
    #[clap(short = 'd', long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Command,
}

/// Overrides for individual generator and filter parameters
#[derive(Args, Debug, Default, Clone)]
pub struct ParamArgs {
    #[clap(long, global = true, allow_hyphen_values = true)]
    pub amplitude: Option<f64>,
    #[clap(long, global = true)]
    pub frequency: Option<f64>,
    /// Phase in radians
    #[clap(long, global = true, allow_hyphen_values = true)]
    pub phase: Option<f64>,
    #[clap(long, global = true, allow_hyphen_values = true)]
    pub noise_mean: Option<f64>,
    #[clap(long, global = true, allow_hyphen_values = true)]
    pub noise_dispersion: Option<f64>,
    /// Leave the noise term out of the signal
    #[clap(long, global = true)]
    pub no_noise: bool,
    /// none, gaussian, uniform or exponential
    #[clap(short = 'f', long, global = true)]
    pub filter: Option<FilterKind>,
    #[clap(long, global = true)]
    pub gaussian_window: Option<usize>,
    #[clap(long, global = true, allow_hyphen_values = true)]
    pub gaussian_sigma: Option<f64>,
    #[clap(long, global = true)]
    pub uniform_window: Option<usize>,
    #[clap(long, global = true, allow_hyphen_values = true)]
    pub alpha: Option<f64>,
}

impl ParamArgs {
    /// Overwrite only the parameters given on the command line
    pub fn apply_to(&self, config: &mut Configuration) {
        let generator = &mut config.generator;
        if let Some(v) = self.amplitude {
            generator.amplitude = v;
        }
        if let Some(v) = self.frequency {
            generator.frequency = v;
        }
        if let Some(v) = self.phase {
            generator.phase = v;
        }
        if let Some(v) = self.noise_mean {
            generator.noise_mean = v;
        }
        if let Some(v) = self.noise_dispersion {
            generator.noise_dispersion = v;
        }
        if self.no_noise {
            generator.include_noise = false;
        }

        let filter = &mut config.filter;
        if let Some(kind) = self.filter {
            filter.kind = kind;
        }
        if let Some(v) = self.gaussian_window {
            filter.gaussian_window = v;
        }
        if let Some(v) = self.gaussian_sigma {
            filter.gaussian_sigma = v;
        }
        if let Some(v) = self.uniform_window {
            filter.uniform_window = v;
        }
        if let Some(v) = self.alpha {
            filter.alpha = v;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print statistics of the original and filtered signal
    Summary {
        /// Emit JSON instead of text
        #[clap(long)]
        json: bool,
    },
    /// Write the signal and every parameter to a CSV file
    Export {
        /// Output file
        #[clap(default_value = "data_export.csv")]
        path: PathBuf,
    },
    /// Store the current parameters as a named profile
    SaveProfile { name: String },
    /// List stored profiles
    ListProfiles,
    /// Remove a stored profile
    DeleteProfile { name: String },
    /// Read commands from stdin and recompute after each one
    Interactive,
}

/// Execute a parsed command line
pub fn run(cli: Cli) -> HarmonicResult<()> {
    match &cli.command {
        Command::ListProfiles => return profiles::list(&open_store(&cli)?),
        Command::DeleteProfile { name } => return profiles::delete(&mut open_store(&cli)?, name),
        _ => {}
    }

    let base = match &cli.profile {
        Some(name) => open_store(&cli)?.load(name)?,
        None => Configuration::default(),
    };
    let config = resolve_config(base, &cli.params);
    let session = match cli.seed {
        Some(seed) => Session::new(
            Configuration::default(),
            NoiseSource::from_seed(seed, SAMPLE_COUNT),
        ),
        None => Session::with_entropy(),
    };
    session.update(config)?;

    match &cli.command {
        Command::Summary { json } => summary::run(&session, *json),
        Command::Export { path } => export::run(&session, path),
        Command::SaveProfile { name } => profiles::save(&mut open_store(&cli)?, &session, name),
        Command::Interactive => {
            let stdin = std::io::stdin();
            interactive::run(&session, stdin.lock(), std::io::stdout().lock())
        }
        Command::ListProfiles | Command::DeleteProfile { .. } => Ok(()),
    }
}

/// The profile directory is only created by commands that need it
fn open_store(cli: &Cli) -> HarmonicResult<JsonProfileStore> {
    JsonProfileStore::open(&cli.profiles_dir)
}

/// Apply command-line overrides on top of the defaults or a stored profile
pub fn resolve_config(mut base: Configuration, params: &ParamArgs) -> Configuration {
    params.apply_to(&mut base);
    log::debug!("resolved configuration: {base:?}");
    base
}
