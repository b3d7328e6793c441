//! Interactive command: one line per action, recomputed after every change

use std::io::{BufRead, Write};
use std::path::Path;

use crate::adapters::CsvExporter;
use crate::domain::{Configuration, FilterKind, HarmonicError, HarmonicResult};
use crate::dsp::{NoiseSource, SAMPLE_COUNT};
use crate::state::Session;

use super::summary::Summary;

const HELP: &str = "\
commands:
  set <param> <value>   amplitude, frequency, phase, noise-mean, noise-dispersion,
                        noise (on/off), filter, gaussian-window, gaussian-sigma,
                        uniform-window, alpha
  new-noise [seed]      draw a new noise buffer
  reset                 restore default parameters
  show                  print the summary
  export <path>         write the current frame to CSV
  help                  this text
  quit                  leave";

/// Read commands until `quit` or end of input.
///
/// A failing command is reported and leaves the session as it was.
pub fn run(session: &Session, input: impl BufRead, mut output: impl Write) -> HarmonicResult<()> {
    show(session, &mut output)?;
    writeln!(output, "type 'help' for commands")?;

    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        let result = match words.as_slice() {
            [] => continue,
            ["quit"] | ["q"] => break,
            ["help"] => writeln!(output, "{HELP}").map_err(HarmonicError::from),
            ["show"] | ["summary"] => show(session, &mut output),
            ["reset"] => session.reset().and_then(|_| show(session, &mut output)),
            ["new-noise"] => session
                .regenerate_noise(NoiseSource::from_entropy(SAMPLE_COUNT))
                .and_then(|_| show(session, &mut output)),
            ["new-noise", seed] => parse::<u64>(seed)
                .and_then(|seed| session.regenerate_noise(NoiseSource::from_seed(seed, SAMPLE_COUNT)))
                .and_then(|_| show(session, &mut output)),
            ["set", param, value] => {
                let mut config = session.config();
                set_param(&mut config, param, value)
                    .and_then(|()| session.update(config))
                    .and_then(|_| show(session, &mut output))
            }
            ["export", path] => export(session, Path::new(path), &mut output),
            _ => Err(HarmonicError::invalid(format!(
                "unknown command '{}', type 'help'",
                line.trim()
            ))),
        };

        if let Err(e) = result {
            log::debug!("interactive command failed: {e}");
            writeln!(output, "error: {e}")?;
        }
    }

    Ok(())
}

fn show(session: &Session, output: &mut impl Write) -> HarmonicResult<()> {
    let frame = session.recompute()?;
    writeln!(output, "{}", Summary::from_frame(&session.config(), &frame))?;
    Ok(())
}

fn export(session: &Session, path: &Path, output: &mut impl Write) -> HarmonicResult<()> {
    let mut exporter = CsvExporter::create(path)?;
    session.export(&mut exporter)?;
    writeln!(output, "Saved results to {}", path.display())?;
    Ok(())
}

fn parse<T: std::str::FromStr>(value: &str) -> HarmonicResult<T> {
    value
        .parse()
        .map_err(|_| HarmonicError::invalid(format!("cannot parse '{value}'")))
}

/// Change one named parameter in place; validation happens on update
fn set_param(config: &mut Configuration, param: &str, value: &str) -> HarmonicResult<()> {
    let generator = &mut config.generator;
    let filter = &mut config.filter;
    match param {
        "amplitude" => generator.amplitude = parse(value)?,
        "frequency" => generator.frequency = parse(value)?,
        "phase" => generator.phase = parse(value)?,
        "noise-mean" => generator.noise_mean = parse(value)?,
        "noise-dispersion" => generator.noise_dispersion = parse(value)?,
        "noise" => {
            generator.include_noise = match value {
                "on" | "true" => true,
                "off" | "false" => false,
                _ => return Err(HarmonicError::invalid(format!("noise must be on or off, got '{value}'"))),
            }
        }
        "filter" => filter.kind = value.parse::<FilterKind>()?,
        "gaussian-window" => filter.gaussian_window = parse(value)?,
        "gaussian-sigma" => filter.gaussian_sigma = parse(value)?,
        "uniform-window" => filter.uniform_window = parse(value)?,
        "alpha" => filter.alpha = parse(value)?,
        _ => return Err(HarmonicError::invalid(format!("unknown parameter '{param}'"))),
    }
    Ok(())
}
