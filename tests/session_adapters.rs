//! Integration tests: session state with the export and profile adapters
//!
//! Files are written to a temporary directory; nothing touches the working
//! directory.

use noisy_harmonic_lib::adapters::csv_export::HEADER;
use noisy_harmonic_lib::adapters::{CsvExporter, JsonProfileStore, MemoryExporter};
use noisy_harmonic_lib::domain::{Configuration, FilterKind, GeneratorParams, HarmonicError};
use noisy_harmonic_lib::dsp::{NoiseSource, SAMPLE_COUNT};
use noisy_harmonic_lib::ports::ProfileStore;
use noisy_harmonic_lib::state::Session;

fn seeded_session(config: Configuration) -> Session {
    Session::new(config, NoiseSource::from_seed(77, SAMPLE_COUNT))
}

fn gaussian_config() -> Configuration {
    let mut config = Configuration {
        name: "Smooth".to_string(),
        ..Configuration::default()
    };
    config.filter.kind = FilterKind::Gaussian;
    config.filter.gaussian_window = 9;
    config.filter.gaussian_sigma = 3.0;
    config
}

#[test]
fn csv_export_repeats_parameters_on_every_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    let session = seeded_session(gaussian_config());

    let mut exporter = CsvExporter::create(&path).unwrap();
    session.export(&mut exporter).unwrap();
    drop(exporter);

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), SAMPLE_COUNT + 1);
    assert_eq!(lines[0], HEADER.join(","));

    let tail = |line: &str| line.splitn(4, ',').nth(3).unwrap().to_string();
    let first = tail(lines[1]);
    assert!(first.contains(",gaussian,3,9,5,0.6"));
    assert!(lines[1..].iter().all(|line| tail(line) == first));
}

#[test]
fn memory_export_matches_recompute() {
    let session = seeded_session(gaussian_config());
    let mut exporter = MemoryExporter::new();

    session.export(&mut exporter).unwrap();
    let frame = session.recompute().unwrap();
    let exported = exporter.last().unwrap();

    assert_eq!(exported.waveform, frame.waveform);
    assert_eq!(exported.filtered, frame.filtered);
    assert_eq!(exported.config, gaussian_config());
}

#[test]
fn regenerate_changes_signal_until_next_regenerate() {
    let session = seeded_session(Configuration::default());
    let before = session.recompute().unwrap();

    session
        .regenerate_noise(NoiseSource::from_seed(78, SAMPLE_COUNT))
        .unwrap();
    let after = session.recompute().unwrap();
    assert_ne!(before.waveform.amplitude, after.waveform.amplitude);

    // parameter tweaks reuse the held noise
    let mut config = session.config();
    config.filter.kind = FilterKind::Uniform;
    let tweaked = session.update(config).unwrap();
    assert_eq!(tweaked.waveform, after.waveform);
    assert_ne!(tweaked.filtered, after.filtered);
}

#[test]
fn rejected_update_keeps_previous_state() {
    let session = seeded_session(gaussian_config());
    let before = session.recompute().unwrap();

    let mut bad = session.config();
    bad.filter.gaussian_window = 4;
    assert!(matches!(
        session.update(bad),
        Err(HarmonicError::InvalidParameter(_))
    ));

    assert_eq!(session.config(), gaussian_config());
    assert_eq!(session.recompute().unwrap(), before);
}

#[test]
fn profile_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonProfileStore::open(dir.path().join("profiles")).unwrap();

    let config = Configuration {
        name: "Loud".to_string(),
        generator: GeneratorParams {
            amplitude: 4.5,
            include_noise: false,
            ..GeneratorParams::default()
        },
        ..gaussian_config()
    };
    store.save(&config).unwrap();
    store.save(&Configuration::default()).unwrap();

    assert_eq!(store.load("Loud").unwrap(), config);
    assert_eq!(store.list().unwrap(), vec!["Default".to_string(), "Loud".to_string()]);

    store.delete("Loud").unwrap();
    assert_eq!(store.list().unwrap(), vec!["Default".to_string()]);
}

#[test]
fn profile_store_refuses_unsafe_operations() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonProfileStore::open(dir.path()).unwrap();
    store.save(&Configuration::default()).unwrap();

    assert!(matches!(store.delete("Default"), Err(HarmonicError::Config(_))));
    assert!(matches!(store.load("missing"), Err(HarmonicError::Config(_))));
    assert!(store.load("../etc/passwd").is_err());

    let evil = Configuration {
        name: "../evil".to_string(),
        ..Configuration::default()
    };
    assert!(store.save(&evil).is_err());
}
