fn main() -> anyhow::Result<()> {
    noisy_harmonic_lib::run()?;
    Ok(())
}
