use {
    crate::models::{InstanceSpec, ScenarioModel},
    anyhow::{Context, Result},
    std::{
        fs::File,
        io::{BufReader, BufWriter, Write},
        path::Path,
    },
};

/// Read a JSON instance and validate it.
pub fn load_instance(path: &Path) -> Result<ScenarioModel> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open instance file {}", path.display()))?;
    let reader = BufReader::new(file);
    let spec: InstanceSpec = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse instance file {}", path.display()))?;
    let model = spec
        .validate()
        .with_context(|| format!("Invalid instance in {}", path.display()))?;

    let (shortest, longest) = model.travel_time_bounds();
    log::info!(
        "Loaded '{}' from {}: {} facilities, {} scenarios, travel times {}..{}",
        model.name(),
        path.display(),
        model.facilities().len(),
        model.scenarios().len(),
        shortest,
        longest
    );
    Ok(model)
}

/// Write an instance as pretty JSON. Does not validate.
pub fn save_instance(path: &Path, spec: &InstanceSpec) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create instance file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, spec)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
