pub mod batch;
pub mod generate;
pub mod syndrome;
pub mod verify;

use std::error::Error;
use std::fs;
use std::path::Path;

use qecc_code::RandomCode;

pub(crate) fn write_json<P: AsRef<Path>, T: serde::Serialize>(
    path: P,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

pub(crate) fn load_code(path: &Path) -> Result<RandomCode, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    qecc_code::from_json(&json).map_err(|err| Box::new(err) as Box<dyn Error>)
}
