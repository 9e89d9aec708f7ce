use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use crate::data::{self, ComunaSeed};
use crate::errors::RenumberError;
use crate::file_utils::{ensure_directory_exists, persist_all, AtomicCsvWriter};
use crate::models::{Comuna, RegionKey};
use crate::renumber::{renumber, RenumberConfig};

pub const COMUNAS_FILE: &str = "comunas.csv";
pub const BARRIOS_FILE: &str = "barrios.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub comunas: usize,
    pub barrios: usize,
}

/// Exporta una tabla literal como `comunas.csv` y `barrios.csv`.
///
/// Los barrios pasan por el renumerador y las comunas toman el mismo id
/// asignado a su clave, así `barrios.id_comuna` referencia `comunas.id_comuna`.
pub fn export_seed(
    seeds: &[ComunaSeed],
    out_dir: &Path,
    config: &RenumberConfig,
) -> Result<SeedSummary, RenumberError> {
    let result = renumber(data::source_records(seeds), config)?;

    let region_ids: HashMap<&RegionKey, i64> = result
        .regions()
        .iter()
        .map(|r| (&r.region_key, r.region_id))
        .collect();

    let comunas = data::comunas(seeds)
        .into_iter()
        .map(|c| -> Result<Comuna, RenumberError> {
            let key = RegionKey::Number(c.id_comuna);
            let id = region_ids.get(&key).copied().ok_or_else(|| {
                RenumberError::Config(format!("comuna {} has no barrios", c.id_comuna))
            })?;
            Ok(Comuna { id_comuna: id, ..c })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let comunas_path = out_dir.join(COMUNAS_FILE);
    let mut writer = AtomicCsvWriter::create(&comunas_path.to_string_lossy())?;
    writer.write_record(["id_comuna", "nombre", "codigo_postal"])?;
    for comuna in &comunas {
        writer.serialize(comuna)?;
    }
    let comunas_file = writer.finish()?;

    let barrios_path = out_dir.join(BARRIOS_FILE);
    let mut writer = AtomicCsvWriter::create(&barrios_path.to_string_lossy())?;
    writer.write_record(["id_barrio", "nombre", "id_comuna"])?;
    for barrio in result.records() {
        writer.serialize(barrio)?;
    }
    let barrios_file = writer.finish()?;

    // ambos archivos o ninguno
    persist_all(vec![comunas_file, barrios_file])?;

    Ok(SeedSummary {
        comunas: comunas.len(),
        barrios: result.records().len(),
    })
}

pub fn seed_cmd(args: &[String]) -> Result<(), Box<dyn Error>> {
    if args.len() < 4 || args.len() > 6 {
        eprintln!("Usage: barrios_tools seed <city> <out_dir> [region_start] [subregion_start]");
        eprintln!("Cities: {}", data::SUPPORTED_CITIES.join(", "));
        return Ok(());
    }

    let city = &args[2];
    let out_dir = &args[3];
    let region_start: i64 = match args.get(4) {
        Some(raw) => raw.parse().map_err(|_| format!("Invalid region_start: '{}'", raw))?,
        None => 1,
    };
    let subregion_start: i64 = match args.get(5) {
        Some(raw) => raw.parse().map_err(|_| format!("Invalid subregion_start: '{}'", raw))?,
        None => 1,
    };

    let seeds = data::lookup(city).ok_or_else(|| {
        format!(
            "Unknown city: '{}'. Supported: {}",
            city,
            data::SUPPORTED_CITIES.join(", ")
        )
    })?;

    println!("🌱 Seeding {} into {}", city, out_dir);
    println!("🔢 Comuna ids from {} | Barrio ids from {}", region_start, subregion_start);

    ensure_directory_exists(out_dir)?;
    let config = RenumberConfig::new(region_start, subregion_start);
    let summary = export_seed(seeds, Path::new(out_dir), &config)?;

    println!("✅ {}: {} comunas", COMUNAS_FILE, summary.comunas);
    println!("✅ {}: {} barrios", BARRIOS_FILE, summary.barrios);
    Ok(())
}
