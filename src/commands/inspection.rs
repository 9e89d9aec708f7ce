use std::collections::HashMap;
use std::error::Error;

use crate::errors::RenumberError;
use crate::file_utils::{column_index, open_csv, validate_file_exists};
use crate::models::RegionKey;

/// Cómo está agrupada la columna de comuna en un CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingReport {
    pub rows: usize,
    pub empty_keys: usize,
    pub distinct_keys: usize,
    pub runs: usize,
    /// Claves que aparecen en más de un tramo, con su número de tramos
    pub split_keys: Vec<(RegionKey, usize)>,
}

impl GroupingReport {
    /// Con `runs` cada tramo es una comuna distinta; si hay claves partidas
    /// hace falta `--sort` o `--grouping first-seen`.
    pub fn is_grouped(&self) -> bool {
        self.split_keys.is_empty()
    }
}

pub fn inspect_grouping(input: &str, region_col: &str) -> Result<GroupingReport, RenumberError> {
    let (mut reader, headers) = open_csv(input)?;
    let region_idx = column_index(&headers, region_col)?;

    let mut rows = 0;
    let mut empty_keys = 0;
    let mut runs = 0;
    let mut previous: Option<RegionKey> = None;
    let mut runs_per_key: HashMap<RegionKey, usize> = HashMap::new();
    let mut first_seen: Vec<RegionKey> = Vec::new();

    for result in reader.records() {
        let record = result?;
        rows += 1;

        let key = match record.get(region_idx).and_then(RegionKey::parse) {
            Some(key) => key,
            None => {
                empty_keys += 1;
                continue;
            }
        };

        if previous.as_ref() != Some(&key) {
            runs += 1;
            let count = runs_per_key.entry(key.clone()).or_insert(0);
            if *count == 0 {
                first_seen.push(key.clone());
            }
            *count += 1;
            previous = Some(key);
        }
    }

    let split_keys = first_seen
        .iter()
        .filter_map(|k| {
            let count = runs_per_key[k];
            (count > 1).then(|| (k.clone(), count))
        })
        .collect();

    Ok(GroupingReport {
        rows,
        empty_keys,
        distinct_keys: runs_per_key.len(),
        runs,
        split_keys,
    })
}

pub fn inspect_cmd(args: &[String]) -> Result<(), Box<dyn Error>> {
    if args.len() != 4 {
        eprintln!("Usage: barrios_tools inspect <input.csv> <region_col>");
        return Ok(());
    }

    let input_file = &args[2];
    let region_col = &args[3];
    validate_file_exists(input_file)?;

    println!("🔍 Inspecting '{}' in {}", region_col, input_file);
    let report = inspect_grouping(input_file, region_col)?;

    println!();
    println!("📊 RESUMEN:");
    println!("  Filas:            {}", report.rows);
    println!("  Comunas únicas:   {}", report.distinct_keys);
    println!("  Tramos (runs):    {}", report.runs);
    if report.empty_keys > 0 {
        println!("  ⚠️  Filas sin comuna: {}", report.empty_keys);
    }

    if report.is_grouped() {
        println!("\n✅ Each comuna appears in a single contiguous block");
    } else {
        println!("\n⚠️  {} comunas appear in more than one block:", report.split_keys.len());
        for (key, runs) in report.split_keys.iter().take(20) {
            println!("   - {} ({} blocks)", key, runs);
        }
        println!("💡 With the default 'runs' grouping each block gets its own id.");
        println!("   Use --sort or --grouping first-seen to merge them.");
    }

    Ok(())
}
