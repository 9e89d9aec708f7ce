use std::error::Error;

use serde::Serialize;

use crate::errors::RenumberError;
use crate::file_utils::{
    column_index, format_bytes, get_file_size, open_csv, parse_column_list, persist_all, stage_json,
    AtomicCsvWriter,
};
use crate::models::{SkippedRow, SourceRecord};
use crate::progress::ProgressTracker;
use crate::renumber::{renumber, Grouping, RegionAssignment, RenumberConfig};

pub const DEFAULT_REGION_COL: &str = "id_comuna";
pub const DEFAULT_NAME_COL: &str = "nombre";
pub const DEFAULT_ORDER_COL: &str = "id_barrio";

/// Qué hacer con una fila inválida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPolicy {
    /// Aborta el lote en la primera fila inválida
    Fail,
    /// Descarta la fila, la reporta y sigue
    Skip,
}

#[derive(Debug, Clone)]
pub struct RenumberOptions {
    pub region_col: String,
    pub name_col: String,
    pub order_col: String,
    pub config: RenumberConfig,
    pub on_invalid: InvalidPolicy,
    /// Nombres del header de salida: barrio, nombre, comuna
    pub headers: [String; 3],
    pub report: Option<String>,
}

impl RenumberOptions {
    pub fn new(region_id_start: i64, subregion_id_start: i64) -> Self {
        Self {
            region_col: DEFAULT_REGION_COL.to_string(),
            name_col: DEFAULT_NAME_COL.to_string(),
            order_col: DEFAULT_ORDER_COL.to_string(),
            config: RenumberConfig::new(region_id_start, subregion_id_start),
            on_invalid: InvalidPolicy::Fail,
            headers: [
                DEFAULT_ORDER_COL.to_string(),
                DEFAULT_NAME_COL.to_string(),
                DEFAULT_REGION_COL.to_string(),
            ],
            report: None,
        }
    }

    /// Parsea los flags opcionales que siguen a los argumentos posicionales
    pub fn parse_flags(mut self, flags: &[String]) -> Result<Self, RenumberError> {
        let mut iter = flags.iter();
        while let Some(flag) = iter.next() {
            if flag == "--sort" {
                self.config = self.config.with_sort(true);
                continue;
            }

            let value = iter
                .next()
                .ok_or_else(|| RenumberError::Config(format!("flag {} requires a value", flag)))?;

            match flag.as_str() {
                "--region-col" => self.region_col = value.clone(),
                "--name-col" => self.name_col = value.clone(),
                "--order-col" => self.order_col = value.clone(),
                "--grouping" => self.config = self.config.with_grouping(value.parse::<Grouping>()?),
                "--on-invalid" => {
                    self.on_invalid = match value.as_str() {
                        "fail" => InvalidPolicy::Fail,
                        "skip" => InvalidPolicy::Skip,
                        other => {
                            return Err(RenumberError::Config(format!(
                                "unknown --on-invalid policy '{}' (expected fail or skip)",
                                other
                            )))
                        }
                    }
                }
                "--headers" => {
                    let names = parse_column_list(value);
                    self.headers = <[String; 3]>::try_from(names).map_err(|names| {
                        RenumberError::Config(format!(
                            "--headers needs exactly 3 names, got {}",
                            names.len()
                        ))
                    })?;
                }
                "--report" => self.report = Some(value.clone()),
                other => return Err(RenumberError::Config(format!("unknown flag '{}'", other))),
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone)]
pub struct RenumberSummary {
    pub records: usize,
    pub regions: usize,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Serialize)]
struct RunReport<'a> {
    input: &'a str,
    output: &'a str,
    generated_at: String,
    region_id_start: i64,
    subregion_id_start: i64,
    grouping: Grouping,
    sorted: bool,
    on_invalid: InvalidPolicy,
    records: usize,
    skipped: &'a [SkippedRow],
    regions: &'a [RegionAssignment],
}

/// Lee el CSV, valida las filas y devuelve los registros válidos
fn read_source_records(
    input: &str,
    options: &RenumberOptions,
) -> Result<(Vec<SourceRecord>, Vec<SkippedRow>), RenumberError> {
    let (mut reader, headers) = open_csv(input)?;
    let region_idx = column_index(&headers, &options.region_col)?;
    let name_idx = column_index(&headers, &options.name_col)?;
    let order_idx = if options.config.sort {
        Some(column_index(&headers, &options.order_col)?)
    } else {
        None
    };

    let mut progress = ProgressTracker::new("Reading", 10_000);
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let line = idx + 2; // +1 por índice 0, +1 por header
        let row = result?;
        progress.tick();

        let parsed = SourceRecord::from_fields(
            line,
            row.get(region_idx),
            row.get(name_idx),
            order_idx.map(|i| row.get(i)),
        );

        match parsed {
            Ok(record) => records.push(record),
            Err(RenumberError::Validation { line, reason })
                if options.on_invalid == InvalidPolicy::Skip =>
            {
                eprintln!("⚠️  Line {}: {} (skipped)", line, reason);
                skipped.push(SkippedRow { line, reason });
            }
            Err(e) => return Err(e),
        }
    }

    progress.finish();
    Ok((records, skipped))
}

/// Renumera un CSV de barrios y escribe `id_barrio,nombre,id_comuna`.
///
/// La salida y el reporte se escriben a temporales y solo se mueven a su
/// destino cuando ambos están completos, así un error a mitad de camino no
/// deja archivos parciales ni un CSV nuevo sin su reporte.
pub fn run_renumber(
    input: &str,
    output: &str,
    options: &RenumberOptions,
) -> Result<RenumberSummary, RenumberError> {
    let (records, skipped) = read_source_records(input, options)?;
    let result = renumber(records, &options.config)?;

    let mut writer = AtomicCsvWriter::create(output)?;
    writer.write_record(&options.headers)?;
    for record in result.records() {
        writer.serialize(record)?;
    }
    let mut staged = vec![writer.finish()?];

    if let Some(report_path) = &options.report {
        let report = RunReport {
            input,
            output,
            generated_at: chrono::Local::now().to_rfc3339(),
            region_id_start: options.config.region_id_start,
            subregion_id_start: options.config.subregion_id_start,
            grouping: options.config.grouping,
            sorted: options.config.sort,
            on_invalid: options.on_invalid,
            records: result.records().len(),
            skipped: &skipped,
            regions: result.regions(),
        };
        staged.push(stage_json(report_path, &report)?);
    }

    persist_all(staged)?;

    Ok(RenumberSummary {
        records: result.records().len(),
        regions: result.region_count(),
        skipped,
    })
}

pub fn renumber_cmd(args: &[String]) -> Result<(), Box<dyn Error>> {
    if args.len() < 6 {
        eprintln!("Usage: barrios_tools renumber <input.csv> <output.csv> <region_start> <subregion_start> [options]");
        eprintln!("Options:");
        eprintln!("  --region-col <name>   (default: {})", DEFAULT_REGION_COL);
        eprintln!("  --name-col <name>     (default: {})", DEFAULT_NAME_COL);
        eprintln!("  --order-col <name>    (default: {}, used with --sort)", DEFAULT_ORDER_COL);
        eprintln!("  --sort                sort by (region, order) before assigning ids");
        eprintln!("  --grouping runs|first-seen|sorted-keys");
        eprintln!("  --on-invalid fail|skip");
        eprintln!("  --headers <barrio>,<nombre>,<comuna>");
        eprintln!("  --report <file.json>");
        return Ok(());
    }

    let input_file = &args[2];
    let output_file = &args[3];
    let region_start: i64 = args[4]
        .parse()
        .map_err(|_| format!("Invalid region_start: '{}'", args[4]))?;
    let subregion_start: i64 = args[5]
        .parse()
        .map_err(|_| format!("Invalid subregion_start: '{}'", args[5]))?;

    let options = RenumberOptions::new(region_start, subregion_start).parse_flags(&args[6..])?;

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Renumber Comunas & Barrios                                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("📄 Input:  {}", input_file);
    println!("📝 Output: {}", output_file);
    println!("🔢 Region ids from:    {}", region_start);
    println!("🔢 Subregion ids from: {}", subregion_start);
    println!("📋 Columns: region='{}' name='{}'{}",
        options.region_col,
        options.name_col,
        if options.config.sort { format!(" order='{}'", options.order_col) } else { String::new() }
    );
    println!("🧩 Grouping: {} | Sort: {} | On invalid: {:?}",
        options.config.grouping, options.config.sort, options.on_invalid);
    println!();

    let summary = run_renumber(input_file, output_file, &options)?;

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Renumber Summary                                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("📊 Barrios written: {}", summary.records);
    println!("🏘️  Comunas assigned: {}", summary.regions);
    if summary.records > 0 {
        println!("🔢 Barrio ids: {}..={}",
            subregion_start, subregion_start + summary.records as i64 - 1);
    }
    if summary.regions > 0 {
        println!("🔢 Comuna ids: {}..={}",
            region_start, region_start + summary.regions as i64 - 1);
    }
    if !summary.skipped.is_empty() {
        eprintln!("⚠️  WARNING: {} invalid rows were skipped", summary.skipped.len());
    }
    println!("📄 Output file: {} ({})", output_file, format_bytes(get_file_size(output_file)?));
    if let Some(report) = &options.report {
        println!("📝 Report: {}", report);
    }
    println!("✅ Renumber complete!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn write_input(dir: &TempDir, content: &str) -> String {
        let path = dir.path().join("input.csv");
        fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    fn output_path(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_str().unwrap().to_string()
    }

    fn flags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_renumber_csv_consecutive_runs() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "id_comuna,nombre\nA,x\nA,y\nB,z\n");
        let output = output_path(&dir, "out.csv");

        let summary = run_renumber(&input, &output, &RenumberOptions::new(22, 427)).unwrap();

        assert_eq!(summary.records, 3);
        assert_eq!(summary.regions, 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "id_barrio,nombre,id_comuna\n427,x,22\n428,y,22\n429,z,23\n"
        );
    }

    #[test]
    fn test_renumber_csv_sorted_like_manizales() {
        let dir = tempdir().unwrap();
        let input = write_input(
            &dir,
            "\u{feff}id_barrio,nombre,id_comuna\n7,Chipre,2\n3,Centro,1\n1,Versalles,2\n2,Fundadores,1\n",
        );
        let output = output_path(&dir, "out.csv");
        let options = RenumberOptions::new(11, 1).parse_flags(&flags(&["--sort"])).unwrap();

        run_renumber(&input, &output, &options).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "id_barrio,nombre,id_comuna\n1,Fundadores,11\n2,Centro,11\n3,Versalles,12\n4,Chipre,12\n"
        );
    }

    #[test]
    fn test_renumber_csv_custom_columns_and_headers() {
        let dir = tempdir().unwrap();
        let input = write_input(
            &dir,
            "CODIGO DE LA COMUNA,CODIGO DEL BARRIO,NOMBRE\n5,100,San Nicolás\n5,101,Boston\n",
        );
        let output = output_path(&dir, "out.csv");
        let options = RenumberOptions::new(22, 427)
            .parse_flags(&flags(&[
                "--region-col", "CODIGO DE LA COMUNA",
                "--name-col", "NOMBRE",
                "--headers", "id, nombre_barrio, comuna",
            ]))
            .unwrap();

        run_renumber(&input, &output, &options).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "id,nombre_barrio,comuna\n427,San Nicolás,22\n428,Boston,22\n"
        );
    }

    #[test]
    fn test_renumber_csv_fail_policy_reports_line() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "id_comuna,nombre\n1,ok\n,sin comuna\n2,otro\n");
        let output = output_path(&dir, "out.csv");

        let err = run_renumber(&input, &output, &RenumberOptions::new(1, 1)).unwrap_err();

        assert!(matches!(err, RenumberError::Validation { line: 3, .. }));
        assert!(!std::path::Path::new(&output).exists());
    }

    #[test]
    fn test_renumber_csv_skip_policy_keeps_ids_contiguous() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "id_comuna,nombre\n1,a\n1,\n2,b\n,c\n2,d\n");
        let output = output_path(&dir, "out.csv");
        let options = RenumberOptions::new(1, 10)
            .parse_flags(&flags(&["--on-invalid", "skip"]))
            .unwrap();

        let summary = run_renumber(&input, &output, &options).unwrap();

        let lines: Vec<usize> = summary.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![3, 5]);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "id_barrio,nombre,id_comuna\n10,a,1\n11,b,2\n12,d,2\n"
        );
    }

    #[test]
    fn test_renumber_csv_missing_column() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "comuna,nombre\n1,a\n");
        let output = output_path(&dir, "out.csv");

        let err = run_renumber(&input, &output, &RenumberOptions::new(1, 1)).unwrap_err();
        assert!(matches!(err, RenumberError::MissingColumn(c) if c == "id_comuna"));
    }

    #[test]
    fn test_renumber_csv_sort_requires_integer_order_key() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "id_barrio,nombre,id_comuna\nX1,a,1\n");
        let output = output_path(&dir, "out.csv");
        let options = RenumberOptions::new(1, 1).parse_flags(&flags(&["--sort"])).unwrap();

        let err = run_renumber(&input, &output, &options).unwrap_err();
        assert!(matches!(err, RenumberError::Validation { line: 2, .. }));
    }

    #[test]
    fn test_renumber_csv_missing_input() {
        let dir = tempdir().unwrap();
        let output = output_path(&dir, "out.csv");
        let missing = output_path(&dir, "nope.csv");

        let err = run_renumber(&missing, &output, &RenumberOptions::new(1, 1)).unwrap_err();
        assert!(matches!(err, RenumberError::Io(_)));
    }

    #[test]
    fn test_renumber_csv_writes_report() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "id_comuna,nombre\n630001,a\n630002,b\n630001,c\n,d\n");
        let output = output_path(&dir, "out.csv");
        let report = output_path(&dir, "report.json");
        let options = RenumberOptions::new(1, 1)
            .parse_flags(&flags(&[
                "--grouping", "first-seen",
                "--on-invalid", "skip",
                "--report", report.as_str(),
            ]))
            .unwrap();

        run_renumber(&input, &output, &options).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(json["grouping"], "first-seen");
        assert_eq!(json["on_invalid"], "skip");
        assert_eq!(json["records"], 3);
        assert_eq!(json["skipped"][0]["line"], 5);
        assert_eq!(json["regions"][0]["region_key"], 630001);
        assert_eq!(json["regions"][0]["subregions"], 2);
        assert_eq!(json["regions"][1]["region_id"], 2);
    }

    #[test]
    fn test_renumber_csv_unwritable_output() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "id_comuna,nombre\n1,x\n");
        let output = dir.path().join("missing").join("out.csv");

        let err = run_renumber(&input, output.to_str().unwrap(), &RenumberOptions::new(1, 1))
            .unwrap_err();
        assert!(matches!(err, RenumberError::Io(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_renumber_csv_failed_report_keeps_previous_output() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "id_comuna,nombre\n1,x\n");
        let output = output_path(&dir, "out.csv");
        fs::write(&output, "previous\n").unwrap();
        let report = dir.path().join("no_such_dir").join("r.json");
        let options = RenumberOptions::new(1, 1)
            .parse_flags(&flags(&["--report", report.to_str().unwrap()]))
            .unwrap();

        let err = run_renumber(&input, &output, &options).unwrap_err();

        assert!(matches!(err, RenumberError::Io(_)));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_renumber_csv_report_on_directory_keeps_previous_output() {
        let dir = tempdir().unwrap();
        let input = write_input(&dir, "id_comuna,nombre\n1,x\n");
        let output = output_path(&dir, "out.csv");
        fs::write(&output, "previous\n").unwrap();
        let report = output_path(&dir, "report.json");
        fs::create_dir(&report).unwrap();
        let options = RenumberOptions::new(1, 1)
            .parse_flags(&flags(&["--report", report.as_str()]))
            .unwrap();

        assert!(run_renumber(&input, &output, &options).is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
    }

    #[test]
    fn test_parse_flags_errors() {
        let base = RenumberOptions::new(1, 1);
        assert!(base.clone().parse_flags(&flags(&["--grouping"])).is_err());
        assert!(base.clone().parse_flags(&flags(&["--grouping", "all"])).is_err());
        assert!(base.clone().parse_flags(&flags(&["--on-invalid", "ignore"])).is_err());
        assert!(base.clone().parse_flags(&flags(&["--headers", "a,b"])).is_err());
        assert!(base.parse_flags(&flags(&["--verbose", "1"])).is_err());
    }
}
