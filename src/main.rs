use std::env;
use std::error::Error;

// Importar módulos locales
mod commands;
mod data;
mod errors;
mod file_utils;
mod models;
mod progress;
mod renumber;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        help();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "renumber" => commands::renumber_cmd(&args)?,
        "select" => commands::select_columns_cmd(&args)?,
        "sort" => commands::sort_rows_cmd(&args)?,
        "inspect" => commands::inspect_cmd(&args)?,
        "seed" => commands::seed_cmd(&args)?,
        "version" => version(),
        "help" => help(),
        _ => {
            eprintln!("Unknown command: {}", command);
            help();
        }
    }

    Ok(())
}

fn version() {
    println!(
        "barrios_tools v{} ({} build, {}, {})",
        env!("BARRIOS_TOOLS_VERSION"),
        env!("BUILD_PROFILE"),
        env!("BUILD_TARGET"),
        env!("BUILD_DATE")
    );
}

fn help() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Barrios Tools - Comunas & Barrios Renumbering               ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Commands:");
    println!("  renumber <input.csv> <output.csv> <region_start> <subregion_start> [options]");
    println!("    Assign contiguous ids to comunas and barrios");
    println!("    - Output columns: id_barrio, nombre, id_comuna");
    println!("    - Barrio ids follow row order");
    println!("    - Consecutive rows with the same comuna share its id");
    println!("    Options:");
    println!("      --region-col <name>    comuna column (default: id_comuna)");
    println!("      --name-col <name>      barrio name column (default: nombre)");
    println!("      --order-col <name>     original barrio id (default: id_barrio)");
    println!("      --sort                 sort by (comuna, barrio id) first");
    println!("      --grouping <policy>    runs | first-seen | sorted-keys (default: runs)");
    println!("      --on-invalid <policy>  fail | skip (default: fail)");
    println!("      --headers <a>,<b>,<c>  output header names");
    println!("      --report <file.json>   write a JSON run report");
    println!();
    println!("  select <input.csv> <output.csv> <col1,col2,...>");
    println!("    Keep only the listed columns, in that order");
    println!();
    println!("  sort <input.csv> <output.csv> <region_col> <order_col> [out_cols]");
    println!("    Numeric sort by (region_col, order_col), optional column reorder");
    println!();
    println!("  inspect <input.csv> <region_col>");
    println!("    Report whether each comuna forms a single contiguous block");
    println!();
    println!("  seed <city> <out_dir> [region_start] [subregion_start]");
    println!("    Export built-in comunas.csv and barrios.csv (cities: armenia)");
    println!();
    println!("  version");
    println!("    Show version and build info");
    println!();
    println!("EXAMPLES:");
    println!();
    println!("  # Pereira: keep code columns, then renumber comunas from 22 and barrios from 427");
    println!("  barrios_tools select pereira.csv barrios_sin_comuna.csv \"CODIGO DE LA COMUNA,CODIGO DEL BARRIO,NOMBRE\"");
    println!("  barrios_tools renumber barrios_sin_comuna.csv barrios_pereira.csv 22 427 \\");
    println!("      --region-col \"CODIGO DE LA COMUNA\" --name-col NOMBRE --grouping sorted-keys");
    println!();
    println!("  # Manizales: sort by (id_comuna, id_barrio) and renumber comunas from 11");
    println!("  barrios_tools renumber barrios_manizales.csv barrios_manizales2.csv 11 1 --sort");
    println!();
    println!("  # Armenia: export the built-in table");
    println!("  barrios_tools seed armenia ./out");
    println!();
    println!("NOTES:");
    println!("  - Input must be UTF-8; a leading BOM is ignored");
    println!("  - Output is written to a temp file and moved into place");
}
