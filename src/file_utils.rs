use std::error::Error;
use std::fs::{self, File};
use std::io;
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use lazy_static::lazy_static;
use regex::Regex;
use tempfile::NamedTempFile;

use crate::errors::RenumberError;

const UTF8_BOM: char = '\u{feff}';

lazy_static! {
    static ref COLUMN_SEPARATOR: Regex = Regex::new(r"\s*,\s*").unwrap();
}

/// Abre un CSV con header y devuelve el reader junto con los nombres de
/// columna limpios (sin BOM de archivos `utf-8-sig`, sin espacios).
pub fn open_csv(path: &str) -> Result<(csv::Reader<File>, Vec<String>), RenumberError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let headers = clean_headers(reader.headers()?);
    Ok((reader, headers))
}

pub fn clean_headers(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 { h.trim_start_matches(UTF8_BOM) } else { h };
            h.trim().to_string()
        })
        .collect()
}

/// Posición de una columna por nombre exacto
pub fn column_index(headers: &[String], name: &str) -> Result<usize, RenumberError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| RenumberError::MissingColumn(name.to_string()))
}

/// "a, b ,c" -> ["a", "b", "c"]
pub fn parse_column_list(raw: &str) -> Vec<String> {
    COLUMN_SEPARATOR
        .split(raw.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Writer CSV que escribe a un temporal en el directorio destino y solo
/// reemplaza el archivo final en `commit`. Si se descarta sin commit, el
/// temporal se borra y el destino queda intacto.
pub struct AtomicCsvWriter {
    writer: csv::Writer<NamedTempFile>,
    destination: String,
}

impl AtomicCsvWriter {
    pub fn create(destination: &str) -> Result<Self, RenumberError> {
        let parent = Path::new(destination)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let temp_file = NamedTempFile::new_in(parent)?;
        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(temp_file);

        Ok(Self {
            writer,
            destination: destination.to_string(),
        })
    }

    pub fn write_record<I, T>(&mut self, record: I) -> Result<(), RenumberError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(record)?;
        Ok(())
    }

    pub fn serialize<S: serde::Serialize>(&mut self, row: S) -> Result<(), RenumberError> {
        self.writer.serialize(row)?;
        Ok(())
    }

    /// Cierra el CSV y deja el temporal listo para `persist`
    pub fn finish(mut self) -> Result<StagedFile, RenumberError> {
        self.writer.flush()?;
        let temp_file = self.writer.into_inner().map_err(|e| {
            RenumberError::Io(io::Error::new(e.error().kind(), e.error().to_string()))
        })?;
        temp_file.as_file().sync_all()?;
        Ok(StagedFile {
            temp_file,
            destination: self.destination,
        })
    }

    pub fn commit(self) -> Result<(), RenumberError> {
        self.finish()?.persist()
    }
}

/// Temporal completo y sincronizado, pendiente de moverse a su destino
pub struct StagedFile {
    temp_file: NamedTempFile,
    destination: String,
}

impl StagedFile {
    fn check_destination(&self) -> Result<(), RenumberError> {
        if Path::new(&self.destination).is_dir() {
            return Err(RenumberError::Io(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is a directory", self.destination),
            )));
        }
        Ok(())
    }

    pub fn persist(self) -> Result<(), RenumberError> {
        self.check_destination()?;
        self.temp_file
            .persist(&self.destination)
            .map_err(|e| RenumberError::Io(e.error))?;
        Ok(())
    }
}

/// Mueve varios temporales a sus destinos. Los destinos se revisan antes del
/// primer rename, así un destino inválido no deja la salida a medias.
pub fn persist_all(staged: Vec<StagedFile>) -> Result<(), RenumberError> {
    for file in &staged {
        file.check_destination()?;
    }
    for file in staged {
        file.persist()?;
    }
    Ok(())
}

/// Escribe JSON a un temporal junto al destino, sin moverlo todavía
pub fn stage_json<T: serde::Serialize>(path: &str, value: &T) -> Result<StagedFile, RenumberError> {
    let parent = Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp_file = NamedTempFile::new_in(parent)?;
    serde_json::to_writer_pretty(&mut temp_file, value)?;
    temp_file.as_file().sync_all()?;
    Ok(StagedFile {
        temp_file,
        destination: path.to_string(),
    })
}

/// Calcula el tamaño de un archivo en bytes
pub fn get_file_size(path: &str) -> Result<u64, Box<dyn Error>> {
    let metadata = fs::metadata(path)?;
    Ok(metadata.len())
}

/// Formatea bytes en formato legible (KB, MB, GB)
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Valida que un archivo exista
pub fn validate_file_exists(path: &str) -> Result<(), Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("File not found: {}", path).into());
    }
    Ok(())
}

/// Crea un directorio si no existe
pub fn ensure_directory_exists(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path)?;
    Ok(())
}
