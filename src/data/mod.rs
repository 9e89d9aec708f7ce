use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Comuna, SourceRecord};

mod armenia;

pub use armenia::ARMENIA;

/// Comuna de una tabla literal con sus barrios en el orden original
pub struct ComunaSeed {
    pub id: i64,
    pub nombre: &'static str,
    pub codigo_postal: i64,
    pub barrios: &'static [&'static str],
}

lazy_static! {
    static ref COMUNA_PREFIX: Regex = Regex::new(r"(?i)^\s*comuna\b\s*").unwrap();
}

pub const SUPPORTED_CITIES: &[&str] = &["armenia"];

pub fn lookup(city: &str) -> Option<&'static [ComunaSeed]> {
    match city.to_lowercase().as_str() {
        "armenia" => Some(ARMENIA),
        _ => None,
    }
}

/// "Comuna 1 – Centenario" -> "1 – Centenario"
pub fn clean_comuna_name(nombre: &str) -> String {
    COMUNA_PREFIX.replace(nombre, "").trim().to_string()
}

pub fn comunas(seeds: &[ComunaSeed]) -> Vec<Comuna> {
    seeds
        .iter()
        .map(|seed| Comuna {
            id_comuna: seed.id,
            nombre: clean_comuna_name(seed.nombre),
            codigo_postal: seed.codigo_postal,
        })
        .collect()
}

/// Barrios de la tabla como registros de entrada, clave = id original de la comuna
pub fn source_records(seeds: &[ComunaSeed]) -> Vec<SourceRecord> {
    seeds
        .iter()
        .flat_map(|seed| {
            seed.barrios
                .iter()
                .map(move |barrio| SourceRecord::new(seed.id, barrio))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_comuna_name() {
        assert_eq!(clean_comuna_name("Comuna 1 – Centenario"), "1 – Centenario");
        assert_eq!(clean_comuna_name("Comuna 10 – Quimbaya"), "10 – Quimbaya");
        assert_eq!(clean_comuna_name("Centro"), "Centro");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(lookup("Armenia").is_some());
        assert!(lookup("ARMENIA").is_some());
        assert!(lookup("pereira").is_none());
    }

    #[test]
    fn test_armenia_table_shape() {
        assert_eq!(ARMENIA.len(), 10);
        let counts: Vec<usize> = ARMENIA.iter().map(|c| c.barrios.len()).collect();
        assert_eq!(counts, vec![31, 46, 39, 18, 19, 36, 17, 22, 23, 61]);
        assert_eq!(source_records(ARMENIA).len(), 312);

        let ids: Vec<i64> = ARMENIA.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_comunas_keep_postal_codes() {
        let rows = comunas(ARMENIA);
        assert_eq!(rows[0].nombre, "1 – Centenario");
        assert_eq!(rows[0].codigo_postal, 630001);
        assert_eq!(rows[9].codigo_postal, 630004);
    }
}
