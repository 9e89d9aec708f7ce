use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::errors::RenumberError;

/// Clave original de una comuna (código postal, código externo, etc.)
///
/// Los números ordenan antes que los textos y entre sí numéricamente,
/// así "2" < "10" como en los scripts que ordenaban con `int(...)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum RegionKey {
    Number(i64),
    Text(String),
}

impl RegionKey {
    /// Parsea un campo CSV; `None` si está vacío
    pub fn parse(raw: &str) -> Option<RegionKey> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Some(RegionKey::Number(n)),
            Err(_) => Some(RegionKey::Text(trimmed.to_string())),
        }
    }
}

impl From<i64> for RegionKey {
    fn from(n: i64) -> Self {
        RegionKey::Number(n)
    }
}

impl From<&str> for RegionKey {
    fn from(s: &str) -> Self {
        RegionKey::Text(s.to_string())
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionKey::Number(n) => write!(f, "{}", n),
            RegionKey::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Fila de entrada: un barrio con la clave de su comuna original
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    pub line: usize,
    pub region_key: RegionKey,
    pub subregion_name: String,
    /// id_barrio original, solo necesario para ordenar
    pub order_key: Option<i64>,
}

impl SourceRecord {
    /// Construye un registro en memoria (tablas literales). El nombre se
    /// recorta igual que en `from_fields`.
    pub fn new(region_key: impl Into<RegionKey>, subregion_name: &str) -> Self {
        Self {
            line: 0,
            region_key: region_key.into(),
            subregion_name: subregion_name.trim().to_string(),
            order_key: None,
        }
    }

    #[cfg(test)]
    pub fn with_order_key(mut self, order_key: i64) -> Self {
        self.order_key = Some(order_key);
        self
    }

    /// Valida los campos crudos de una fila CSV.
    /// `order` es `Some` solo cuando la columna de orden fue solicitada.
    pub fn from_fields(
        line: usize,
        region: Option<&str>,
        name: Option<&str>,
        order: Option<Option<&str>>,
    ) -> Result<SourceRecord, RenumberError> {
        let region_key = region
            .and_then(RegionKey::parse)
            .ok_or_else(|| RenumberError::validation(line, "missing region key"))?;

        let subregion_name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| RenumberError::validation(line, "missing subregion name"))?
            .to_string();

        let order_key = match order {
            None => None,
            Some(raw) => {
                let raw = raw
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| RenumberError::validation(line, "missing order key"))?;
                let value = raw.parse::<i64>().map_err(|_| {
                    RenumberError::validation(line, format!("order key '{}' is not an integer", raw))
                })?;
                Some(value)
            }
        };

        Ok(SourceRecord {
            line,
            region_key,
            subregion_name,
            order_key,
        })
    }

    /// Orden del paso de sort: (region_key, order_key), sin order_key al final
    pub fn sort_cmp(&self, other: &SourceRecord) -> Ordering {
        self.region_key
            .cmp(&other.region_key)
            .then_with(|| match (self.order_key, other.order_key) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

/// Fila de salida, en el orden fijo id_barrio, nombre, id_comuna
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenumberedRecord {
    pub subregion_id: i64,
    pub subregion_name: String,
    pub region_id: i64,
}

/// Comuna de una tabla literal (id, nombre, código postal)
#[derive(Debug, Clone, Serialize)]
pub struct Comuna {
    pub id_comuna: i64,
    pub nombre: String,
    pub codigo_postal: i64,
}

/// Fila descartada con la política `skip`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: String,
}
