use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::RenumberError;
use crate::models::{RegionKey, RenumberedRecord, SourceRecord};

/// Política de agrupación de comunas al asignar `region_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grouping {
    /// Solo las filas consecutivas con la misma clave comparten id.
    /// Una clave que reaparece más adelante recibe un id nuevo.
    #[default]
    Runs,
    /// Un id por clave, en orden de primera aparición
    FirstSeen,
    /// Un id por clave, en orden ascendente de la clave
    SortedKeys,
}

impl FromStr for Grouping {
    type Err = RenumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "runs" => Ok(Grouping::Runs),
            "first-seen" => Ok(Grouping::FirstSeen),
            "sorted-keys" => Ok(Grouping::SortedKeys),
            other => Err(RenumberError::Config(format!(
                "unknown grouping '{}' (expected runs, first-seen or sorted-keys)",
                other
            ))),
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Grouping::Runs => "runs",
            Grouping::FirstSeen => "first-seen",
            Grouping::SortedKeys => "sorted-keys",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenumberConfig {
    pub region_id_start: i64,
    pub subregion_id_start: i64,
    /// Ordenar por (region_key, order_key) antes de asignar ids
    pub sort: bool,
    pub grouping: Grouping,
}

impl RenumberConfig {
    pub fn new(region_id_start: i64, subregion_id_start: i64) -> Self {
        Self {
            region_id_start,
            subregion_id_start,
            sort: false,
            grouping: Grouping::default(),
        }
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Offsets no negativos y rangos que caben en i64 para `count` filas
    pub fn validate(&self, count: usize) -> Result<(), RenumberError> {
        if self.region_id_start < 0 {
            return Err(RenumberError::Config(format!(
                "region_id_start must be >= 0, got {}",
                self.region_id_start
            )));
        }
        if self.subregion_id_start < 0 {
            return Err(RenumberError::Config(format!(
                "subregion_id_start must be >= 0, got {}",
                self.subregion_id_start
            )));
        }

        let count = i64::try_from(count)
            .map_err(|_| RenumberError::Config(format!("too many records: {}", count)))?;
        for (name, start) in [
            ("region", self.region_id_start),
            ("subregion", self.subregion_id_start),
        ] {
            if start.checked_add(count).is_none() {
                return Err(RenumberError::Config(format!(
                    "{} id range starting at {} overflows for {} records",
                    name, start, count
                )));
            }
        }
        Ok(())
    }
}

/// Un id de comuna asignado y cuántos barrios lo usan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionAssignment {
    pub region_key: RegionKey,
    pub region_id: i64,
    pub subregions: usize,
}

/// Resultado de una pasada de renumeración
#[derive(Debug, Clone, Default)]
pub struct Renumbering {
    records: Vec<RenumberedRecord>,
    regions: Vec<RegionAssignment>,
}

impl Renumbering {
    pub fn records(&self) -> &[RenumberedRecord] {
        &self.records
    }

    /// Asignaciones ordenadas por `region_id`
    pub fn regions(&self) -> &[RegionAssignment] {
        &self.regions
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

/// Orden estable por (region_key, order_key). Aplicarlo dos veces no cambia nada.
pub fn sort_records(records: &mut [SourceRecord]) {
    records.sort_by(|a, b| a.sort_cmp(b));
}

/// Renumera comunas y barrios en una sola pasada.
///
/// Los ids de barrio se asignan en orden de recorrido, contiguos desde
/// `subregion_id_start`. Los ids de comuna dependen de `config.grouping`.
/// Falla con `Validation` si algún registro trae nombre vacío.
pub fn renumber(
    mut records: Vec<SourceRecord>,
    config: &RenumberConfig,
) -> Result<Renumbering, RenumberError> {
    config.validate(records.len())?;

    if let Some(bad) = records.iter().find(|r| r.subregion_name.trim().is_empty()) {
        return Err(RenumberError::validation(bad.line, "missing subregion name"));
    }

    if config.sort {
        sort_records(&mut records);
    }

    let region_ids = match config.grouping {
        Grouping::Runs => assign_runs(&records, config.region_id_start),
        Grouping::FirstSeen => assign_first_seen(&records, config.region_id_start),
        Grouping::SortedKeys => assign_sorted_keys(&records, config.region_id_start),
    };

    let mut assignments: BTreeMap<i64, RegionAssignment> = BTreeMap::new();
    let mut output = Vec::with_capacity(records.len());
    let mut next_subregion_id = config.subregion_id_start;

    for (record, region_id) in records.into_iter().zip(region_ids) {
        assignments
            .entry(region_id)
            .or_insert_with(|| RegionAssignment {
                region_key: record.region_key.clone(),
                region_id,
                subregions: 0,
            })
            .subregions += 1;

        output.push(RenumberedRecord {
            subregion_id: next_subregion_id,
            subregion_name: record.subregion_name,
            region_id,
        });
        next_subregion_id += 1;
    }

    Ok(Renumbering {
        records: output,
        regions: assignments.into_values().collect(),
    })
}

fn assign_runs(records: &[SourceRecord], start: i64) -> Vec<i64> {
    let mut current_key: Option<&RegionKey> = None;
    let mut current_id = start - 1;

    records
        .iter()
        .map(|record| {
            if current_key != Some(&record.region_key) {
                current_key = Some(&record.region_key);
                current_id += 1;
            }
            current_id
        })
        .collect()
}

fn assign_first_seen(records: &[SourceRecord], start: i64) -> Vec<i64> {
    let mut ids: HashMap<&RegionKey, i64> = HashMap::new();
    let mut next_id = start;

    records
        .iter()
        .map(|record| {
            *ids.entry(&record.region_key).or_insert_with(|| {
                let id = next_id;
                next_id += 1;
                id
            })
        })
        .collect()
}

fn assign_sorted_keys(records: &[SourceRecord], start: i64) -> Vec<i64> {
    let keys: BTreeSet<&RegionKey> = records.iter().map(|r| &r.region_key).collect();
    let ids: HashMap<&RegionKey, i64> = keys.into_iter().zip(start..).collect();

    records.iter().map(|r| ids[&r.region_key]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(result: &Renumbering) -> Vec<(i64, &str, i64)> {
        result
            .records()
            .iter()
            .map(|r| (r.subregion_id, r.subregion_name.as_str(), r.region_id))
            .collect()
    }

    fn input(rows: &[(&str, &str)]) -> Vec<SourceRecord> {
        rows.iter().map(|(k, n)| SourceRecord::new(*k, n)).collect()
    }

    #[test]
    fn test_consecutive_runs_share_region_id() {
        let records = input(&[("A", "x"), ("A", "y"), ("B", "z")]);
        let result = renumber(records, &RenumberConfig::new(22, 427)).unwrap();

        assert_eq!(triples(&result), vec![(427, "x", 22), (428, "y", 22), (429, "z", 23)]);
        assert_eq!(result.region_count(), 2);
    }

    #[test]
    fn test_non_contiguous_repeat_gets_new_region_id() {
        let records = input(&[("A", "x"), ("B", "y"), ("A", "z")]);
        let result = renumber(records, &RenumberConfig::new(22, 427)).unwrap();

        assert_eq!(triples(&result), vec![(427, "x", 22), (428, "y", 23), (429, "z", 24)]);
        let keys: Vec<String> = result.regions().iter().map(|r| r.region_key.to_string()).collect();
        assert_eq!(keys, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_first_seen_groups_repeated_keys() {
        let records = input(&[("A", "x"), ("B", "y"), ("A", "z")]);
        let config = RenumberConfig::new(22, 427).with_grouping(Grouping::FirstSeen);
        let result = renumber(records, &config).unwrap();

        assert_eq!(triples(&result), vec![(427, "x", 22), (428, "y", 23), (429, "z", 22)]);
        assert_eq!(result.regions()[0].subregions, 2);
    }

    #[test]
    fn test_sorted_keys_follow_key_order() {
        let records = vec![
            SourceRecord::new(30i64, "Cuba"),
            SourceRecord::new(4i64, "Boston"),
            SourceRecord::new(30i64, "Galicia"),
        ];
        let config = RenumberConfig::new(22, 427).with_grouping(Grouping::SortedKeys);
        let result = renumber(records, &config).unwrap();

        // Los barrios mantienen el orden de entrada
        assert_eq!(
            triples(&result),
            vec![(427, "Cuba", 23), (428, "Boston", 22), (429, "Galicia", 23)]
        );
        assert_eq!(result.regions()[0].region_key, RegionKey::Number(4));
    }

    #[test]
    fn test_sort_then_runs_groups_interleaved_input() {
        let records = vec![
            SourceRecord::new(2i64, "b2").with_order_key(20),
            SourceRecord::new(1i64, "a2").with_order_key(11),
            SourceRecord::new(2i64, "b1").with_order_key(5),
            SourceRecord::new(1i64, "a1").with_order_key(10),
        ];
        let config = RenumberConfig::new(11, 1).with_sort(true);
        let result = renumber(records, &config).unwrap();

        assert_eq!(
            triples(&result),
            vec![(1, "a1", 11), (2, "a2", 11), (3, "b1", 12), (4, "b2", 12)]
        );
    }

    #[test]
    fn test_sort_is_idempotent_and_stable() {
        let mut once = vec![
            SourceRecord::new(2i64, "x"),
            SourceRecord::new(1i64, "y").with_order_key(3),
            SourceRecord::new(2i64, "z"),
            SourceRecord::new(1i64, "w").with_order_key(1),
        ];
        sort_records(&mut once);
        let mut twice = once.clone();
        sort_records(&mut twice);

        assert_eq!(once, twice);
        let names: Vec<&str> = once.iter().map(|r| r.subregion_name.as_str()).collect();
        // Empates sin order_key conservan el orden de entrada
        assert_eq!(names, vec!["w", "y", "x", "z"]);
    }

    #[test]
    fn test_ids_are_contiguous() {
        let records = input(&[("A", "1"), ("B", "2"), ("B", "3"), ("C", "4"), ("A", "5")]);
        let result = renumber(records, &RenumberConfig::new(0, 100)).unwrap();

        let sub_ids: Vec<i64> = result.records().iter().map(|r| r.subregion_id).collect();
        assert_eq!(sub_ids, (100..105).collect::<Vec<_>>());

        let region_ids: Vec<i64> = result.regions().iter().map(|r| r.region_id).collect();
        assert_eq!(region_ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_input() {
        let result = renumber(Vec::new(), &RenumberConfig::new(1, 1)).unwrap();
        assert!(result.records().is_empty());
        assert_eq!(result.region_count(), 0);
    }

    #[test]
    fn test_rejects_empty_name() {
        let mut records = input(&[("A", "x")]);
        records.push(SourceRecord {
            line: 4,
            region_key: RegionKey::from("A"),
            subregion_name: "  ".to_string(),
            order_key: None,
        });
        let err = renumber(records, &RenumberConfig::new(1, 1)).unwrap_err();
        assert!(matches!(err, RenumberError::Validation { line: 4, .. }));
    }

    #[test]
    fn test_literal_names_are_trimmed() {
        let records = input(&[("A", " Los Quindos "), ("A", "\tLa Clarita")]);
        let result = renumber(records, &RenumberConfig::new(1, 1)).unwrap();
        assert_eq!(triples(&result), vec![(1, "Los Quindos", 1), (2, "La Clarita", 1)]);
    }

    #[test]
    fn test_config_validation() {
        assert!(RenumberConfig::new(-1, 1).validate(1).is_err());
        assert!(RenumberConfig::new(1, -5).validate(1).is_err());
        assert!(RenumberConfig::new(1, i64::MAX).validate(2).is_err());
        assert!(RenumberConfig::new(22, 427).validate(1000).is_ok());
    }

    #[test]
    fn test_grouping_from_str() {
        assert_eq!("runs".parse::<Grouping>().unwrap(), Grouping::Runs);
        assert_eq!("first-seen".parse::<Grouping>().unwrap(), Grouping::FirstSeen);
        assert_eq!("sorted-keys".parse::<Grouping>().unwrap(), Grouping::SortedKeys);
        assert!("grouped".parse::<Grouping>().is_err());
        assert_eq!(Grouping::FirstSeen.to_string(), "first-seen");
    }
}
