//! Network configuration and construction
//!
//! The station lists are configuration data, not algorithm logic: a
//! [`NetworkConfig`] can be loaded from a TOML file, and the default
//! value is the Kyiv metro reference network (three lines, segment
//! weight 3, transfer weight 5).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransitError};
use crate::graph::StationGraph;

const DEFAULT_SEGMENT_WEIGHT: f64 = 3.0;
const DEFAULT_TRANSFER_WEIGHT: f64 = 5.0;

fn default_segment_weight() -> f64 {
    DEFAULT_SEGMENT_WEIGHT
}

fn default_transfer_weight() -> f64 {
    DEFAULT_TRANSFER_WEIGHT
}

/// One metro line: an ordered station sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    pub name: String,
    pub stations: Vec<String>,
}

/// A transfer link joining two stations on different lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferConfig {
    pub from: String,
    pub to: String,
}

/// Declarative description of a transit network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub lines: Vec<LineConfig>,
    #[serde(default)]
    pub transfers: Vec<TransferConfig>,
    /// Weight of every consecutive-station segment within a line
    #[serde(default = "default_segment_weight")]
    pub segment_weight: f64,
    /// Weight of every transfer link
    #[serde(default = "default_transfer_weight")]
    pub transfer_weight: f64,
}

impl Default for NetworkConfig {
    /// The Kyiv metro reference network
    fn default() -> Self {
        let line1 = [
            "Академмістечко",
            "Житомирська",
            "Святошин",
            "Нивки",
            "Берестейська",
            "Шулявська",
            "Політехнічний інститут",
            "Вокзальна",
            "Університет",
            "Театральна",
            "Хрещатик",
            "Арсенальна",
            "Дніпро",
            "Гідропарк",
            "Лівобережна",
            "Дарниця",
            "Чернігівська",
            "Лісова",
        ];
        let line2 = [
            "Героїв Дніпра",
            "Мінська",
            "Оболонь",
            "Почайна",
            "Тараса Шевченка",
            "Контрактова площа",
            "Поштова площа",
            "Майдан Незалежності",
            "Площа Українських Героїв",
            "Олімпійська",
            "Палац \"Україна\"",
            "Либідська",
            "Деміївська",
            "Голосіївська",
            "Васильківська",
            "Виставковий центр",
            "Іподром",
            "Теремки",
        ];
        let line3 = [
            "Сирець",
            "Дорогожичі",
            "Лук’янівська",
            "Золоті Ворота",
            "Палац Спорту",
            "Кловська",
            "Печерська",
            "Звіринецька",
            "Видубичі",
            "Славутич",
            "Осокорки",
            "Позняки",
            "Харківська",
            "Вирлиця",
            "Бориспільська",
            "Червоний хутір",
        ];

        let line = |name: &str, stations: &[&str]| LineConfig {
            name: name.to_string(),
            stations: stations.iter().map(|s| s.to_string()).collect(),
        };
        let transfer = |from: &str, to: &str| TransferConfig {
            from: from.to_string(),
            to: to.to_string(),
        };

        NetworkConfig {
            lines: vec![
                line("Святошинсько-Броварська", &line1),
                line("Оболонсько-Теремківська", &line2),
                line("Сирецько-Печерська", &line3),
            ],
            transfers: vec![
                transfer("Майдан Незалежності", "Золоті Ворота"),
                transfer("Площа Українських Героїв", "Палац Спорту"),
                transfer("Театральна", "Золоті Ворота"),
            ],
            segment_weight: DEFAULT_SEGMENT_WEIGHT,
            transfer_weight: DEFAULT_TRANSFER_WEIGHT,
        }
    }
}

impl NetworkConfig {
    /// Load a network description from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TransitError::NetworkFileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let config: NetworkConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the description and build the station graph.
    ///
    /// Consecutive stations within each line are joined with
    /// `segment_weight`; each transfer pair with `transfer_weight`.
    /// Rejected: duplicate stations within a line, transfer endpoints
    /// that appear on no line, and non-finite or negative weights.
    #[tracing::instrument(skip(self), fields(lines = self.lines.len(), transfers = self.transfers.len()))]
    pub fn build(&self) -> Result<StationGraph> {
        let mut known: HashSet<&str> = HashSet::new();
        for line in &self.lines {
            let mut on_line: HashSet<&str> = HashSet::new();
            for station in &line.stations {
                if !on_line.insert(station.as_str()) {
                    return Err(TransitError::invalid_network(format!(
                        "duplicate station '{}' on line '{}'",
                        station, line.name
                    )));
                }
                known.insert(station.as_str());
            }
        }
        for transfer in &self.transfers {
            for endpoint in [&transfer.from, &transfer.to] {
                if !known.contains(endpoint.as_str()) {
                    return Err(TransitError::invalid_network(format!(
                        "transfer endpoint '{}' is not on any line",
                        endpoint
                    )));
                }
            }
        }

        let mut graph = StationGraph::new();
        for line in &self.lines {
            for pair in line.stations.windows(2) {
                graph.add_edge(&pair[0], &pair[1], self.segment_weight)?;
            }
        }
        for transfer in &self.transfers {
            graph.add_edge(&transfer.from, &transfer.to, self.transfer_weight)?;
        }

        tracing::debug!(
            stations = graph.station_count(),
            connections = graph.connection_count(),
            "network built"
        );
        Ok(graph)
    }
}

/// Build the reference Kyiv metro network
pub fn build_reference_network() -> Result<StationGraph> {
    NetworkConfig::default().build()
}

#[cfg(test)]
mod tests;
