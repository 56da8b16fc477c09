use super::*;
use crate::graph::algos::{bfs_path, dfs_path, shortest_path};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_reference_network_counts() {
    let graph = build_reference_network().unwrap();
    // 18 + 18 + 16 stations; 17 + 17 + 15 line segments + 3 transfers
    assert_eq!(graph.station_count(), 52);
    assert_eq!(graph.connection_count(), 52);
}

#[test]
fn test_reference_network_degrees() {
    let graph = build_reference_network().unwrap();
    // Terminals touch one segment
    assert_eq!(graph.degree("Академмістечко").unwrap(), 1);
    assert_eq!(graph.degree("Теремки").unwrap(), 1);
    // Two line neighbors plus two transfer links
    assert_eq!(graph.degree("Золоті Ворота").unwrap(), 4);
    // Two line neighbors plus one transfer link
    assert_eq!(graph.degree("Театральна").unwrap(), 3);
}

#[test]
fn test_construction_idempotent() {
    let first = build_reference_network().unwrap();
    let second = build_reference_network().unwrap();
    assert_eq!(first.station_count(), second.station_count());
    assert_eq!(first.connection_count(), second.connection_count());
    let degrees = |g: &crate::graph::StationGraph| -> Vec<usize> {
        g.summary().degrees.iter().map(|d| d.degree).collect()
    };
    assert_eq!(degrees(&first), degrees(&second));
}

#[test]
fn test_same_line_route_uses_no_transfers() {
    let graph = build_reference_network().unwrap();
    let result = shortest_path(&graph, "Академмістечко", "Театральна").unwrap();
    assert!(result.found);
    // 9 segments along line 1, weight 3 each
    assert_eq!(result.hops, 9);
    assert_eq!(result.total_weight.unwrap().value(), 27.0);
    // Every traversed edge is an intra-line segment
    for pair in result.stations.windows(2) {
        assert_eq!(graph.weight(&pair[0], &pair[1]).unwrap().value(), 3.0);
    }
}

#[test]
fn test_cross_line_route_pays_one_transfer() {
    let graph = build_reference_network().unwrap();
    // Театральна (line 1) to Палац Спорту (line 3): only way over is a
    // transfer edge; cheapest is Театральна -> Золоті Ворота -> Палац Спорту
    let result = shortest_path(&graph, "Театральна", "Палац Спорту").unwrap();
    assert_eq!(
        result.stations,
        vec!["Театральна", "Золоті Ворота", "Палац Спорту"]
    );
    assert_eq!(result.total_weight.unwrap().value(), 5.0 + 3.0);
}

#[test]
fn test_cross_line_route_from_line_end() {
    let graph = build_reference_network().unwrap();
    // Академмістечко is 27 from Театральна; transfer 5; one segment 3
    let result = shortest_path(&graph, "Академмістечко", "Палац Спорту").unwrap();
    assert_eq!(result.total_weight.unwrap().value(), 27.0 + 5.0 + 3.0);
}

#[test]
fn test_all_three_searches_agree_on_reachability() {
    let graph = build_reference_network().unwrap();
    for (from, to) in [
        ("Академмістечко", "Червоний хутір"),
        ("Теремки", "Лісова"),
        ("Сирець", "Героїв Дніпра"),
    ] {
        assert!(dfs_path(&graph, from, to).unwrap().found);
        assert!(bfs_path(&graph, from, to).unwrap().found);
        assert!(shortest_path(&graph, from, to).unwrap().found);
    }
}

#[test]
fn test_shortest_never_longer_than_dfs_or_bfs() {
    let graph = build_reference_network().unwrap();
    let pairs = [
        ("Академмістечко", "Палац Спорту"),
        ("Оболонь", "Позняки"),
        ("Вокзальна", "Кловська"),
    ];
    for (from, to) in pairs {
        let dfs = dfs_path(&graph, from, to).unwrap();
        let bfs = bfs_path(&graph, from, to).unwrap();
        let best = shortest_path(&graph, from, to).unwrap();
        let best_w = best.total_weight.unwrap().value();
        assert!(best_w <= dfs.total_weight.unwrap().value());
        assert!(best_w <= bfs.total_weight.unwrap().value());
        assert!(bfs.hops <= dfs.hops);
    }
}

#[test]
fn test_disconnected_components_report_no_path() {
    let config = NetworkConfig {
        lines: vec![
            LineConfig {
                name: "north".into(),
                stations: vec!["N1".into(), "N2".into(), "N3".into()],
            },
            LineConfig {
                name: "south".into(),
                stations: vec!["S1".into(), "S2".into()],
            },
        ],
        transfers: vec![],
        segment_weight: 2.0,
        transfer_weight: 5.0,
    };
    let graph = config.build().unwrap();
    for (from, to) in [("N1", "S1"), ("N3", "S2")] {
        assert!(!dfs_path(&graph, from, to).unwrap().found);
        assert!(!bfs_path(&graph, from, to).unwrap().found);
        assert!(!shortest_path(&graph, from, to).unwrap().found);
    }
}

#[test]
fn test_duplicate_station_on_line_rejected() {
    let config = NetworkConfig {
        lines: vec![LineConfig {
            name: "loop".into(),
            stations: vec!["A".into(), "B".into(), "A".into()],
        }],
        transfers: vec![],
        segment_weight: 3.0,
        transfer_weight: 5.0,
    };
    assert!(matches!(
        config.build(),
        Err(TransitError::InvalidNetwork { .. })
    ));
}

#[test]
fn test_unknown_transfer_endpoint_rejected() {
    let config = NetworkConfig {
        lines: vec![LineConfig {
            name: "only".into(),
            stations: vec!["A".into(), "B".into()],
        }],
        transfers: vec![TransferConfig {
            from: "A".into(),
            to: "Ghost".into(),
        }],
        segment_weight: 3.0,
        transfer_weight: 5.0,
    };
    assert!(matches!(
        config.build(),
        Err(TransitError::InvalidNetwork { .. })
    ));
}

#[test]
fn test_negative_weight_rejected_at_build() {
    let config = NetworkConfig {
        lines: vec![LineConfig {
            name: "only".into(),
            stations: vec!["A".into(), "B".into()],
        }],
        transfers: vec![],
        segment_weight: -3.0,
        transfer_weight: 5.0,
    };
    assert!(matches!(
        config.build(),
        Err(TransitError::InvalidWeight { .. })
    ));
}

#[test]
fn test_load_from_toml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
segment_weight = 2.0

[[lines]]
name = "red"
stations = ["Alpha", "Beta", "Gamma"]

[[lines]]
name = "blue"
stations = ["Delta", "Beta2"]

[[transfers]]
from = "Beta"
to = "Beta2"
"#
    )
    .unwrap();

    let config = NetworkConfig::load(file.path()).unwrap();
    assert_eq!(config.lines.len(), 2);
    assert_eq!(config.segment_weight, 2.0);
    // transfer_weight falls back to the default
    assert_eq!(config.transfer_weight, 5.0);

    let graph = config.build().unwrap();
    assert_eq!(graph.station_count(), 5);
    // Alpha -> Beta (segment 2) -> Beta2 (transfer 5) -> Delta (segment 2)
    let result = shortest_path(&graph, "Alpha", "Delta").unwrap();
    assert_eq!(result.total_weight.unwrap().value(), 2.0 + 5.0 + 2.0);
}

#[test]
fn test_load_missing_file() {
    let err = NetworkConfig::load(Path::new("/nonexistent/network.toml")).unwrap_err();
    assert!(matches!(err, TransitError::NetworkFileNotFound { .. }));
}
