//! Integration tests for gp-graph.

use gp_core::Point;
use gp_graph::{ElementKind, IncidenceIndex, Network, NetworkConfig, Placement, validate_network};

#[test]
fn cascading_delete_leaves_no_dangling_connections() {
    // Hub connector with three spokes plus one unrelated pipe.
    let mut net = Network::default();
    let hub = net.add_element(ElementKind::Connector, Point::new(300.0, 300.0));
    let spokes: Vec<_> = [
        ElementKind::GasSource,
        ElementKind::Switch,
        ElementKind::Connector,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, kind)| net.add_element(kind, Point::new(100.0 * i as f64, 0.0)))
    .collect();
    for &spoke in &spokes {
        net.connect(hub, spoke).unwrap();
    }
    let unrelated = net.connect(spokes[0], spokes[1]).unwrap();
    assert_eq!(net.connection_count(), 4);

    net.remove_element(hub);

    assert_eq!(net.connection_count(), 1);
    assert_eq!(net.connection_ids(), &[unrelated]);
    for (_, conn) in net.connections() {
        assert!(!conn.is_connected_to(hub));
    }
    validate_network(&net).unwrap();

    let idx = IncidenceIndex::from_network(&net);
    assert!(idx.incident(hub).is_empty());
}

#[test]
fn stale_handles_are_silent_no_ops() {
    let mut net = Network::default();
    let a = net.add_element(ElementKind::Switch, Point::ORIGIN);
    let b = net.add_element(ElementKind::Connector, Point::ORIGIN);
    let pipe = net.connect(a, b).unwrap();

    net.remove_element(a);
    // The freed slot is reused by the next element.
    let reused = net.add_element(ElementKind::Switch, Point::ORIGIN);
    assert_eq!(reused.slot(), a.slot());
    assert_ne!(reused, a);

    assert!(net.element(a).is_none());
    assert!(net.toggle(a).is_none());
    assert!(net.remove_element(a).is_none());
    assert!(net.remove_connection(pipe).is_none());
    assert!(net.connect(a, b).is_none());
    assert_eq!(net.element(reused).unwrap().is_on(), Some(false));
    validate_network(&net).unwrap();
}

#[test]
fn parallel_connections_are_kept_separately() {
    let mut net = Network::default();
    let a = net.add_element(ElementKind::GasSource, Point::ORIGIN);
    let b = net.add_element(ElementKind::Connector, Point::ORIGIN);
    let first = net.connect(a, b).unwrap();
    let second = net.connect(b, a).unwrap();
    assert_ne!(first, second);
    assert_eq!(net.connections_of(a).count(), 2);

    net.remove_connection(first);
    assert_eq!(net.connection_ids(), &[second]);
}

#[test]
fn remove_connection_leaves_elements() {
    let mut net = Network::default();
    let a = net.add_element(ElementKind::GasSource, Point::ORIGIN);
    let b = net.add_element(ElementKind::Connector, Point::ORIGIN);
    let pipe = net.connect(a, b).unwrap();
    let removed = net.remove_connection(pipe).unwrap();
    assert_eq!(removed.endpoints(), [a, b]);
    assert_eq!(net.element_count(), 2);
    assert_eq!(net.connection_count(), 0);
}

#[test]
fn placement_feeds_hit_testing() {
    let config = NetworkConfig::default();
    let mut placement = Placement::default();
    let mut net = Network::new(config.clone());

    let source_at = placement.next(ElementKind::GasSource, &config);
    let switch_at = placement.next(ElementKind::Switch, &config);
    let source = net.add_element(ElementKind::GasSource, source_at);
    let switch = net.add_element(ElementKind::Switch, switch_at);
    let pipe = net.connect(source, switch).unwrap();

    assert_eq!(net.element_at(Point::new(110.0, 110.0)), Some(source));
    assert_eq!(net.element_at(Point::new(200.0, 100.0)), Some(switch));
    // Midway between the source centre (120,120) and switch centre (200,100).
    assert_eq!(net.connection_at(Point::new(160.0, 110.0)), Some(pipe));
    assert_eq!(net.connection_at(Point::new(160.0, 140.0)), None);
}

#[test]
fn large_network() {
    let mut net = Network::default();
    let mut ids = Vec::new();
    for i in 0..100 {
        let kind = ElementKind::ALL[i % 3];
        ids.push(net.add_element(kind, Point::new(i as f64, 0.0)));
    }
    for pair in ids.windows(2) {
        net.connect(pair[0], pair[1]).unwrap();
    }
    assert_eq!(net.element_count(), 100);
    assert_eq!(net.connection_count(), 99);

    for &id in ids.iter().step_by(2) {
        net.remove_element(id);
    }
    assert_eq!(net.element_count(), 50);
    assert_eq!(net.connection_count(), 0);
    validate_network(&net).unwrap();
}
