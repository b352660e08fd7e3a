//! Tests for weighted contribution decomposition

use caresignal::{
    decompose, ChildInput, Dimension, EntityKey, ParentGroup, SignalError,
};

fn key(id: &str) -> EntityKey {
    EntityKey::new(vec![
        Dimension::new("facility", id),
        Dimension::new("service_line", "cardiology"),
    ])
    .unwrap()
}

fn parent_group(children: Vec<(f64, f64)>, parent_value: f64) -> ParentGroup {
    ParentGroup {
        parent_node_id: "system_level".to_string(),
        parent_entity_key: key("SYSTEM"),
        parent_value,
        children: children
            .into_iter()
            .enumerate()
            .map(|(i, (weight_value, child_value))| ChildInput {
                child_node_id: "facility_level".to_string(),
                child_entity_key: key(&format!("F{i:03}")),
                weight_value,
                child_value,
            })
            .collect(),
    }
}

#[test]
fn test_weight_shares_sum_to_one() {
    let group = parent_group(
        vec![(120.0, 0.9), (45.0, 1.3), (310.0, 1.05), (22.0, 0.4)],
        1.02,
    );
    let records = decompose(&group).unwrap();

    let share_sum: f64 = records.iter().map(|r| r.weight_share).sum();
    assert!((share_sum - 1.0).abs() < 1e-6);
    for record in &records {
        assert!((0.0..=1.0).contains(&record.weight_share));
        assert_eq!(record.method, "weighted_mean");
    }
}

#[test]
fn test_zero_total_weight_waives_the_invariant() {
    let group = parent_group(vec![(0.0, 0.9), (0.0, 1.3)], 1.02);
    let records = decompose(&group).unwrap();
    for record in &records {
        assert_eq!(record.weight_share, 0.0);
    }
    // weight_share(weight=10, total=0) is 0.0, not an error.
    assert_eq!(caresignal::algorithm::contribution::weight_share(10.0, 0.0), 0.0);
}

#[test]
fn test_exact_excess_over_parent_fixture() {
    let share = 0.292_575_359_093_667_83;
    let child_value = 1.024_658_612_842_25;
    let parent_value = 1.050_440_928_019_939_8;

    let excess =
        caresignal::algorithm::contribution::excess_over_parent(share, child_value, parent_value);
    assert!((excess - (-0.007_543_270_121_378_754)).abs() < 1e-15);
}

#[test]
fn test_components_reconstruct_the_weighted_mean() {
    let children = vec![(100.0, 2.0), (300.0, 4.0), (100.0, 6.0)];
    let weighted_mean = (100.0 * 2.0 + 300.0 * 4.0 + 100.0 * 6.0) / 500.0;
    let group = parent_group(children, weighted_mean);
    let records = decompose(&group).unwrap();

    let component_sum: f64 = records.iter().map(|r| r.raw_component).sum();
    assert!((component_sum - weighted_mean).abs() < 1e-9);

    // Excess terms sum to zero when the parent value is the weighted mean.
    let excess_sum: f64 = records.iter().map(|r| r.excess_over_parent).sum();
    assert!(excess_sum.abs() < 1e-9);
}

#[test]
fn test_negative_weight_is_rejected() {
    let group = parent_group(vec![(50.0, 1.0), (-3.0, 2.0)], 1.2);
    assert!(matches!(
        decompose(&group),
        Err(SignalError::NegativeWeight { .. })
    ));
}

#[test]
fn test_records_carry_parent_and_child_identity() {
    let group = parent_group(vec![(10.0, 1.5)], 1.2);
    let records = decompose(&group).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].parent_node_id, "system_level");
    assert_eq!(records[0].child_node_id, "facility_level");
    assert_eq!(records[0].parent_value, 1.2);
    assert_eq!(records[0].child_value, 1.5);
    assert_eq!(records[0].weight_value, 10.0);
}
