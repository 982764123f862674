use combostat::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn part(id: u32, name: &str, stats: Option<PartStats>, weight: Option<f64>) -> Part {
    Part {
        id: PartId(id),
        name: name.to_string(),
        kind: "Test".to_string(),
        description: None,
        image: None,
        weight,
        stats,
    }
}

fn stats_strategy() -> impl Strategy<Value = Option<PartStats>> {
    proptest::option::of((0..80i64, 0..80i64, 0..80i64, 0..80i64, 0..80i64).prop_map(
        |(attack, defense, endurance, dash, burst_resistance)| PartStats {
            attack,
            defense,
            endurance,
            dash,
            burst_resistance,
        },
    ))
}

fn part_strategy(id: u32, name: &'static str) -> impl Strategy<Value = Part> {
    (stats_strategy(), proptest::option::of(0u32..400)).prop_map(move |(stats, tenths)| {
        part(id, name, stats, tenths.map(|t| f64::from(t) / 10.0))
    })
}

fn combo_label() -> CombinationLabel {
    let selection = Selection {
        blade: Some(part(1, "Dran Sword", None, None)),
        ratchet: Some(part(1, "3-60", None, None)),
        bit: Some(part(1, "F (Flat)", None, None)),
    };
    combination_label(&selection).unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    Commit(i64),
    /// Remove the n-th issued id, wrapping; may already be gone.
    RemoveIssued(usize),
    RemoveUnknown,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..200i64).prop_map(Op::Commit),
        3 => (0..32usize).prop_map(Op::RemoveIssued),
        1 => Just(Op::RemoveUnknown),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    /// Totals are the field-wise sum of the filled slots; missing stats count as zero.
    #[test]
    fn test_aggregate_is_fieldwise_sum_of_filled_slots(
        blade in proptest::option::of(part_strategy(1, "Blade")),
        ratchet in proptest::option::of(part_strategy(2, "Ratchet")),
        bit in proptest::option::of(part_strategy(3, "Bit")),
    ) {
        let selection = Selection { blade, ratchet, bit };
        let totals = aggregate(&selection);

        for kind in StatKind::ALL {
            let expected: i64 = selection
                .filled()
                .map(|p| p.stats.map(|s| s.get(kind)).unwrap_or(0))
                .sum();
            prop_assert_eq!(totals.get(kind), expected);
        }
        let weight: f64 = selection.filled().map(|p| p.weight.unwrap_or(0.0)).sum();
        prop_assert!((totals.weight - weight).abs() < 1e-9);
        prop_assert_eq!(combination_label(&selection).is_some(), selection.is_complete());
    }

    /// Any sequence of commits and removals keeps table, chart and entries in step.
    #[test]
    fn test_table_and_chart_stay_mirrored(ops in proptest::collection::vec(op_strategy(), 0..60)) {
        let mut registry = ComparisonRegistry::default();
        let mut issued: Vec<EntryId> = Vec::new();

        for op in ops {
            match op {
                Op::Commit(attack) => {
                    let stats = AggregateStats { attack, ..AggregateStats::default() };
                    issued.push(registry.commit(combo_label(), stats));
                }
                Op::RemoveIssued(n) => {
                    if !issued.is_empty() {
                        let id = issued[n % issued.len()];
                        let was_present = registry.get(id).is_some();
                        let outcome = registry.remove(id);
                        prop_assert_eq!(outcome.removed, was_present);
                        prop_assert_eq!(outcome.now_empty, registry.is_empty());

                        let snapshot = registry.list_entries().to_vec();
                        let again = registry.remove(id);
                        prop_assert!(!again.removed);
                        prop_assert_eq!(registry.list_entries(), snapshot.as_slice());
                    }
                }
                Op::RemoveUnknown => {
                    let before = registry.list_entries().to_vec();
                    let outcome = registry.remove(EntryId(u64::MAX));
                    prop_assert!(!outcome.removed);
                    prop_assert_eq!(registry.list_entries(), before.as_slice());
                }
                Op::Clear => registry.clear(),
            }

            prop_assert!(registry.is_mirrored());
            let table: BTreeSet<_> = registry.table().rows().iter().map(|r| r.entry_id).collect();
            let chart: BTreeSet<_> = registry.chart().datasets().iter().map(|d| d.entry_id).collect();
            prop_assert_eq!(table, chart);

            let order: Vec<_> = registry.list_entries().iter().map(|e| e.id).collect();
            let chart_order: Vec<_> = registry.chart().datasets().iter().map(|d| d.entry_id).collect();
            prop_assert_eq!(order, chart_order);
        }

        let unique: BTreeSet<_> = issued.iter().collect();
        prop_assert_eq!(unique.len(), issued.len());
    }

    /// Bar fill stays within 0..=100 and never decreases as the value grows.
    #[test]
    fn test_bar_percent_is_clamped_and_monotonic(a in -500i64..500, b in -500i64..500, ceiling in 1u32..300) {
        let ceiling = f64::from(ceiling);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = bar_percent(lo, ceiling);
        let p_hi = bar_percent(hi, ceiling);
        prop_assert!((0.0..=100.0).contains(&p_lo));
        prop_assert!((0.0..=100.0).contains(&p_hi));
        prop_assert!(p_lo <= p_hi);
    }

    /// Each dataset takes the palette colour for its position at commit time.
    #[test]
    fn test_color_follows_dataset_count(commits in 1usize..20) {
        let mut registry = ComparisonRegistry::default();
        for _ in 0..commits {
            registry.commit(combo_label(), AggregateStats::default());
        }
        let palette = Palette::default();
        for (n, dataset) in registry.chart().datasets().iter().enumerate() {
            prop_assert_eq!(dataset.color, palette.color_for(n % palette.len()));
        }
    }
}
