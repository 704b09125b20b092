use proptest::prelude::*;
use witrel_analysis::patterns::{bell_number, Alphabet, SegmentClassifier};
use witrel_analysis::VariantPipeline;
use witrel_core::{CollationTable, RunConfig, Segment};

/// Segments over a tiny vocabulary so agreement is common.
fn segments(width: usize, max_len: usize) -> impl Strategy<Value = Vec<Vec<Option<String>>>> {
    let cell = prop_oneof![
        1 => Just(None),
        4 => prop::sample::select(vec!["a", "b", "c"]).prop_map(|s| Some(s.to_string())),
    ];
    prop::collection::vec(prop::collection::vec(cell, width), 1..max_len)
}

fn table(width: usize, rows: &[Vec<Option<String>>]) -> CollationTable {
    let segments = rows
        .iter()
        .map(|r| Segment::from_readings(r.iter().map(|c| c.as_deref())))
        .collect();
    CollationTable::new(width, segments).unwrap()
}

proptest! {
    #[test]
    fn labels_are_restricted_growth(width in 2usize..7, rows in segments(6, 20)) {
        let classifier = SegmentClassifier::new(Alphabet::new(width).unwrap());
        for row in &rows {
            let readings: Vec<&str> = row[..width].iter().map(|c| c.as_deref().unwrap_or("---")).collect();
            let first = classifier.classify(&readings).unwrap();
            let again = classifier.classify(&readings).unwrap();
            prop_assert_eq!(&first, &again);
            prop_assert!(first.label.is_restricted_growth());
            prop_assert_eq!(first.label.len(), width);
        }
    }

    #[test]
    fn equal_readings_share_symbols(row in prop::collection::vec(0u8..4, 2..9)) {
        let readings: Vec<String> = row.iter().map(|r| r.to_string()).collect();
        let classifier = SegmentClassifier::new(Alphabet::new(readings.len()).unwrap());
        let label = classifier.label(&readings).unwrap();
        let symbols = label.symbols();
        for i in 0..readings.len() {
            for j in 0..readings.len() {
                prop_assert_eq!(readings[i] == readings[j], symbols[i] == symbols[j]);
            }
        }
    }

    #[test]
    fn percentages_bounded_by_agreement(rows in segments(4, 40)) {
        let table = table(4, &rows);
        let report = VariantPipeline::new(RunConfig::new(4).unwrap()).unwrap().run(&table).unwrap();
        let sum = report.ranked.total_percentage();
        let tolerance = 0.005 * report.ranked.len() as f64 + 1e-6;
        let informative = report.statistics.informative_segments as f64
            / report.statistics.total_segments as f64 * 100.0;
        prop_assert!((sum - informative).abs() <= tolerance);
        prop_assert!(sum <= 100.0 + tolerance);
        prop_assert!(report.ranked.entries().iter().all(|e| !e.label.is_all_agree()));
        for pair in report.ranked.entries().windows(2) {
            prop_assert!(pair[0].percentage >= pair[1].percentage);
        }
    }

    #[test]
    fn sharding_never_changes_the_report(rows in segments(3, 60), shard in 1usize..16) {
        let table = table(3, &rows);
        let sequential = VariantPipeline::new(RunConfig::new(3).unwrap()).unwrap().run(&table).unwrap();
        let sharded = VariantPipeline::new(RunConfig::new(3).unwrap())
            .unwrap()
            .with_parallel(shard)
            .run(&table)
            .unwrap();
        prop_assert_eq!(sharded, sequential);
    }
}

#[test]
fn distinct_labels_match_bell_numbers() {
    for n in 2..=6 {
        let classifier = SegmentClassifier::new(Alphabet::new(n).unwrap());
        let mut seen = std::collections::BTreeSet::new();
        // Every assignment of n witnesses to n readings.
        let total = (n as u32).pow(n as u32);
        for mut code in 0..total {
            let readings: Vec<String> = (0..n)
                .map(|_| {
                    let r = code % n as u32;
                    code /= n as u32;
                    r.to_string()
                })
                .collect();
            seen.insert(classifier.label(&readings).unwrap());
        }
        assert_eq!(seen.len() as u128, bell_number(n));
    }
}
