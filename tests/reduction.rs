use parstat::{
    plan_partitions, reduce_partition, run_reduction, Aggregate, Dataset, DerivedMetrics,
    Partition, ReduceError, Strategy, DIVIDE_PARTITION_CAP,
};

const TOLERANCE: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn scenario_with_a_zero_element() {
    // data = [10, 0, -20] at indices 0, 1, 2:
    //   raw_sum  = -10            => stddev = -5
    //   diff_sum = 10 - 1 - 22    => mode   = -13/3
    //   has_zero                  => sum    = 0
    let data = [10.0, 0.0, -20.0];

    let whole = reduce_partition(&data, Partition { start: 0, end: 3 });
    assert!(whole.has_zero);
    assert_eq!(whole.count, 3);
    assert!(close(whole.raw_sum, -10.0));
    assert!(close(whole.diff_sum, -13.0));

    let metrics = DerivedMetrics::derive(&whole);
    assert_eq!(metrics.sum, 0.0);
    assert!(close(metrics.stddev, -5.0));
    assert!(close(metrics.mode, -13.0 / 3.0));
}

#[test]
fn per_element_partitions_merge_to_the_same_aggregate() {
    let data = [10.0, 0.0, -20.0];

    let whole = reduce_partition(&data, Partition { start: 0, end: 3 });

    let split = plan_partitions(data.len(), 3, DIVIDE_PARTITION_CAP)
        .into_iter()
        .map(|p| reduce_partition(&data, p))
        .fold(Aggregate::default(), Aggregate::combine);

    assert_eq!(split.count, whole.count);
    assert_eq!(split.has_zero, whole.has_zero);
    assert!(close(split.raw_sum, whole.raw_sum));
    assert!(close(split.diff_sum, whole.diff_sum));
    assert!(close(split.log_sum_abs, whole.log_sum_abs));
}

#[test]
fn combine_is_commutative() {
    let data = [3.0, -1.5, 7.0, 2.0];
    let a = reduce_partition(&data, Partition { start: 0, end: 2 });
    let b = reduce_partition(&data, Partition { start: 2, end: 4 });

    let ab = a.combine(b);
    let ba = b.combine(a);
    assert!(close(ab.raw_sum, ba.raw_sum));
    assert!(close(ab.diff_sum, ba.diff_sum));
    assert!(close(ab.log_sum_abs, ba.log_sum_abs));
    assert_eq!(ab.count, ba.count);
    assert_eq!(ab.has_zero, ba.has_zero);
}

#[test]
fn sum_reconstructs_the_product_of_absolute_values() {
    let data: [f64; 4] = [2.0, -3.0, 4.0, 0.5];
    let product: f64 = data.iter().map(|v| v.abs()).product();

    for strategy in [
        Strategy::DivideAndConquer { splits: 0 },
        Strategy::DivideAndConquer { splits: 2 },
        Strategy::ThreadPool { workers: 2 },
    ] {
        let aggregate = run_reduction(&data, strategy).unwrap();
        let metrics = DerivedMetrics::derive(&aggregate);
        assert!(
            close(metrics.sum, product),
            "{}: {} != {}",
            strategy.name(),
            metrics.sum,
            product
        );
    }
}

#[test]
fn metrics_are_invariant_under_partition_count() {
    let data = Dataset::default_data();

    let baseline = DerivedMetrics::derive(
        &run_reduction(&data, Strategy::DivideAndConquer { splits: 0 }).unwrap(),
    );

    for strategy in [
        Strategy::DivideAndConquer { splits: 3 },
        Strategy::DivideAndConquer { splits: 5 },
        Strategy::ThreadPool { workers: 1 },
        Strategy::ThreadPool { workers: 7 },
        Strategy::ThreadPool { workers: 32 },
    ] {
        let metrics =
            DerivedMetrics::derive(&run_reduction(&data, strategy).unwrap());
        assert!(close(metrics.mode, baseline.mode), "{}", strategy.name());
        assert!(close(metrics.stddev, baseline.stddev), "{}", strategy.name());
        assert!(close(metrics.sum, baseline.sum), "{}", strategy.name());
    }
}

#[test]
fn any_zero_element_collapses_sum_to_exactly_zero() {
    let mut data = Dataset::default_data();
    data[37] = 0.0;

    for strategy in [
        Strategy::DivideAndConquer { splits: 0 },
        Strategy::DivideAndConquer { splits: 4 },
        Strategy::ThreadPool { workers: 8 },
    ] {
        let aggregate = run_reduction(&data, strategy).unwrap();
        assert!(aggregate.has_zero);
        assert_eq!(DerivedMetrics::derive(&aggregate).sum, 0.0);
    }
}

#[test]
fn mode_matches_the_whole_dataset_formula() {
    let data = Dataset::default_data();
    let expected: f64 = data
        .iter()
        .enumerate()
        .map(|(i, v)| v - i as f64)
        .sum::<f64>()
        / data.len() as f64;

    let aggregate = run_reduction(&data, Strategy::ThreadPool { workers: 4 }).unwrap();
    assert!(close(DerivedMetrics::derive(&aggregate).mode, expected));
}

#[test]
fn stddev_is_half_the_raw_sum() {
    let data = Dataset::default_data();
    let raw_sum: f64 = data.iter().sum();

    let aggregate = run_reduction(&data, Strategy::DivideAndConquer { splits: 3 }).unwrap();
    assert!(close(DerivedMetrics::derive(&aggregate).stddev, raw_sum / 2.0));
}

#[test]
fn empty_dataset_yields_all_zero_metrics() {
    let aggregate = run_reduction(&[], Strategy::ThreadPool { workers: 4 }).unwrap();
    let metrics = DerivedMetrics::derive(&aggregate);
    assert_eq!(metrics.mode, 0.0);
    assert_eq!(metrics.stddev, 0.0);
    assert_eq!(metrics.sum, 0.0);
}

#[test]
fn out_of_range_parameters_are_rejected() {
    assert!(matches!(
        run_reduction(&[1.0], Strategy::DivideAndConquer { splits: 33 }),
        Err(ReduceError::SplitRange(_))
    ));
    assert!(matches!(
        run_reduction(&[1.0], Strategy::ThreadPool { workers: 0 }),
        Err(ReduceError::PoolRange(_))
    ));
    assert!(matches!(
        run_reduction(&[1.0], Strategy::ThreadPool { workers: 33 }),
        Err(ReduceError::PoolRange(_))
    ));
}

#[test]
fn dataset_generation_is_deterministic_and_bounded() {
    let a = Dataset::generate(42, 100);
    let b = Dataset::generate(42, 100);
    assert_eq!(a, b);
    assert_eq!(a.len(), 100);
    assert!(a.iter().all(|v| (0.0..=100.0).contains(v) && v.fract() == 0.0));

    let other_seed = Dataset::generate(7, 100);
    assert_ne!(a, other_seed);
}
