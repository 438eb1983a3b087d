use reptest::utils::duration::BenchDuration;
use reptest::{RepTestError, RepetitionTester, RunConfiguration};
use reptest_report::comparison_metric::ComparisonMetric;
use serial_test::serial;
use std::thread;
use std::time::{Duration, Instant};

fn config(duration_budget: Duration, min_iterations: u64) -> RunConfiguration {
    RunConfiguration::new(
        BenchDuration::new(duration_budget),
        min_iterations,
        false,
        ComparisonMetric::LowestMean,
    )
}

#[test]
#[serial]
fn copy_workload_should_honor_iteration_floor_and_report_throughput() {
    let mut tester = RepetitionTester::new(config(Duration::from_secs(1), 50)).unwrap();
    let source = vec![7u8; 1024];
    let mut destination = vec![0u8; 1024];
    tester
        .register_workload("copy-1KB", move |bytes: &mut u64| {
            destination.copy_from_slice(&source);
            *bytes = 1024;
            true
        })
        .unwrap();

    let summaries = tester.run_all().unwrap();

    let record = tester.workload("copy-1KB").unwrap();
    assert!(record.statistics().test_count() >= 50);
    assert_eq!(record.failure_count(), 0);
    assert!(record.statistics().throughput_gbps() > 0.0);

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "copy-1KB");
    assert_eq!(summaries[0].tracked_bytes, 1024);
    assert!(summaries[0].throughput_gbps > 0.0);
}

#[test]
fn flaky_workload_should_keep_samples_of_failed_trials() {
    let mut tester = RepetitionTester::new(config(Duration::ZERO, 10)).unwrap();
    let mut succeed = true;
    tester
        .register_workload("flaky", move |_: &mut u64| {
            let result = succeed;
            succeed = !succeed;
            result
        })
        .unwrap();

    let summaries = tester.run_all().unwrap();

    let record = tester.workload("flaky").unwrap();
    assert_eq!(record.statistics().test_count(), 10);
    assert_eq!(record.failure_count(), 5);
    assert_eq!(summaries[0].count, 10);
    assert_eq!(summaries[0].failure_count, 5);
    assert_eq!(summaries[0].success_count(), 5);
}

#[test]
fn duplicate_registration_should_be_rejected() {
    let mut tester = RepetitionTester::new(config(Duration::ZERO, 1)).unwrap();
    tester.register_workload("same", |_: &mut u64| true).unwrap();

    let result = tester.register_workload("same", |_: &mut u64| false);

    assert!(matches!(result, Err(RepTestError::DuplicateWorkload(name)) if name == "same"));
    assert_eq!(tester.workload_names(), vec!["same"]);

    tester.run_all().unwrap();
    assert_eq!(tester.workload("same").unwrap().failure_count(), 0);
}

#[test]
fn zero_budget_should_run_exactly_min_iterations() {
    let mut tester = RepetitionTester::new(config(Duration::ZERO, 37)).unwrap();
    tester.register_workload("noop", |_: &mut u64| true).unwrap();

    tester.run_all().unwrap();

    let statistics = tester.workload("noop").unwrap().statistics();
    assert_eq!(statistics.test_count(), 37);
    assert!(statistics.min() <= statistics.max());
}

#[test]
#[serial]
fn duration_budget_should_hold_with_single_iteration_floor() {
    let budget = Duration::from_millis(200);
    let mut tester = RepetitionTester::new(config(budget, 1)).unwrap();
    tester
        .register_workload("sleepy", |_: &mut u64| {
            thread::sleep(Duration::from_millis(1));
            true
        })
        .unwrap();

    let started_at = Instant::now();
    tester.run_all().unwrap();
    let elapsed = started_at.elapsed();

    assert!(elapsed >= budget, "run took only {elapsed:?}");
    assert!(tester.workload("sleepy").unwrap().statistics().test_count() > 1);
}

#[test]
#[serial]
fn slow_workload_should_still_run_whole_budget() {
    let budget = Duration::from_millis(100);
    let mut tester = RepetitionTester::new(config(budget, 1)).unwrap();
    tester
        .register_workload("slow", |_: &mut u64| {
            thread::sleep(Duration::from_millis(30));
            true
        })
        .unwrap();

    let started_at = Instant::now();
    tester.run_all().unwrap();

    assert!(started_at.elapsed() >= budget);
    let count = tester.workload("slow").unwrap().statistics().test_count();
    assert!((1..=4).contains(&count), "unexpected trial count: {count}");
}

#[test]
#[serial]
fn comparison_should_rank_faster_workload_first() {
    let mut tester = RepetitionTester::new(config(Duration::ZERO, 5)).unwrap();
    tester
        .register_workload("slow", |_: &mut u64| {
            thread::sleep(Duration::from_millis(5));
            true
        })
        .unwrap();
    tester.register_workload("fast", |_: &mut u64| true).unwrap();

    let summaries = tester.run_all().unwrap();

    let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["fast", "slow"]);
    assert_eq!(tester.workload_names(), vec!["slow", "fast"]);
    assert!(summaries[1].min_ns >= 5_000_000);
}

#[test]
fn statistics_should_stay_ordered_for_measured_samples() {
    let mut tester = RepetitionTester::new(config(Duration::ZERO, 100)).unwrap();
    let mut counter = 0u64;
    tester
        .register_workload("spin", move |bytes: &mut u64| {
            counter = counter.wrapping_add(1);
            let spins = (counter % 7) * 100;
            std::hint::black_box((0..spins).sum::<u64>());
            *bytes = 64;
            true
        })
        .unwrap();

    tester.run_all().unwrap();

    let statistics = tester.workload("spin").unwrap().statistics();
    let mean = statistics.mean();
    assert!(statistics.min().as_nanos() as f64 <= mean);
    assert!(mean <= statistics.max().as_nanos() as f64);
    assert_eq!(statistics.tracked_bytes(), 64);
}

#[test]
fn invalid_configuration_should_be_rejected_before_running() {
    let result = RepetitionTester::new(config(Duration::ZERO, 0));
    assert!(matches!(
        result,
        Err(RepTestError::InvalidConfiguration(_))
    ));
}

#[test]
#[serial]
fn progress_output_should_not_change_budget_gated_run() {
    let budget = Duration::from_millis(1500);
    let mut tester = RepetitionTester::new(RunConfiguration::new(
        BenchDuration::new(budget),
        1,
        true,
        ComparisonMetric::LowestMean,
    ))
    .unwrap();
    tester
        .register_workload("sleepy", |bytes: &mut u64| {
            thread::sleep(Duration::from_millis(10));
            *bytes = 1;
            true
        })
        .unwrap();

    let started_at = Instant::now();
    let summaries = tester.run_all().unwrap();
    let elapsed = started_at.elapsed();

    assert!(elapsed >= budget, "run took only {elapsed:?}");
    assert!(summaries[0].count > 1);
    assert!(summaries[0].count <= 150, "unexpected trial count: {}", summaries[0].count);
    assert_eq!(summaries[0].failure_count, 0);
}
