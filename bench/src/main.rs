use clap::Parser;
use reptest::args::common::RepTestArgs;
use reptest::runner::report_builder::ComparisonReportBuilder;
use reptest::{workloads, RepTestError, RepetitionTester, RunConfiguration};
use reptest_report::hardware::HostHardware;
use reptest_report::params::RunParams;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn main() -> Result<(), RepTestError> {
    let args = RepTestArgs::parse();
    args.validate();

    let (stdout_writer, _stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(stdout_writer))
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO")))
        .init();

    let mut tester = RepetitionTester::new(RunConfiguration::from(&args))?;
    for workload in workloads::select(args.buffer_size as usize, &args.workloads)? {
        tester.register_workload(workload.name(), workload)?;
    }

    info!("Starting the repetition tests...");
    let summaries = tester.run_all()?;
    info!("Finished the repetition tests.");

    let hardware = HostHardware::detect(Some(args.identifier.clone()));
    let report = ComparisonReportBuilder::build(hardware, RunParams::from(&args), summaries);
    report.print_summary();

    if let Some(output_dir) = &args.output_dir {
        let report_path = report.dump_to_json(Path::new(output_dir)).map_err(|e| {
            error!("Failed to write report to {output_dir}: {e}");
            RepTestError::CannotWriteReport(e)
        })?;
        info!("Report saved to: {}", report_path.display());
    }

    Ok(())
}
