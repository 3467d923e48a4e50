//! Run accounting: pass/fail records and the final report
//!
//! The recorder is append-only. Counters never decrease and failures are
//! never removed, so `passed <= attempted` and
//! `failures.len() == attempted - passed` hold for the whole run.

use colored::Colorize;

/// One recorded check
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    /// Empty on success
    pub details: String,
}

/// Snapshot of a run's accounting
#[derive(Debug, Default)]
pub struct RunStatistics {
    pub attempted: usize,
    pub passed: usize,
    pub failures: Vec<TestResult>,
}

impl RunStatistics {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Percentage of passed checks; zero when nothing ran
    pub fn success_rate(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.passed as f64 / self.attempted as f64 * 100.0
        }
    }
}

/// Accumulates test results and prints the running transcript
#[derive(Debug, Default)]
pub struct Recorder {
    stats: RunStatistics,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one check and print its transcript line
    pub fn record(&mut self, name: &str, passed: bool, details: &str) {
        self.stats.attempted += 1;
        if passed {
            self.stats.passed += 1;
            println!("{} {} - PASSED", "✓".green(), name);
        } else {
            println!("{} {} - FAILED: {}", "✗".red(), name, details.dimmed());
            self.stats.failures.push(TestResult {
                name: name.to_string(),
                passed: false,
                details: details.to_string(),
            });
        }
    }

    pub fn summary(&self) -> &RunStatistics {
        &self.stats
    }

    pub fn into_summary(self) -> RunStatistics {
        self.stats
    }
}

/// Print the final totals and enumerate failures
pub fn print_report(stats: &RunStatistics) {
    println!("\n{}", "=".repeat(60));
    println!("{}", "Test Results:".bold());
    println!("   Tests Run: {}", stats.attempted);
    println!("   Tests Passed: {}", stats.passed);
    println!("   Tests Failed: {}", stats.failed());
    println!("   Success Rate: {:.1}%", stats.success_rate());

    if !stats.failures.is_empty() {
        println!("\n{}", "Failed Tests:".red().bold());
        for failure in &stats.failures {
            println!("   - {}: {}", failure.name, failure.details);
        }
    }
}
