//! PASS/FAIL lines and the closing summary.

use crate::{fixture::Fixture, runner::RunResult};

#[derive(Default)]
pub struct Reporter {
    passed: usize,
    failed: usize,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, fixture: &Fixture, result: &RunResult) {
        let tag = format!("[{}/{}]", fixture.service, fixture.id);
        if result.passed() {
            self.passed += 1;
            println!("PASS  {tag} {}", fixture.description);
            return;
        }

        self.failed += 1;
        println!("FAIL  {tag} {}", fixture.description);
        println!(
            "        {} {} (expected {})",
            fixture.request.method, fixture.request.path, result.expected_status
        );
        if let Some(err) = &result.error {
            println!("        error: {err}");
        }
        for mismatch in &result.mismatches {
            println!("        {mismatch}");
        }
    }

    pub fn print_summary(&self) {
        println!();
        println!("────────────────────────────────────────────────────");
        println!("Results: {} passed, {} failed", self.passed, self.failed);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
