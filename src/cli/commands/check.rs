use crate::config::Config;
use crate::core::fixtures::reference_cases;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success};

/// Handle the `check` command: every reference case must match its known answer.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let cases = reference_cases();
    let total = cases.len();
    let mut failed = 0;

    for case in &cases {
        match Core::compute_triple_overlap(&case.attendance, cfg.odd_length) {
            Ok(got) if got == case.expected => {
                success(format!("{}: expected={}, got={}", case.name, case.expected, got));
            }
            Ok(got) => {
                failed += 1;
                error(format!("{}: expected={}, got={}", case.name, case.expected, got));
            }
            Err(e) => {
                failed += 1;
                error(format!("{}: {}", case.name, e));
            }
        }
    }

    if failed > 0 {
        return Err(AppError::CheckFailed { failed, total });
    }

    success(format!("All {total} reference cases passed"));
    Ok(())
}
