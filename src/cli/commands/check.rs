use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::emit_findings;
use crate::models::TimeSpan;
use crate::models::finding::has_blocking;
use crate::utils::time::{parse_datetime_arg, parse_optional_datetime};

/// Check a single shift. Returns whether a BLOCK finding must fail the run.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<bool> {
    if let Commands::Check {
        start,
        end,
        break_minutes,
        prev_start,
        prev_end,
        format,
        lenient,
        fail_on_block,
    } = cmd
    {
        //
        // 1. Parse spans
        //
        let span = TimeSpan::new(parse_datetime_arg(start)?, parse_datetime_arg(end)?);

        let previous = match (
            parse_optional_datetime(prev_start.as_ref())?,
            parse_optional_datetime(prev_end.as_ref())?,
        ) {
            (Some(s), Some(e)) => Some(TimeSpan::new(s, e)),
            _ => None,
        };

        //
        // 2. Evaluate
        //
        let checker = cfg.checker()?;
        let findings = if cfg.strict_input && !*lenient {
            checker.evaluate_checked(&span, *break_minutes, previous.as_ref())?
        } else {
            checker.evaluate(&span, *break_minutes, previous.as_ref())
        };

        //
        // 3. Report
        //
        emit_findings(format.unwrap_or(cfg.output), &span, *break_minutes, &findings)?;

        return Ok(*fail_on_block && has_blocking(&findings));
    }

    Ok(false)
}
