use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::batch::BatchLogic;
use crate::errors::AppResult;
use crate::export::emit_reports;
use std::path::Path;

/// Check every shift of a batch file. Returns whether a BLOCK finding must
/// fail the run.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<bool> {
    if let Commands::Batch {
        file,
        format,
        lenient,
        fail_on_block,
    } = cmd
    {
        let records = BatchLogic::load_records(Path::new(file))?;

        let strict = cfg.strict_input && !*lenient;
        let reports = BatchLogic::evaluate_records(&cfg.checker()?, &records, strict)?;

        emit_reports(format.unwrap_or(cfg.output), &reports)?;

        let blocked = reports
            .iter()
            .any(|r| r.findings.iter().any(|f| f.is_blocking()));
        return Ok(*fail_on_block && blocked);
    }

    Ok(false)
}
