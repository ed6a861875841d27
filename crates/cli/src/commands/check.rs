use std::path::Path;
use std::process;

use robocheck_core::CheckError;

use crate::OutputFormat;

pub(crate) fn cmd_check(file: &Path, output: OutputFormat, quiet: bool) {
    match robocheck_core::check_file(file) {
        Ok(summary) => {
            tracing::info!(file = %file.display(), tokens = summary.tokens, "syntax correct");
            if quiet {
                return;
            }
            match output {
                OutputFormat::Json => {
                    let json = serde_json::json!({
                        "status": "ok",
                        "file": file.display().to_string(),
                        "summary": summary,
                    });
                    let pretty = serde_json::to_string_pretty(&json)
                        .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
                    println!("{}", pretty);
                }
                OutputFormat::Text => println!("syntax correct"),
            }
        }
        Err(e) => {
            report_check_error(&e, output, quiet);
            process::exit(1);
        }
    }
}

/// Print a check failure to stderr as a single message (text) or object (json).
pub(crate) fn report_check_error(e: &CheckError, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => {
            let err_json = serde_json::to_string_pretty(&e.to_json_value())
                .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", e));
            eprintln!("{}", err_json);
        }
        OutputFormat::Text => eprintln!("error: {}", e),
    }
}
