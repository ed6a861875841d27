use std::path::Path;
use std::process;

use crate::commands::check::report_check_error;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_tokens(file: &Path, output: OutputFormat, quiet: bool) {
    let tokens = match robocheck_core::load_tokens(file) {
        Ok(t) => t,
        Err(e) => {
            report_check_error(&e, output, quiet);
            process::exit(1);
        }
    };
    if quiet {
        return;
    }

    match output {
        OutputFormat::Json => match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                report_error(&format!("serialization error: {}", e), output, quiet);
                process::exit(1);
            }
        },
        OutputFormat::Text => {
            for token in &tokens {
                println!("{}\t{}", token.line, token.text);
            }
        }
    }
}
