//! CLI entry point for the `constlit` tool.
//!
//! Prints the double and float encodings of each real literal given on the
//! command line.

use std::io::{self, Write};
use std::process::ExitCode;

use constlit::real::{RealParseStatus, diagnostic_message, validate_real_literal};
use constlit::{try_parse_double, try_parse_float};

fn describe(out: &mut impl Write, literal: &str) -> io::Result<bool> {
    if let Err(errors) = validate_real_literal(literal) {
        for error in &errors {
            let message = diagnostic_message(error);
            log::warn!("{literal}: {message}");
            writeln!(out, "{literal}: error: {message}")?;
        }
        return Ok(false);
    }

    let double = try_parse_double(literal);
    let float = try_parse_float(literal);
    writeln!(
        out,
        "{literal}: double {:#018x} ({}){} float {:#010x} ({}){}",
        double.value.to_bits(),
        double.value,
        overflow_marker(double.status),
        float.value.to_bits(),
        float.value,
        overflow_marker(float.status),
    )?;
    Ok(true)
}

const fn overflow_marker(status: RealParseStatus) -> &'static str {
    match status {
        RealParseStatus::Overflow => " overflow",
        RealParseStatus::Underflow => " underflow",
        RealParseStatus::Ok | RealParseStatus::NoDigits => "",
    }
}

fn main() -> ExitCode {
    let literals: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if literals.is_empty() {
        let _ = writeln!(out, "usage: constlit <literal>...");
        return ExitCode::FAILURE;
    }

    let mut all_valid = true;
    for literal in &literals {
        match describe(&mut out, literal) {
            Ok(valid) => all_valid &= valid,
            Err(e) => {
                log::warn!("failed to write output: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
