use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use llparse_calc::Calculator;
use llparse_lib::ParseLimits;

/// Where the expression comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSpec {
    Text(String),
    File(PathBuf),
    Missing,
}

impl InputSpec {
    pub fn new(expr: Option<String>, file: Option<PathBuf>) -> Self {
        match (expr, file) {
            (Some(text), _) => InputSpec::Text(text),
            (None, Some(path)) => InputSpec::File(path),
            (None, None) => InputSpec::Missing,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("no expression given (pass EXPR or --file)")]
    Missing,
}

/// Loaded expression text and the name to show in diagnostics.
pub struct Input {
    pub text: String,
    pub path: Option<String>,
}

pub fn load_input(spec: &InputSpec) -> Result<Input, InputError> {
    match spec {
        InputSpec::Text(text) => Ok(Input {
            text: text.clone(),
            path: None,
        }),
        InputSpec::File(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| InputError::Read {
                    path: "<stdin>".to_owned(),
                    source,
                })?;
            Ok(Input {
                text,
                path: Some("<stdin>".to_owned()),
            })
        }
        InputSpec::File(path) => {
            let display = path.display().to_string();
            let text = fs::read_to_string(path).map_err(|source| InputError::Read {
                path: display.clone(),
                source,
            })?;
            Ok(Input {
                text,
                path: Some(display),
            })
        }
        InputSpec::Missing => Err(InputError::Missing),
    }
}

/// Loads the input or exits with status 1.
pub fn require_input(spec: &InputSpec) -> Input {
    load_input(spec).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

/// Builds the arithmetic grammar with the given fuel or exits with status 2.
pub fn calculator(fuel: u32) -> Calculator {
    match Calculator::new() {
        Ok(calc) => calc.with_limits(ParseLimits::new().exec_fuel(fuel)),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}

/// Reports a failed parse or evaluation and exits.
///
/// Input mismatches are rendered against the source and exit with status 1;
/// everything else exits with status 2.
pub fn exit_with(err: &llparse_calc::Error, input: &Input, color: bool) -> ! {
    if let Some(parse) = err.parse_error() {
        let mut printer = parse.printer().source(&input.text).colored(color);
        if let Some(path) = &input.path {
            printer = printer.path(path);
        }
        eprintln!("{}", printer.render());
        std::process::exit(1);
    }

    eprintln!("error: {}", err);
    std::process::exit(2);
}
