use std::{fmt::Display, path::PathBuf};

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    ConfigPath(PathBuf),
    Version,
    Help,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("missing arg to --config")]
    MissingConfigPath,
    #[error("unknown argument '{0}'")]
    Unknown(String),
}

/// Parse command-line arguments, `args[0]` being the program name.
pub fn parse_args(args: &[String]) -> Result<Vec<Arg>, ArgError> {
    let mut res = Vec::new();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--version" => res.push(Arg::Version),
            "-h" | "--help" => res.push(Arg::Help),
            "--config" => {
                let path = iter.next().ok_or(ArgError::MissingConfigPath)?;
                res.push(Arg::ConfigPath(PathBuf::from(path)));
            }
            _ => return Err(ArgError::Unknown(arg.clone())),
        }
    }
    Ok(res)
}

pub fn usage(app_name: &str, version: impl Display) -> String {
    format!(
        r#"
{app_name} {version}

Usage: {app_name} [OPTIONS]

Options:
    --config <PATH>     Path of the configuration file
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
    )
}
