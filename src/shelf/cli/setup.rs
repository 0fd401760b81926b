use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(
    about = "Apply a file of catalog commands and write the results",
    long_about = None
)]
pub struct Cli {
    /// Tab-separated command file to read
    pub input: PathBuf,

    /// File to write results to (created or truncated)
    pub output: PathBuf,

    /// JSON config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log dispatched commands to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse process arguments.
///
/// Help and version requests print and exit 0. Any other parse failure prints
/// the problem plus usage to stderr and exits 1.
pub fn parse_args() -> Cli {
    match try_parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprint!("{}", e);
                std::process::exit(1);
            }
        },
    }
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_positionals() {
        let cli = try_parse_from(["shelf", "in.txt", "out.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_options() {
        let cli = try_parse_from(["shelf", "-v", "--config", "shelf.json", "in", "out"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("shelf.json")));
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert!(try_parse_from(["shelf"]).is_err());
        assert!(try_parse_from(["shelf", "in"]).is_err());
        assert!(try_parse_from(["shelf", "in", "out", "extra"]).is_err());
    }
}
