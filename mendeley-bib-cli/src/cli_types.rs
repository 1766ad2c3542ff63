//! CLI type definitions: the argument struct.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mendeley-bib")]
#[command(version)]
#[command(about = "Convert a Mendeley Desktop SQLite library to BibTeX", long_about = None)]
pub(crate) struct Cli {
    /// Mendeley SQLite library (make a copy first, e.g. of
    /// ~/.local/share/data/Mendeley Ltd./Mendeley Desktop/<you>@www.mendeley.com.sqlite)
    pub database: PathBuf,

    /// BibTeX file to write (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only show errors (suppress warnings about unhandled entry types)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Put titles in title case (keeps inner capitals such as MoS2)
    #[arg(long)]
    pub capitalize_titles: bool,

    /// Settings file (defaults to ~/.config/mendeley-bib/settings.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn database_is_required() {
        let err = Cli::try_parse_from(["mendeley-bib"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn defaults_to_stdout() {
        let cli = Cli::try_parse_from(["mendeley-bib", "lib.sqlite"]).unwrap();
        assert_eq!(cli.database, PathBuf::from("lib.sqlite"));
        assert!(cli.output.is_none());
        assert!(!cli.quiet);
        assert!(!cli.capitalize_titles);
    }

    #[test]
    fn output_and_quiet_flags() {
        let cli =
            Cli::try_parse_from(["mendeley-bib", "-q", "-o", "out.bib", "lib.sqlite"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.bib")));
        assert!(cli.quiet);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["mendeley-bib", "-q", "-v", "lib.sqlite"]).is_err());
    }

    #[test]
    fn version_flag_is_handled_by_clap() {
        let err = Cli::try_parse_from(["mendeley-bib", "--version"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
