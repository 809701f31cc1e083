use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "book-renamer",
    about = "Interactively rename books and papers to '<year> — <title> – <subtitle> (<author>)'",
    version = "0.1.0"
)]
pub struct Args {
    /// Directory holding the files to rename
    #[arg(
        value_name = "PATH",
        env = "BOOK_RENAMER_DIR",
        default_value = ".",
        help = "Directory to process (defaults to $BOOK_RENAMER_DIR, then the current directory)"
    )]
    pub path: PathBuf,

    /// Review an existing library instead of the inbox
    #[arg(
        long,
        help = "Walk the directory tree and offer a canonical name for every non-normalized file"
    )]
    pub library: bool,

    /// Only show what would be done, don't make changes
    #[arg(long, short = 'd', help = "Perform dry run: show renames without applying them")]
    pub dry_run: bool,

    /// Output the library plan in JSON format
    #[arg(
        long,
        requires = "dry_run",
        help = "With --library --dry-run, print the rename plan as JSON"
    )]
    pub json: bool,

    /// Maximum recursion depth for --library (default: unlimited)
    #[arg(
        long,
        value_name = "DEPTH",
        default_value = "18446744073709551615",
        help = "Maximum directory depth to traverse in library mode (default: unlimited)"
    )]
    pub max_depth: usize,

    /// Custom file extensions to process
    #[arg(
        long,
        value_name = "EXT1,EXT2",
        help = "Comma-separated extensions to process (default: pdf,epub)"
    )]
    pub extensions: Option<String>,

    /// Verbose output
    #[arg(long, short = 'v', help = "Enable verbose logging")]
    pub verbose: bool,
}

impl Args {
    pub fn get_extensions(&self) -> Vec<String> {
        if let Some(ref exts) = self.extensions {
            exts.split(',')
                .map(|s| format!(".{}", s.trim().trim_start_matches('.').to_lowercase()))
                .collect()
        } else {
            vec![".pdf".to_string(), ".epub".to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extensions: Option<&str>) -> Args {
        Args {
            path: PathBuf::from("."),
            library: false,
            dry_run: false,
            json: false,
            max_depth: 0,
            extensions: extensions.map(str::to_string),
            verbose: false,
        }
    }

    #[test]
    fn test_default_extensions() {
        let exts = args(None).get_extensions();
        assert_eq!(exts, vec![".pdf".to_string(), ".epub".to_string()]);
    }

    #[test]
    fn test_custom_extensions_with_dots() {
        let exts = args(Some(".PDF, djvu")).get_extensions();
        assert_eq!(exts, vec![".pdf".to_string(), ".djvu".to_string()]);
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from(["book-renamer", "/tmp/books", "--library", "-d", "--json"]).unwrap();
        assert_eq!(args.path, PathBuf::from("/tmp/books"));
        assert!(args.library && args.dry_run && args.json);
        assert_eq!(args.max_depth, usize::MAX);
    }

    #[test]
    fn test_json_requires_dry_run() {
        assert!(Args::try_parse_from(["book-renamer", "--json"]).is_err());
    }
}
