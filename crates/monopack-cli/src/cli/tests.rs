#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_global;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_global_valid_identifiers() {
        assert_eq!(parse_global("deck"), Ok("deck".to_string()));
        assert_eq!(parse_global("_private"), Ok("_private".to_string()));
        assert_eq!(parse_global("$luma2"), Ok("$luma2".to_string()));
    }

    #[test]
    fn test_parse_global_invalid() {
        assert!(parse_global("123lib").is_err());
        assert!(parse_global("deck.gl").is_err());
        assert!(parse_global("my-lib").is_err());
        assert_eq!(
            parse_global("").unwrap_err(),
            "Global name cannot be empty"
        );
    }

    #[test]
    fn test_print_defaults() {
        let cli = Cli::try_parse_from(["monopack", "print"]).unwrap();
        match cli.command {
            Command::Print(args) => {
                assert!(!args.dev);
                assert!(args.source.root.is_none());
                assert!(args.source.alias_dir.is_none());
                assert!(args.library.is_none());
                assert!(args.out.is_none());
                assert!(!args.compact);
            }
            _ => panic!("expected print command"),
        }
    }

    #[test]
    fn test_print_with_flags() {
        let cli = Cli::try_parse_from([
            "monopack",
            "--verbose",
            "print",
            "--dev",
            "--root",
            "modules/geo-layers",
            "--alias-dir",
            "modules",
            "--library",
            "deck",
            "--out",
            "webpack.json",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Command::Print(args) => {
                assert!(args.dev);
                assert_eq!(args.source.root, Some(PathBuf::from("modules/geo-layers")));
                assert_eq!(args.source.alias_dir, Some(PathBuf::from("modules")));
                assert_eq!(args.library.as_deref(), Some("deck"));
                assert_eq!(args.out, Some(PathBuf::from("webpack.json")));
            }
            _ => panic!("expected print command"),
        }
    }

    #[test]
    fn test_invalid_library_rejected() {
        let result = Cli::try_parse_from(["monopack", "print", "--library", "deck-gl"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["monopack", "-v", "-q", "aliases"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dev_takes_no_value() {
        let result = Cli::try_parse_from(["monopack", "print", "--dev=yes"]);
        assert!(result.is_err());
    }
}
