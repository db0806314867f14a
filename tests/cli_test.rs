/// CLI エントリーポイントのテスト
///
/// CLIの構造が正しく定義され、サブコマンドとオプションが
/// 期待通りにパースされることを確認します。
use clap::Parser;

#[cfg(test)]
mod cli_tests {
    use super::*;
    use schemalint::cli::{Cli, Commands, OutputFormat};
    use std::path::PathBuf;

    /// ヘルプ・バージョンフラグ
    #[test]
    fn test_cli_help_and_version() {
        assert!(Cli::try_parse_from(["schemalint", "--help"]).is_err());
        assert!(Cli::try_parse_from(["schemalint", "--version"]).is_err());
    }

    /// サブコマンドなしはエラー
    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["schemalint"]).is_err());
    }

    /// checkサブコマンドの既定値
    #[test]
    fn test_check_defaults() {
        let cli = Cli::try_parse_from(["schemalint", "check"]).unwrap();

        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert_eq!(cli.config, None);

        match cli.command {
            Commands::Check {
                env,
                output,
                schema,
                format,
            } => {
                assert_eq!(env, "development");
                assert_eq!(output, None);
                assert_eq!(schema, None);
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("Expected Check command"),
        }
    }

    /// checkサブコマンドのオプション
    #[test]
    fn test_check_options() {
        let cli = Cli::try_parse_from([
            "schemalint",
            "check",
            "--env",
            "production",
            "--output",
            "lint.json",
            "--schema",
            "academics",
            "--format",
            "json",
            "-vv",
            "--config",
            "ci.yaml",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("ci.yaml")));

        match cli.command {
            Commands::Check {
                env,
                output,
                schema,
                format,
            } => {
                assert_eq!(env, "production");
                assert_eq!(output, Some(PathBuf::from("lint.json")));
                assert_eq!(schema.as_deref(), Some("academics"));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected Check command"),
        }
    }

    /// initサブコマンド
    #[test]
    fn test_init_command_parses() {
        let cli = Cli::try_parse_from(["schemalint", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    /// 未知のフォーマットはエラー
    #[test]
    fn test_invalid_format_rejected() {
        assert!(Cli::try_parse_from(["schemalint", "check", "--format", "yaml"]).is_err());
    }
}
