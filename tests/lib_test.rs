//! Library integration tests.

use hostaudit::AuditError;

#[test]
fn error_types_are_public() {
    let err = AuditError::ExecutableNotRunning {
        component: "kubelet".into(),
    };
    assert!(err.to_string().contains("kubelet"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> hostaudit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use hostaudit::cli::{Cli, Commands};

    let cli = Cli::parse_from(["hostaudit", "resolve", "--json"]);

    if let Some(Commands::Resolve(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Resolve command");
    }
}

#[test]
fn expected_version_parses_from_str() {
    let expected: hostaudit::version::ExpectedVersion = "1.21".parse().unwrap();
    assert_eq!(expected.to_string(), "1.21");

    let err = "v1.21".parse::<hostaudit::version::ExpectedVersion>().unwrap_err();
    assert!(matches!(err, AuditError::InvalidVersion { .. }));
}
