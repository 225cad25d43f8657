use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const ENV_VARS: [&str; 8] = [
    "RUST_LOG",
    "DNUT_LOG_CONFIG",
    "DNUT_LOG_CONFIG_FILE",
    "DNUT_LOG_LEVEL",
    "DNUT_LOG_COLOR",
    "DNUT_LOG_TIMESTAMP",
    "DNUT_LOG_TIMESTAMP_FORMAT",
    "DNUT_LOG_OUTPUT",
];

fn run(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dnut-logger"));
    for var in ENV_VARS {
        command.env_remove(var);
    }
    command
        .args(["--no-color", "--no-timestamp"])
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_info_exits_cleanly() {
    let output = run(&["--severity", "info", "X"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "INF  X\n");
}

#[test]
fn test_fatal_writes_line_then_exits_with_one() {
    let output = run(&["--severity", "fatal", "cannot", "continue"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "FTL  cannot continue\n"
    );
}

#[test]
fn test_error_exit_flag() {
    let output = run(&["--severity", "err", "--exit", "bad", "input"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ERR  bad input\n");

    let output = run(&["--severity", "err", "recoverable"]);
    assert!(output.status.success());
}

#[test]
fn test_gated_message_prints_nothing() {
    let output = run(&["--level", "error", "--severity", "warning", "quiet"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_file_output_with_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fatal.log");

    let output = run(&[
        "--output",
        path.to_str().unwrap(),
        "--severity",
        "fatal",
        "disk",
        "gone",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "FTL  disk gone\n");
}

#[test]
fn test_env_level_is_applied() {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dnut-logger"));
    for var in ENV_VARS {
        command.env_remove(var);
    }
    let output = command
        .env("DNUT_LOG_LEVEL", "debug")
        .env("DNUT_LOG_COLOR", "false")
        .env("DNUT_LOG_TIMESTAMP", "false")
        .args(["--severity", "dbg", "tick"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "DBG  tick\n");
}

#[test]
fn test_colored_output() {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dnut-logger"));
    for var in ENV_VARS {
        command.env_remove(var);
    }
    let output = command
        .args(["--no-timestamp", "--severity", "success", "done"])
        .output()
        .unwrap();

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\x1b[0;92mSUC \x1b[0m done\n"
    );
}

#[test]
fn test_config_loading_is_traced_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logger.toml");
    fs::write(&path, "level = \"debug\"\n").unwrap();

    let mut command = Command::new(env!("CARGO_BIN_EXE_dnut-logger"));
    for var in ENV_VARS {
        command.env_remove(var);
    }
    let output = command
        .env("RUST_LOG", "dnut_logger=info")
        .args(["--config", path.to_str().unwrap()])
        .args(["--no-color", "--no-timestamp", "--severity", "debug", "ready"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("loading logger configuration from"));
    assert!(lines[0].contains("logger.toml"));
    assert_eq!(lines[1], "DBG  ready");
}

#[test]
fn test_tracing_is_quiet_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logger.toml");
    fs::write(&path, "level = \"info\"\n").unwrap();

    let output = run(&["--config", path.to_str().unwrap(), "X"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "INF  X\n");
}
