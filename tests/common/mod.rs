use assert_cmd::Command;
use tempfile::TempDir;

pub fn tracker_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path());
    cmd.env("RUST_LOG", "off");
    cmd.env_remove("EXPENSE_TRACKER_USER");
    cmd.env_remove("TELEGRAM_BOT_TOKEN");
    cmd
}
