//! ログ初期化
//!
//! RUST_LOG が設定されていればそれを優先し、なければ info（--verbose で debug）。

use tracing_subscriber::EnvFilter;

/// 既定のフィルタ
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// stderr へ出力する subscriber を設定する。二重初期化は無視
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
