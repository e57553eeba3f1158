use clap::Parser;
use photo_annotator::{analyzer, cli, config, error, export, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use photo_annotator_common::{MimePolicy, NamePreviews, PreviewFactory};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Annotate { folder, output, format, delay_ms, verify_signature, recursive } => {
            eprintln!("📸 photo-annotator - 模擬解析\n");

            let mut settings = config.analysis;
            if let Some(delay_ms) = delay_ms {
                settings.delay_ms = delay_ms;
            }
            if verify_signature {
                settings.mime_policy = MimePolicy::Verify;
            }

            // 1. スキャン
            eprintln!("[1/3] 写真をスキャン中...");
            let files = scanner::scan_folder(&folder, recursive)?;
            eprintln!("✔ {}ファイルを検出\n", files.len());

            // 2. 模擬解析（Ctrl-Cでリセット）
            eprintln!("[2/3] 解析中...");
            let previews: Box<dyn PreviewFactory> = if format.wants_html() {
                Box::new(analyzer::DataUrlPreviews)
            } else {
                Box::new(NamePreviews)
            };
            let cancel = async {
                if tokio::signal::ctrl_c().await.is_err() {
                    // シグナルが取れない環境では中断しない
                    std::future::pending::<()>().await;
                }
            };
            let run = analyzer::run_annotation(
                files,
                &folder.display().to_string(),
                &settings,
                previews.as_ref(),
                cancel,
                cli.verbose,
            )
            .await?;

            if let Some(notice) = run.report.notice() {
                eprintln!("⚠ {}", notice);
            }
            eprintln!("✔ {}枚の解析完了\n", run.results.len());

            // 3. 出力
            eprintln!("[3/3] 結果を出力中...");
            let written = export::export_results(&run.results, format, output.as_deref(), &folder)?;
            for path in written {
                eprintln!("✔ 出力: {}", path.display());
            }

            eprintln!("\n✅ 完了");
        }

        Commands::Config { show, set_delay_ms, set_mime_policy } => {
            let mut config = config;
            let changed = set_delay_ms.is_some() || set_mime_policy.is_some();

            if let Some(delay_ms) = set_delay_ms {
                config.set_delay_ms(delay_ms);
            }
            if let Some(policy) = set_mime_policy {
                config.set_mime_policy(policy);
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  待ち時間: {}ms", config.analysis.delay_ms);
                println!("  MIME判定: {}", config.analysis.mime_policy);
                println!("  パス: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
