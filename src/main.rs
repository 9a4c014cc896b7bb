use clap::Parser;
use megasena::app::render::{format_numbers, render_games, render_reports};
use megasena::utils::error::{ErrorSeverity, LotteryError};
use megasena::utils::logger;
use megasena::{CliConfig, Command, JsonFileStore, LotteryEngine, Settings, ValidationOutcome};

fn main() {
    let config = CliConfig::parse();

    // 設定檔錯誤時日誌還沒初始化，直接印到 stderr
    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = run(config.command, &settings) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }
}

fn run(command: Command, settings: &Settings) -> megasena::Result<()> {
    let engine = LotteryEngine::new(JsonFileStore::new(&settings.store_path));

    match command {
        Command::Add { numbers } => {
            let game = engine.add_game(numbers)?;
            println!("Jogo adicionado: {}", format_numbers(game.numbers()));
        }
        Command::Validate { numbers } => match engine.validate_result(numbers)? {
            ValidationOutcome::NoGames => {
                println!("Nenhum jogo salvo para validar.");
            }
            ValidationOutcome::Scored { result, reports } => {
                print!("{}", render_reports(&result, &reports, settings.format)?);
            }
        },
        Command::List => {
            let games = engine.list_games()?;
            if games.is_empty() {
                println!("Nenhum jogo salvo.");
            } else {
                print!("{}", render_games(&games, settings.format)?);
            }
        }
    }

    Ok(())
}

// 根據錯誤嚴重程度決定退出碼 (2 保留給 clap 的參數錯誤)
fn exit_code(e: &LotteryError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium | ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
