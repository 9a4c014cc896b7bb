pub mod cli;
pub mod toml_config;

use crate::app::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use cli::DEFAULT_STORE_FILE;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::model::Number;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "megasena")]
#[command(about = "Gerencie jogos e resultados da Mega-Sena", version)]
pub struct CliConfig {
    /// Path of the JSON game store (default: jogos.json)
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Adiciona um jogo (6 a 15 números) à lista
    #[command(visible_alias = "adicionar")]
    Add {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<Number>,
    },
    /// Valida o resultado de um sorteio (6 números) contra os jogos salvos
    #[command(visible_alias = "validar")]
    Validate {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<Number>,
    },
    /// Lista os jogos salvos
    #[command(visible_alias = "listar")]
    List,
}

/// 合併後的執行設定: CLI 參數 > TOML > 預設值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub store_path: String,
    pub format: OutputFormat,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Settings {
    pub fn resolve(
        store: Option<&str>,
        format: Option<OutputFormat>,
        verbose: bool,
        json_logs: bool,
        file: Option<&TomlConfig>,
    ) -> Self {
        let store_path = store
            .or_else(|| file.and_then(|f| f.store_path()))
            .unwrap_or(DEFAULT_STORE_FILE)
            .to_string();
        let format = format
            .or_else(|| file.and_then(|f| f.output_format()))
            .unwrap_or_default();
        // 旗標只能打開，不能用 CLI 關掉設定檔裡的 true
        let verbose = verbose || file.and_then(|f| f.verbose()).unwrap_or(false);
        let json_logs = json_logs || file.and_then(|f| f.json_logs()).unwrap_or(false);

        Self {
            store_path,
            format,
            verbose,
            json_logs,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("store", &self.store_path)
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 讀取 --config 指定的 TOML (若有) 並合併成 Settings
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let settings = Settings::resolve(
            self.store.as_deref(),
            self.format,
            self.verbose,
            self.log_json,
            file.as_ref(),
        );
        settings.validate()?;
        Ok(settings)
    }
}
