use crate::core::scoring::combinations_evaluated;
use crate::domain::model::{DrawResult, Game, GameReport, Number};
use crate::utils::error::{LotteryError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

const REPORT_HEADER: [&str; 7] = [
    "#",
    "Números Jogados",
    "Senas",
    "Quinas",
    "Quadras",
    "Acertos",
    "Números Acertados",
];

const GAMES_HEADER: [&str; 3] = ["#", "Números Jogados", "Combinações"];

/// `[1 2 3]`
pub fn format_numbers(numbers: &[Number]) -> String {
    let joined: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    format!("[{}]", joined.join(" "))
}

fn report_row(report: &GameReport) -> Vec<String> {
    vec![
        report.index.to_string(),
        format_numbers(&report.numbers),
        report.score.senas.to_string(),
        report.score.quinas.to_string(),
        report.score.quadras.to_string(),
        report.score.best_matches.to_string(),
        format_numbers(&report.score.matched_numbers),
    ]
}

fn game_row(index: usize, game: &Game) -> Vec<String> {
    vec![
        index.to_string(),
        format_numbers(game.numbers()),
        combinations_evaluated(game).to_string(),
    ]
}

pub fn render_reports(
    result: &DrawResult,
    reports: &[GameReport],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = reports.iter().map(report_row).collect();
            Ok(format!(
                "Resultado: {}\n{}",
                format_numbers(result.numbers()),
                render_table(&REPORT_HEADER, &rows)
            ))
        }
        OutputFormat::Csv => {
            let rows: Vec<Vec<String>> = reports.iter().map(report_row).collect();
            render_csv(&REPORT_HEADER, &rows)
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct JsonReport<'a> {
                result: &'a DrawResult,
                games: &'a [GameReport],
            }

            to_json(&JsonReport {
                result,
                games: reports,
            })
        }
    }
}

pub fn render_games(games: &[Game], format: OutputFormat) -> Result<String> {
    let rows: Vec<Vec<String>> = games
        .iter()
        .enumerate()
        .map(|(i, game)| game_row(i + 1, game))
        .collect();

    match format {
        OutputFormat::Table => Ok(render_table(&GAMES_HEADER, &rows)),
        OutputFormat::Csv => render_csv(&GAMES_HEADER, &rows),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct JsonGame<'a> {
                index: usize,
                numbers: &'a [Number],
                combinations: u64,
            }

            let entries: Vec<JsonGame> = games
                .iter()
                .enumerate()
                .map(|(i, game)| JsonGame {
                    index: i + 1,
                    numbers: game.numbers(),
                    combinations: combinations_evaluated(game),
                })
                .collect();
            to_json(&entries)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| LotteryError::RenderError {
            message: format!("JSON serialization failed: {}", e),
        })
}

fn render_csv(header: &[&str], rows: &[Vec<String>]) -> Result<String> {
    let to_render_error = |e: csv::Error| LotteryError::RenderError {
        message: format!("CSV writing failed: {}", e),
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header).map_err(to_render_error)?;
    for row in rows {
        writer.write_record(row).map_err(to_render_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| LotteryError::RenderError {
        message: format!("CSV flush failed: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| LotteryError::RenderError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

// 寬度以字元數計算 ("Números" 含非 ASCII 字元)
fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = {
        let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+", segments.join("+"))
    };

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!(" {:<width$} ", cell, width = *width))
            .collect();
        format!("|{}|", padded.join("|"))
    };

    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(border.clone());
    out.push(line(header.to_vec()));
    out.push(border.clone());
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.push(border);

    out.join("\n") + "\n"
}
