pub mod ask;
pub mod cast;
pub mod show;
pub mod stats;
pub mod trigrams;

use bm_oracle::{DivinationInfo, Diviner, EngineKind, EnhancedDetail, OracleConfig};
use colored::Colorize;
use serde::Serialize;

/// Global flags shared by every command.
pub struct Options {
    pub classic: bool,
    pub engine: Option<String>,
    pub seed: Option<u64>,
    pub json: bool,
}

impl Options {
    fn config(&self) -> Result<OracleConfig, String> {
        let mut config = OracleConfig::default();
        if let Some(name) = &self.engine {
            let kind = EngineKind::parse(name)
                .ok_or_else(|| format!("unknown engine '{name}': expected classic or enhanced"))?;
            config = config.with_engine(kind);
        }
        if self.classic {
            config = config.classic();
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

/// Start a divination session from the global flags.
fn open(opts: &Options) -> Result<Diviner, String> {
    let config = opts.config()?;
    tracing::debug!(engine = %config.engine, seed = ?config.seed, "opening session");
    Diviner::new(config).map_err(|e| format!("failed to start session: {e}"))
}

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

/// Print the header line and, for enhanced readings, the full content.
fn print_info(info: &DivinationInfo) {
    let symbol = info
        .detail
        .as_ref()
        .map(|d| format!("{} ", d.symbol))
        .unwrap_or_default();
    let chinese = info
        .detail
        .as_ref()
        .and_then(|d| d.chinese_name.as_deref())
        .map(|c| format!(" ({c})"))
        .unwrap_or_default();
    println!(
        "  {}{} {}{}",
        symbol,
        info.hexagram_number.to_string().bold(),
        info.hexagram_name.bold(),
        chinese.dimmed()
    );
    println!();

    if let Some(detail) = &info.detail {
        print_detail(detail);
    }

    println!("  {}", info.formatted_text);
}

fn print_detail(detail: &EnhancedDetail) {
    if !detail.lines.is_empty() {
        for (i, value) in detail.lines.iter().enumerate().rev() {
            println!("  {}  {}", i + 1, value.glyph());
        }
        println!();
    }

    println!("  {} {}", "judgment:".dimmed(), detail.judgment);
    println!("  {} {}", "image:   ".dimmed(), detail.image);
    println!(
        "  {} {} over {}",
        "trigrams:".dimmed(),
        detail.upper,
        detail.lower
    );

    for passage in &detail.commentary {
        println!("  {} {passage}", "~".dimmed());
    }

    if !detail.line_notes.is_empty() {
        println!();
        for note in &detail.line_notes {
            println!("  {} {note}", "changing".yellow());
        }
    }

    if let Some(t) = &detail.transformed {
        println!("  {} {} {}", "moving toward:".dimmed(), t.number, t.name.bold());
    }
    println!();
}
