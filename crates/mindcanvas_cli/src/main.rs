//! `mindcanvas` command-line entry point.
//!
//! # Responsibility
//! - Parse flags and route subcommands to `mindcanvas_core` services.
//! - Write SVG/JSON artifacts to stdout or a file.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use mindcanvas_core::insight::recommend::REFLECTION_PROMPTS;
use mindcanvas_core::insight::summary::TOP_ACTIVITIES_DEFAULT;
use mindcanvas_core::model::entry::{ACTIVITY_OPTIONS, WEATHER_OPTIONS};
use mindcanvas_core::{
    open_db, parse_date, render, Emotion, GalleryRange, JournalEntry, JournalService,
    LoggingConfig, RenderRequest, SqliteEntryRepository, ANALYTICS_MIN_ENTRIES,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "mindcanvas", version, about = "Emotion journal with generative art")]
struct Cli {
    /// SQLite journal file.
    #[arg(long, global = true, env = "MINDCANVAS_DB", default_value = "mindcanvas.db")]
    db: PathBuf,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "MINDCANVAS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for rolling log files; logging is off when unset.
    #[arg(long, global = true, env = "MINDCANVAS_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core health and version.
    Ping,
    /// List emotions, weather and activity choices.
    Catalog,
    /// Save or overwrite the entry for a date.
    Save(SaveArgs),
    /// Delete the entry for a date.
    Delete {
        #[arg(long)]
        date: String,
    },
    /// Render an artwork as SVG.
    Render(RenderArgs),
    /// Render the mood chart as SVG.
    Chart {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print summary statistics and recommendations.
    Insights {
        /// Gallery range: 7, 14, 30 or all.
        #[arg(long, default_value = "7")]
        range: String,
    },
    /// Export the journal as JSON.
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Merge a JSON document into the journal.
    Import { file: PathBuf },
}

#[derive(Debug, Args)]
struct SaveArgs {
    /// YYYY-MM-DD; defaults to today.
    #[arg(long)]
    date: Option<String>,
    /// Emotion name or label, e.g. `Joyful`.
    #[arg(long)]
    emotion: String,
    #[arg(long)]
    intensity: u8,
    #[arg(long, default_value = "")]
    note: String,
    #[arg(long)]
    weather: Option<String>,
    /// Repeat for up to three activities.
    #[arg(long = "activity")]
    activities: Vec<String>,
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Stored entry date, or the label for an ad hoc render.
    #[arg(long)]
    date: Option<String>,
    /// Ad hoc emotion; skips the journal lookup.
    #[arg(long)]
    emotion: Option<String>,
    #[arg(long, default_value_t = 5)]
    intensity: u8,
    /// Overrides the seed derived from date and emotion.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    thumbnail: bool,
    /// Ad hoc only.
    #[arg(long)]
    note: Option<String>,
    /// Ad hoc only.
    #[arg(long)]
    weather: Option<String>,
    /// Ad hoc only; repeat for up to three activities.
    #[arg(long = "activity")]
    activities: Vec<String>,
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;

    if let Command::Ping = cli.command {
        println!("mindcanvas_core ping={}", mindcanvas_core::ping());
        println!("mindcanvas_core version={}", mindcanvas_core::core_version());
        return Ok(());
    }
    if let Command::Catalog = cli.command {
        print_catalog();
        return Ok(());
    }
    if let Command::Render(args) = &cli.command {
        if let Some(emotion) = &args.emotion {
            return render_ad_hoc(emotion, args);
        }
    }

    let mut conn = open_db(&cli.db)
        .with_context(|| format!("failed to open journal `{}`", cli.db.display()))?;
    let repo = SqliteEntryRepository::try_new(&mut conn)?;
    let mut service = JournalService::new(repo);

    match cli.command {
        Command::Ping | Command::Catalog => {}
        Command::Save(args) => {
            let date = match args.date.as_deref() {
                Some(value) => parse_cli_date(value)?,
                None => Local::now().date_naive(),
            };
            let emotion = Emotion::from_label(&args.emotion)
                .ok_or_else(|| anyhow!("unknown emotion `{}`", args.emotion))?;
            let mut entry = JournalEntry::new(date, emotion, args.intensity)
                .with_note(args.note)
                .with_activities(args.activities);
            if let Some(weather) = args.weather {
                entry = entry.with_weather(weather);
            }
            let saved = service.save_entry(entry)?;
            println!("saved {} {}", saved.date_label(), saved.emotion);
        }
        Command::Delete { date } => {
            let date = parse_cli_date(&date)?;
            service.delete_entry(date)?;
            println!("deleted {date}");
        }
        Command::Render(args) => {
            let date = args
                .date
                .as_deref()
                .ok_or_else(|| anyhow!("render needs --date or --emotion"))?;
            if args.note.is_some() || args.weather.is_some() || !args.activities.is_empty() {
                bail!("--note, --weather and --activity need --emotion; stored entries keep their own");
            }
            let date = parse_cli_date(date)?;
            let mut request = service.render_request(date, args.thumbnail)?;
            if let Some(seed) = args.seed {
                request = request.with_seed(seed);
            }
            emit(&render(&request).to_svg(), args.out.as_deref())?;
        }
        Command::Chart { out } => match service.mood_chart()? {
            Some(chart) => emit(&chart.to_svg(), out.as_deref())?,
            None => bail!("journal is empty; nothing to chart"),
        },
        Command::Insights { range } => {
            let range = GalleryRange::parse(&range)
                .ok_or_else(|| anyhow!("unsupported range `{range}`; expected 7|14|30|all"))?;
            print_insights(&service, range)?;
        }
        Command::Export { out } => {
            emit(&service.export_json()?, out.as_deref())?;
        }
        Command::Import { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read `{}`", file.display()))?;
            let written = service.import_json(&text)?;
            println!("imported {written} entries");
        }
    }
    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let Some(dir) = &cli.log_dir else {
        return Ok(());
    };
    let dir = if dir.is_absolute() {
        dir.clone()
    } else {
        std::env::current_dir()?.join(dir)
    };
    LoggingConfig::new(cli.log_level.as_deref(), dir.to_string_lossy())
        .init()
        .map_err(|err| anyhow!(err))
}

fn render_ad_hoc(emotion: &str, args: &RenderArgs) -> Result<()> {
    let date_label = args
        .date
        .clone()
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
    let mut request = RenderRequest::new(emotion, date_label, args.intensity)
        .with_note(args.note.clone().unwrap_or_default())
        .with_activities(args.activities.iter().cloned());
    if let Some(weather) = &args.weather {
        request = request.with_weather(weather.as_str());
    }
    if let Some(seed) = args.seed {
        request = request.with_seed(seed);
    }
    emit(&render(&request).to_svg(), args.out.as_deref())
}

fn print_insights(
    service: &JournalService<SqliteEntryRepository<'_>>,
    range: GalleryRange,
) -> Result<()> {
    let Some(summary) = service.analytics()? else {
        println!("analytics unlock after {ANALYTICS_MIN_ENTRIES} entries");
        return Ok(());
    };

    println!("entries: {}", summary.total);
    if let Some(emotion) = summary.most_common {
        println!("most common: {emotion} ({}x)", summary.count);
    }
    println!("average intensity: {:.1}/10", summary.avg_intensity);
    println!("positivity: {:.1}%", summary.positivity);
    println!("trend: {}", summary.trend.label());

    println!("\ndistribution:");
    for share in service.emotion_distribution()? {
        println!("  {} {} ({:.1}%)", share.emotion, share.count, share.percentage);
    }

    let activities = service.top_activities(TOP_ACTIVITIES_DEFAULT)?;
    if !activities.is_empty() {
        println!("\ntop activities:");
        for (activity, count) in activities {
            println!("  {activity}: {count}");
        }
    }

    if let Some(recommendation) = service.recommendation()? {
        println!("\n{}", recommendation.headline());
        for line in recommendation.suggestions() {
            println!("  - {line}");
        }
        println!("\nreflection prompts:");
        for prompt in REFLECTION_PROMPTS {
            println!("  {prompt}");
        }
    }

    let today = Local::now().date_naive();
    let gallery = service.gallery_dates(today, range)?;
    println!("\ngallery ({} days): {} entries", range.days(), gallery.len());
    Ok(())
}

fn print_catalog() {
    println!("emotions:");
    for emotion in Emotion::ALL {
        println!("  {} {}", emotion.emoji(), emotion.name());
    }
    println!("\nweather:");
    for weather in WEATHER_OPTIONS {
        println!("  {weather}");
    }
    println!("\nactivities:");
    for activity in ACTIVITY_OPTIONS {
        println!("  {activity}");
    }
}

fn parse_cli_date(value: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| anyhow!("invalid date `{value}`; expected YYYY-MM-DD"))
}

fn emit(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write `{}`", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
