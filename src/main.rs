use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use ratatui::buffer::Buffer;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use chartkit::config::{Config, ConfigOverrides};
use chartkit::format::value_interval;
use chartkit::radial::{render_labels, RadialLayout};
use chartkit::{
    closest_data_set_index, decimals, draw_multiline_text, draw_text, minimum_distance, next_up,
    normalized_angle, position, round_to_next_significant, AxisDependency, Canvas, Point,
    SelectionDetail, Size, TextSurface,
};

#[derive(Parser, Debug)]
#[command(name = "chartkit")]
#[command(author, version, about = "Chart rendering helpers: axis label math, hit-testing, radial placement")]
struct Args {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Round a value to its most significant digit
    Round {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Decimal places needed to label a value
    Decimals {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Next representable value above the input
    NextUp {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Normalize an angle into [0, 360)
    Angle {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Point at a distance and angle from a center
    Position {
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        cx: f64,
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        cy: f64,
        #[arg(long)]
        dist: f64,
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
    },
    /// Find the series closest to a value among candidates in a TOML file
    Nearest {
        /// File with [[candidates]] tables (value, data_set_index, axis)
        file: PathBuf,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Only consider candidates on this axis: primary/left or secondary/right
        #[arg(long)]
        axis: Option<AxisDependency>,
        /// Print the minimum distance instead of the series index (requires --axis)
        #[arg(long)]
        distance: bool,
    },
    /// Draw a text label
    Label {
        text: String,
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        x: f64,
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        y: f64,
        /// Wrap the text as a block constrained to this width
        #[arg(long)]
        wrap: Option<f64>,
        /// Write a PPM image instead of printing to the terminal
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
    /// Place formatted values around a circle
    Radial {
        #[arg(value_delimiter = ',', allow_negative_numbers = true, required = true)]
        values: Vec<f64>,
        /// Write a PPM image instead of printing to the terminal
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Write a commented default config file
    Init,
    /// Print the effective config
    Show,
    /// Print the config file path
    Path,
    /// Set a value, e.g. `config set labels.color_scheme fire`
    Set { key: String, value: String },
}

#[derive(Debug, Deserialize)]
struct CandidateFile {
    #[serde(default)]
    candidates: Vec<SelectionDetail>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chartkit=info".parse()?),
        )
        .init();

    let args = Args::parse();
    debug!("Running {:?}", args.command);

    match args.command {
        Command::Round { value } => println!("{}", round_to_next_significant(value)),
        Command::Decimals { value } => println!("{}", decimals(value)),
        Command::NextUp { value } => println!("{}", next_up(value)),
        Command::Angle { degrees } => println!("{}", normalized_angle(degrees)),
        Command::Position { cx, cy, dist, angle } => {
            let p = position(Point::new(cx, cy), dist, angle);
            println!("{} {}", p.x, p.y);
        }
        Command::Nearest {
            file,
            value,
            axis,
            distance,
        } => run_nearest(&file, value, axis, distance)?,
        Command::Label {
            text,
            x,
            y,
            wrap,
            out,
            overrides,
        } => {
            let config = load_config(args.config.as_deref(), &overrides)?;
            let point = Point::new(x, y);
            let align = config.text.alignment;
            let attrs = config.text_attributes();
            render_output(&config, out.as_deref(), |surface, _, _| match wrap {
                Some(width) => draw_multiline_text(
                    surface,
                    &text,
                    point,
                    align,
                    &attrs,
                    Size::new(width, f64::INFINITY),
                ),
                None => draw_text(surface, &text, point, align, &attrs),
            })?;
        }
        Command::Radial {
            values,
            out,
            overrides,
        } => {
            let config = load_config(args.config.as_deref(), &overrides)?;
            let formatter = config.formatter(value_interval(&values));
            let align = config.text.alignment;
            let attrs = config.text_attributes();
            render_output(&config, out.as_deref(), |surface, area, aspect_ratio| {
                let layout = RadialLayout::fit(
                    area,
                    aspect_ratio,
                    config.labels.radius_fraction,
                    config.labels.rotation,
                );
                let scheme = config.labels.color_scheme;
                info!("Placing {} labels with the {} scheme", values.len(), scheme);
                let labels = layout.place(&values, &formatter, scheme);
                for label in &labels {
                    debug!(
                        "{} at {:.1}° ({:.1}, {:.1}) in {}",
                        label.text,
                        label.angle,
                        label.point.x,
                        label.point.y,
                        label.color.to_hex()
                    );
                }
                render_labels(surface, &labels, align, &attrs);
            })?;
        }
        Command::Config { action } => run_config(args.config.as_deref(), action)?,
        Command::Completions { shell } => {
            let mut cmd = Args::command();
            clap_complete::generate(shell, &mut cmd, "chartkit", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    config.merge_args(overrides);
    Ok(config)
}

fn run_nearest(file: &Path, value: f64, axis: Option<AxisDependency>, distance: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read candidates from {}", file.display()))?;
    let parsed: CandidateFile = toml::from_str(&content)
        .with_context(|| format!("Invalid candidates file {}", file.display()))?;
    info!("Searching {} candidates for {}", parsed.candidates.len(), value);

    if distance {
        let Some(axis) = axis else {
            bail!("--distance needs --axis");
        };
        match minimum_distance(&parsed.candidates, value, axis) {
            Some(d) => println!("{}", d),
            None => println!("no match"),
        }
    } else {
        match closest_data_set_index(&parsed.candidates, value, axis) {
            Some(index) => println!("{}", index),
            None => println!("no match"),
        }
    }
    Ok(())
}

fn run_config(path: Option<&Path>, action: ConfigAction) -> Result<()> {
    let path = Config::resolve_path(path)?;

    match action {
        ConfigAction::Init => {
            Config::write_template(&path)?;
            println!("Wrote {}", path.display());
        }
        ConfigAction::Show => {
            let config = if path.exists() { Config::load(&path)? } else { Config::default() };
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Set { key, value } => Config::set_value(&path, &key, &value)?,
    }
    Ok(())
}

/// Terminal preview size: one cell per 8x16 pixels of the configured canvas.
fn terminal_size(config: &Config) -> (u16, u16) {
    let cols = (config.canvas.width / 8).clamp(1, u16::MAX as usize) as u16;
    let rows = (config.canvas.height / 16).clamp(1, u16::MAX as usize) as u16;
    (cols, rows)
}

/// Draw onto a PPM canvas when `out` is given, otherwise onto a terminal
/// buffer printed to stdout. `draw` receives the surface, its size in
/// surface units and the aspect ratio of one unit.
fn render_output(
    config: &Config,
    out: Option<&Path>,
    draw: impl FnOnce(&mut dyn TextSurface, Size, f64),
) -> Result<()> {
    match out {
        Some(path) => {
            let mut canvas = Canvas::new(config.canvas.width, config.canvas.height);
            if let Some(bg) = config.canvas.background {
                canvas.fill(bg);
            }
            let area = Size::new(config.canvas.width as f64, config.canvas.height as f64);
            draw(&mut canvas, area, config.canvas.aspect_ratio);
            canvas
                .save_ppm(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let (cols, rows) = terminal_size(config);
            let mut buffer = Buffer::empty(ratatui::layout::Rect::new(0, 0, cols, rows));
            // Terminal cells are about twice as tall as they are wide.
            draw(&mut buffer, Size::new(cols as f64, rows as f64), 2.0);
            for y in 0..rows {
                let line: String = (0..cols)
                    .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect();
                println!("{}", line.trim_end());
            }
        }
    }
    Ok(())
}
