//! Command line options and their validation.
//!
//! [Options] holds the raw arguments as the user typed them; [Options::resolve]
//! checks them and produces a [Config] before anything is drawn, so a bad
//! argument never leaves a half-written file behind.

use crate::layout::{Margins, PageGeometry, Ruling, Slant};
use crate::pagesize::{self, PageOrientation, PaperSize};
use crate::units::Mm;
use crate::LineaturError;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

const AFTER_HELP: &str = "\
Line proportions: no argument = just one line
Line proportions: num = two lines (the value doesn't matter)
Line proportions: num[:num...]
Slanted helper lines: \"num:num\" the angle and number per line of slanted helper lines
Page margins: num:num:num:num top, right, bottom and left margins of the page in mm

examples:
    -p 2:1:2 -s 60:10  Deutsche Kurrentschrift
    -p 1:1:1           Sütterlinschrift
    -p 2:3:2 -s 75:10  Offenbacher Schrift
    -p 3:4:3           Offenbacher Schrift, Lateinische Ausgangsschrift
    -p 3:2:3 -s 52:10  Copperplate";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "lineatur")]
#[command(about = "Generate ruled practice paper for calligraphy as PDF")]
#[command(after_help = AFTER_HELP)]
pub struct Options {
    #[arg(short, long, default_value = "output.pdf", help = "Output file")]
    pub output: PathBuf,

    #[arg(
        long,
        visible_alias = "ps",
        default_value = "A4",
        help = "Paper size of your printer. Possible values: A5, A4, Invoice, Legal, Letter. Print without scaling."
    )]
    pub paper_size: String,

    #[arg(short, long, default_value = "", help = "Line proportions")]
    pub proportions: String,

    #[arg(short, long, default_value = "", help = "Slanted helper lines")]
    pub slant: String,

    #[arg(short, long, default_value = "5:15:15:5", help = "Page margins")]
    pub margins: String,

    #[arg(
        long,
        visible_alias = "lh",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Line height in mm"
    )]
    pub line_height: u64,

    #[arg(long, visible_alias = "ls", default_value_t = 5, help = "Line spacing in mm")]
    pub line_spacing: u64,

    #[arg(
        long,
        visible_alias = "lw",
        default_value_t = 0.3,
        value_parser = positive_width,
        help = "Line width in mm"
    )]
    pub line_width: f32,

    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Number of identical pages to generate"
    )]
    pub pages: u32,

    #[arg(long, help = "Rotate the paper to landscape orientation")]
    pub landscape: bool,

    #[arg(long, help = "Document title, derived from the ruling if not given")]
    pub title: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            output: PathBuf::from("output.pdf"),
            paper_size: "A4".to_string(),
            proportions: String::new(),
            slant: String::new(),
            margins: "5:15:15:5".to_string(),
            line_height: 10,
            line_spacing: 5,
            line_width: 0.3,
            pages: 1,
            landscape: false,
            title: None,
        }
    }
}

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output: PathBuf,
    pub paper: PaperSize,
    pub margins: Margins,
    pub ruling: Ruling,
    pub pages: usize,
    /// Overrides the title derived from the ruling
    pub title: Option<String>,
}

impl Config {
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(&self.paper, &self.margins)
    }
}

impl Options {
    /// Check every option and turn the raw strings into a [Config]
    pub fn resolve(&self) -> Result<Config, LineaturError> {
        let paper = pagesize::lookup(&self.paper_size)?;
        let paper = if self.landscape {
            paper.landscape()
        } else {
            paper.portrait()
        };

        if self.line_height == 0 {
            return Err(invalid("line height must be at least 1mm"));
        }
        if !(self.line_width > 0.0 && self.line_width.is_finite()) {
            return Err(invalid(format!("line width {} must be positive", self.line_width)));
        }
        if self.pages == 0 {
            return Err(invalid("at least one page is needed"));
        }

        let proportions: Vec<f32> = parse_number_list("-p", &self.proportions)?
            .into_iter()
            .map(|p| p as f32)
            .collect();

        let slant_values = parse_number_list("-s", &self.slant)?;
        let slant = Slant::from_list(&slant_values).ok_or_else(|| LineaturError::WrongArity {
            option: "-s",
            value: self.slant.clone(),
            expected: "0 or 2",
            found: slant_values.len(),
        })?;
        if let Some(slant) = slant.filter(|slant| slant.count > Slant::MAX_COUNT) {
            return Err(invalid(format!(
                "at most {} slanted lines per line group, got {}",
                Slant::MAX_COUNT,
                slant.count
            )));
        }

        let margin_values: Vec<f32> = parse_number_list("-m", &self.margins)?
            .into_iter()
            .map(|m| m as f32)
            .collect();
        let margins =
            Margins::from_list(&margin_values).ok_or_else(|| LineaturError::WrongArity {
                option: "-m",
                value: self.margins.clone(),
                expected: "0 or 4",
                found: margin_values.len(),
            })?;

        let ruling = Ruling {
            line_height: Mm(self.line_height as f32),
            line_spacing: Mm(self.line_spacing as f32),
            proportions,
            slant,
            line_width: Mm(self.line_width),
        };
        let config = Config {
            output: self.output.clone(),
            paper,
            margins,
            ruling,
            pages: self.pages as usize,
            title: self.title.clone(),
        };
        debug!(?config, "resolved configuration");
        Ok(config)
    }
}

/// Parse a colon-separated list of unsigned integers such as `2:1:2`.
/// An empty string is an empty list.
pub fn parse_number_list(option: &'static str, value: &str) -> Result<Vec<u64>, LineaturError> {
    if value.is_empty() {
        return Ok(Vec::new());
    }

    value
        .split(':')
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|_| LineaturError::MalformedNumberList {
                    option,
                    value: value.to_string(),
                })
        })
        .collect()
}

fn positive_width(value: &str) -> Result<f32, String> {
    let width: f32 = value.parse().map_err(|e| format!("{e}"))?;
    if width > 0.0 && width.is_finite() {
        Ok(width)
    } else {
        Err(format!("{value} is not a positive width"))
    }
}

fn invalid<S: Into<String>>(message: S) -> LineaturError {
    LineaturError::InvalidInput(message.into())
}
