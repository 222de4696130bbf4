// Read a vcf-compare report and draw the three-way Venn diagram of its VN records

use anyhow::Result;
use clap::Parser;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub mod error;
pub mod parser;
pub mod render;
pub mod style;
pub mod subsets;
pub mod utils;

pub use error::{FormatError, VennError};
pub use style::PlotStyle;
pub use subsets::{subsets_from_lines, subsets_from_reader, Region, Venn3};

#[derive(Parser)]
#[command(version, about = "Draw a three-way Venn diagram from vcf-compare output.", long_about = None)]
#[command(styles=get_styles())]
pub struct Args {
    /// a vcf-compare output file (optionally .gz), or - to read from stdin
    #[arg(value_name = "INPUT", value_parser = input_validator)]
    input: String,

    /// save location of the plot (.svg, or .svgz to compress). If not given, the plot is written to stdout
    #[arg(value_name = "PLOT")]
    output: Option<PathBuf>,

    /// title for the plot
    #[arg(short, long)]
    title: Option<String>,

    /// yaml file with plot colours and sizes
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// output format.
    #[arg(long, default_value_t, value_enum)]
    output_format: OutputFormat,

    /// verbosity, repeat for more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run(args: Args) -> Result<()> {
    // the reader is dropped once the report is consumed
    let venn = {
        let reader = utils::open_input(&args.input)?;
        subsets_from_reader(reader)?
    };
    info!(
        "subsets (A, B, AB, C, AC, BC, ABC) = {:?} for {:?}",
        venn.subsets, venn.labels
    );

    let content = match args.output_format {
        OutputFormat::Svg => {
            let style = match &args.style {
                Some(path) => PlotStyle::from_yaml_file(path)?,
                None => PlotStyle::default(),
            };
            render::render_svg(&venn, args.title.as_deref(), &style)
        }
        OutputFormat::Json => serde_json::to_string(&venn).map_err(VennError::from)?,
    };

    match &args.output {
        Some(path) => {
            utils::write_output(path, &content)?;
            info!("written to {}", path.display());
        }
        None => utils::print_line_to_stdout(&content)?,
    }
    Ok(())
}

#[derive(clap::ValueEnum, Clone, Default, Debug, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// svg diagram
    #[default]
    Svg,
    /// subsets and labels as json
    Json,
}

fn input_validator(fname: &str) -> Result<String, String> {
    if fname == "-" {
        return Ok(fname.to_string());
    }
    if !Path::new(fname).is_file() {
        return Err(format!("input file {fname} does not exist"));
    }
    Ok(fname.to_string())
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))),
        )
}
