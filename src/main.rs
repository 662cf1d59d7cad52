//! # Folio CLI
//!
//! Usage:
//!   folio elements.json -o pages.json
//!   echo '[ ... ]' | folio --page-size a4-landscape
//!   folio measured.json --measured --page-height 1000
//!   folio --example > elements.json

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use folio::measure::{collect_element_details, MeasuredNode};
use folio::{ElementDetail, PageDetail, PageSize, PaginateError, PaginationConfig, Paginator};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SizeArg {
    A4,
    A4Landscape,
}

impl From<SizeArg> for PageSize {
    fn from(size: SizeArg) -> Self {
        match size {
            SizeArg::A4 => PageSize::A4,
            SizeArg::A4Landscape => PageSize::A4Landscape,
        }
    }
}

/// Paginate measured print elements into pages.
#[derive(Debug, Parser)]
#[command(name = "folio", version)]
struct Args {
    /// JSON input file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Write pages here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page height in pixels. Overrides --page-size.
    #[arg(long)]
    page_height: Option<f64>,

    /// Named page size (96 px per inch).
    #[arg(long, value_enum, default_value = "a4")]
    page_size: SizeArg,

    /// Empty margin at the top and bottom of each page, in pixels.
    #[arg(long, default_value_t = folio::config::DEFAULT_PADDING)]
    padding: f64,

    /// Line height that split text snaps to, in pixels.
    #[arg(long, default_value_t = folio::config::DEFAULT_LINE_HEIGHT)]
    line_height: f64,

    /// Repeat a content's last content header on its continuation pages.
    #[arg(long)]
    repeat_content_headers: bool,

    /// Input is a measured node tree rather than an element list.
    #[arg(long)]
    measured: bool,

    /// Print an example element list and exit.
    #[arg(long)]
    example: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.example {
        print!("{}", example_elements_json());
        return;
    }

    match run(&args) {
        Ok(pages) => {
            let total = pages.first().map_or(0, |p| p.total_pages);
            eprintln!("✓ {} page(s)", total);
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<Vec<PageDetail>, PaginateError> {
    let input = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let page_height = folio::error::check_page_height(
        args.page_height
            .unwrap_or_else(|| PageSize::from(args.page_size).height()),
    )?;
    let config = PaginationConfig {
        padding: args.padding,
        line_height: args.line_height,
        text_trailing_buffer: args.line_height,
        repeat_content_headers: args.repeat_content_headers,
    };

    let elements: Vec<ElementDetail> = if args.measured {
        let nodes: Vec<MeasuredNode> = serde_json::from_str(&input)?;
        collect_element_details(&nodes)
    } else {
        let elements: Option<Vec<ElementDetail>> = serde_json::from_str(&input)?;
        elements.unwrap_or_default()
    };

    let pages = Paginator::new(config).paginate(&elements, page_height);
    let json = serde_json::to_string_pretty(&pages)?;
    match &args.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(pages)
}

fn example_elements_json() -> &'static str {
    r##"[
  { "type": "HEADER", "id": "header", "height": 96 },
  { "type": "SUB_HEADER", "id": "sub-header", "height": 48 },
  { "type": "COVER_PAGE", "id": "cover", "height": 480 },
  { "type": "FOOTER", "id": "footer", "height": 64 },
  {
    "type": "CONTENT",
    "id": "summary",
    "height": 240,
    "childElDetails": [
      { "type": "CONTENT_HEADER", "id": "summary-title", "height": 40 },
      { "type": "SUB_CONTENT", "id": "summary-table", "height": 200 }
    ]
  },
  {
    "type": "CONTENT",
    "id": "findings",
    "height": 1240,
    "childElDetails": [
      { "type": "CONTENT_HEADER", "id": "findings-title", "height": 40 },
      { "type": "TEXT", "id": "findings-body", "height": 960 },
      { "type": "CONTENT_HEADER", "id": "chart-title", "height": 40 },
      { "type": "SUB_CONTENT", "id": "chart", "height": 200 }
    ]
  },
  { "type": "CONTENT", "id": "signature", "height": 120, "fill": true },
  { "type": "CONTENT", "id": "appendix", "height": 300, "pageBreak": "true" }
]
"##
}
