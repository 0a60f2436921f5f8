use anyhow::{anyhow, Context as _, Result};
use clap::Parser;
use itertools::Itertools;
use std::{
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};
use wordsearch::{BacktrackStrategy, GeneratorConfig, Puzzle, Seed, WordList};

#[derive(Parser)]
struct Opts {
    /// Puzzle width.  Defaults to the longest word
    #[arg(long)]
    width: Option<usize>,

    /// Puzzle height. Defaults to the puzzle width.
    #[arg(long)]
    height: Option<usize>,

    /// Seed to regenerate a puzzle (64 hex digits)
    #[arg(long)]
    seed: Option<Seed>,

    /// How to retry after lifting a placed word
    #[arg(long, value_enum, default_value_t = BacktrackStrategy::Alternatives)]
    strategy: BacktrackStrategy,

    /// Give up after this many backtracks
    #[arg(long)]
    max_backtracks: Option<usize>,

    /// Give up after this long, e.g. `500ms` or `2s`
    #[arg(long)]
    time_limit: Option<humantime::Duration>,

    /// Character marking empty cells while searching
    #[arg(long, default_value_t = wordsearch::grid::DEFAULT_PLACEHOLDER)]
    placeholder: char,

    /// Output type
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: log::LevelFilter,

    /// Word list file (or `-` for stdin)
    words: PathBuf,
}

#[derive(Default, Clone, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Html,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    env_logger::Builder::from_default_env()
        .filter_level(opts.log_level)
        .init();

    let wl = get_wordlist(&opts.words)?;
    if wl.is_empty() {
        return Err(anyhow!("empty word list"));
    }

    let width = opts.width.unwrap_or_else(|| wl.max_word_len());
    let height = opts.height.unwrap_or(width);
    let config = GeneratorConfig {
        width,
        height,
        placeholder: opts.placeholder,
        seed: opts.seed,
        strategy: opts.strategy,
        max_backtracks: opts.max_backtracks,
        time_limit: opts.time_limit.map(Into::into),
    };

    let title = wl.title.clone();
    let puzzle = Puzzle::generate(&config, wl)?;

    eprintln!(
        "Placed {} words with {} backtracks",
        puzzle.word_key.len(),
        puzzle.stats.backtracks
    );

    match opts.format {
        OutputFormat::Text => {
            println!();
            println!("{puzzle}");
            eprintln!();
            eprintln!("Seed: {}", puzzle.seed);
            eprintln!("Key:");
            eprintln!("{}", puzzle.word_key);
        }
        OutputFormat::Html => print!("{}", to_html(&puzzle, title.as_deref())),
    }

    Ok(())
}

fn get_wordlist(path: &Path) -> Result<WordList> {
    let input = if path.to_str() == Some("-") {
        Box::new(BufReader::new(std::io::stdin())) as Box<dyn BufRead>
    } else {
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening word list {}", path.display()))?;
        Box::new(BufReader::new(file)) as Box<dyn BufRead>
    };

    WordList::read(input).with_context(|| format!("reading word list {}", path.display()))
}

fn to_html(puzzle: &Puzzle, title: Option<&str>) -> String {
    use html::tables::{Table, TableCell, TableRow};

    let mut doc = html::root::Html::builder();
    let mut body = html::root::Body::builder();
    let title = title.unwrap_or("Word Search").to_string();
    doc.style("font-family: Arial");
    body.push(
        html::content::Heading1::builder()
            .style("text-align: center")
            .text(title)
            .build(),
    );

    let mut puzzle_table = Table::builder();
    puzzle_table
        .style(r#"font-family: Monaco, monospace; font-size: 20px; border: 1px solid; margin-left: auto; margin-right: auto; margin-top: 40px; padding: 20px"#);
    for row in puzzle.grid.rows() {
        let mut html_row = TableRow::builder();
        html_row.style("height: 30px");
        for c in row.cells() {
            html_row.push(
                TableCell::builder()
                    .text(c.to_string())
                    .style("text-align: center; width: 30px")
                    .build(),
            );
        }
        puzzle_table.push(html_row.build());
    }
    body.push(puzzle_table.build());

    body.push(
        html::content::Heading1::builder()
            .style("padding-top: 20px; text-align: center")
            .text("Word List")
            .build(),
    );
    let mut words_table = Table::builder();
    words_table.style("font-family: Monaco, monospace; font-size: 20px; margin-left: auto; margin-right: auto; border: 0px solid black");
    let mut words_table_row = TableRow::builder();
    for words_in_col in &puzzle
        .word_list
        .iter()
        .chunks(puzzle.word_list.len().div_ceil(3))
    {
        let mut word_col = TableCell::builder();
        word_col.style("font-family: Monaco, monospace; font-size: 14px; vertical-align: top; padding-right: 2em; padding-left: 2em");
        for word in words_in_col {
            word_col.text(word.to_string()).text("</br>");
        }
        words_table_row.push(word_col.build());
    }
    words_table.push(words_table_row.build());
    body.push(words_table.build());

    doc.push(body.build());
    doc.build().to_string()
}
