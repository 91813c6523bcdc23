//! Write a synthetic input for `reducedata` to stdout.
//!
//! ```text
//! generate_sample [CASE] [ROWS]
//! ```
//!
//! `CASE` picks the shape of the output (default `valid`):
//! * `valid` – header plus `ROWS` rows (default 30)
//! * `empty` – no bytes at all
//! * `header-only` – header, no rows
//! * `single-row` – header plus one row
//! * `non-numeric` – one field in the middle row is `n/a`
//! * `short-row` – the middle row is missing its last field
//! * `blank-line` – valid rows followed by an empty line
//!
//! Values are uniform noise around a per-column centre from a fixed seed, so
//! the output is the same on every run.

use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Column label, centre, half-spread of the noise.
const COLUMNS: [(&str, f64, f64); 4] = [
    ("solve_ms", 120.0, 25.0),
    ("conflicts", 4200.0, 900.0),
    ("decisions", 9800.0, 1500.0),
    ("restarts", 12.0, 5.0),
];

const DEFAULT_ROWS: usize = 30;
const SEED: u64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Valid,
    Empty,
    HeaderOnly,
    SingleRow,
    NonNumeric,
    ShortRow,
    BlankLine,
}

impl FromStr for Case {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "valid" => Case::Valid,
            "empty" => Case::Empty,
            "header-only" => Case::HeaderOnly,
            "single-row" => Case::SingleRow,
            "non-numeric" => Case::NonNumeric,
            "short-row" => Case::ShortRow,
            "blank-line" => Case::BlankLine,
            other => bail!("unknown case '{other}'"),
        })
    }
}

impl Case {
    fn row_count(self, requested: usize) -> usize {
        match self {
            Case::Empty | Case::HeaderOnly => 0,
            Case::SingleRow => 1,
            // malformed cases need a middle row to break
            Case::NonNumeric | Case::ShortRow => requested.max(3),
            Case::Valid | Case::BlankLine => requested,
        }
    }
}

fn random_row(rng: &mut StdRng) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|&(_, centre, spread)| format!("{:.3}", centre + rng.gen_range(-spread..=spread)))
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let case = match args.next() {
        Some(arg) => arg.parse::<Case>()?,
        None => Case::Valid,
    };
    let requested = match args.next() {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("row count '{arg}' is not a non-negative integer"))?,
        None => DEFAULT_ROWS,
    };

    if case == Case::Empty {
        log::info!("wrote empty input");
        return Ok(());
    }

    let rows = case.row_count(requested);
    let broken = rows / 2;
    let mut rng = StdRng::seed_from_u64(SEED);

    // Flexible so the short row can be written at all.
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(io::stdout().lock());

    writer.write_record(COLUMNS.iter().map(|&(label, _, _)| label))?;
    for i in 0..rows {
        let mut row = random_row(&mut rng);
        if i == broken {
            match case {
                Case::NonNumeric => row[COLUMNS.len() - 1] = "n/a".to_string(),
                Case::ShortRow => {
                    row.pop();
                }
                _ => {}
            }
        }
        writer.write_record(&row)?;
    }

    writer.flush().context("flushing stdout")?;
    drop(writer);

    if case == Case::BlankLine {
        let mut out = io::stdout().lock();
        writeln!(out)?;
        out.flush().context("flushing stdout")?;
    }

    log::info!("wrote {case:?} input with {rows} rows of {} columns", COLUMNS.len());
    Ok(())
}
