use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::demo::{self, AreaDemo, VectorDemo};

/// Environment variable that overrides the log filter derived from `-v`/`-q`.
pub const LOG_ENV: &str = "INTVEC_LOG";

#[derive(Parser, Debug)]
#[command(name = "intvec")]
#[command(version, about = "Run the int vector, matrix and area exercises", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Push values into an IntVector, pop, then copy it
    Vector {
        /// Values to push
        #[arg(value_name = "VALUE", allow_negative_numbers = true, default_values_t = [10, 20, 30])]
        values: Vec<i32>,

        /// Number of elements to pop before copying
        #[arg(short, long, default_value_t = 1)]
        pops: usize,

        /// Print len and capacity after each step
        #[arg(long)]
        show_capacity: bool,
    },

    /// Add, subtract and multiply the two sample 3x3 matrices
    Matrix,

    /// Compute rectangle, square and circle areas
    Area {
        #[arg(long, default_value_t = 5.0)]
        length: f64,

        #[arg(long, default_value_t = 3.0)]
        width: f64,

        #[arg(long, default_value_t = 4.0)]
        side: f64,

        #[arg(long, default_value_t = 2.0)]
        radius: f64,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl Command {
    /// Runs the selected demo, writing its report to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            Command::Vector {
                values,
                pops,
                show_capacity,
            } => {
                let config = VectorDemo {
                    values: values.clone(),
                    pops: *pops,
                    show_capacity: *show_capacity,
                };
                demo::vector_demo(out, &config).context("Vector demo failed")
            }
            Command::Matrix => demo::matrix_demo(out).context("Matrix demo failed"),
            &Command::Area {
                length,
                width,
                side,
                radius,
            } => {
                let config = AreaDemo {
                    length,
                    width,
                    side,
                    radius,
                };
                demo::area_demo(out, &config).context("Area demo failed")
            }
        }
    }
}
