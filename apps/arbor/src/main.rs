use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use arbor_avl::Avl;
use arbor_bst::Bst;
use arbor_logging::{LogFormat, LogLevel, Logger, LoggingConfig};
use arbor_ports::{TraverseOrder, Tree};
use arbor_redblack::RedBlack;
use arbor_render::{RenderMode, render};
use arbor_walk::Traverse;

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Build, render, compare, and benchmark binary search trees.", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormatArg::Plain, global = true)]
    log_format: LogFormatArg,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a tree and print one traversal of it.
    Build {
        #[command(flatten)]
        source: TreeSource,
        /// Traversal order to print.
        #[arg(long, value_enum, default_value_t = OrderArg::InOrder)]
        order: OrderArg,
    },

    /// Build a tree and render it for inspection.
    Render {
        #[command(flatten)]
        source: TreeSource,
        /// Output mode.
        #[arg(long, value_enum, default_value_t = ModeArg::Ascii)]
        mode: ModeArg,
    },

    /// Compare two trees for equivalence and equality.
    Compare {
        /// Comma-separated values for the left tree.
        left: String,
        /// Comma-separated values for the right tree.
        right: String,
        /// Variant of the left tree.
        #[arg(long, value_enum, default_value_t = VariantArg::Bst)]
        left_variant: VariantArg,
        /// Variant of the right tree.
        #[arg(long, value_enum, default_value_t = VariantArg::Bst)]
        right_variant: VariantArg,
    },

    /// Time inserts and searches across variants with seeded random input.
    Bench {
        /// Number of values to insert.
        #[arg(long, default_value_t = 10_000)]
        count: usize,
        /// RNG seed, for reproducible runs.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

/// Where a tree's values come from: an explicit list or a seeded RNG.
#[derive(Args, Debug)]
struct TreeSource {
    /// Tree variant to build.
    #[arg(long, value_enum, default_value_t = VariantArg::Bst)]
    variant: VariantArg,

    /// Comma-separated values to insert, in order.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Vec<i64>,

    /// Insert this many random values instead of an explicit list.
    #[arg(long, conflicts_with = "values")]
    random: Option<usize>,

    /// RNG seed used with --random.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum VariantArg {
    Bst,
    Avl,
    RedBlack,
}

impl VariantArg {
    fn new_tree(self) -> Box<dyn Tree<i64>> {
        match self {
            VariantArg::Bst => Box::new(Bst::new()),
            VariantArg::Avl => Box::new(Avl::new()),
            VariantArg::RedBlack => Box::new(RedBlack::new()),
        }
    }

    fn name(self) -> &'static str {
        match self {
            VariantArg::Bst => "bst",
            VariantArg::Avl => "avl",
            VariantArg::RedBlack => "red-black",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OrderArg {
    InOrder,
    PreOrder,
    PostOrder,
    ReverseOrder,
    LevelOrder,
}

impl From<OrderArg> for TraverseOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::InOrder => TraverseOrder::InOrder,
            OrderArg::PreOrder => TraverseOrder::PreOrder,
            OrderArg::PostOrder => TraverseOrder::PostOrder,
            OrderArg::ReverseOrder => TraverseOrder::ReverseOrder,
            OrderArg::LevelOrder => TraverseOrder::LevelOrder,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ModeArg {
    Ascii,
    Svg,
}

impl From<ModeArg> for RenderMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Ascii => RenderMode::Ascii,
            ModeArg::Svg => RenderMode::Svg,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LogFormatArg {
    Plain,
    Json,
    Compact,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Plain => LogFormat::Plain,
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Compact => LogFormat::Compact,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new(
        LoggingConfig::new()
            .with_level(LogLevel::from_verbosity(cli.verbose))
            .with_format(cli.log_format.into()),
    );

    match cli.cmd {
        Command::Build { source, order } => {
            let tree = build_tree(&source, &logger)?;
            let order = TraverseOrder::from(order);
            let walked: Vec<String> = tree.traverse(order).map(ToString::to_string).collect();
            println!("{order}: {}", walked.join(" "));
        }
        Command::Render { source, mode } => {
            let tree = build_tree(&source, &logger)?;
            print!("{}", render(&*tree, mode.into()));
        }
        Command::Compare {
            left,
            right,
            left_variant,
            right_variant,
        } => {
            let left_values = parse_values(&left)?;
            let right_values = parse_values(&right)?;
            let left = fill_tree(left_variant.new_tree(), &left_values, &logger);
            let right = fill_tree(right_variant.new_tree(), &right_values, &logger);

            let verdict = if arbor_compare::equal(&*left, &*right) {
                "equal"
            } else if arbor_compare::equivalent(&*left, &*right) {
                "equivalent"
            } else {
                "different"
            };
            println!("{verdict}");
        }
        Command::Bench { count, seed } => {
            if count == 0 {
                bail!("--count must be at least 1");
            }
            let mut rng = StdRng::seed_from_u64(seed);
            let values: Vec<i64> = (0..count)
                .map(|_| rng.random_range(-1_000_000..1_000_000))
                .collect();
            logger.info(format!("benchmarking {count} inserts, seed {seed}"));

            for variant in [VariantArg::Bst, VariantArg::Avl, VariantArg::RedBlack] {
                run_bench(variant, &values);
            }
        }
    }

    Ok(())
}

/// Builds a tree from the requested source, logging how many values were
/// duplicates and silently dropped.
fn build_tree(source: &TreeSource, logger: &Logger) -> Result<Box<dyn Tree<i64>>> {
    let values = if let Some(count) = source.random {
        if count == 0 {
            bail!("--random must be at least 1");
        }
        let mut rng = StdRng::seed_from_u64(source.seed);
        (0..count)
            .map(|_| rng.random_range(-1_000_000..1_000_000))
            .collect()
    } else if source.values.is_empty() {
        bail!("provide --values or --random");
    } else {
        source.values.clone()
    };

    logger.debug(
        source.variant.name(),
        format!("building from {} values", values.len()),
    );
    Ok(fill_tree(source.variant.new_tree(), &values, logger))
}

fn fill_tree(mut tree: Box<dyn Tree<i64>>, values: &[i64], logger: &Logger) -> Box<dyn Tree<i64>> {
    let mut duplicates = 0usize;
    for &v in values {
        if !tree.insert(v) {
            duplicates += 1;
        }
    }
    if duplicates > 0 {
        logger.debug("build", format!("ignored {duplicates} duplicate values"));
    }
    tree
}

fn parse_values(list: &str) -> Result<Vec<i64>> {
    list.split(',')
        .map(|s| {
            s.trim()
                .parse::<i64>()
                .with_context(|| format!("invalid value {s:?}"))
        })
        .collect()
}

fn run_bench(variant: VariantArg, values: &[i64]) {
    let mut tree = variant.new_tree();

    let started = Instant::now();
    for &v in values {
        tree.insert(v);
    }
    let insert_time = started.elapsed();

    let started = Instant::now();
    for &v in values {
        tree.search(&v);
    }
    let search_time = started.elapsed();

    println!(
        "{:<9} inserted {} in {:.2?} (height {}), searched in {:.2?}",
        variant.name(),
        tree.len(),
        insert_time,
        tree.height(),
        search_time,
    );
}
