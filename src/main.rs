//! CLI entry point for papaya

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use papaya::{
    JsonLinesFormatter, OutputConfig, SiblingOrder, StreamingFormatter, SymlinkCyclePolicy,
    TraverseConfig, TraversePathDepthPolicy, TraversePathFactory, UnreadableDirPolicy,
    write_traversal,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum PolicyArg {
    /// Directories before their contents
    #[default]
    PreOrder,
    /// Directories after their contents
    PostOrder,
    /// Only non-directories
    FilesOnly,
    /// Only directories
    DirsOnly,
    /// Only leaves (files and childless directories)
    LeavesOnly,
}

impl From<PolicyArg> for TraversePathDepthPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::PreOrder => TraversePathDepthPolicy::PreOrder,
            PolicyArg::PostOrder => TraversePathDepthPolicy::PostOrder,
            PolicyArg::FilesOnly => TraversePathDepthPolicy::FilesOnly,
            PolicyArg::DirsOnly => TraversePathDepthPolicy::DirsOnly,
            PolicyArg::LeavesOnly => TraversePathDepthPolicy::LeavesOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum SortArg {
    /// By name, ascending
    #[default]
    Name,
    /// By name, descending
    NameDesc,
    /// Directories first, then by name
    DirsFirst,
    /// Files first, then by name
    FilesFirst,
}

impl From<SortArg> for SiblingOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SiblingOrder::ByName,
            SortArg::NameDesc => SiblingOrder::ByNameDescending,
            SortArg::DirsFirst => SiblingOrder::DirectoriesFirst,
            SortArg::FilesFirst => SiblingOrder::FilesFirst,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "papaya")]
#[command(about = "Walk a directory tree lazily with a configurable depth policy")]
#[command(version)]
struct Args {
    /// Directory to walk
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Where directories appear relative to their contents
    #[arg(long = "policy", value_name = "POLICY", default_value = "pre-order")]
    policy: PolicyArg,

    /// Order of entries within one directory
    #[arg(long = "sort", value_name = "ORDER", default_value = "name")]
    sort: SortArg,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Include hidden entries (names starting with '.')
    #[arg(short, long)]
    all: bool,

    /// Skip entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Descend into symlinked directories
    #[arg(short = 'l', long = "follow-links")]
    follow_links: bool,

    /// Treat unreadable directories as empty instead of failing
    #[arg(long = "skip-unreadable")]
    skip_unreadable: bool,

    /// Fail when a followed symlink leads back to an ancestor (default: prune it)
    #[arg(long = "fail-on-cycle", requires = "follow_links")]
    fail_on_cycle: bool,

    /// Print paths relative to the walked directory
    #[arg(short = 'r', long = "relative")]
    relative: bool,

    /// Output one JSON object per entry
    #[arg(long = "json")]
    json: bool,

    /// Omit the summary line
    #[arg(long = "no-summary")]
    no_summary: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("papaya={default_level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = TraverseConfig {
        depth_policy: args.policy.into(),
        sibling_order: args.sort.into(),
        follow_links: args.follow_links,
        max_depth: args.level,
        include_hidden: args.all,
        ignore_patterns: args.ignore.clone(),
        on_unreadable: if args.skip_unreadable {
            UnreadableDirPolicy::Skip
        } else {
            UnreadableDirPolicy::Fail
        },
        on_cycle: if args.fail_on_cycle {
            SymlinkCyclePolicy::Fail
        } else {
            SymlinkCyclePolicy::Prune
        },
    };

    let walk = match TraversePathFactory.new_traverse_path_iterable_with_config(&args.path, config) {
        Ok(walk) => walk,
        Err(e) => {
            eprintln!("papaya: {}", e);
            process::exit(1);
        }
    };

    let output_config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        relative_to: args.relative.then(|| walk.root().to_path_buf()),
        show_summary: !args.no_summary,
    };

    let result = if args.json {
        write_traversal(&walk, &mut JsonLinesFormatter::new(output_config))
    } else {
        write_traversal(&walk, &mut StreamingFormatter::new(output_config))
    };

    if let Err(e) = result {
        eprintln!("papaya: {}", e);
        process::exit(1);
    }
}
