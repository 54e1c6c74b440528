use clap::{Parser, Subcommand, ValueEnum};

use crate::models::Method;
use crate::planner::constants::DEFAULT_DATA_FILE;

/// StockKeeper — an in-memory stock tracker with budget-bound restock planning.
#[derive(Parser, Debug)]
#[command(name = "stock_keeper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the item JSON file.
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub file: String,

    /// Keep items in file order instead of sorting them by name.
    #[arg(long)]
    pub unsorted: bool,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Which full resort to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortAlgorithm {
    Merge,
    Quick,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive menu (default).
    Menu,

    /// Print every item.
    Show,

    /// Look an item up by name.
    Find {
        name: String,

        /// Scan sequentially instead of binary searching.
        #[arg(long)]
        sequential: bool,
    },

    /// Prompt for a new item, insert it and print the catalog.
    Add,

    /// List items below their ideal quantity with cost and benefit.
    Critical,

    /// Restock queue: items below ideal in catalog order.
    Restock,

    /// Items by expiry date, soonest first.
    Expiry,

    /// Resort the catalog by name and print it.
    Sort {
        #[arg(long, value_enum, default_value = "merge")]
        algorithm: SortAlgorithm,
    },

    /// Choose what to restock within a budget.
    Optimize {
        #[arg(allow_negative_numbers = true)]
        budget: f64,

        #[arg(long, value_enum, default_value = "iterative")]
        method: Method,

        /// Print the result as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },

    /// Run all three solvers and check that they agree.
    Compare {
        #[arg(allow_negative_numbers = true)]
        budget: f64,

        /// Exit with an error if the methods disagree.
        #[arg(long)]
        strict: bool,

        /// Print the comparison as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Menu
    }
}
