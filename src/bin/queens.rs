//! Command-line front end for the N-queens demo: encode the puzzle, transform it
//! with Tseitin, hand it to the DPLL search, and print the result.

use clap::{Parser, ValueEnum};

use dpll_sat::config::{Chooser, Config};
use dpll_sat::demos::queens::Board;
use dpll_sat::expr::{set_symbol_style, SymbolStyle};
use dpll_sat::solve::Solver;
use dpll_sat::tseitin::names::PrefixNames;
use dpll_sat::tseitin::Tseitin;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChooserArg {
    Common,
    First,
    Last,
    Random,
}

impl From<ChooserArg> for Chooser {
    fn from(arg: ChooserArg) -> Chooser {
        match arg {
            ChooserArg::Common => Chooser::Common,
            ChooserArg::First => Chooser::First,
            ChooserArg::Last => Chooser::Last,
            ChooserArg::Random => Chooser::Random,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SymbolsArg {
    Ascii,
    Math,
}

/// Solve the N-queens puzzle with an indexed DPLL search over a Tseitin-encoded formula.
#[derive(Debug, Parser)]
#[command(name = "queens", version, about)]
struct Args {
    /// Board size.
    n: usize,

    /// Literal-choice strategy used when the search has to branch.
    #[arg(long, value_enum, default_value_t = ChooserArg::Common)]
    choose: ChooserArg,

    /// Seed for `--choose random`, for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Symbol table used if the formula is printed (`-v`).
    #[arg(long, value_enum, default_value_t = SymbolsArg::Ascii)]
    symbols: SymbolsArg,

    /// Print the encoded formula and the search's full variable assignment.
    #[arg(short = 'v', long = "show-model")]
    show_model: bool,
}

fn main() {
    #[cfg(feature = "log")]
    match log4rs::init_file("config/log4rs.yaml", Default::default()) {
        Ok(()) => log::trace!("log4rs configuration loaded"),
        Err(e) => log::error!("failed to load log4rs configuration: {e}"),
    }

    let args = Args::parse();

    if args.n < 2 {
        eprintln!("c N must be at least 2");
        std::process::exit(1);
    }

    set_symbol_style(match args.symbols {
        SymbolsArg::Ascii => SymbolStyle::Ascii,
        SymbolsArg::Math => SymbolStyle::Math,
    });

    let config = Config { chooser: args.choose.into(), random_seed: args.seed, ..Config::default() };

    let board = Board::new(args.n);
    let formula = board.formula();
    if args.show_model {
        println!("c formula: {formula}");
    }

    let mut tseitin = Tseitin::new(formula, false, PrefixNames::new("aux"));
    let cnf = match tseitin.transform(false) {
        Ok(cnf) => cnf,
        Err(e) => {
            eprintln!("c error transforming formula: {e}");
            std::process::exit(1);
        }
    };

    let mut solver = Solver::new(&cnf, config.choose_fn());
    let satisfiable = solver.check();

    println!("c queens {}", args.n);
    if satisfiable {
        println!("s SATISFIABLE");
        let positions = board.extract_positions(solver.assignments());
        print!("{}", board.render(&positions));
        if args.show_model {
            for letter in board.column_letters() {
                print!("{letter} ");
            }
            println!();
        }
    } else {
        println!("s UNSATISFIABLE");
    }
}
