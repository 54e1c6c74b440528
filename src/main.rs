use std::path::Path;

use clap::Parser;

use stock_keeper_rs::cli::{Cli, Command, SortAlgorithm};
use stock_keeper_rs::error::{Result, StockError};
use stock_keeper_rs::interface::{
    display_catalog, display_comparison, display_critical_items, display_expiry_view,
    display_item, display_optimization, display_restock_queue, prompt_budget, prompt_menu,
    prompt_name, prompt_new_item, prompt_suggestion, prompt_yes_no, MenuChoice,
};
use stock_keeper_rs::logging;
use stock_keeper_rs::models::{Item, Method};
use stock_keeper_rs::planner::{compare_methods, extract_critical, optimize, MAX_SUGGESTIONS};
use stock_keeper_rs::state::{load_items, Catalog, CatalogMode};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(mut catalog) = load_catalog(&cli.file, cli.unsorted)? else {
        return Ok(());
    };
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Menu => cmd_menu(&mut catalog),
        Command::Show => {
            display_catalog(&catalog);
            Ok(())
        }
        Command::Find { name, sequential } => cmd_find(&catalog, &name, sequential),
        Command::Add => {
            cmd_add(&mut catalog)?;
            display_catalog(&catalog);
            Ok(())
        }
        Command::Critical => {
            display_critical_items(&extract_critical(&catalog));
            Ok(())
        }
        Command::Restock => {
            display_restock_queue(&catalog.below_ideal_fifo());
            Ok(())
        }
        Command::Expiry => {
            display_expiry_view(&catalog.expiry_ordered_view());
            Ok(())
        }
        Command::Sort { algorithm } => {
            cmd_sort(&mut catalog, algorithm);
            display_catalog(&catalog);
            Ok(())
        }
        Command::Optimize {
            budget,
            method,
            json,
        } => cmd_optimize(&catalog, budget, method, json),
        Command::Compare {
            budget,
            strict,
            json,
        } => cmd_compare(&catalog, budget, strict, json),
    }
}

/// Load the item file into a catalog, or explain why there is none.
fn load_catalog(file_path: &str, unsorted: bool) -> Result<Option<Catalog>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Item file not found: {}", file_path);
        eprintln!("Pass --file <path> or put data.json in the current directory.");
        return Ok(None);
    }

    let items = load_items(path)?;
    let mode = if unsorted {
        CatalogMode::Unsorted
    } else {
        CatalogMode::Sorted
    };
    Ok(Some(Catalog::with_mode(items, mode)))
}

/// Interactive loop over the main menu.
fn cmd_menu(catalog: &mut Catalog) -> Result<()> {
    println!("Loaded {} items", catalog.len());

    loop {
        println!();
        let choice = prompt_menu()?;
        if choice == MenuChoice::Exit {
            println!("Closing the stock keeper.");
            return Ok(());
        }

        match run_choice(catalog, choice) {
            Ok(()) => {}
            // A broken terminal will not get better on the next iteration.
            Err(e @ StockError::Prompt(_)) => return Err(e),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

fn run_choice(catalog: &mut Catalog, choice: MenuChoice) -> Result<()> {
    match choice {
        MenuChoice::ShowCatalog => display_catalog(catalog),
        MenuChoice::FindBinary => {
            let name = prompt_name("Item name")?;
            lookup_interactive(catalog, &name, false)?;
        }
        MenuChoice::FindSequential => {
            let name = prompt_name("Item name (sequential search)")?;
            lookup_interactive(catalog, &name, true)?;
        }
        MenuChoice::AddItem => cmd_add(catalog)?,
        MenuChoice::CriticalItems => display_critical_items(&extract_critical(catalog)),
        MenuChoice::RestockQueue => display_restock_queue(&catalog.below_ideal_fifo()),
        MenuChoice::ExpiryOrder => display_expiry_view(&catalog.expiry_ordered_view()),
        MenuChoice::SortMerge => cmd_sort(catalog, SortAlgorithm::Merge),
        MenuChoice::SortQuick => cmd_sort(catalog, SortAlgorithm::Quick),
        MenuChoice::OptimizeRecursive => {
            let budget = prompt_budget()?;
            cmd_optimize(catalog, budget, Method::Recursive, false)?;
        }
        MenuChoice::OptimizeMemoized => {
            let budget = prompt_budget()?;
            cmd_optimize(catalog, budget, Method::Memoized, false)?;
        }
        MenuChoice::OptimizeIterative => {
            let budget = prompt_budget()?;
            cmd_optimize(catalog, budget, Method::Iterative, false)?;
        }
        MenuChoice::CompareMethods => {
            let budget = prompt_budget()?;
            cmd_compare(catalog, budget, false, false)?;
        }
        MenuChoice::Exit => {}
    }
    Ok(())
}

fn find<'a>(catalog: &'a Catalog, name: &str, sequential: bool) -> Option<&'a Item> {
    if sequential {
        catalog.find_by_name_sequential(name)
    } else {
        catalog.find_by_name(name)
    }
}

/// Non-interactive lookup: print the item or the closest names.
fn cmd_find(catalog: &Catalog, name: &str, sequential: bool) -> Result<()> {
    match find(catalog, name, sequential) {
        Some(item) => display_item(item),
        None => {
            println!("Item not found: {}", name);
            let suggestions = catalog.suggest_names(name, MAX_SUGGESTIONS);
            if !suggestions.is_empty() {
                println!("Similar names: {}", suggestions.join(", "));
            }
        }
    }
    Ok(())
}

/// Lookup that offers near matches when the exact name is missing.
fn lookup_interactive(catalog: &Catalog, name: &str, sequential: bool) -> Result<()> {
    if let Some(item) = find(catalog, name, sequential) {
        display_item(item);
        return Ok(());
    }

    println!("Item not found: {}", name);
    if let Some(suggested) = prompt_suggestion(catalog, name)? {
        if let Some(item) = find(catalog, &suggested, sequential) {
            display_item(item);
        }
    }
    Ok(())
}

fn cmd_add(catalog: &mut Catalog) -> Result<()> {
    println!("--- New item ---");
    let item = prompt_new_item()?;

    if catalog.find_by_name_sequential(&item.name).is_some() {
        let proceed = prompt_yes_no(
            &format!("An item named '{}' already exists. Add anyway?", item.name),
            false,
        )?;
        if !proceed {
            println!("Item not added.");
            return Ok(());
        }
    }

    let name = item.name.clone();
    catalog.insert(item);
    println!("Added '{}'.", name);
    Ok(())
}

fn cmd_sort(catalog: &mut Catalog, algorithm: SortAlgorithm) {
    match algorithm {
        SortAlgorithm::Merge => catalog.sort_by_name_merge(),
        SortAlgorithm::Quick => catalog.sort_by_name_quick(),
    }
    println!("Stock sorted by name ({:?} sort).", algorithm);
}

fn cmd_optimize(catalog: &Catalog, budget: f64, method: Method, json: bool) -> Result<()> {
    let result = optimize(catalog, budget, method)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_optimization(&result);
    }
    Ok(())
}

fn cmd_compare(catalog: &Catalog, budget: f64, strict: bool, json: bool) -> Result<()> {
    let comparison = compare_methods(catalog, budget)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        display_comparison(&comparison);
    }

    if strict {
        comparison.ensure_consistent()?;
    }
    Ok(())
}
