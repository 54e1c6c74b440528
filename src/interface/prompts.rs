use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, StockError};
use crate::models::Item;
use crate::planner::constants::MAX_SUGGESTIONS;
use crate::state::Catalog;

/// Entries of the interactive menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowCatalog,
    FindBinary,
    AddItem,
    CriticalItems,
    RestockQueue,
    ExpiryOrder,
    FindSequential,
    SortMerge,
    SortQuick,
    OptimizeRecursive,
    OptimizeMemoized,
    OptimizeIterative,
    CompareMethods,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 14] = [
        MenuChoice::ShowCatalog,
        MenuChoice::FindBinary,
        MenuChoice::AddItem,
        MenuChoice::CriticalItems,
        MenuChoice::RestockQueue,
        MenuChoice::ExpiryOrder,
        MenuChoice::FindSequential,
        MenuChoice::SortMerge,
        MenuChoice::SortQuick,
        MenuChoice::OptimizeRecursive,
        MenuChoice::OptimizeMemoized,
        MenuChoice::OptimizeIterative,
        MenuChoice::CompareMethods,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ShowCatalog => "Show stock",
            MenuChoice::FindBinary => "Find item by name (binary search)",
            MenuChoice::AddItem => "Add new item",
            MenuChoice::CriticalItems => "Show critical items",
            MenuChoice::RestockQueue => "Restock queue (items below ideal)",
            MenuChoice::ExpiryOrder => "Expiry order (soonest first)",
            MenuChoice::FindSequential => "Find item by name (sequential search)",
            MenuChoice::SortMerge => "Sort stock by name (merge sort)",
            MenuChoice::SortQuick => "Sort stock by name (quick sort)",
            MenuChoice::OptimizeRecursive => "Optimize restock - recursive",
            MenuChoice::OptimizeMemoized => "Optimize restock - memoized",
            MenuChoice::OptimizeIterative => "Optimize restock - iterative",
            MenuChoice::CompareMethods => "Compare all optimization methods",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Show the main menu and return the chosen entry.
pub fn prompt_menu() -> Result<MenuChoice> {
    let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
    let selection = Select::new()
        .with_prompt("Choose an option")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuChoice::ALL
        .get(selection)
        .copied()
        .unwrap_or(MenuChoice::Exit))
}

/// Parse a restock budget. Must be a non-negative number.
pub fn parse_budget(input: &str) -> Result<f64> {
    let budget: f64 = input
        .trim()
        .parse()
        .map_err(|_| StockError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !budget.is_finite() || budget < 0.0 {
        return Err(StockError::InvalidInput(
            "Budget must be zero or more".to_string(),
        ));
    }
    Ok(budget)
}

/// Parse an optional `YYYY-MM-DD` date; blank means no expiry.
pub fn parse_expiry(input: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| StockError::InvalidInput(format!("Invalid date '{}': {}", input, e)))
}

fn parse_field<T: std::str::FromStr>(input: &str, field: &str) -> Result<T> {
    input
        .trim()
        .parse()
        .map_err(|_| StockError::InvalidInput(format!("Invalid {}: '{}'", field, input.trim())))
}

/// Prompt for the restock budget.
pub fn prompt_budget() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Available budget")
        .interact_text()?;
    parse_budget(&input)
}

/// Prompt for an item name to look up.
pub fn prompt_name(prompt: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for every field of a new item, validating as it goes.
pub fn prompt_new_item() -> Result<Item> {
    let id: String = Input::new().with_prompt("ID").interact_text()?;
    let name: String = Input::new().with_prompt("Item name").interact_text()?;
    let category: String = Input::new().with_prompt("Category").interact_text()?;
    let quantity: String = Input::new().with_prompt("Quantity").interact_text()?;
    let location: String = Input::new().with_prompt("Location").interact_text()?;
    let expiry: String = Input::new()
        .with_prompt("Expiry date (YYYY-MM-DD, blank for none)")
        .allow_empty(true)
        .interact_text()?;
    let unit_price: String = Input::new().with_prompt("Unit price").interact_text()?;
    let ideal_quantity: String = Input::new().with_prompt("Ideal quantity").interact_text()?;

    let item = Item {
        id: parse_field(&id, "id")?,
        name: name.trim().to_string(),
        category: category.trim().to_string(),
        quantity: parse_field(&quantity, "quantity")?,
        location: location.trim().to_string(),
        expiry_date: parse_expiry(&expiry)?,
        unit_price: parse_field(&unit_price, "unit price")?,
        ideal_quantity: parse_field(&ideal_quantity, "ideal quantity")?,
    };

    item.validate()
        .map_err(|e| StockError::InvalidInput(e.to_string()))?;
    Ok(item)
}

/// After a failed lookup, offer close names and return the one picked.
pub fn prompt_suggestion(catalog: &Catalog, query: &str) -> Result<Option<String>> {
    let suggestions = catalog.suggest_names(query, MAX_SUGGESTIONS);

    match suggestions.as_slice() {
        [] => Ok(None),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only))
                .default(true)
                .interact()?;
            Ok(confirm.then(|| only.to_string()))
        }
        many => {
            let mut options: Vec<&str> = many.to_vec();
            options.push("None of these");

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok(many.get(selection).map(|s| s.to_string()))
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
