pub mod prompts;
pub mod render;

pub use prompts::{
    parse_budget, parse_expiry, prompt_budget, prompt_menu, prompt_name, prompt_new_item,
    prompt_suggestion, prompt_yes_no, MenuChoice,
};
pub use render::{
    display_catalog, display_comparison, display_critical_items, display_expiry_view,
    display_item, display_optimization, display_restock_queue,
};
