pub mod prompts;
pub mod render;

pub use prompts::{
    menu_actions, prompt_cart_index, prompt_food, prompt_macro_field, prompt_menu, prompt_number,
    prompt_quantity, prompt_search, prompt_yes_no, MenuAction,
};
pub use render::{
    display_cart, display_food_list, display_goals, display_preview, display_summary,
    display_totals, format_delta, format_entry, format_food, format_nutrients,
};
