pub mod filter_sidebar;
pub mod restaurant_map;
pub mod restaurant_table;
pub mod results_header;
