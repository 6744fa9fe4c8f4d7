pub mod api_utils;
pub mod category_color;
pub mod components;
pub mod data_source;
pub mod date_utils;
pub mod export;
