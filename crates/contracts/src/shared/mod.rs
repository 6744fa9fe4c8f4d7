pub mod category_colors;
pub mod table_data;
