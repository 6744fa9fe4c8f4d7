pub mod export_table;
