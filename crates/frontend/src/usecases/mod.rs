pub mod u601_export_all_tables;
