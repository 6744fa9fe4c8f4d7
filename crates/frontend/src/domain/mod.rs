pub mod a101_categoria;
