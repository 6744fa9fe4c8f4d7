pub mod view;

pub use view::ExportAllView;
