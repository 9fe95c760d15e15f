mod line;
pub mod polygon_outliner;
