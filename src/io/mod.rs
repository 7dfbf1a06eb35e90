pub mod table_reader;
pub mod table_writer;

pub use table_reader::{parse_table, read_table};
pub use table_writer::{render_table, write_table};
