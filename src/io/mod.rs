//! I/O utilities.
//!
//! Reading input text from files or stdin and writing processed output.
//! The transformation core itself does no I/O.

pub mod reader;

pub use reader::{MAX_FILE_SIZE, output_file_name, read_file, read_stdin, write_file};
