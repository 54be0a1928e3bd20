mod console;

pub use console::{ConsoleObserver, print_parse_summary};
