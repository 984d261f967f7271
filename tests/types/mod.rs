pub mod accumulator;
pub mod either;
pub mod error_formatter;
