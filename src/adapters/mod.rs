//! File adapters implementing the domain ports

pub mod csv_source;
pub mod yaml_sink;

pub use csv_source::CsvRowSource;
pub use yaml_sink::YamlDocumentSink;
