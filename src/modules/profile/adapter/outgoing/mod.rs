mod profile_source_file;
pub use profile_source_file::ProfileSourceFile;
