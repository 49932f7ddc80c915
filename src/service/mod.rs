pub mod csv_codec;
pub mod question_export;
pub mod roster_import;
