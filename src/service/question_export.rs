use crate::db::models::Question;
use crate::service::csv_codec::{UTF8_BOM, write_record};

pub const EXPORT_HEADER: [&str; 3] = ["id", "shareholder_number", "question"];
pub const EXPORT_FILE_NAME: &str = "questions.csv";

/// Render questions as CSV prefixed with a UTF-8 BOM so spreadsheet tools pick the encoding.
pub fn questions_csv(questions: &[Question]) -> String {
    let mut out = String::from(UTF8_BOM);
    write_record(&mut out, EXPORT_HEADER);
    for q in questions {
        let id = q.id.to_string();
        write_record(
            &mut out,
            [id.as_str(), q.shareholder_number.as_str(), q.question.as_str()],
        );
    }
    out
}
