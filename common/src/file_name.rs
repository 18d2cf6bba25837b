//! Download file naming: sanitizing, de-duplication and header parsing.

use serde::{Deserialize, Serialize};


pub const UNKNOWN_COURSE_NAME: &str = "알 수 없음";
pub const CUSTOM_PDF_SUFFIX: &str = "주차나만의자료";
pub const DOWNLOAD_HISTORY_LIMIT: usize = 50;

fn is_hangul_syllable(c: char) -> bool {
    ('가'..='힣').contains(&c)
}

/// Keeps Hangul syllables, ASCII letters and ASCII digits; drops the rest.
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || is_hangul_syllable(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn strip_pdf_extension(name: &str) -> &str {
    let trimmed = name.trim();
    if trimmed.len() >= 4 && trimmed.is_char_boundary(trimmed.len() - 4) && trimmed[trimmed.len() - 4..].eq_ignore_ascii_case(".pdf") {
        &trimmed[..trimmed.len() - 4]
    } else {
        trimmed
    }
}

/// `<base>.pdf`, or `<base>(n).pdf` with the first `n` not already in
/// `history`. A trailing `.pdf` on `base_file_name` is not doubled.
pub fn unique_file_name<S: AsRef<str>>(base_file_name: &str, history: &[S]) -> String {
    let stem = sanitize_file_name(strip_pdf_extension(base_file_name));
    unique_stem(stem, history)
}

/// Like [`unique_file_name`], but uses `fallback` when nothing of
/// `base_file_name` survives sanitizing.
pub fn unique_file_name_or<S: AsRef<str>>(base_file_name: &str, fallback: &str, history: &[S]) -> String {
    let stem = sanitize_file_name(strip_pdf_extension(base_file_name));
    if stem.is_empty() {
        return unique_file_name(fallback, history);
    }
    unique_stem(stem, history)
}

fn unique_stem<S: AsRef<str>>(stem: String, history: &[S]) -> String {
    let taken = |candidate: &str| history.iter().any(|h| h.as_ref() == candidate);

    let mut file_name = format!("{stem}.pdf");
    let mut counter = 1;
    while taken(&file_name) {
        file_name = format!("{stem}({counter}).pdf");
        counter += 1;
    }
    file_name
}

/// Base name for a downloaded custom PDF: `{course}{week}주차나만의자료`.
pub fn custom_pdf_base_name(course_name: Option<&str>, week: u32) -> String {
    let course_name = course_name.filter(|n| !n.trim().is_empty()).unwrap_or(UNKNOWN_COURSE_NAME);
    format!("{}{}{}", sanitize_file_name(course_name), week, CUSTOM_PDF_SUFFIX)
}

/// Splits a header value on `;`, leaving separators inside quotes alone.
fn header_params(header: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (idx, c) in header.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                params.push(&header[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    params.push(&header[start..]);
    params
}

/// `charset'language'value`, percent-encoded. The language may be empty.
fn decode_extended_value(value: &str) -> Option<String> {
    let value = value.trim_matches('"');
    let encoded = match value.splitn(3, '\'').collect::<Vec<_>>().as_slice() {
        [_, _, encoded] => *encoded,
        _ => value,
    };
    urlencoding::decode(encoded).ok().map(|v| v.into_owned())
}

/// Extracts the file name from a `Content-Disposition` header value.
/// `filename*` (RFC 5987) wins over plain `filename`.
pub fn file_name_from_content_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for part in header_params(header) {
        let Some((key, value)) = part.trim().split_once('=') else { continue };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => extended = decode_extended_value(value),
            "filename" => plain = Some(value.trim_matches('"').to_string()),
            _ => {}
        }
    }

    extended.or(plain).filter(|name| !name.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRecord {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub timestamp: String,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Recently downloaded file names, newest first, capped at
/// [`DOWNLOAD_HISTORY_LIMIT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DownloadHistory {
    records: Vec<DownloadRecord>,
}

impl DownloadHistory {
    pub fn record(&mut self, record: DownloadRecord) {
        self.records.insert(0, record);
        self.records.truncate(DOWNLOAD_HISTORY_LIMIT);
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.file_name.as_str()).collect()
    }

    pub fn records(&self) -> &[DownloadRecord] {
        &self.records
    }

    pub fn unique_file_name(&self, base_file_name: &str) -> String {
        unique_file_name(base_file_name, self.file_names().as_slice())
    }

    pub fn unique_file_name_or(&self, base_file_name: &str, fallback: &str) -> String {
        unique_file_name_or(base_file_name, fallback, self.file_names().as_slice())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_hangul_latin_and_digits() {
        assert_eq!(sanitize_file_name("강의명+주차+학생명.pdf"), "강의명주차학생명pdf");
        assert_eq!(sanitize_file_name("test@file#name$123.pdf"), "testfilename123pdf");
        assert_eq!(sanitize_file_name("  공백제거테스트  "), "공백제거테스트");
        assert_eq!(sanitize_file_name("file-name_123"), "filename123");
        assert_eq!(sanitize_file_name("심화프로젝트랩"), "심화프로젝트랩");
    }

    #[test]
    fn sanitize_empty_input() {
        assert_eq!(sanitize_file_name(""), "");
        assert_eq!(sanitize_file_name("   "), "");
    }

    #[test]
    fn unique_name_without_history() {
        let none: [&str; 0] = [];
        assert_eq!(unique_file_name("testfile", &none), "testfile.pdf");
        assert_eq!(unique_file_name("강의자료", &none), "강의자료.pdf");
        assert_eq!(unique_file_name("testfile.pdf", &none), "testfile.pdf");
    }

    #[test]
    fn unique_name_increments_suffix() {
        assert_eq!(unique_file_name("testfile", &["testfile.pdf"]), "testfile(1).pdf");
        assert_eq!(unique_file_name("testfile", &["testfile.pdf", "testfile(1).pdf"]), "testfile(2).pdf");
    }

    #[test]
    fn unreadable_stem_falls_back() {
        let none: [&str; 0] = [];
        assert_eq!(unique_file_name_or("+++.pdf", "m42", &none), "m42.pdf");
        assert_eq!(unique_file_name_or("notes", "m42", &none), "notes.pdf");
        assert_eq!(unique_file_name_or("+++", "m42", &["m42.pdf"]), "m42(1).pdf");
    }

    #[test]
    fn custom_pdf_name_follows_course_week_format() {
        assert_eq!(custom_pdf_base_name(Some("심화 프로젝트 랩"), 2), "심화프로젝트랩2주차나만의자료");
        assert_eq!(custom_pdf_base_name(None, 0), "알수없음0주차나만의자료");
        let none: [&str; 0] = [];
        assert_eq!(
            unique_file_name(&custom_pdf_base_name(Some("심화프로젝트랩"), 2), &none),
            "심화프로젝트랩2주차나만의자료.pdf"
        );
    }

    #[test]
    fn content_disposition_variants() {
        assert_eq!(file_name_from_content_disposition(r#"attachment; filename="notes.pdf""#).as_deref(), Some("notes.pdf"));
        assert_eq!(file_name_from_content_disposition("attachment; filename=notes.pdf").as_deref(), Some("notes.pdf"));
        assert_eq!(
            file_name_from_content_disposition("attachment; filename=\"fallback.pdf\"; filename*=UTF-8''%EA%B0%95%EC%9D%98.pdf").as_deref(),
            Some("강의.pdf")
        );
        assert_eq!(
            file_name_from_content_disposition("attachment; filename*=UTF-8'ko'%EA%B0%95%EC%9D%98.pdf").as_deref(),
            Some("강의.pdf")
        );
        assert_eq!(
            file_name_from_content_disposition(r#"attachment; filename="week 1; notes.pdf""#).as_deref(),
            Some("week 1; notes.pdf")
        );
        assert_eq!(file_name_from_content_disposition("inline"), None);
        assert_eq!(file_name_from_content_disposition(r#"attachment; filename="""#), None);
    }

    #[test]
    fn history_is_newest_first_and_capped() {
        let mut history = DownloadHistory::default();
        for i in 0..(DOWNLOAD_HISTORY_LIMIT + 5) {
            history.record(DownloadRecord { file_name: format!("f{i}.pdf"), timestamp: String::new(), size: None });
        }
        assert_eq!(history.records().len(), DOWNLOAD_HISTORY_LIMIT);
        assert_eq!(history.file_names()[0], format!("f{}.pdf", DOWNLOAD_HISTORY_LIMIT + 4));
    }

    #[test]
    fn history_feeds_unique_names() {
        let mut history = DownloadHistory::default();
        history.record(DownloadRecord { file_name: "testfile.pdf".to_string(), timestamp: String::new(), size: Some(10) });
        assert_eq!(history.unique_file_name("testfile"), "testfile(1).pdf");
    }

    #[test]
    fn history_reads_browser_storage_shape() {
        let stored = r#"[{"fileName":"a.pdf","timestamp":"2025-01-01T00:00:00.000Z","size":1024}]"#;
        let history: DownloadHistory = serde_json::from_str(stored).unwrap();
        assert_eq!(history.file_names(), vec!["a.pdf"]);
    }
}
