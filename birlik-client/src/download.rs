//! Скачивание файлов: разбор заголовков `Content-Type` и
//! `Content-Disposition` ответа бэкенда.

const DEFAULT_FILENAME: &str = "document";
const DEFAULT_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone)]
/// Скачанный файл документа.
pub struct DocumentDownload {
    /// Содержимое файла.
    pub bytes: Vec<u8>,
    /// MIME-тип из заголовка `Content-Type` (или запасной octet-stream).
    pub mime_type: String,
    /// Имя файла из заголовка `Content-Disposition` (или запасное `document`).
    pub filename: String,
}

pub(crate) fn mime_from_header(content_type: Option<&str>) -> String {
    content_type
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| DEFAULT_MIME.to_string())
}

/// Извлекает имя файла из `Content-Disposition`.
///
/// Расширенная форма `filename*=UTF-8''...` (percent-кодированная) имеет
/// приоритет над простой `filename="..."`; без обеих используется запасное
/// имя.
pub(crate) fn filename_from_disposition(header: Option<&str>) -> String {
    let Some(header) = header else {
        return DEFAULT_FILENAME.to_string();
    };

    let mut plain = None;
    for part in header.split(';') {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if key.eq_ignore_ascii_case("filename*") {
            if let Some(decoded) = decode_extended_filename(value) {
                return decoded;
            }
        } else if key.eq_ignore_ascii_case("filename") {
            let name = value.trim_matches('"').trim();
            if !name.is_empty() {
                plain = Some(name.to_string());
            }
        }
    }

    plain.unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}

fn decode_extended_filename(value: &str) -> Option<String> {
    let value = value.trim_matches('"');
    let encoded = value
        .strip_prefix("UTF-8''")
        .or_else(|| value.strip_prefix("utf-8''"))?;
    percent_decode(encoded).filter(|name| !name.is_empty())
}

fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_filename_is_percent_decoded() {
        let header = "attachment; filename*=UTF-8''rapor%20final.pdf";
        assert_eq!(filename_from_disposition(Some(header)), "rapor final.pdf");
    }

    #[test]
    fn extended_filename_wins_over_plain() {
        let header = "attachment; filename=\"plain.pdf\"; filename*=UTF-8''ger%C3%A7ek.pdf";
        assert_eq!(
            filename_from_disposition(Some(header)),
            "ger\u{e7}ek.pdf"
        );
    }

    #[test]
    fn plain_filename_is_unquoted() {
        let header = "attachment; filename=\"plain.pdf\"";
        assert_eq!(filename_from_disposition(Some(header)), "plain.pdf");
    }

    #[test]
    fn missing_header_falls_back_to_default() {
        assert_eq!(filename_from_disposition(None), "document");
    }

    #[test]
    fn unparseable_extended_form_falls_back_to_plain() {
        let header = "attachment; filename*=UTF-8''%zz; filename=\"ok.pdf\"";
        assert_eq!(filename_from_disposition(Some(header)), "ok.pdf");
    }

    #[test]
    fn mime_defaults_to_octet_stream() {
        assert_eq!(mime_from_header(None), "application/octet-stream");
        assert_eq!(mime_from_header(Some("  ")), "application/octet-stream");
        assert_eq!(mime_from_header(Some("application/pdf")), "application/pdf");
    }
}
