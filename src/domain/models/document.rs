#[cfg(test)]
#[path = "document_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub id: String,
    pub display_name: String,
    pub filename: Option<String>,
    pub extracted_title: Option<String>,
    #[serde(default)]
    pub user_display_name: bool,
}

impl DocumentMetadata {
    /// Placeholder shown between a document becoming active and its
    /// authoritative metadata arriving.
    pub fn provisional(id: &str) -> DocumentMetadata {
        return DocumentMetadata {
            id: id.to_string(),
            display_name: DocumentMetadata::fallback_label(id),
            filename: None,
            extracted_title: None,
            user_display_name: false,
        };
    }

    /// Builds metadata from whatever fields the remote lookup returned,
    /// resolving the display name as: explicit display name, extracted
    /// title, cleaned filename, truncated-id fallback.
    pub fn from_parts(
        id: &str,
        display_name: Option<String>,
        extracted_title: Option<String>,
        filename: Option<String>,
    ) -> DocumentMetadata {
        let mut resolved = DocumentMetadata::fallback_label(id);
        if let Some(name) = display_name.as_deref().filter(|name| return !name.is_empty()) {
            resolved = name.to_string();
        } else if let Some(title) = extracted_title
            .as_deref()
            .filter(|title| return !title.is_empty())
        {
            resolved = title.to_string();
        } else if let Some(file) = filename.as_deref().filter(|file| return !file.is_empty()) {
            resolved = DocumentMetadata::clean_filename(file);
        }

        return DocumentMetadata {
            id: id.to_string(),
            display_name: resolved,
            filename,
            extracted_title,
            user_display_name: false,
        };
    }

    pub fn fallback_label(id: &str) -> String {
        let short = id.chars().take(8).collect::<String>();
        return format!("Document {short}...");
    }

    fn clean_filename(filename: &str) -> String {
        let base = match filename.rsplit_once('.') {
            Some((stem, _ext)) => stem,
            None => filename,
        };

        let mut cleaned = base
            .replace('_', " ")
            .replace('-', " ")
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ");

        // Duplicate-download markers such as "report (2)".
        if let Some((stem, counter)) = cleaned.rsplit_once(" (") {
            if counter.ends_with(')') && counter[..counter.len() - 1].parse::<u32>().is_ok() {
                cleaned = stem.to_string();
            }
        }

        if cleaned.chars().all(|letter| return !letter.is_uppercase()) {
            cleaned = cleaned
                .split(' ')
                .map(|word| {
                    let mut chars = word.chars();
                    let first = match chars.next() {
                        Some(letter) => letter.to_uppercase().to_string(),
                        None => return String::new(),
                    };
                    return format!("{first}{rest}", rest = chars.as_str());
                })
                .collect::<Vec<String>>()
                .join(" ");
        }

        if cleaned.is_empty() {
            return filename.to_string();
        }

        return cleaned;
    }
}
