use model::Filters;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Percent-encodes everything outside the unreserved set.
pub fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for &byte in raw.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX[usize::from(byte >> 4)] as char);
            out.push(HEX[usize::from(byte & 0xF)] as char);
        }
    }
    out
}

/// Builds the directory path. All three keys are always present so that the
/// backend sees unset filters as empty values.
pub fn directory_path(filters: &Filters) -> String {
    let mut path = String::from("/api/quizzes?search=");
    path.push_str(&percent_encode(&filters.search));
    path.push_str("&category=");
    if let Some(category) = filters.category {
        path.push_str(&percent_encode(category.as_str()));
    }
    path.push_str("&difficulty=");
    if let Some(difficulty) = filters.difficulty {
        path.push_str(difficulty.as_str());
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Category, Difficulty};

    #[test]
    fn passes_unreserved_text_through() {
        assert_eq!(percent_encode("hist"), "hist");
        assert_eq!(percent_encode("rust-1.0_x~y"), "rust-1.0_x~y");
    }

    #[test]
    fn encodes_reserved_bytes() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(percent_encode("50%"), "50%25");
    }

    #[test]
    fn empty_filters_keep_all_keys() {
        let path = directory_path(&Filters::default());
        assert_eq!(path, "/api/quizzes?search=&category=&difficulty=");
    }

    #[test]
    fn search_only_fills_one_value() {
        let filters = Filters { search: String::from("hist"), ..Filters::default() };
        assert_eq!(directory_path(&filters), "/api/quizzes?search=hist&category=&difficulty=");
    }

    #[test]
    fn full_filters_encode_category_text() {
        let filters = Filters {
            search: String::from("world war"),
            category: Some(Category::GeneralKnowledge),
            difficulty: Some(Difficulty::Hard),
        };
        assert_eq!(
            directory_path(&filters),
            "/api/quizzes?search=world%20war&category=General%20Knowledge&difficulty=hard"
        );
    }
}
