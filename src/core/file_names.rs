//! File name helpers for user uploads.
//!
//! Uploaded file names come straight from the browser and can be arbitrarily
//! long or contain characters the filesystem rejects. These helpers turn them
//! into names and URL paths that always fit the storage limits. All functions
//! are pure and never fail; degenerate input resolves to a fallback name.
//!
//! Lengths are counted in characters, not bytes.

use uuid::Uuid;

/// Longest file name produced by [`create_safe_file_name`].
pub const DEFAULT_MAX_FILE_NAME_LENGTH: usize = 100;
/// Longest URL path produced by [`create_safe_url_path`].
pub const MAX_PATH_LENGTH: usize = 200;

/// `{uuid}_` is 36 + 1 characters.
const GUID_PREFIX_LENGTH: usize = 37;
const FALLBACK_NAME: &str = "unnamed";
const FALLBACK_EXTENSION: &str = ".jpg";

fn is_invalid_file_name_char(c: char) -> bool {
    c.is_control() || matches!(c, '"' | '<' | '>' | '|' | ':' | '*' | '?' | '\\' | '/')
}

fn is_invalid_path_char(c: char) -> bool {
    c.is_control() || matches!(c, '"' | '<' | '>' | '|')
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn truncate_chars(s: &str, max_chars: usize) -> &str {
    s.char_indices().nth(max_chars).map_or(s, |(idx, _)| &s[..idx])
}

/// Last path segment of `name`.
fn file_name_part(name: &str) -> &str {
    name.rfind(['/', '\\']).map_or(name, |idx| &name[idx + 1..])
}

/// Splits `name` into (everything before the extension, extension with dot).
///
/// Only a dot inside the last path segment starts an extension, and a trailing
/// dot is not one.
fn split_extension(name: &str) -> (&str, &str) {
    let segment_start = name.rfind(['/', '\\']).map_or(0, |idx| idx + 1);
    match name[segment_start..].rfind('.') {
        Some(dot) if segment_start + dot + 1 < name.len() => name.split_at(segment_start + dot),
        _ => (name, ""),
    }
}

/// Builds a filesystem-safe, length-bounded file name from an uploaded name.
///
/// The directory part and extension are stripped, the base name is sanitized
/// with [`sanitize_file_name`] and truncated so that the optional
/// `{uuid}_` prefix, the base name and the extension together stay within
/// [`DEFAULT_MAX_FILE_NAME_LENGTH`].
#[must_use]
pub fn create_safe_file_name(original: &str, include_guid: bool) -> String {
    if original.trim().is_empty() {
        return if include_guid {
            format!("{}{FALLBACK_EXTENSION}", Uuid::new_v4())
        } else {
            format!("{FALLBACK_NAME}{FALLBACK_EXTENSION}")
        };
    }

    let (stem, extension) = split_extension(file_name_part(original));
    let prefix_len = if include_guid { GUID_PREFIX_LENGTH } else { 0 };

    // An extension that cannot fit next to a one-character base is cut down.
    let mut extension: String = extension
        .chars()
        .map(|c| if is_invalid_file_name_char(c) { '_' } else { c })
        .collect();
    let max_extension = DEFAULT_MAX_FILE_NAME_LENGTH - prefix_len - 1;
    if char_len(&extension) > max_extension {
        extension = truncate_chars(&extension, max_extension).to_string();
    }

    let max_base = DEFAULT_MAX_FILE_NAME_LENGTH - prefix_len - char_len(&extension);
    let sanitized = sanitize_file_name(stem);
    let base = truncate_chars(&sanitized, max_base);

    if include_guid {
        format!("{}_{base}{extension}", Uuid::new_v4())
    } else {
        format!("{base}{extension}")
    }
}

/// Replaces characters that are invalid in file names.
///
/// Invalid and control characters become `_`, runs of `_` collapse into one
/// and leading/trailing `_` are trimmed. An empty result becomes `unnamed`.
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if is_invalid_file_name_char(c) { '_' } else { c };
        if c == '_' && sanitized.ends_with('_') {
            continue;
        }
        sanitized.push(c);
    }

    let trimmed = sanitized.trim_matches('_');
    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Joins a base URL path and a file name, shortening the file name if the
/// result would exceed [`MAX_PATH_LENGTH`].
#[must_use]
pub fn create_safe_url_path(base_path: &str, file_name: &str) -> String {
    let base = base_path.trim_end_matches('/');
    let joined = format!("{base}/{file_name}");
    if char_len(&joined) <= MAX_PATH_LENGTH {
        return joined;
    }

    let available = MAX_PATH_LENGTH.saturating_sub(char_len(base) + 1);
    let shortened = format!("{base}/{}", shorten_file_name(file_name, available));
    // The base alone may leave no room for even `file` + extension
    truncate_chars(&shortened, MAX_PATH_LENGTH).to_string()
}

/// Truncates the base name so that `name` fits in `max_length` characters,
/// keeping the extension.
///
/// Names already within the limit are returned unchanged. When the extension
/// alone leaves no room for a base name the result is `file` + extension.
#[must_use]
pub fn shorten_file_name(name: &str, max_length: usize) -> String {
    if char_len(name) <= max_length {
        return name.to_string();
    }

    let (stem, extension) = split_extension(name);
    let extension_len = char_len(extension);
    if extension_len >= max_length {
        return format!("file{extension}");
    }

    format!(
        "{}{extension}",
        truncate_chars(stem, max_length - extension_len)
    )
}

/// Whether `path` is non-empty, within [`MAX_PATH_LENGTH`] and free of
/// characters that are invalid in a path.
#[must_use]
pub fn is_path_safe(path: &str) -> bool {
    !path.is_empty()
        && char_len(path) <= MAX_PATH_LENGTH
        && !path.chars().any(is_invalid_path_char)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn sample_names() -> Vec<String> {
        vec![
            "fish.jpg".to_string(),
            "My Big Bass!.png".to_string(),
            "C:\\Users\\angler\\Pictures\\walleye.jpeg".to_string(),
            "../../etc/passwd".to_string(),
            "what?*<>|\"name.gif".to_string(),
            "tab\tand\nnewline.webp".to_string(),
            format!("{}.jpg", "a".repeat(150)),
            format!("{}.heic", "ü".repeat(120)),
            "___.jpg".to_string(),
            ".hidden".to_string(),
            "no_extension".to_string(),
            "trailing.".to_string(),
            format!("x.{}", "e".repeat(120)),
        ]
    }

    #[test]
    fn test_safe_file_name_never_exceeds_limit() {
        for name in sample_names() {
            for include_guid in [true, false] {
                let safe = create_safe_file_name(&name, include_guid);
                assert!(
                    safe.chars().count() <= DEFAULT_MAX_FILE_NAME_LENGTH,
                    "{name:?} -> {safe:?}"
                );
            }
        }
    }

    #[test]
    fn test_safe_file_name_keeps_extension() {
        for name in sample_names() {
            let (_, extension) = split_extension(file_name_part(&name));
            if extension.chars().count() > 50 || extension.chars().any(is_invalid_file_name_char) {
                continue;
            }
            let safe = create_safe_file_name(&name, true);
            assert!(safe.ends_with(extension), "{name:?} -> {safe:?}");
        }
    }

    #[test]
    fn test_safe_file_name_empty_input() {
        assert_eq!(create_safe_file_name("", false), "unnamed.jpg");
        assert_eq!(create_safe_file_name("   ", false), "unnamed.jpg");

        let with_guid = create_safe_file_name("", true);
        assert!(with_guid.ends_with(".jpg"));
        assert!(Uuid::parse_str(&with_guid[..36]).is_ok());
        assert_eq!(with_guid.len(), 40);
    }

    #[test]
    fn test_safe_file_name_guid_prefix() {
        let safe = create_safe_file_name("bass.jpg", true);
        assert!(Uuid::parse_str(&safe[..36]).is_ok());
        assert_eq!(&safe[36..], "_bass.jpg");

        assert_ne!(
            create_safe_file_name("bass.jpg", true),
            create_safe_file_name("bass.jpg", true)
        );
    }

    #[test]
    fn test_safe_file_name_strips_directories() {
        assert_eq!(
            create_safe_file_name("C:\\Users\\angler\\walleye.jpeg", false),
            "walleye.jpeg"
        );
        assert_eq!(create_safe_file_name("../../etc/passwd", false), "passwd");
    }

    #[test]
    fn test_safe_file_name_truncates_long_base() {
        let name = format!("{}.jpg", "a".repeat(150));
        let safe = create_safe_file_name(&name, false);
        assert_eq!(safe, format!("{}.jpg", "a".repeat(96)));

        let with_guid = create_safe_file_name(&name, true);
        assert_eq!(with_guid.len(), 100);
        assert!(with_guid.ends_with(&format!("_{}.jpg", "a".repeat(59))));
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("my fish.jpg"), "my fish.jpg");
        assert_eq!(sanitize_file_name("a<b>c"), "a_b_c");
        assert_eq!(sanitize_file_name("a<>:b"), "a_b");
        assert_eq!(sanitize_file_name("__a__b__"), "a_b");
        assert_eq!(sanitize_file_name("bell\u{7}ring"), "bell_ring");
        assert_eq!(sanitize_file_name("???"), "unnamed");
        assert_eq!(sanitize_file_name(""), "unnamed");
    }

    #[test]
    fn test_sanitize_output_is_clean() {
        for name in sample_names() {
            let sanitized = sanitize_file_name(&name);
            assert!(!sanitized.chars().any(is_invalid_file_name_char), "{sanitized:?}");
            assert!(!sanitized.contains("__"), "{sanitized:?}");
            assert!(!sanitized.is_empty());
        }
    }

    #[test]
    fn test_shorten_file_name() {
        assert_eq!(shorten_file_name("fish.jpg", 100), "fish.jpg");
        assert_eq!(shorten_file_name("fish.jpg", 8), "fish.jpg");

        let long = format!("{}.jpg", "a".repeat(150));
        let short = shorten_file_name(&long, 50);
        assert!(short.chars().count() <= 50);
        assert!(short.ends_with(".jpg"));
        assert_eq!(short, format!("{}.jpg", "a".repeat(46)));

        assert_eq!(shorten_file_name("abcdef.extension", 5), "file.extension");
    }

    #[test]
    fn test_create_safe_url_path() {
        assert_eq!(
            create_safe_url_path("/Images/Backgrounds/", "fish.jpg"),
            "/Images/Backgrounds/fish.jpg"
        );
        assert_eq!(
            create_safe_url_path("/Images/Backgrounds", "fish.jpg"),
            "/Images/Backgrounds/fish.jpg"
        );

        let long_name = format!("{}.png", "b".repeat(250));
        let path = create_safe_url_path("/uploads/catches", &long_name);
        assert_eq!(path.chars().count(), MAX_PATH_LENGTH);
        assert!(path.starts_with("/uploads/catches/"));
        assert!(path.ends_with(".png"));
    }

    #[test]
    fn test_shorten_file_name_extension_fills_budget() {
        assert_eq!(shorten_file_name("abcdefgh.jpg", 4), "file.jpg");
        assert_eq!(shorten_file_name("abcdefgh.jpg", 5), "a.jpg");
    }

    #[test]
    fn test_create_safe_url_path_with_long_base() {
        let base = format!("/{}", "d".repeat(198));
        let path = create_safe_url_path(&base, "fish.jpg");
        assert!(path.chars().count() <= MAX_PATH_LENGTH);
        assert!(is_path_safe(&path));
        assert!(path.starts_with(&base));

        let huge_base = format!("/{}", "d".repeat(400));
        let path = create_safe_url_path(&huge_base, "fish.jpg");
        assert_eq!(path.chars().count(), MAX_PATH_LENGTH);
        assert!(is_path_safe(&path));
    }

    #[test]
    fn test_is_path_safe() {
        assert!(is_path_safe("/Images/Backgrounds/fish.jpg"));
        assert!(!is_path_safe(""));
        assert!(!is_path_safe(&"a".repeat(201)));
        assert!(is_path_safe(&"a".repeat(200)));
        assert!(!is_path_safe("/images/fi\0sh.jpg"));
        assert!(!is_path_safe("/images/<script>.jpg"));
    }
}
