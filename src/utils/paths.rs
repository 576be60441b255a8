use std::path::{MAIN_SEPARATOR, Path};

/// Renders a scanned path in the form stored in the manifest.
///
/// Platform separators become `/` and a single leading `.` is dropped, so the scanned
/// `./images/tile.ff` is stored as `/images/tile.ff`, the form the game
/// loader requests textures by. Paths without a leading `.` are unchanged.
#[must_use]
pub fn manifest_path(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    let rendered = if MAIN_SEPARATOR == '/' {
        rendered.into_owned()
    } else {
        rendered.replace(MAIN_SEPARATOR, "/")
    };
    match rendered.strip_prefix('.') {
        Some(rest) => rest.to_string(),
        None => rendered,
    }
}

/// Key used to decide whether two manifest paths name the same file.
///
/// Leading `./` and `/` are ignored, so `images/a.ff`, `./images/a.ff` and
/// `/images/a.ff` all map to `images/a.ff`.
#[must_use]
pub fn lookup_key(path: &str) -> String {
    let mut rest = path;
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            return rest.to_string();
        }
    }
}

/// Final path segment as a string, or the empty string for `..`/root
#[must_use]
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("./images/a.ff", "/images/a.ff")]
    #[case("images/a.ff", "images/a.ff")]
    #[case("/srv/images/a.ff", "/srv/images/a.ff")]
    #[case("../images/a.ff", "./images/a.ff")]
    #[case(".hidden/a.ff", "hidden/a.ff")]
    fn test_manifest_path(#[case] scanned: &str, #[case] expected: &str) {
        assert_eq!(manifest_path(Path::new(scanned)), expected);
    }

    #[cfg(unix)]
    #[rstest]
    #[case("./images/a\\b.ff", "/images/a\\b.ff")]
    #[case("images/back\\slash.ff", "images/back\\slash.ff")]
    fn test_manifest_path_keeps_backslash_in_names(#[case] scanned: &str, #[case] expected: &str) {
        assert_eq!(manifest_path(Path::new(scanned)), expected);
    }

    #[rstest]
    #[case("images/a.ff", "images/a.ff")]
    #[case("/images/a.ff", "images/a.ff")]
    #[case("./images/a.ff", "images/a.ff")]
    #[case(".//images/a.ff", "images/a.ff")]
    #[case("images/./a.ff", "images/./a.ff")]
    fn test_lookup_key(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(lookup_key(path), expected);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("./images/tile2.ff")), "tile2.ff");
        assert_eq!(file_name(Path::new("/")), "");
    }
}
