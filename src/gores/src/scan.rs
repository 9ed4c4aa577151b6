//! Map directory scanning

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

/// Suffix identifying map files
pub const MAP_SUFFIX: &str = ".map";

/// Scan a tier's map directory and return the extension-stripped names of
/// its `.map` files in natural order.
///
/// A nonexistent directory yields an empty list, never an error. The scan
/// does not recurse and does not deduplicate.
pub fn scan_map_names(dir: &Path) -> io::Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if let Some(stripped) = name.strip_suffix(MAP_SUFFIX) {
            names.push(stripped.to_string());
        }
    }

    names.sort_by(|a, b| natural_cmp(a, b));
    Ok(names)
}

/// Numeric-aware string comparison: digit runs compare by value and other
/// chunks compare case-insensitively, so `map9` sorts before `map10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digit_run(&mut ca);
                let run_b = take_digit_run(&mut cb);
                let ord = cmp_digit_runs(&run_a, &run_b);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.to_lowercase().cmp(y.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                ca.next();
                cb.next();
            }
        }
    }

    // Equal modulo case and leading zeros: fall back to a plain comparison
    // to keep the order total and deterministic.
    a.cmp(b)
}

fn take_digit_run(chars: &mut Peekable<Chars>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(*c);
        chars.next();
    }
    run
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_natural_cmp_numeric_runs() {
        assert_eq!(natural_cmp("a2", "a10"), Ordering::Less);
        assert_eq!(natural_cmp("map9", "map10"), Ordering::Less);
        assert_eq!(natural_cmp("map10", "map9"), Ordering::Greater);
        assert_eq!(natural_cmp("map2", "map2"), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_case_insensitive() {
        assert_eq!(natural_cmp("Alpha", "beta"), Ordering::Less);
        assert_eq!(natural_cmp("beta", "Alpha"), Ordering::Greater);
        // Same letters in different case still order deterministically
        assert_ne!(natural_cmp("Map1", "map1"), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_leading_zeros_total_order() {
        // 02 and 2 have the same value; the full-string tiebreak keeps the
        // order total
        assert_ne!(natural_cmp("map02", "map2"), Ordering::Equal);
        assert_eq!(natural_cmp("map02", "map10"), Ordering::Less);
    }

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let maps = scan_map_names(&dir.path().join("does-not-exist")).unwrap();
        assert!(maps.is_empty());
    }

    #[test]
    fn test_scan_filters_and_strips_extension() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("Aip-Gores.map")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("Gores10.map")).unwrap();
        File::create(dir.path().join("Gores2.map")).unwrap();

        let maps = scan_map_names(dir.path()).unwrap();
        assert_eq!(maps, vec!["Aip-Gores", "Gores2", "Gores10"]);
    }

    #[test]
    fn test_scan_does_not_recurse() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("deep.map")).unwrap();
        File::create(dir.path().join("top.map")).unwrap();

        let maps = scan_map_names(dir.path()).unwrap();
        assert_eq!(maps, vec!["top"]);
    }
}
