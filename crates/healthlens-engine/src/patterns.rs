//! Regexes shared by the splitters and several rules.

use regex::Regex;
use std::sync::LazyLock;

/// `####\n# TITLE #\n####` section banner; group 1 is the raw title
pub static BANNER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#+\r?\n#\s*([A-Za-z0-9_\-/ ]+?)\s*#\r?\n#+").unwrap());

/// Node/host token that anchors a block in cluster dumps: `node3`, `10.0.0.12`
pub static NODE_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:node\d+|\d{1,3}(?:\.\d{1,3}){3})\b").unwrap());

/// `df -h` style row: `<fs> <size> <used> <avail> <pct>%`
pub static DISK_USAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S+)\s+\d+\S*\s+\d+\S*\s+\d+\S*\s+(\d+)%").unwrap());

/// Same row shape but the first column must be an absolute path
pub static MOUNT_USAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(/\S+)\s+\d+\S*\s+\d+\S*\s+\d+\S*\s+(\d+)%").unwrap());

/// A token later followed by `UP` on the same line
pub static UP_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_\-:.]+).*?\bUP\b").unwrap());

/// A token later followed by `DOWN`, `FAIL` or `ERROR` on the same line
pub static DOWN_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([A-Za-z0-9_\-:.]+).*?\b(DOWN|FAIL|ERROR)\b").unwrap()
});

/// `total 4.2G` line of `ls -l` / `du` output
pub static TOTAL_SIZE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"total\s+([\d.]+[KMG]?)").unwrap());

/// Directory entries of `ls -l` output
pub static DIR_ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^drwx").unwrap());

/// `<pod> 2025-11-25T08:15:00` restart stamp
pub static RESTART_STAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\S+)\s+(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2})").unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_title_capture() {
        let text = "####\n# DB-STATS #\n####\nbody";
        let caps = BANNER_REGEX.captures(text).unwrap();
        assert_eq!(&caps[1], "DB-STATS");
    }

    #[test]
    fn test_banner_accepts_crlf() {
        let text = "#####\r\n# sps-status #\r\n#####\r\n";
        assert!(BANNER_REGEX.is_match(text));
    }

    #[test]
    fn test_node_token_shapes() {
        let found: Vec<&str> = NODE_TOKEN_REGEX
            .find_iter("node1 up, peer 10.20.30.40 and node12")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["node1", "10.20.30.40", "node12"]);
    }

    #[test]
    fn test_node_token_requires_word_boundary() {
        assert!(!NODE_TOKEN_REGEX.is_match("subnode1x"));
    }

    #[test]
    fn test_down_items_case_insensitive() {
        let count = DOWN_ITEM_REGEX.captures_iter("svc-a down\nsvc-b Error\n").count();
        assert_eq!(count, 2);
    }
}
