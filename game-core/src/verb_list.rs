/// Parse a verb list: one verb per line, blank lines and `#` comments skipped.
pub fn parse_verb_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
