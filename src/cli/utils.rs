//! Shared CLI utilities.

/// Split every value on commas, trimming whitespace and discarding empty
/// segments, so `-e a,b -e c` and `-e a -e b,c` mean the same thing.
pub fn parse_csv(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}
