// Escape single quotes for embedding in a single-quoted SQL literal.
// No other character is altered.
pub fn escape_sql(text: &str) -> String {
    text.replace('\'', "''")
}
