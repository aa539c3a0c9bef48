/// Split on a separator, keeping empty pieces.
///
/// This forwards to [`str::split`], so splitting on the empty separator
/// yields an empty piece before and after every character boundary.
pub fn split(separator: &str, s: &str) -> Vec<String> {
    s.split(separator).map(String::from).collect()
}
