pub fn strip_prefix_token<'a>(src: &'a str, search: &str) -> Option<&'a str> {
    src.strip_prefix(search)
        .filter(|src| src.chars().next().is_none_or(<char>::is_whitespace))
        .map(<str>::trim_start)
}
/// Splits `src` into its first whitespace-separated token and the trimmed
/// rest. `None` if there is no rest.
pub fn split_first_token(src: &str) -> Option<(&str, &str)> {
    let (first, rest) = src.trim().split_once(<char>::is_whitespace)?;
    Some((first, rest.trim_start()))
}
