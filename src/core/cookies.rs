/// Extracts cookie names from a `document.cookie` style header string.
///
/// The page hands back `"name=value; name2=value2"`. The audit service
/// only wants the names, in page order, duplicates included. An empty
/// string means the page set no cookies at all.
pub fn cookie_names(header: &str) -> Vec<String> {
    if header.is_empty() {
        return Vec::new();
    }

    header
        .split("; ")
        .map(|entry| {
            entry
                .split_once('=')
                .map_or(entry, |(name, _)| name)
                .trim()
                .to_string()
        })
        .collect()
}
