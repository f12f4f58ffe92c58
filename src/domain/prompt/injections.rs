/// Format alternating key/value parts into the injected context block.
///
/// Empty parts are dropped first. Each key is followed by its value line when
/// present, and successive pairs are separated by one blank line.
pub fn build_injections(parts: &[&str]) -> String {
    let filtered: Vec<&str> = parts.iter().copied().filter(|part| !part.is_empty()).collect();
    let mut lines: Vec<&str> = Vec::with_capacity(filtered.len() * 2);

    for (index, pair) in filtered.chunks(2).enumerate() {
        if index > 0 {
            lines.push("");
        }
        lines.push(pair[0]);
        if let Some(value) = pair.get(1) {
            lines.push(value);
        }
    }

    lines.join("\n")
}
