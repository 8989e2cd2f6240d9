/// Delimiter the model emits in its own generation transcript before the
/// final answer segment. Must match the service's literal exactly.
pub const ANSWER_MARKER: &str = "### Respuesta:";

/// Returns the answer segment following the **last** occurrence of the
/// marker, trimmed of surrounding whitespace. A transcript without the marker
/// passes through byte-for-byte — the trim applies only when the marker is
/// found.
pub fn extract_answer(raw: &str) -> &str {
    match raw.rfind(ANSWER_MARKER) {
        Some(i) => raw[i + ANSWER_MARKER.len()..].trim(),
        None => raw,
    }
}
