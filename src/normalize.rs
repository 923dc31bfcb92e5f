/// Turns raw transcript text into label text: `\r\n` and lone `\r` become
/// `\n`, surrounding whitespace is stripped and the rest is uppercased with
/// Unicode case mapping (no locale tailoring).
pub fn normalize_label_text(raw: &str) -> String {
    let unified = unify_line_endings(raw);
    unified.trim().to_uppercase()
}

fn unify_line_endings(raw: &str) -> String {
    if !raw.contains('\r') {
        return raw.to_string();
    }
    raw.replace("\r\n", "\n").replace('\r', "\n")
}
