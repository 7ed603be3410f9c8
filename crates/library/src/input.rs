use std::io::BufRead;

pub const DONE_SENTINEL: &str = "DONE";

/// Collects pasted links or identifiers, one per line, until a `DONE` line
/// (any case) or end of input. Blank lines are skipped.
pub fn read_inputs<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case(DONE_SENTINEL) {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }
        inputs.push(line);
    }
    Ok(inputs)
}
