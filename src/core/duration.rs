//! Compound duration strings: `25`, `25m`, `1h`, `1h30m`, `90s`

/// Parse a duration string into whole minutes, never less than 1.
///
/// Digits accumulate until a unit suffix: `h` adds hours, `m` minutes and
/// `s` seconds as a fraction of a minute. Digits with no suffix are minutes.
/// Other characters, and suffixes with no digits before them, are ignored.
/// The sum is floored before clamping, so `90s` is one minute.
pub(crate) fn parse_duration(input: &str) -> u64 {
    let normalized = input.trim().to_ascii_lowercase();

    if !normalized.is_empty() && normalized.chars().all(|c| c.is_ascii_digit()) {
        return normalized.parse::<u64>().unwrap_or(u64::MAX).max(1);
    }

    let mut total_minutes = 0.0_f64;
    let mut buffer = String::new();

    for c in normalized.chars() {
        if c.is_ascii_digit() {
            buffer.push(c);
            continue;
        }
        if buffer.is_empty() {
            continue;
        }
        let factor = match c {
            'h' => 60.0,
            'm' => 1.0,
            's' => 1.0 / 60.0,
            _ => continue,
        };
        total_minutes += take_number(&mut buffer) * factor;
    }

    if !buffer.is_empty() {
        total_minutes += take_number(&mut buffer);
    }

    (total_minutes.floor() as u64).max(1)
}

fn take_number(buffer: &mut String) -> f64 {
    let value = buffer.parse::<f64>().unwrap_or(0.0);
    buffer.clear();
    value
}
