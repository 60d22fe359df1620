/// Formats a float the way results are printed to users, matching Python's
/// `repr` for floats: integral values keep a single decimal (`4.0`, `-0.0`),
/// other values use the shortest representation that round-trips (`-0.2`,
/// `0.7886751345948129`), and magnitudes below `1e-4` or from `1e16` up use
/// scientific notation with a signed, two-digit exponent (`1e-05`, `1e+16`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return format!("{value}");
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        scientific(value)
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// `1.5e-7` becomes `1.5e-07`, `1e16` becomes `1e+16`.
fn scientific(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}
