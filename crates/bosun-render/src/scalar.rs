//! Primitive scalar renderers shared by the table columns.

/// Print a number with `,` thousand separators.
pub fn group_thousands(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    let mut n = n.unsigned_abs();
    if n < 1_000 {
        return format!("{sign}{n}");
    }
    let mut parts: Vec<String> = Vec::new();
    while n >= 1_000 {
        parts.push(format!("{:03}", n % 1_000));
        n /= 1_000;
    }
    parts.push(n.to_string());
    parts.reverse();
    format!("{sign}{}", parts.join(","))
}

/// Render a percentage as `"N%"`.
pub fn print_perc(p: i64) -> String {
    format!("{p}%")
}

/// Wrap an already formatted percentage in parens.
pub fn as_perc(p: &str) -> String {
    format!("({p})")
}

pub fn int_to_str(p: i64) -> String {
    p.to_string()
}

pub fn bool_to_str(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

/// An absent flag on the source object reads as false.
pub fn bool_opt_to_str(b: Option<bool>) -> &'static str {
    bool_to_str(b.unwrap_or(false))
}

pub fn str_opt_to_str(s: Option<&str>) -> String {
    s.unwrap_or_default().to_string()
}

/// Render an error cell; no error is an empty cell.
pub fn as_status(err: Option<&anyhow::Error>) -> String {
    match err {
        Some(e) => e.to_string(),
        None => String::new(),
    }
}

/// True when every entry is empty.
pub fn blank(ss: &[String]) -> bool {
    ss.iter().all(|s| s.is_empty())
}

/// Join entries with `sep`, skipping blanks.
pub fn join(ss: &[String], sep: &str) -> String {
    let kept: Vec<&str> = ss
        .iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect();
    kept.join(sep)
}

/// Fold digit characters into their numeric value, most significant first.
///
/// Non-digit characters count as zero; callers slice digits out beforehand.
pub fn digits_to_num(digits: &[char]) -> i64 {
    let mut r: i64 = 0;
    let mut m: i64 = 1;
    for c in digits.iter().rev() {
        r += i64::from(c.to_digit(10).unwrap_or(0)) * m;
        m *= 10;
    }
    r
}
