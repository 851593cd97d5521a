//! Millicore-style decimal scaling with magnitude-tiered precision.

use crate::sentinel::{NA_VALUE, ZERO_VALUE};

/// Scale a value in thousandths of a unit to a compact decimal string.
///
/// Precision shrinks as magnitude grows: `250` → `".25"`, `500` → `".5"`,
/// `1500` → `"1.5"`, `12_000` → `"12"`. Values under a hundredth of a unit
/// collapse to `"0"`; negatives clamp to zero.
pub fn decimal(v: i64) -> String {
    let mut vf = v as f64 / 1e3;
    if vf < 0.0 {
        vf = 0.0;
    }
    if vf < 0.01 {
        ZERO_VALUE.to_string()
    } else if vf < 1.0 {
        let s = format!("{vf:.2}");
        let frac = s.strip_prefix("0.").unwrap_or(&s);
        let mut ret = format!(".{frac}");
        // ".X0" with a non-zero tenths digit drops the trailing zero.
        if ret.len() == 3 && ret.as_bytes()[1] != b'0' && ret.ends_with('0') {
            ret.truncate(2);
        }
        ret
    } else if vf < 10.0 {
        let mut ret = format!("{vf:.1}");
        if ret.ends_with(".0") {
            ret.truncate(ret.len() - 2);
        }
        ret
    } else {
        format!("{vf:.0}")
    }
}

/// Render `used/limit(pct%)`; with no limit, just the scaled value.
pub fn decimal_pct(v: i64, l: i64) -> String {
    if l <= 0 {
        return decimal(v);
    }
    let pct = v as f64 / l as f64 * 100.0;
    format!("{}/{}({pct:.0}%)", decimal(v), decimal(l))
}

/// Raw millicores; zero is a real zero for this column.
pub fn to_millicores(v: i64) -> String {
    if v == 0 {
        return ZERO_VALUE.to_string();
    }
    v.to_string()
}

/// Raw micro-units; zero means the metric does not apply here.
pub fn to_microunits(v: i64) -> String {
    if v == 0 {
        return NA_VALUE.to_string();
    }
    v.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_hundredth_collapses_to_zero() {
        assert_eq!(decimal(0), "0");
        assert_eq!(decimal(5), "0");
        assert_eq!(decimal(9), "0");
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(decimal(-250), "0");
    }

    #[test]
    fn fractional_strips_leading_zero() {
        assert_eq!(decimal(250), ".25");
        assert_eq!(decimal(10), ".01");
    }

    #[test]
    fn fractional_single_trim_rule() {
        // tenths digit non-zero: trailing zero drops
        assert_eq!(decimal(500), ".5");
        // tenths digit zero: kept, ".05" is not ".5"
        assert_eq!(decimal(50), ".05");
    }

    #[test]
    fn units_get_one_decimal() {
        assert_eq!(decimal(1500), "1.5");
        assert_eq!(decimal(2000), "2");
        assert_eq!(decimal(9900), "9.9");
    }

    #[test]
    fn tens_round_to_integers() {
        assert_eq!(decimal(12_000), "12");
        assert_eq!(decimal(12_600), "13");
    }

    #[test]
    fn monotone_over_a_sweep() {
        let mut last = 0.0_f64;
        for v in (0..20_000).step_by(7) {
            let out = decimal(v);
            let implied: f64 = out.parse().unwrap();
            assert!(
                implied >= last - 0.051,
                "decimal({v}) = {out} implies {implied} < previous {last}"
            );
            last = implied.max(last);
        }
    }

    #[test]
    fn pct_without_limit_degrades() {
        assert_eq!(decimal_pct(50, 0), decimal(50));
        assert_eq!(decimal_pct(1500, -3), "1.5");
    }

    #[test]
    fn pct_annotates_ratio() {
        assert_eq!(decimal_pct(500, 2000), ".5/2(25%)");
        assert_eq!(decimal_pct(4000, 2000), "4/2(200%)");
    }

    #[test]
    fn zero_policies_stay_distinct() {
        assert_eq!(to_millicores(0), ZERO_VALUE);
        assert_eq!(to_microunits(0), NA_VALUE);
        assert_eq!(to_millicores(250), "250");
        assert_eq!(to_microunits(250), "250");
    }
}
