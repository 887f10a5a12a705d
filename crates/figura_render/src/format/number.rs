//! Go `%v` formatting of floating point and complex numbers.

use alloc::string::String;
use core::fmt::Write;

/// Appends the shortest `%v` form of `x`.
///
/// `single` selects the shortest digits that round-trip through `f32`, as
/// `float32` and `complex64` values are printed.
pub(crate) fn write_float(out: &mut String, x: f64, single: bool) {
    if x.is_nan() {
        out.push_str("NaN");
        return;
    }
    if x.is_infinite() {
        out.push_str(if x > 0.0 { "+Inf" } else { "-Inf" });
        return;
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.2345e-7`.
    let mut scientific = String::new();
    let _ = if single {
        write!(scientific, "{:e}", x as f32)
    } else {
        write!(scientific, "{x:e}")
    };

    let (negative, scientific) = match scientific.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, scientific.as_str()),
    };
    let (mantissa, exp) = scientific.split_once('e').unwrap_or((scientific, "0"));
    let exp: i32 = exp.parse().unwrap_or_default();
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if negative {
        out.push('-');
    }
    if !(-4..6).contains(&exp) {
        write_exponent_form(out, &digits, exp);
    } else {
        write_decimal_form(out, &digits, exp);
    }
}

/// `d.ddde±XX`
fn write_exponent_form(out: &mut String, digits: &str, exp: i32) {
    let (first, rest) = digits.split_at(1);
    out.push_str(first);
    if !rest.is_empty() {
        out.push('.');
        out.push_str(rest);
    }
    out.push('e');
    out.push(if exp < 0 { '-' } else { '+' });
    let _ = write!(out, "{:02}", exp.unsigned_abs());
}

/// `ddd.ddd`, for exponents in `-4..6`.
fn write_decimal_form(out: &mut String, digits: &str, exp: i32) {
    if exp < 0 {
        out.push_str("0.");
        for _ in 0..(-exp - 1) {
            out.push('0');
        }
        out.push_str(digits);
        return;
    }

    let int_len = exp.unsigned_abs() as usize + 1;
    if digits.len() <= int_len {
        out.push_str(digits);
        for _ in digits.len()..int_len {
            out.push('0');
        }
    } else {
        let (int, frac) = digits.split_at(int_len);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    }
}

/// Appends `(re±imi)`.
pub(crate) fn write_complex(out: &mut String, re: f64, im: f64, single: bool) {
    out.push('(');
    write_float(out, re, single);
    let start = out.len();
    write_float(out, im, single);
    if !matches!(out.as_bytes().get(start), Some(b'-' | b'+')) {
        out.insert(start, '+');
    }
    out.push_str("i)");
}

#[cfg(test)]
mod tests {
    use super::{write_complex, write_float};

    fn float(x: f64) -> String {
        let mut out = String::new();
        write_float(&mut out, x, false);
        out
    }

    fn float32(x: f32) -> String {
        let mut out = String::new();
        write_float(&mut out, f64::from(x), true);
        out
    }

    fn complex(re: f64, im: f64, single: bool) -> String {
        let mut out = String::new();
        write_complex(&mut out, re, im, single);
        out
    }

    #[test]
    fn decimal_range() {
        assert_eq!(float(0.0), "0");
        assert_eq!(float(-0.0), "-0");
        assert_eq!(float(1.0), "1");
        assert_eq!(float(4.2), "4.2");
        assert_eq!(float(-2.5), "-2.5");
        assert_eq!(float(100000.0), "100000");
        assert_eq!(float(123456.5), "123456.5");
        assert_eq!(float(0.001), "0.001");
        assert_eq!(float(0.0001), "0.0001");
    }

    #[test]
    fn exponent_range() {
        assert_eq!(float(1e6), "1e+06");
        assert_eq!(float(1234567.0), "1.234567e+06");
        assert_eq!(float(0.00001), "1e-05");
        assert_eq!(float(-1.5e-7), "-1.5e-07");
        assert_eq!(float(1e21), "1e+21");
        assert_eq!(float(1.7976931348623157e308), "1.7976931348623157e+308");
    }

    #[test]
    fn special_values() {
        assert_eq!(float(f64::NAN), "NaN");
        assert_eq!(float(f64::INFINITY), "+Inf");
        assert_eq!(float(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn single_precision_digits() {
        assert_eq!(float32(4.2), "4.2");
        assert_eq!(float32(0.1), "0.1");
        assert_eq!(float(f64::from(0.1_f32)), "0.10000000149011612");
    }

    #[test]
    fn complex_numbers() {
        assert_eq!(complex(-5.0, 12.0, false), "(-5+12i)");
        assert_eq!(complex(-5.0, 12.0, true), "(-5+12i)");
        assert_eq!(complex(1.5, -0.5, false), "(1.5-0.5i)");
        assert_eq!(complex(0.0, 0.0, false), "(0+0i)");
        assert_eq!(complex(0.0, f64::INFINITY, false), "(0+Infi)");
        assert_eq!(complex(0.0, f64::NAN, false), "(0+NaNi)");
    }
}
