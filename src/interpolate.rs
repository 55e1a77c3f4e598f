// src/interpolate.rs
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ASCII word characters only; `{名字}` is not a placeholder.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([0-9A-Za-z_]+)\}").expect("placeholder pattern is valid"));

/// A value substituted into a `{name}` placeholder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::String(s) => write!(f, "{}", s),
            ParamValue::Integer(i) => write!(f, "{}", i),
            ParamValue::Unsigned(u) => write!(f, "{}", u),
            ParamValue::Float(v) => f.write_str(&format_float(*v)),
        }
    }
}

/// Renders a float the way a web UI prints numbers: `Infinity`, `NaN`,
/// `1e+21`, `1.5e-7`, and `0` for negative zero.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{:e}", v);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        }
    } else {
        format!("{}", v)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::String(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        ParamValue::String(s.clone())
    }
}

macro_rules! integer_param {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(v: $ty) -> Self {
                    ParamValue::Integer(v as i64)
                }
            }
        )*
    };
}

integer_param!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(ParamValue::Unsigned(v), ParamValue::Integer)
    }
}

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        ParamValue::from(v as u64)
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Float(v as f64)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

pub type Params = HashMap<String, ParamValue>;

/// Replaces each `{name}` in `template` with `params[name]`.
///
/// Unknown names stay verbatim. One pass only: substituted text is never
/// scanned again.
pub fn interpolate(template: &str, params: &Params) -> String {
    if params.is_empty() {
        return template.to_string();
    }
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, ParamValue)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_substitutes_known_names() {
        let p = params(&[("name", "小明".into())]);
        assert_eq!(interpolate("你好 {name}", &p), "你好 小明");
    }

    #[test]
    fn test_unknown_name_left_verbatim() {
        let p = params(&[("other", "x".into())]);
        assert_eq!(interpolate("你好 {name}", &p), "你好 {name}");
        assert_eq!(interpolate("你好 {name}", &Params::new()), "你好 {name}");
    }

    #[test]
    fn test_numbers_render_plainly() {
        let p = params(&[("count", 3.into()), ("ratio", 1.5.into()), ("whole", 2.0.into())]);
        assert_eq!(
            interpolate("{count} files, {ratio}x, {whole}", &p),
            "3 files, 1.5x, 2"
        );
    }

    #[test]
    fn test_float_edge_cases() {
        let p = params(&[
            ("inf", f64::INFINITY.into()),
            ("ninf", f64::NEG_INFINITY.into()),
            ("nan", f64::NAN.into()),
            ("big", 1e21.into()),
            ("below", 1e20.into()),
            ("tiny", 1.5e-7.into()),
            ("zero", (-0.0).into()),
        ]);
        assert_eq!(
            interpolate("{inf} {ninf} {nan} {big} {below} {tiny} {zero}", &p),
            "Infinity -Infinity NaN 1e+21 100000000000000000000 1.5e-7 0"
        );
    }

    #[test]
    fn test_large_unsigned_is_exact() {
        let p = params(&[("max", u64::MAX.into()), ("small", 7u64.into()), ("len", usize::MAX.into())]);
        assert_eq!(ParamValue::from(7u64), ParamValue::Integer(7));
        assert_eq!(ParamValue::from(u64::MAX), ParamValue::Unsigned(u64::MAX));
        assert_eq!(
            interpolate("{max} {small}", &p),
            "18446744073709551615 7"
        );
        assert_eq!(interpolate("{len}", &p), usize::MAX.to_string());
    }

    #[test]
    fn test_single_pass() {
        let p = params(&[("a", "{b}".into()), ("b", "nope".into())]);
        assert_eq!(interpolate("{a} {b}", &p), "{b} nope");
    }

    #[test]
    fn test_non_word_tokens_untouched() {
        let p = params(&[("a-b", "x".into()), ("", "y".into())]);
        assert_eq!(interpolate("{a-b} {} { a }", &p), "{a-b} {} { a }");
    }

    #[test]
    fn test_non_ascii_names_are_not_placeholders() {
        let p = params(&[("名字", "x".into())]);
        assert_eq!(interpolate("你好 {名字}", &p), "你好 {名字}");
    }

    #[test]
    fn test_repeated_placeholder() {
        let p = params(&[("n", "1".into())]);
        assert_eq!(interpolate("{n}+{n}={n}{n}", &p), "1+1=11");
    }
}
