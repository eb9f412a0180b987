pub mod export;
pub mod json;
pub mod text;

/// Two-decimal rendering used by the detail card and tables; missing is `nan`.
pub fn format_f64_2(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:.2}", v),
        None => "nan".to_string(),
    }
}
