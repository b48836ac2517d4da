//! HTML pages for the browser flow, rendered with askama. Echoed values
//! are escaped by the templates.

use askama::Template;
use fert_core::{Error, Result};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate;

#[derive(Template)]
#[template(path = "result.html")]
struct ResultTemplate<'a> {
    fertilizer: &'a str,
    soil_type: &'a str,
    crop_type: &'a str,
    n: String,
    p: String,
    k: String,
}

/// Values echoed back on the result page.
#[derive(Debug, Clone)]
pub struct ResultView<'a> {
    pub fertilizer: &'a str,
    pub soil_type: &'a str,
    pub crop_type: &'a str,
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

pub fn home_page() -> Result<String> {
    HomeTemplate
        .render()
        .map_err(|e| Error::Render(e.to_string()))
}

pub fn result_page(view: &ResultView<'_>) -> Result<String> {
    ResultTemplate {
        fertilizer: view.fertilizer,
        soil_type: view.soil_type,
        crop_type: view.crop_type,
        n: float_repr(view.n),
        p: float_repr(view.p),
        k: float_repr(view.k),
    }
    .render()
    .map_err(|e| Error::Render(e.to_string()))
}

/// Formats a reading the way a form post has always echoed it: `10.0`,
/// `0.0001`, `1e+16`, `1e-05`.
///
/// `{:?}` already picks the same shortest digits and switches to
/// exponent form at the same bounds (below 1e-4, from 1e16 up). Only the
/// exponent needs an explicit sign and at least two digits.
pub fn float_repr(value: f64) -> String {
    let debug = format!("{:?}", value);
    match debug.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => format!(
                "{}e{}{:02}",
                mantissa,
                if exponent < 0 { '-' } else { '+' },
                exponent.abs()
            ),
            Err(_) => debug,
        },
        None => debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(soil_type: &str) -> ResultView<'_> {
        ResultView {
            fertilizer: "DAP-MOP",
            soil_type,
            crop_type: "oil seeds",
            n: 10.0,
            p: 2.5,
            k: 0.0,
        }
    }

    #[test]
    fn test_home_page_posts_to_predict() {
        let page = home_page().unwrap();
        assert!(page.contains(r#"<form action="/predict" method="post">"#));
        assert!(page.contains("font-family: Arial"));
        for field in ["soil_type", "crop_type", "n", "p", "k"] {
            assert!(page.contains(&format!(r#"name="{}""#, field)));
        }
    }

    #[test]
    fn test_result_page_echoes_values() {
        let page = result_page(&view("loamy")).unwrap();
        assert!(page.contains("Recommended Fertilizer: DAP-MOP"));
        assert!(page.contains("Crop Type: oil seeds"));
        assert!(page.contains("N (Nitrogen): 10.0"));
        assert!(page.contains("P (Phosphorus): 2.5"));
        assert!(page.contains("K (Potassium): 0.0"));
    }

    #[test]
    fn test_result_page_escapes_markup() {
        let page = result_page(&view("<script>alert(1)</script>")).unwrap();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_float_repr() {
        assert_eq!(float_repr(10.0), "10.0");
        assert_eq!(float_repr(2.5), "2.5");
        assert_eq!(float_repr(-3.0), "-3.0");
        assert_eq!(float_repr(0.0001), "0.0001");
        assert_eq!(float_repr(1e15), "1000000000000000.0");
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(1.5e16), "1.5e+16");
        assert_eq!(float_repr(1e100), "1e+100");
        assert_eq!(float_repr(1e-5), "1e-05");
        assert_eq!(float_repr(-2.5e-7), "-2.5e-07");
    }
}
