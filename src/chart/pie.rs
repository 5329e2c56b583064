//! Payment-share pie charts.
//!
//! Two pies side by side: point-of-sale on the left, e-commerce on the
//! right, grayscale slices, labels of the form "Method (NN%)".

use crate::dataset::schema::PaymentShare;
use crate::utils::config::GRAYSCALE_PALETTE;
use crate::utils::error::ChartError;
use log::info;

const CANVAS_WIDTH: usize = 1200;
const CANVAS_HEIGHT: usize = 640;
const RADIUS: f64 = 180.0;

/// First slice starts at -35 degrees so the largest labels clear the titles
const START_ANGLE_DEG: f64 = -35.0;

/// Generate the side-by-side pie chart figure
///
/// **Public** - main entry point for pie rendering
///
/// # Errors
/// * `ChartError::EmptyShares` - either share list is empty
pub fn generate_pie_charts(
    pos: &[PaymentShare],
    ecom: &[PaymentShare],
) -> Result<String, ChartError> {
    if pos.is_empty() || ecom.is_empty() {
        return Err(ChartError::EmptyShares);
    }

    info!(
        "Generating pie charts: {} POS shares, {} e-commerce shares",
        pos.len(),
        ecom.len()
    );

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        CANVAS_WIDTH, CANVAS_HEIGHT, CANVAS_WIDTH, CANVAS_HEIGHT
    ));
    svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);

    render_pie(
        &mut svg,
        pos,
        300.0,
        340.0,
        "Means of Payment at Point of Sale",
    );
    render_pie(
        &mut svg,
        ecom,
        900.0,
        340.0,
        "Means of Payment in E-Commerce",
    );

    svg.push_str("</svg>");

    info!("Pie charts generated ({} bytes)", svg.len());
    Ok(svg)
}

fn render_pie(out: &mut String, shares: &[PaymentShare], cx: f64, cy: f64, title: &str) {
    out.push_str(&format!(
        r#"<text x="{:.0}" y="{:.0}" font-size="15" text-anchor="middle" font-weight="bold">{}</text>"#,
        cx,
        cy - RADIUS - 60.0,
        title
    ));

    let total: f64 = shares.iter().map(|s| s.percentage.max(0.0)).sum();
    if total <= 0.0 {
        return;
    }

    let mut angle = START_ANGLE_DEG;
    for (i, share) in shares.iter().enumerate() {
        let fraction = share.percentage.max(0.0) / total;
        let sweep = fraction * 360.0;
        let color = GRAYSCALE_PALETTE[i % GRAYSCALE_PALETTE.len()];

        if fraction >= 0.9995 {
            // A full circle cannot be drawn as a single arc path
            out.push_str(&format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white"/>"#,
                cx, cy, RADIUS, color
            ));
        } else if sweep > 0.0 {
            let (x0, y0) = point_on_circle(cx, cy, RADIUS, angle);
            let (x1, y1) = point_on_circle(cx, cy, RADIUS, angle + sweep);
            let large_arc = if sweep > 180.0 { 1 } else { 0 };
            out.push_str(&format!(
                r#"<path d="M {:.2} {:.2} L {:.2} {:.2} A {:.1} {:.1} 0 {} 1 {:.2} {:.2} Z" fill="{}" stroke="white"/>"#,
                cx, cy, x0, y0, RADIUS, RADIUS, large_arc, x1, y1, color
            ));
        }

        // Label just outside the slice midpoint
        let mid = angle + sweep / 2.0;
        let (lx, ly) = point_on_circle(cx, cy, RADIUS * 1.12, mid);
        let anchor = if lx >= cx { "start" } else { "end" };
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="11" text-anchor="{}">{} ({:.0}%)</text>"#,
            lx, ly, anchor, share.method, share.percentage
        ));

        angle += sweep;
    }
}

fn point_on_circle(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shares(values: &[(&str, f64)]) -> Vec<PaymentShare> {
        values
            .iter()
            .map(|(method, percentage)| PaymentShare {
                method: method.to_string(),
                percentage: *percentage,
            })
            .collect()
    }

    #[test]
    fn test_pie_charts_render_both_titles_and_labels() {
        let pos = shares(&[("Cash", 18.0), ("Credit Card", 33.0), ("Debit Card", 49.0)]);
        let ecom = shares(&[("Digital Wallet", 49.0), ("Credit Card", 51.0)]);

        let svg = generate_pie_charts(&pos, &ecom).unwrap();

        assert!(svg.contains("Means of Payment at Point of Sale"));
        assert!(svg.contains("Means of Payment in E-Commerce"));
        assert!(svg.contains("Cash (18%)"));
        assert!(svg.contains("Digital Wallet (49%)"));
        assert_eq!(svg.matches("<path").count(), 5);
    }

    #[test]
    fn test_pie_single_share_full_circle() {
        let pos = shares(&[("Cash", 100.0)]);
        let ecom = shares(&[("Card", 100.0)]);

        let svg = generate_pie_charts(&pos, &ecom).unwrap();

        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("<path").count(), 0);
    }

    #[test]
    fn test_pie_empty_shares() {
        let result = generate_pie_charts(&[], &shares(&[("Cash", 100.0)]));
        assert!(matches!(result, Err(ChartError::EmptyShares)));
    }
}
