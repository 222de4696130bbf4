//! SVG rendering of a three-set diagram.
//!
//! Circles have equal radii and their centers sit on an equilateral triangle
//! whose side equals the radius: A top-left, B top-right, C at the bottom.
//! Region sizes are shown by the counts only.
use crate::style::PlotStyle;
use crate::subsets::{Region, Venn3};
use crate::utils::escape_xml;
use log::debug;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

/// Circle centers, radius and text anchors for a given canvas.
#[derive(Debug)]
struct Layout {
    radius: f64,
    centers: [Point; 3],
    regions: [Point; 7],
    labels: [Point; 3],
    title: Option<Point>,
}

impl Layout {
    fn new(style: &PlotStyle, with_title: bool) -> Self {
        let width = style.width as f64;
        let height = style.height as f64;
        let title_band = if with_title { style.font_size * 2.5 } else { 0.0 };
        let area_height = (height - title_band).max(1.0);
        // the diagram with its labels spans about 3.4r across and 3.6r down
        let radius = (width / 3.4).min(area_height / 3.6);
        let centroid = Point {
            x: width / 2.0,
            y: title_band + area_height * 0.46,
        };
        // unit vectors from the centroid towards the A, B and C centers
        let dirs = [(-SQRT_3 / 2.0, -0.5), (SQRT_3 / 2.0, -0.5), (0.0, 1.0)];
        let center_offset = radius / SQRT_3;
        let at = |dir: (f64, f64), dist: f64| Point {
            x: centroid.x + dir.0 * dist,
            y: centroid.y + dir.1 * dist,
        };
        let opposite = |dir: (f64, f64)| (-dir.0, -dir.1);

        let centers = [
            at(dirs[0], center_offset),
            at(dirs[1], center_offset),
            at(dirs[2], center_offset),
        ];
        let only = center_offset + radius * 0.55;
        let pair = radius * 0.6;
        let regions = [
            at(dirs[0], only),
            at(dirs[1], only),
            at(opposite(dirs[2]), pair),
            at(dirs[2], only),
            at(opposite(dirs[1]), pair),
            at(opposite(dirs[0]), pair),
            centroid,
        ];
        let label_dist = center_offset + radius * 1.12;
        let labels = [
            at(dirs[0], label_dist),
            at(dirs[1], label_dist),
            at(dirs[2], label_dist + style.font_size),
        ];
        let title = with_title.then(|| Point {
            x: width / 2.0,
            y: style.font_size * 1.5,
        });
        Layout {
            radius,
            centers,
            regions,
            labels,
            title,
        }
    }
}

/// Draw `venn` as a standalone SVG document.
pub fn render_svg(venn: &Venn3, title: Option<&str>, style: &PlotStyle) -> String {
    let title = title.filter(|t| !t.is_empty());
    let layout = Layout::new(style, title.is_some());
    debug!("circle radius {:.1}px on a {}x{} canvas", layout.radius, style.width, style.height);

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<style>
  text {{ font-family: 'DejaVu Sans', Arial, sans-serif; font-size: {fs}px; text-anchor: middle; dominant-baseline: middle; }}
  .set-label {{ font-weight: bold; }}
  .title {{ font-size: {ts}px; }}
</style>
<rect width="100%" height="100%" fill="{bg}"/>
"#,
        w = style.width,
        h = style.height,
        fs = style.font_size,
        ts = style.font_size * 1.25,
        bg = escape_xml(&style.background),
    ));

    for (center, color) in layout.centers.iter().zip(style.colors.iter()) {
        svg.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
            center.x,
            center.y,
            layout.radius,
            escape_xml(color),
            style.opacity
        ));
        svg.push('\n');
    }

    for region in Region::ALL {
        let anchor = layout.regions[region.index()];
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="subset">{}</text>"#,
            anchor.x,
            anchor.y,
            venn.subset(region)
        ));
        svg.push('\n');
    }

    for (anchor, label) in layout.labels.iter().zip(venn.labels.iter()) {
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="set-label">{}</text>"#,
            anchor.x,
            anchor.y,
            escape_xml(label)
        ));
        svg.push('\n');
    }

    if let (Some(anchor), Some(title)) = (layout.title, title) {
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="title">{}</text>"#,
            anchor.x,
            anchor.y,
            escape_xml(title)
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venn() -> Venn3 {
        Venn3 {
            subsets: [10, 20, 1, 30, 2, 3, 5],
            labels: ["a.vcf".into(), "b&b.vcf".into(), "c.vcf".into()],
            identifiers: ["/x/a.vcf".into(), "/x/b&b.vcf".into(), "/x/c.vcf".into()],
        }
    }

    fn dist(p: Point, q: Point) -> f64 {
        ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt()
    }

    #[test]
    fn test_render_svg() {
        let svg = render_svg(&venn(), Some("Calls <chr1>"), &PlotStyle::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 3);
        for count in venn().subsets {
            assert!(svg.contains(&format!(r#"class="subset">{count}</text>"#)));
        }
        assert!(svg.contains(">a.vcf</text>"));
        assert!(svg.contains(">b&amp;b.vcf</text>"));
        assert!(svg.contains(r#"class="title">Calls &lt;chr1&gt;</text>"#));
        assert!(svg.contains(r#"fill="blue" fill-opacity="0.4""#));
    }

    #[test]
    fn test_render_without_title() {
        let svg = render_svg(&venn(), None, &PlotStyle::default());
        assert!(!svg.contains(r#"class="title""#));
        let svg = render_svg(&venn(), Some(""), &PlotStyle::default());
        assert!(!svg.contains(r#"class="title""#));
    }

    #[test]
    fn test_region_anchors_inside_their_circles() {
        let layout = Layout::new(&PlotStyle::default(), true);
        let memberships: [[bool; 3]; 7] = [
            [true, false, false],
            [false, true, false],
            [true, true, false],
            [false, false, true],
            [true, false, true],
            [false, true, true],
            [true, true, true],
        ];
        for (anchor, inside) in layout.regions.iter().zip(memberships.iter()) {
            for (center, expected) in layout.centers.iter().zip(inside.iter()) {
                assert_eq!(dist(*anchor, *center) < layout.radius, *expected);
            }
        }
    }

    #[test]
    fn test_layout_fits_canvas() {
        let style = PlotStyle {
            width: 400,
            height: 900,
            ..PlotStyle::default()
        };
        let layout = Layout::new(&style, false);
        for center in layout.centers {
            assert!(center.x - layout.radius >= 0.0);
            assert!(center.x + layout.radius <= 400.0);
            assert!(center.y - layout.radius >= 0.0);
            assert!(center.y + layout.radius <= 900.0);
        }
    }
}
