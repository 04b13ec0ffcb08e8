use std::fmt::{self, Write};
use transit_catalogue::render::{Circle, PathStyle, Polyline, Primitive, Text};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;
const INDENT: &str = "  ";

/// Serialize primitives into a standalone SVG document, one element per line
pub fn render_document(primitives: &[Primitive]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_document(&mut out, primitives)?;
    Ok(out)
}

fn write_document(w: &mut impl Write, primitives: &[Primitive]) -> fmt::Result {
    writeln!(w, "{HEADER}")?;
    for primitive in primitives {
        w.write_str(INDENT)?;
        match primitive {
            Primitive::Polyline(line) => write_polyline(w, line)?,
            Primitive::Circle(circle) => write_circle(w, circle)?,
            Primitive::Text(text) => write_text(w, text)?,
        }
        writeln!(w)?;
    }
    write!(w, "</svg>")
}

fn write_polyline(w: &mut impl Write, line: &Polyline) -> fmt::Result {
    w.write_str(r#"<polyline points=""#)?;
    for (i, point) in line.points.iter().enumerate() {
        if i > 0 {
            w.write_char(' ')?;
        }
        write!(w, "{},{}", point.x, point.y)?;
    }
    w.write_str(r#"""#)?;
    write_style(w, &line.style)?;
    w.write_str("/>")
}

fn write_circle(w: &mut impl Write, circle: &Circle) -> fmt::Result {
    write!(
        w,
        r#"<circle cx="{}" cy="{}" r="{}""#,
        circle.center.x, circle.center.y, circle.radius
    )?;
    write_style(w, &circle.style)?;
    w.write_str("/>")
}

fn write_text(w: &mut impl Write, text: &Text) -> fmt::Result {
    w.write_str("<text")?;
    write_style(w, &text.style)?;
    write!(
        w,
        r#" x="{}" y="{}" dx="{}" dy="{}" font-size="{}""#,
        text.position.x, text.position.y, text.offset.x, text.offset.y, text.font_size
    )?;
    if let Some(family) = &text.font_family {
        write!(w, r#" font-family="{}""#, escape(family))?;
    }
    if let Some(weight) = &text.font_weight {
        write!(w, r#" font-weight="{}""#, escape(weight))?;
    }
    write!(w, ">{}</text>", escape(&text.data))
}

fn write_style(w: &mut impl Write, style: &PathStyle) -> fmt::Result {
    if let Some(fill) = &style.fill {
        write!(w, r#" fill="{fill}""#)?;
    }
    if let Some(stroke) = &style.stroke {
        write!(w, r#" stroke="{stroke}""#)?;
    }
    if let Some(width) = style.stroke_width {
        write!(w, r#" stroke-width="{width}""#)?;
    }
    if let Some(cap) = style.line_cap {
        write!(w, r#" stroke-linecap="{cap}""#)?;
    }
    if let Some(join) = style.line_join {
        write!(w, r#" stroke-linejoin="{join}""#)?;
    }
    Ok(())
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use transit_catalogue::prelude::*;

    #[test]
    fn test_empty_document() {
        assert_eq!(
            render_document(&[]).unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n\
             </svg>"
        );
    }

    #[test]
    fn test_polyline() {
        let line = Primitive::Polyline(Polyline {
            points: vec![ScreenPoint::new(50.0, 50.0), ScreenPoint::new(99.5, 12.25)],
            style: PathStyle::default()
                .with_fill(Color::None)
                .with_stroke(Color::named("green"), 14.0)
                .rounded(),
        });

        let document = render_document(&[line]).unwrap();
        assert!(document.contains(
            r#"  <polyline points="50,50 99.5,12.25" fill="none" stroke="green" stroke-width="14" stroke-linecap="round" stroke-linejoin="round"/>"#
        ));
    }

    #[test]
    fn test_circle() {
        let circle = Primitive::Circle(Circle {
            center: ScreenPoint::new(1.5, 2.0),
            radius: 5.0,
            style: PathStyle::default().with_fill(Color::named("white")),
        });

        let document = render_document(&[circle]).unwrap();
        assert!(document.contains(r#"  <circle cx="1.5" cy="2" r="5" fill="white"/>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let text = Primitive::Text(Text {
            position: ScreenPoint::new(10.0, 20.0),
            offset: ScreenPoint::new(7.0, -3.0),
            font_size: 20,
            font_family: Some("Verdana".into()),
            font_weight: None,
            data: r#"Tom & "Jerry" <'s>"#.into(),
            style: PathStyle::default().with_fill(Color::rgba(255, 255, 255, 0.85)),
        });

        let document = render_document(&[text]).unwrap();
        assert!(document.contains(
            r#"<text fill="rgba(255,255,255,0.85)" x="10" y="20" dx="7" dy="-3" font-size="20" font-family="Verdana">Tom &amp; &quot;Jerry&quot; &lt;&apos;s&gt;</text>"#
        ));
    }

    #[test]
    fn test_rendered_map_document() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", Coordinates::new(0.0, 0.0));
        catalogue.add_stop("B", Coordinates::new(1.0, 1.0));
        catalogue.add_route("7", &["A", "B"], false);

        let primitives = MapRenderer::new(RenderSettings::default())
            .render(&catalogue)
            .unwrap();
        let document = render_document(&primitives).unwrap();

        assert_eq!(document.lines().count(), primitives.len() + 3);
        assert!(document.ends_with("</svg>"));
    }
}
