use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use tableau_palettes::{color_pal, shape_pal, ColorRange, ColorVariant,
                       GradientOptions, Registry, RGBColor, ShapeVariant};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 c.to_hex())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 c.to_gray().to_hex())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn range(fh: &mut impl Write, g: impl ColorRange<RGB8>, n: usize,
         width: u32, comment: &str) -> Result<(), Err> {
    let colors: Vec<_> = g.range(0., 1., n).map(|(_, c)| c).collect();
    table_of_colors(fh, &colors, width, comment)
}

fn main() -> Result<(), Err> {
    let reg = Registry::tableau();
    let mut fh = BufWriter::new(File::create("gradient.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Tableau palettes: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    for variant in ColorVariant::ALL {
        writeln!(fh, "<h3>Color palettes: {variant}</h3>")?;
        for name in reg.names(variant) {
            let pal = color_pal(name, variant, 1)?;
            let colors = pal.apply(pal.max_n())?;
            let c = format!("{name} ({} colors)", pal.max_n());
            table_of_colors(&mut fh, &colors, 40, &c)?;
            if variant != ColorVariant::Regular {
                range(&mut fh, pal.gradient::<RGB8>(), 256, 1,
                      &format!("{name} (interpolated)"))?;
            }
        }
    }

    writeln!(fh, "<h3>Positioned gradients</h3>")?;
    let opts = GradientOptions {
        positions: Some(vec![0., 0.1, 0.2, 0.5, 0.8, 0.9, 1.]),
        ..GradientOptions::diverging()
    };
    range(&mut fh, opts.gradient::<RGB8>()?, 256, 1,
          "Orange-Blue Diverging, squeezed ends")?;

    writeln!(fh, "<h3>Shape palettes</h3>")?;
    for variant in ShapeVariant::ALL {
        let pal = shape_pal(variant);
        let glyphs: Vec<String> = pal.iter().map(|m| m.to_string()).collect();
        writeln!(fh, "<p style=\"font-size: 24px\">{} \
                      <span style=\"font-size: 14px\">{variant}</span></p>",
                 glyphs.join(" "))?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
