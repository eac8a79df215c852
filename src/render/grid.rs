use std::fmt::Write as _;

use anyhow::Context as _;

use crate::{
    foundation::core::CanvasSize,
    foundation::error::FacetteResult,
};

/// Tick pitch along both axes, in canvas pixels.
const TICK_STEP: i64 = 50;

/// Draw the coordinate axes overlay onto `pixmap`, on top of whatever is
/// already there.
///
/// The overlay is produced as SVG markup and rasterized through the same
/// pipeline as part artwork, so its placement matches part placement
/// exactly. It shows dashed center axes, tick marks every 50 px with
/// center-relative labels (the y labels are sign-flipped so up reads
/// positive) and a `(0,0)` marker at the canvas center.
pub fn draw_grid(
    pixmap: &mut resvg::tiny_skia::Pixmap,
    canvas: CanvasSize,
) -> FacetteResult<()> {
    let markup = grid_markup(canvas);
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(markup.as_bytes(), &opts).context("parse axes markup")?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    Ok(())
}

/// SVG markup for the axes overlay at the given canvas size.
pub fn grid_markup(canvas: CanvasSize) -> String {
    let (w, h) = (i64::from(canvas.width), i64::from(canvas.height));
    let (cx, cy) = (w / 2, h / 2);

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\">"
    );

    let _ = write!(
        svg,
        "<g stroke=\"#007bff\" stroke-width=\"2\" stroke-dasharray=\"5 5\" opacity=\"0.7\">\
         <line x1=\"0\" y1=\"{cy}\" x2=\"{w}\" y2=\"{cy}\"/>\
         <line x1=\"{cx}\" y1=\"0\" x2=\"{cx}\" y2=\"{h}\"/>\
         </g>"
    );

    let _ = write!(
        svg,
        "<g stroke=\"#007bff\" stroke-width=\"1\" fill=\"#007bff\" \
         font-family=\"Arial, sans-serif\" font-size=\"12\">"
    );
    let mut x = -(cx / TICK_STEP) * TICK_STEP;
    while x <= cx {
        if x != 0 {
            let sx = cx + x;
            if (0..=w).contains(&sx) {
                let y0 = cy - 5;
                let y1 = cy + 5;
                let ty = cy + 15;
                let _ = write!(
                    svg,
                    "<line x1=\"{sx}\" y1=\"{y0}\" x2=\"{sx}\" y2=\"{y1}\"/>\
                     <text x=\"{sx}\" y=\"{ty}\" text-anchor=\"middle\">{x}</text>"
                );
            }
        }
        x += TICK_STEP;
    }
    let mut y = -(cy / TICK_STEP) * TICK_STEP;
    while y <= cy {
        if y != 0 {
            let sy = cy + y;
            if (0..=h).contains(&sy) {
                let x0 = cx - 5;
                let x1 = cx + 5;
                let tx = cx - 10;
                let ty = sy + 4;
                // Labels read positive upward on screen.
                let label = -y;
                let _ = write!(
                    svg,
                    "<line x1=\"{x0}\" y1=\"{sy}\" x2=\"{x1}\" y2=\"{sy}\"/>\
                     <text x=\"{tx}\" y=\"{ty}\" text-anchor=\"end\">{label}</text>"
                );
            }
        }
        y += TICK_STEP;
    }
    let _ = write!(svg, "</g>");

    let _ = write!(
        svg,
        "<text x=\"{tx}\" y=\"{ty}\" font-family=\"Arial, sans-serif\" font-size=\"12\" \
         fill=\"#dc3545\">(0,0)</text></svg>",
        tx = cx + 5,
        ty = cy - 5,
    );

    svg
}

#[cfg(test)]
#[path = "../../tests/unit/render/grid.rs"]
mod tests;
