//! Writes two stacked radial spoke targets to `radialPattern.svg` and opens
//! the result in the default viewer.

use miette::Result;
use testpattern::patterns::radial_scene;
use testpattern::{PageLayout, Viewer};

fn main() -> Result<()> {
    testpattern::log::init_subscriber();

    let mut scene = radial_scene(&PageLayout::default())?;
    scene.write_svg(None)?;
    scene.display(&Viewer::default())?;
    Ok(())
}
