//! Renders a scene with one of every primitive (`test.svg`), then a
//! 25-spoke target and a geometric three-bar run, opening the latter two.

use miette::Result;
use testpattern::patterns::{sampler_radial_scene, sampler_scene, sampler_three_bar_scene};
use testpattern::{PageLayout, Viewer};

fn main() -> Result<()> {
    testpattern::log::init_subscriber();
    let viewer = Viewer::default();

    sampler_scene()?.write_svg(None)?;

    for mut scene in [
        sampler_radial_scene()?,
        sampler_three_bar_scene(&PageLayout::default())?,
    ] {
        scene.write_svg(None)?;
        scene.display(&viewer)?;
    }
    Ok(())
}
