//! Writes nine three-bar resolution targets to `3-bar-pattern-test.svg`.

use miette::Result;
use testpattern::PageLayout;
use testpattern::patterns::three_bar_scene;

fn main() -> Result<()> {
    testpattern::log::init_subscriber();

    let mut scene = three_bar_scene(&PageLayout::default())?;
    scene.write_svg(None)?;
    Ok(())
}
