//! LUT bake command

use crate::baker::{write_cube, StripLutBaker};
use crate::BakeArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::Result;

pub fn run(args: BakeArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), size = args.size, "bake::run");

    let baker = StripLutBaker::new(args.size)?;
    let doc = super::load_legacy(&args.input)?;
    let grading = &doc.profile.color_grading;
    if !grading.enabled {
        info!(path = %args.input.display(), "Color grading section is disabled, baking its settings anyway");
    }

    let lut = baker.bake_strip(&grading.settings)?;
    write_cube(&args.output, &lut)?;

    info!(path = %args.output.display(), size = args.size, "Wrote cube LUT");
    if verbose > 0 {
        println!("{} -> {} ({}^3)", args.input.display(), args.output.display(), args.size);
    }

    Ok(())
}
