//! Builds a small scene and writes it as an OBJ file.
//!
//! ```text
//! cargo run --example prism               # writes ./prism.obj
//! cargo run --example prism -- out/dir    # writes out/dir/prism.obj
//! ```

use std::f64::consts::FRAC_PI_4;

use meshwright::export::{save_obj, ExportParams, ExportTarget};
use meshwright::math::Axis;
use meshwright::operations::pattern::{LinearCopy, RotationalCopy};
use meshwright::shapes::{Prism, RegularPolygon};
use meshwright::topology::Mesh;
use meshwright::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for meshwright.
    // Override with RUST_LOG env var (e.g. RUST_LOG=meshwright=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("meshwright=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let target = match std::env::args().nth(1) {
        Some(dir) => ExportTarget::in_directory(dir, "prism")?,
        None => ExportTarget::new("prism"),
    };

    let mut mesh = Mesh::from_shapes(&[&Prism::new(6, 1.0, 2.0)])?;

    let tile = RegularPolygon::new(4, 0.25).with_elevation(2.5).face()?;
    mesh.extend(LinearCopy::new(&tile, 4, 4.0, Axis::X).execute()?);
    mesh.extend(RotationalCopy::new(&tile, 8, Axis::Z).execute()?);

    let blade = RegularPolygon::new(3, 0.5)
        .with_elevation(FRAC_PI_4)
        .face()?;
    mesh.extend(RotationalCopy::new(&blade, 3, Axis::Y).execute()?);

    let path = save_obj(mesh.faces(), &target, &ExportParams::default())?;
    tracing::info!(path = %path.display(), faces = mesh.len(), "done");
    Ok(())
}
