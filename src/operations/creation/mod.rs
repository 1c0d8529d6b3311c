mod make_regular_polygon;
mod make_side_faces;

pub use make_regular_polygon::MakeRegularPolygon;
pub use make_side_faces::MakeSideFaces;
