use grid_2d::Coord;
use std::io::{self, Write};

/// Writes each position as `row col` on its own line, in the given order,
/// followed by a line containing `.`.
pub fn write_route<W: Write>(mut writer: W, path: &[Coord]) -> io::Result<()> {
    for coord in path {
        writeln!(writer, "{} {}", coord.y, coord.x)?;
    }
    writeln!(writer, ".")
}

pub fn route_to_string(path: &[Coord]) -> String {
    let mut out = Vec::new();
    write_route(&mut out, path).expect("writing to a Vec");
    String::from_utf8_lossy(&out).into_owned()
}
