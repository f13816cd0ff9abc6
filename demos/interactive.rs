use std::io::{self, BufRead, Write};

use skewbox::{intersects, GeometryError, Parallelepiped, Vector3d};

fn read_point<R: BufRead>(input: &mut R, name: &str) -> Result<Vector3d, GeometryError> {
    print!("Enter parallelepiped point {}: ", name);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GeometryError::UnexpectedEof {
            point: name.to_string(),
        });
    }
    line.parse()
}

fn read_parallelepiped<R: BufRead>(input: &mut R) -> Result<Parallelepiped, GeometryError> {
    let a1 = read_point(input, "a1")?;
    let b1 = read_point(input, "b1")?;
    let c1 = read_point(input, "c1")?;
    let a2 = read_point(input, "a2")?;
    Ok(Parallelepiped::new(a1, b1, c1, a2))
}

fn main() -> Result<(), GeometryError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let p1 = read_parallelepiped(&mut input)?;
    let p2 = read_parallelepiped(&mut input)?;

    println!(
        "{}",
        if intersects(&p1, &p2) { "intersect" } else { "do not intersect" }
    );
    Ok(())
}
