//! Geometry wire payload codec
//!
//! Payloads use the MySQL internal geometry layout:
//!
//! ```text
//! +-----------+------------+--------------+------------------+
//! | SRID (4)  | order (1)  | wkb type (4) | coordinates ...  |
//! +-----------+------------+--------------+------------------+
//! ```
//!
//! All integers and floats are little-endian. Counts are u32.
//! Only little-endian WKB is produced or accepted.

use super::{Linestring, Point, Polygon};
use crate::errors::{SpatialError, SpatialResult};

/// SRID written in front of every payload
pub const DEFAULT_SRID: u32 = 0;

const WKB_LITTLE_ENDIAN: u8 = 1;
const WKB_POINT: u32 = 1;
const WKB_LINESTRING: u32 = 2;
const WKB_POLYGON: u32 = 3;

const COUNT_LEN: usize = 4;
const POINT_LEN: usize = 16;

/// A decoded geometry of any supported shape
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    Linestring(Linestring),
    Polygon(Polygon),
}

impl Geometry {
    /// Returns the lowercase shape name
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "point",
            Geometry::Linestring(_) => "linestring",
            Geometry::Polygon(_) => "polygon",
        }
    }
}

impl From<Point> for Geometry {
    fn from(p: Point) -> Self {
        Geometry::Point(p)
    }
}

impl From<Linestring> for Geometry {
    fn from(l: Linestring) -> Self {
        Geometry::Linestring(l)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Geometry::Polygon(p)
    }
}

/// Shapes that can be written as WKB
pub trait WkbEncode {
    /// Appends the WKB body (byte order, type, coordinates)
    fn write_wkb(&self, buf: &mut Vec<u8>);
}

impl WkbEncode for Point {
    fn write_wkb(&self, buf: &mut Vec<u8>) {
        write_header(buf, WKB_POINT);
        write_point(buf, self);
    }
}

impl WkbEncode for Linestring {
    fn write_wkb(&self, buf: &mut Vec<u8>) {
        write_header(buf, WKB_LINESTRING);
        write_points(buf, &self.points);
    }
}

impl WkbEncode for Polygon {
    fn write_wkb(&self, buf: &mut Vec<u8>) {
        write_header(buf, WKB_POLYGON);
        write_count(buf, self.rings.len());
        for ring in &self.rings {
            write_points(buf, &ring.points);
        }
    }
}

impl WkbEncode for Geometry {
    fn write_wkb(&self, buf: &mut Vec<u8>) {
        match self {
            Geometry::Point(p) => p.write_wkb(buf),
            Geometry::Linestring(l) => l.write_wkb(buf),
            Geometry::Polygon(p) => p.write_wkb(buf),
        }
    }
}

/// Encodes a shape as a complete wire payload (SRID + WKB)
pub fn encode_geometry<G: WkbEncode + ?Sized>(geometry: &G) -> Vec<u8> {
    let mut buf = Vec::with_capacity(64);
    buf.extend_from_slice(&DEFAULT_SRID.to_le_bytes());
    geometry.write_wkb(&mut buf);
    buf
}

fn write_header(buf: &mut Vec<u8>, wkb_type: u32) {
    buf.push(WKB_LITTLE_ENDIAN);
    buf.extend_from_slice(&wkb_type.to_le_bytes());
}

fn write_count(buf: &mut Vec<u8>, count: usize) {
    buf.extend_from_slice(&(count as u32).to_le_bytes());
}

fn write_point(buf: &mut Vec<u8>, p: &Point) {
    buf.extend_from_slice(&p.x.to_le_bytes());
    buf.extend_from_slice(&p.y.to_le_bytes());
}

fn write_points(buf: &mut Vec<u8>, points: &[Point]) {
    write_count(buf, points.len());
    for p in points {
        write_point(buf, p);
    }
}

/// Decodes a wire payload produced by [`encode_geometry`].
///
/// The SRID is read and discarded. Trailing bytes are rejected.
pub fn decode_geometry(bytes: &[u8]) -> SpatialResult<Geometry> {
    let mut reader = WkbReader::new(bytes);
    let _srid = reader.read_u32()?;

    let order = reader.read_u8()?;
    if order != WKB_LITTLE_ENDIAN {
        return Err(SpatialError::MalformedGeometry(format!(
            "unsupported byte order {}",
            order
        )));
    }

    let geometry = match reader.read_u32()? {
        WKB_POINT => Geometry::Point(reader.read_point()?),
        WKB_LINESTRING => Geometry::Linestring(Linestring::new(reader.read_points()?)),
        WKB_POLYGON => {
            let count = reader.read_count(COUNT_LEN)?;
            let mut rings = Vec::with_capacity(count);
            for _ in 0..count {
                rings.push(Linestring::new(reader.read_points()?));
            }
            Geometry::Polygon(Polygon::new(rings))
        }
        other => {
            return Err(SpatialError::MalformedGeometry(format!(
                "unknown geometry type {}",
                other
            )))
        }
    };

    if reader.remaining() != 0 {
        return Err(SpatialError::MalformedGeometry(format!(
            "{} trailing bytes",
            reader.remaining()
        )));
    }
    Ok(geometry)
}

/// Bounds-checked little-endian cursor over a payload
struct WkbReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> WkbReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take<const N: usize>(&mut self) -> SpatialResult<[u8; N]> {
        let end = self.pos + N;
        let slice = self.bytes.get(self.pos..end).ok_or_else(|| {
            SpatialError::MalformedGeometry(format!(
                "payload truncated at byte {} (need {} more)",
                self.pos, N
            ))
        })?;
        self.pos = end;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    fn read_u8(&mut self) -> SpatialResult<u8> {
        Ok(self.take::<1>()?[0])
    }

    fn read_u32(&mut self) -> SpatialResult<u32> {
        Ok(u32::from_le_bytes(self.take::<4>()?))
    }

    fn read_f64(&mut self) -> SpatialResult<f64> {
        Ok(f64::from_le_bytes(self.take::<8>()?))
    }

    /// Reads a count whose elements each occupy at least `min_len` bytes.
    ///
    /// Counts larger than the remaining payload could hold are rejected
    /// before anything is allocated.
    fn read_count(&mut self, min_len: usize) -> SpatialResult<usize> {
        let count = self.read_u32()? as usize;
        if count.saturating_mul(min_len) > self.remaining() {
            return Err(SpatialError::MalformedGeometry(format!(
                "count {} exceeds payload size",
                count
            )));
        }
        Ok(count)
    }

    fn read_point(&mut self) -> SpatialResult<Point> {
        let x = self.read_f64()?;
        let y = self.read_f64()?;
        Ok(Point::new(x, y))
    }

    fn read_points(&mut self) -> SpatialResult<Vec<Point>> {
        let count = self.read_count(POINT_LEN)?;
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            points.push(self.read_point()?);
        }
        Ok(points)
    }
}
