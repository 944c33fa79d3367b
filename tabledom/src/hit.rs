use crate::render::HeaderRegion;

/// Find the header whose rendered region contains the point.
/// Returns None when the point misses every header.
pub fn hit_header(regions: &[HeaderRegion], x: u16, y: u16) -> Option<String> {
    regions
        .iter()
        .find(|region| region.rect.contains(x, y))
        .map(|region| region.id.clone())
}
