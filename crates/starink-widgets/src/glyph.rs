//! Star glyph geometry.
//!
//! The outline is the classic five-pointed star. The tessellator only fills
//! convex polygons correctly, so the fill is decomposed into the center
//! pentagon plus one triangle per point.

use egui::{vec2, Pos2};

/// Inner-to-outer radius ratio of the five-pointed star. Matches the
/// proportions of the classic icon glyph.
const INNER_RATIO: f32 = 0.382;

/// The ten outline vertices of a five-pointed star, point up, alternating
/// outer and inner radius, walking clockwise on screen.
pub fn star_points(center: Pos2, outer_radius: f32) -> [Pos2; 10] {
    let inner_radius = outer_radius * INNER_RATIO;
    let mut points = [Pos2::ZERO; 10];
    for (i, point) in points.iter_mut().enumerate() {
        let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
        // Top point first, then 36-degree steps.
        let angle = std::f32::consts::TAU * (i as f32) / 10.0 - std::f32::consts::FRAC_PI_2;
        *point = center + radius * vec2(angle.cos(), angle.sin());
    }
    points
}

/// Convex decomposition of the star fill: the pentagon of inner vertices
/// plus the five point triangles.
pub fn star_polygons(center: Pos2, outer_radius: f32) -> (Vec<Pos2>, [[Pos2; 3]; 5]) {
    let points = star_points(center, outer_radius);
    let pentagon: Vec<Pos2> = points.iter().skip(1).step_by(2).copied().collect();

    let mut triangles = [[Pos2::ZERO; 3]; 5];
    for (i, triangle) in triangles.iter_mut().enumerate() {
        let tip = i * 2;
        *triangle = [points[(tip + 9) % 10], points[tip], points[tip + 1]];
    }
    (pentagon, triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Pos2 = Pos2::new(100.0, 100.0);
    const RADIUS: f32 = 12.0;

    fn distance(a: Pos2, b: Pos2) -> f32 {
        (a - b).length()
    }

    #[test]
    fn test_outline_has_ten_vertices() {
        assert_eq!(star_points(CENTER, RADIUS).len(), 10);
    }

    #[test]
    fn test_first_vertex_is_top_point() {
        let points = star_points(CENTER, RADIUS);

        assert!((points[0].x - CENTER.x).abs() < 1e-4);
        assert!((points[0].y - (CENTER.y - RADIUS)).abs() < 1e-4);
    }

    #[test]
    fn test_radii_alternate() {
        let points = star_points(CENTER, RADIUS);

        for (i, point) in points.iter().enumerate() {
            let expected = if i % 2 == 0 {
                RADIUS
            } else {
                RADIUS * INNER_RATIO
            };
            assert!(
                (distance(*point, CENTER) - expected).abs() < 1e-4,
                "vertex {i} at wrong radius"
            );
        }
    }

    #[test]
    fn test_outline_is_mirror_symmetric() {
        let points = star_points(CENTER, RADIUS);

        for i in 1..=4 {
            let left = points[10 - i];
            let right = points[i];
            assert!((left.x + right.x - 2.0 * CENTER.x).abs() < 1e-3);
            assert!((left.y - right.y).abs() < 1e-3);
        }
    }

    #[test]
    fn test_pentagon_uses_inner_vertices() {
        let (pentagon, _) = star_polygons(CENTER, RADIUS);

        assert_eq!(pentagon.len(), 5);
        for vertex in pentagon {
            assert!((distance(vertex, CENTER) - RADIUS * INNER_RATIO).abs() < 1e-4);
        }
    }

    #[test]
    fn test_triangles_cover_every_point() {
        let points = star_points(CENTER, RADIUS);
        let (_, triangles) = star_polygons(CENTER, RADIUS);

        assert_eq!(triangles.len(), 5);
        for (i, triangle) in triangles.iter().enumerate() {
            // The middle vertex of each triangle is the outer tip.
            assert_eq!(triangle[1], points[i * 2]);
            // The flanking vertices sit on the inner ring.
            for vertex in [triangle[0], triangle[2]] {
                assert!((distance(vertex, CENTER) - RADIUS * INNER_RATIO).abs() < 1e-4);
            }
        }
    }
}
