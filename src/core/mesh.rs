//! Mesh-Container: parallele Vertex-Attribut-Sequenzen und Primitiv-Art.

use super::MeshError;
use glam::{Vec2, Vec3};

/// Primitive-Topologie, mit der ein Mesh gezeichnet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Je drei Vertices ein Dreieck
    TriangleList,
    /// Jeder Vertex ein eigener Punkt
    PointList,
    /// Je zwei Vertices ein Liniensegment
    LineList,
}

/// Vertex-Daten in drei parallelen Sequenzen.
///
/// Invariante: `positions`, `colors` und `tex_coords` sind immer gleich lang.
/// Deshalb sind die Felder privat; Konstruktion über `from_parts` (geprüft)
/// oder `push_vertex`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    tex_coords: Vec<Vec3>,
}

impl Mesh {
    /// Z-Koordinate aller Vertex-Positionen (konstante Ebene).
    pub const PLANE_Z: f32 = 1.0;

    /// Erstellt ein leeres Mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein leeres Mesh mit reservierter Kapazität.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            tex_coords: Vec::with_capacity(capacity),
        }
    }

    /// Baut ein Mesh aus fertigen Sequenzen und prüft die Längen-Invariante.
    pub fn from_parts(
        positions: Vec<Vec3>,
        colors: Vec<Vec3>,
        tex_coords: Vec<Vec3>,
    ) -> Result<Self, MeshError> {
        let mesh = Self {
            positions,
            colors,
            tex_coords,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Hängt einen Vertex an; die Position landet auf der Ebene `PLANE_Z`.
    pub fn push_vertex(&mut self, position: Vec2, color: Vec3, tex_coord: Vec2) {
        self.positions.push(position.extend(Self::PLANE_Z));
        self.colors.push(color);
        self.tex_coords.push(tex_coord.extend(0.0));
    }

    /// Prüft die Längen-Invariante.
    pub fn validate(&self) -> Result<(), MeshError> {
        let (positions, colors, tex_coords) = (
            self.positions.len(),
            self.colors.len(),
            self.tex_coords.len(),
        );
        if positions != colors || positions != tex_coords {
            return Err(MeshError::LengthMismatch {
                positions,
                colors,
                tex_coords,
            });
        }
        Ok(())
    }

    /// Anzahl der Vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Gibt `true` zurück, wenn das Mesh keine Vertices enthält.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex-Positionen (z = `PLANE_Z`).
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Vertex-Farben als RGB.
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Texturkoordinaten (u, v, 0).
    pub fn tex_coords(&self) -> &[Vec3] {
        &self.tex_coords
    }

    /// Flache Sicht für den GPU-Upload: je Vertex drei Float-Tripel
    /// (Position, Farbe, Texturkoordinate) in Vertex-Reihenfolge.
    pub fn flattened_vertices(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
        self.positions
            .iter()
            .zip(&self.colors)
            .zip(&self.tex_coords)
            .map(|((p, c), t)| [p.to_array(), c.to_array(), t.to_array()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_vertex_keeps_sequences_parallel() {
        let mut mesh = Mesh::new();
        mesh.push_vertex(Vec2::new(0.5, -0.5), Vec3::ONE, Vec2::new(1.0, 0.0));
        mesh.push_vertex(Vec2::ZERO, Vec3::ZERO, Vec2::ZERO);

        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.colors().len(), 2);
        assert_eq!(mesh.tex_coords().len(), 2);
        assert_eq!(mesh.positions()[0], Vec3::new(0.5, -0.5, 1.0));
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_from_parts_rejects_length_mismatch() {
        let result = Mesh::from_parts(vec![Vec3::ZERO; 3], vec![Vec3::ZERO; 2], vec![Vec3::ZERO; 3]);
        assert_eq!(
            result,
            Err(MeshError::LengthMismatch {
                positions: 3,
                colors: 2,
                tex_coords: 3,
            })
        );
    }

    #[test]
    fn test_flattened_vertices_yield_three_triples_per_vertex() {
        let mut mesh = Mesh::with_capacity(2);
        mesh.push_vertex(Vec2::new(1.0, 2.0), Vec3::new(0.1, 0.2, 0.3), Vec2::ZERO);
        mesh.push_vertex(Vec2::new(3.0, 4.0), Vec3::ONE, Vec2::new(1.0, 1.0));

        let flat: Vec<[[f32; 3]; 3]> = mesh.flattened_vertices().collect();
        assert_eq!(flat.len(), mesh.vertex_count());
        assert_eq!(
            flat[0],
            [[1.0, 2.0, 1.0], [0.1, 0.2, 0.3], [0.0, 0.0, 0.0]]
        );
        assert_eq!(
            flat[1],
            [[3.0, 4.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]]
        );
    }

    #[test]
    fn test_empty_mesh_is_valid() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.flattened_vertices().count(), 0);
    }
}
