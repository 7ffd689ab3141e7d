//! Feature patterns: the point or polyline inputs to the analysis pipelines

use crate::error::{Error, Result};
use geo_types::{Geometry, LineString, Point};

/// Supported pattern geometry kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    Polyline,
}

impl GeometryKind {
    /// Display name matching the shapefile shape-type vocabulary
    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::Polyline => "Polyline",
        }
    }
}

/// Geometry of a single pattern feature
#[derive(Debug, Clone)]
pub enum PatternGeometry {
    Point(Point<f64>),
    Polyline(LineString<f64>),
}

/// One input feature: a geometry plus the numeric attribute value used to
/// label rasterized cells
#[derive(Debug, Clone)]
pub struct PatternFeature {
    pub geometry: PatternGeometry,
    pub value: f64,
}

/// A homogeneous set of point or polyline features. Read-only input to all
/// three analysis pipelines.
///
/// Geometry support is checked at construction: anything other than points
/// or polylines is rejected before any rasterization can run.
#[derive(Debug, Clone)]
pub struct FeaturePattern {
    kind: GeometryKind,
    features: Vec<PatternFeature>,
}

impl FeaturePattern {
    /// Build a point pattern from `(point, attribute value)` pairs
    pub fn from_points(points: impl IntoIterator<Item = (Point<f64>, f64)>) -> Self {
        Self {
            kind: GeometryKind::Point,
            features: points
                .into_iter()
                .map(|(p, value)| PatternFeature {
                    geometry: PatternGeometry::Point(p),
                    value,
                })
                .collect(),
        }
    }

    /// Build a polyline pattern from `(line, attribute value)` pairs
    pub fn from_polylines(lines: impl IntoIterator<Item = (LineString<f64>, f64)>) -> Self {
        Self {
            kind: GeometryKind::Polyline,
            features: lines
                .into_iter()
                .map(|(ls, value)| PatternFeature {
                    geometry: PatternGeometry::Polyline(ls),
                    value,
                })
                .collect(),
        }
    }

    /// Build a pattern from arbitrary geometries.
    ///
    /// All features must be points, or all polylines. An empty input yields
    /// an empty point pattern.
    ///
    /// # Errors
    /// [`Error::UnsupportedGeometry`] for polygons, multi-part geometries,
    /// or a mix of points and polylines.
    pub fn from_geometries(
        geometries: impl IntoIterator<Item = (Geometry<f64>, f64)>,
    ) -> Result<Self> {
        let mut kind: Option<GeometryKind> = None;
        let mut features = Vec::new();

        for (geometry, value) in geometries {
            let (feature_kind, geometry) = match geometry {
                Geometry::Point(p) => (GeometryKind::Point, PatternGeometry::Point(p)),
                Geometry::LineString(ls) => {
                    (GeometryKind::Polyline, PatternGeometry::Polyline(ls))
                }
                other => return Err(Error::UnsupportedGeometry(geometry_name(&other).into())),
            };

            match kind {
                None => kind = Some(feature_kind),
                Some(k) if k != feature_kind => {
                    return Err(Error::UnsupportedGeometry(format!(
                        "mixed {} and {} features",
                        k.name(),
                        feature_kind.name()
                    )))
                }
                Some(_) => {}
            }

            features.push(PatternFeature { geometry, value });
        }

        Ok(Self {
            kind: kind.unwrap_or(GeometryKind::Point),
            features,
        })
    }

    /// Geometry kind of the pattern
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the pattern has no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate over the features
    pub fn iter(&self) -> impl Iterator<Item = &PatternFeature> {
        self.features.iter()
    }

    /// The pattern's features as plain points.
    ///
    /// # Errors
    /// [`Error::UnsupportedGeometry`] for polyline patterns; the
    /// radial-density estimator is points-only.
    pub fn points(&self) -> Result<Vec<Point<f64>>> {
        if self.kind != GeometryKind::Point {
            return Err(Error::UnsupportedGeometry(self.kind.name().into()));
        }
        Ok(self
            .features
            .iter()
            .map(|f| match &f.geometry {
                PatternGeometry::Point(p) => *p,
                // Unreachable: kind is checked above and construction keeps
                // kind and geometry consistent.
                PatternGeometry::Polyline(ls) => Point::from(ls.0[0]),
            })
            .collect())
    }
}

fn geometry_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "Polyline",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::polygon;

    #[test]
    fn test_point_pattern() {
        let pattern = FeaturePattern::from_points(vec![
            (Point::new(0.0, 0.0), 1.0),
            (Point::new(5.0, 5.0), 2.0),
        ]);
        assert_eq!(pattern.kind(), GeometryKind::Point);
        assert_eq!(pattern.len(), 2);
        assert_eq!(pattern.points().unwrap().len(), 2);
    }

    #[test]
    fn test_polyline_pattern_points_rejected() {
        let pattern = FeaturePattern::from_polylines(vec![(
            LineString::from(vec![(0.0, 0.0), (10.0, 10.0)]),
            1.0,
        )]);
        assert_eq!(pattern.kind(), GeometryKind::Polyline);
        assert!(matches!(
            pattern.points(),
            Err(Error::UnsupportedGeometry(_))
        ));
    }

    #[test]
    fn test_from_geometries_rejects_polygon() {
        let poly = polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0),
            (x: 0.0, y: 0.0),
        ];
        let result =
            FeaturePattern::from_geometries(vec![(Geometry::Polygon(poly), 1.0)]);
        assert!(matches!(result, Err(Error::UnsupportedGeometry(_))));
    }

    #[test]
    fn test_from_geometries_rejects_mixed() {
        let result = FeaturePattern::from_geometries(vec![
            (Geometry::Point(Point::new(0.0, 0.0)), 1.0),
            (
                Geometry::LineString(LineString::from(vec![(0.0, 0.0), (1.0, 1.0)])),
                1.0,
            ),
        ]);
        assert!(matches!(result, Err(Error::UnsupportedGeometry(_))));
    }

    #[test]
    fn test_empty_pattern() {
        let pattern = FeaturePattern::from_geometries(vec![]).unwrap();
        assert!(pattern.is_empty());
        assert_eq!(pattern.kind(), GeometryKind::Point);
    }
}
