//! Native pattern rasterizer
//!
//! Bins features into an occupancy grid over the study-area extent. Cell
//! labels follow the aggregation policies of the classic conversion tools:
//! points label a cell with the most frequent attribute value among the
//! points it receives, polylines with the attribute value of the feature
//! covering the greatest length inside the cell.

use fractus_core::{
    Error, FeaturePattern, GeometryKind, GridTransform, OccupancyGrid, PatternGeometry, Result,
    StudyArea,
};
use geo_types::Line;
use std::collections::HashMap;

pub(crate) fn rasterize_pattern(
    pattern: &FeaturePattern,
    cell_size: f64,
    extent: &StudyArea,
) -> Result<OccupancyGrid> {
    if !(cell_size > 0.0) || !cell_size.is_finite() {
        return Err(Error::invalid_parameter(
            "cell_size",
            cell_size,
            "must be a positive finite number",
        ));
    }

    let rows = (extent.height() / cell_size).ceil().max(1.0) as usize;
    let cols = (extent.width() / cell_size).ceil().max(1.0) as usize;
    let transform = GridTransform::new(extent.min_x(), extent.max_y(), cell_size);
    let mut grid = OccupancyGrid::empty(rows, cols, transform);

    match pattern.kind() {
        GeometryKind::Point => rasterize_points(pattern, extent, &mut grid)?,
        GeometryKind::Polyline => rasterize_polylines(pattern, extent, &mut grid)?,
    }

    Ok(grid)
}

/// Bin a coordinate into a cell index, keeping features that lie exactly on
/// the east/south extent edge inside the last row/column.
fn bin(grid: &OccupancyGrid, x: f64, y: f64) -> (usize, usize) {
    let (row_f, col_f) = grid.transform().geo_to_cell(x, y);
    let row = (row_f.floor() as usize).min(grid.rows() - 1);
    let col = (col_f.floor() as usize).min(grid.cols() - 1);
    (row, col)
}

/// Most-frequent-value aggregation for point patterns
fn rasterize_points(
    pattern: &FeaturePattern,
    extent: &StudyArea,
    grid: &mut OccupancyGrid,
) -> Result<()> {
    // Vote tallies per cell, keyed by the attribute value's bit pattern
    let mut votes: HashMap<(usize, usize), HashMap<u64, u32>> = HashMap::new();

    for feature in pattern.iter() {
        let point = match &feature.geometry {
            PatternGeometry::Point(p) => p,
            PatternGeometry::Polyline(_) => continue,
        };
        if !extent.contains_point(point.x(), point.y()) {
            continue;
        }
        let cell = bin(grid, point.x(), point.y());
        *votes
            .entry(cell)
            .or_default()
            .entry(feature.value.to_bits())
            .or_insert(0) += 1;
    }

    for ((row, col), tally) in votes {
        let mut best: Option<(u32, f64)> = None;
        for (&bits, &count) in &tally {
            let value = f64::from_bits(bits);
            let better = match best {
                None => true,
                Some((best_count, best_value)) => {
                    count > best_count || (count == best_count && value < best_value)
                }
            };
            if better {
                best = Some((count, value));
            }
        }
        if let Some((_, value)) = best {
            grid.set(row, col, value)?;
        }
    }

    Ok(())
}

/// Maximum-covered-length aggregation for polyline patterns
fn rasterize_polylines(
    pattern: &FeaturePattern,
    extent: &StudyArea,
    grid: &mut OccupancyGrid,
) -> Result<()> {
    // Covered length per cell, keyed by the attribute value's bit pattern
    let mut lengths: HashMap<(usize, usize), HashMap<u64, f64>> = HashMap::new();

    for feature in pattern.iter() {
        let line = match &feature.geometry {
            PatternGeometry::Polyline(ls) => ls,
            PatternGeometry::Point(_) => continue,
        };
        for segment in line.lines() {
            accumulate_segment(grid, extent, &segment, feature.value, &mut lengths);
        }
    }

    for ((row, col), tally) in lengths {
        let mut best: Option<(f64, f64)> = None;
        for (&bits, &length) in &tally {
            let value = f64::from_bits(bits);
            let better = match best {
                None => true,
                Some((best_length, best_value)) => {
                    length > best_length || (length == best_length && value < best_value)
                }
            };
            if better {
                best = Some((length, value));
            }
        }
        if let Some((_, value)) = best {
            grid.set(row, col, value)?;
        }
    }

    Ok(())
}

/// Distribute one segment's length over the cells it crosses.
///
/// For each candidate cell, the segment is clipped to the cell rectangle by
/// intersecting the parameter intervals of the x and y slabs (Liang-Barsky);
/// the clipped parameter span times the segment length is the covered length.
fn accumulate_segment(
    grid: &OccupancyGrid,
    extent: &StudyArea,
    segment: &Line<f64>,
    value: f64,
    lengths: &mut HashMap<(usize, usize), HashMap<u64, f64>>,
) {
    let (x0, y0) = (segment.start.x, segment.start.y);
    let (x1, y1) = (segment.end.x, segment.end.y);
    let seg_len = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
    if seg_len == 0.0 {
        return;
    }

    // Candidate cell range from the segment's bounding box, clamped to the grid
    let cell = grid.cell_size();
    let min_x = x0.min(x1).max(extent.min_x());
    let max_x = x0.max(x1).min(extent.max_x());
    let min_y = y0.min(y1).max(extent.min_y());
    let max_y = y0.max(y1).min(extent.max_y());
    if min_x > max_x || min_y > max_y {
        return; // entirely outside the extent
    }

    let (row_hi, col_lo) = bin(grid, min_x, max_y);
    let (row_lo, col_hi) = bin(grid, max_x, min_y);

    for row in row_hi..=row_lo {
        for col in col_lo..=col_hi {
            let cx0 = extent.min_x() + col as f64 * cell;
            let cy1 = extent.max_y() - row as f64 * cell;
            let (cx1, cy0) = (cx0 + cell, cy1 - cell);

            let span = match (clip_span(x0, x1, cx0, cx1), clip_span(y0, y1, cy0, cy1)) {
                (Some(sx), Some(sy)) => intersect(sx, sy),
                _ => None,
            };
            if let Some((t0, t1)) = span {
                let covered = (t1 - t0) * seg_len;
                if covered > 0.0 {
                    *lengths
                        .entry((row, col))
                        .or_default()
                        .entry(value.to_bits())
                        .or_insert(0.0) += covered;
                }
            }
        }
    }
}

/// Parameter interval of `a0 + t*(a1-a0)` inside the slab `[lo, hi]`,
/// clamped to [0, 1]. `None` when the segment misses the slab entirely.
fn clip_span(a0: f64, a1: f64, lo: f64, hi: f64) -> Option<(f64, f64)> {
    let d = a1 - a0;
    if d.abs() < f64::EPSILON {
        // Parallel to the slab: inside for all t or none
        return (a0 >= lo && a0 <= hi).then_some((0.0, 1.0));
    }
    let (mut t0, mut t1) = ((lo - a0) / d, (hi - a0) / d);
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    let (t0, t1) = (t0.max(0.0), t1.min(1.0));
    (t0 <= t1).then_some((t0, t1))
}

fn intersect(a: (f64, f64), b: (f64, f64)) -> Option<(f64, f64)> {
    let lo = a.0.max(b.0);
    let hi = a.1.min(b.1);
    (lo <= hi).then_some((lo, hi))
}
