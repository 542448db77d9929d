use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PixelPoint;

/// One drawing instruction inside a sub-path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    Close,
}

/// Contiguous outline started by a single move-to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubPath {
    commands: Vec<PathCommand>,
}

impl SubPath {
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn start(&self) -> Option<PixelPoint> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(point)) => Some(*point),
            _ => None,
        }
    }

    /// Last point visited, ignoring a trailing close.
    #[must_use]
    pub fn end(&self) -> Option<PixelPoint> {
        self.commands.iter().rev().find_map(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(*point),
            PathCommand::Close => None,
        })
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Number of line-to commands. Zero means a degenerate (point-only) path.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::LineTo(_)))
            .count()
    }

    #[must_use]
    pub fn points(&self) -> Vec<PixelPoint> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(*point),
                PathCommand::Close => None,
            })
            .collect()
    }
}

/// Pixel-space path made of independent sub-paths.
///
/// Sub-paths are never merged: each stacked run is filled on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaPath {
    sub_paths: SmallVec<[SubPath; 2]>,
}

impl AreaPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: PixelPoint) {
        self.sub_paths.push(SubPath {
            commands: vec![PathCommand::MoveTo(point)],
        });
    }

    /// Appends a line to the open sub-path; starts one when none exists.
    pub fn line_to(&mut self, point: PixelPoint) {
        match self.sub_paths.last_mut() {
            Some(sub_path) if !sub_path.is_closed() => {
                sub_path.commands.push(PathCommand::LineTo(point));
            }
            _ => self.move_to(point),
        }
    }

    pub fn close(&mut self) {
        if let Some(sub_path) = self.sub_paths.last_mut() {
            if !sub_path.commands.is_empty() && !sub_path.is_closed() {
                sub_path.commands.push(PathCommand::Close);
            }
        }
    }

    pub fn reset(&mut self) {
        self.sub_paths.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sub_paths.is_empty()
    }

    #[must_use]
    pub fn sub_paths(&self) -> &[SubPath] {
        &self.sub_paths
    }

    #[must_use]
    pub fn sub_path_count(&self) -> usize {
        self.sub_paths.len()
    }

    pub fn commands(&self) -> impl Iterator<Item = &PathCommand> {
        self.sub_paths.iter().flat_map(|sub_path| sub_path.commands.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_to_without_open_sub_path_starts_one() {
        let mut path = AreaPath::new();
        path.line_to(PixelPoint::new(1.0, 2.0));
        path.close();
        path.line_to(PixelPoint::new(3.0, 4.0));

        assert_eq!(path.sub_path_count(), 2);
        assert_eq!(path.sub_paths()[1].start(), Some(PixelPoint::new(3.0, 4.0)));
    }

    #[test]
    fn end_skips_trailing_close() {
        let mut path = AreaPath::new();
        path.move_to(PixelPoint::new(0.0, 0.0));
        path.line_to(PixelPoint::new(5.0, 5.0));
        path.close();

        let sub_path = &path.sub_paths()[0];
        assert!(sub_path.is_closed());
        assert_eq!(sub_path.end(), Some(PixelPoint::new(5.0, 5.0)));
        assert_eq!(sub_path.segment_count(), 1);
    }
}
