use crate::error::ChartResult;
use crate::render::PathPrimitive;

/// Backend-agnostic scene for one segment draw pass.
///
/// Primitives are stored in draw order: fills before strokes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    pub paths: Vec<PathPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for path in &self.paths {
            path.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.paths.iter().filter(|path| path.is_fill()).count()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.paths.len() - self.fill_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
