//! Path commands, pens and glyph outlines.

use crate::error::ReplayError;

/// Receiver for a stream of path commands.
pub trait OutlinePen {
    /// Begin a new subpath at (x, y).
    fn move_to(&mut self, x: f32, y: f32);

    /// Line from the current point to (x, y).
    fn line_to(&mut self, x: f32, y: f32);

    /// Quadratic bezier from the current point via the control point
    /// (cx0, cy0) to (x, y).
    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32);

    /// Cubic bezier from the current point via the control points
    /// (cx0, cy0) and (cx1, cy1) to (x, y).
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32);

    /// Close the current subpath.
    fn close(&mut self);
}

/// Single recorded element of a glyph outline, in font units with y up.
///
/// The five kinds form a closed set; replay matches exhaustively, so an
/// outline can never carry a command the filler silently drops.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub enum PathCommand {
    /// Begin a new subpath at (x, y).
    MoveTo { x: f32, y: f32 },
    /// Line to (x, y).
    LineTo { x: f32, y: f32 },
    /// Quadratic bezier via (cx0, cy0) to (x, y).
    QuadTo { cx0: f32, cy0: f32, x: f32, y: f32 },
    /// Cubic bezier via (cx0, cy0) and (cx1, cy1) to (x, y).
    CurveTo {
        cx0: f32,
        cy0: f32,
        cx1: f32,
        cy1: f32,
        x: f32,
        y: f32,
    },
    /// Close the current subpath.
    Close,
}

impl OutlinePen for Vec<PathCommand> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(PathCommand::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(PathCommand::LineTo { x, y })
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.push(PathCommand::QuadTo { cx0, cy0, x, y })
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.push(PathCommand::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        })
    }

    fn close(&mut self) {
        self.push(PathCommand::Close)
    }
}

/// A glyph outline: ordered path commands plus the horizontal advance.
///
/// An outline may be empty (zero commands); that is the normal shape of
/// the space character, not an error.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct GlyphOutline {
    commands: Vec<PathCommand>,
    advance_width: f32,
}

impl GlyphOutline {
    pub fn new(commands: Vec<PathCommand>, advance_width: f32) -> Self {
        Self {
            commands,
            advance_width,
        }
    }

    /// Outline with no commands and the given advance.
    pub fn empty(advance_width: f32) -> Self {
        Self::new(Vec::new(), advance_width)
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Horizontal advance in font units.
    pub fn advance_width(&self) -> f32 {
        self.advance_width
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replays the command stream through `pen`, validating the subpath
    /// invariant: every subpath opens with `MoveTo`, and `Close` ends one
    /// without implying the next.
    pub fn replay(&self, pen: &mut impl OutlinePen) -> Result<(), ReplayError> {
        let mut in_subpath = false;
        for (index, command) in self.commands.iter().enumerate() {
            if !in_subpath && !matches!(command, PathCommand::MoveTo { .. }) {
                return Err(ReplayError::MissingMoveTo(index));
            }
            match *command {
                PathCommand::MoveTo { x, y } => {
                    pen.move_to(x, y);
                    in_subpath = true;
                }
                PathCommand::LineTo { x, y } => pen.line_to(x, y),
                PathCommand::QuadTo { cx0, cy0, x, y } => pen.quad_to(cx0, cy0, x, y),
                PathCommand::CurveTo {
                    cx0,
                    cy0,
                    cx1,
                    cy1,
                    x,
                    y,
                } => pen.curve_to(cx0, cy0, cx1, cy1, x, y),
                PathCommand::Close => {
                    pen.close();
                    in_subpath = false;
                }
            }
        }
        Ok(())
    }
}
