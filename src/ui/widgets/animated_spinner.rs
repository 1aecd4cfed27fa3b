// SPDX-License-Identifier: MPL-2.0
//! Animated tail spinner drawn on a Canvas.
//!
//! The widget is stateless; the caller advances the rotation angle on each
//! tick and rebuilds the spinner.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Angular length of the visible tail (270°).
const TAIL_SWEEP: f32 = PI * 1.5;

/// Line segments used to approximate the tail arc.
const SEGMENTS: u16 = 36;

const STROKE_WIDTH: f32 = 4.0;

/// Spinner with a fading tail, rotated by a caller-supplied angle.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner with the given color and rotation angle in radians.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    /// Overrides the edge length of the square canvas.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                // Head of the tail sits at the rotation angle, starting from 12 o'clock
                let head = self.rotation - PI / 2.0;
                let tail = head - TAIL_SWEEP;
                let step = TAIL_SWEEP / f32::from(SEGMENTS);

                // Each segment is stroked separately so opacity can fade toward the tail
                for i in 0..SEGMENTS {
                    let from = tail + step * f32::from(i);
                    let to = from + step;
                    let alpha = f32::from(i + 1) / f32::from(SEGMENTS);

                    let segment = Path::line(
                        Point::new(center.x + radius * from.cos(), center.y + radius * from.sin()),
                        Point::new(center.x + radius * to.cos(), center.y + radius * to.sin()),
                    );
                    frame.stroke(
                        &segment,
                        Stroke::default()
                            .with_width(STROKE_WIDTH)
                            .with_color(Color {
                                a: self.color.a * alpha,
                                ..self.color
                            })
                            .with_line_cap(canvas::LineCap::Round),
                    );
                }
            });

        vec![geometry]
    }
}
