use crate::{
    animation::transition::Transition,
    foundation::core::{Point, ShotIndex, Size},
    scene::{Scene, primitives::TEXT_COLOR},
    visual::model::{Element, ElementState, Geometry, Paint, VisualState},
};

const VIEW_BOX: Size = Size::new(1200.0, 600.0);
const MARGIN_X: f64 = 60.0;
const HEADER_Y: f64 = 90.0;
const HEADER_SIZE: f64 = 36.0;
const FIRST_BULLET_Y: f64 = 160.0;
const BULLET_STEP: f64 = 48.0;
const BULLET_SIZE: f64 = 22.0;

/// Header plus bullets revealed one per shot.
///
/// Bullet `i` shows from shot `i + 1`. The slide completes one shot after the last bullet
/// appears so it can rest on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct BulletSlide {
    name: String,
    header: String,
    bullets: Vec<String>,
}

impl BulletSlide {
    /// Build a slide from literal text.
    pub fn new(
        name: impl Into<String>,
        header: impl Into<String>,
        bullets: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            header: header.into(),
            bullets: bullets.into_iter().map(Into::into).collect(),
        }
    }

    /// Slide header.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Bullet lines in reveal order.
    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }
}

impl Scene for BulletSlide {
    fn name(&self) -> &str {
        &self.name
    }

    fn terminal_shot(&self) -> ShotIndex {
        ShotIndex(self.bullets.len() as u64 + 1)
    }

    fn render(&self, shot: ShotIndex) -> VisualState {
        let header = Geometry::Text {
            origin: Point::new(MARGIN_X, HEADER_Y),
            content: self.header.clone(),
        };
        let mut elements = vec![Element {
            id: "header".to_string(),
            paint: Paint::text(TEXT_COLOR, HEADER_SIZE),
            initial: ElementState::shown(header.clone()),
            animate: ElementState::shown(header),
            transition: Transition::default(),
        }];

        for (i, text) in self.bullets.iter().enumerate() {
            let line = Geometry::Text {
                origin: Point::new(MARGIN_X + 20.0, FIRST_BULLET_Y + i as f64 * BULLET_STEP),
                content: format!("\u{2022} {text}"),
            };
            let visible = shot >= ShotIndex(i as u64 + 1);
            elements.push(Element {
                id: format!("bullet-{i}"),
                paint: Paint::text(TEXT_COLOR, BULLET_SIZE),
                initial: ElementState::hidden(line.clone()),
                animate: ElementState::visible_if(line, visible),
                transition: Transition::over(1.0),
            });
        }

        VisualState {
            scene: self.name.clone(),
            shot,
            view_box: VIEW_BOX,
            elements,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/bullet.rs"]
mod tests;
