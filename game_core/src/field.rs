use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Which goal line the ball crossed, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalLine {
    Left,
    Right,
}

/// The rectangular play field.
///
/// Goal lines sit on the left and right edges, walls on the top and bottom.
/// +y is up, so `bounds.max.y` is the top wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub bounds: Aabb,
}

impl PlayField {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            bounds: Aabb::new(min, max),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    pub fn top(&self) -> f32 {
        self.bounds.max.y
    }

    pub fn bottom(&self) -> f32 {
        self.bounds.min.y
    }

    pub fn left(&self) -> f32 {
        self.bounds.min.x
    }

    pub fn right(&self) -> f32 {
        self.bounds.max.x
    }

    /// Goal line crossed by a point, judged on its center
    pub fn goal_crossed(&self, point: Vec2) -> Option<GoalLine> {
        if point.x < self.left() {
            Some(GoalLine::Left)
        } else if point.x > self.right() {
            Some(GoalLine::Right)
        } else {
            None
        }
    }
}
