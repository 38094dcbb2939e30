//! Bridge: shapes decoupled from the API that draws them.

use std::rc::Rc;

/// Low-level drawing backend.
pub trait DrawingApi {
    fn draw_circle(&self, x: i32, y: i32, radius: u32) -> String;
    fn draw_rectangle(&self, x: i32, y: i32, width: u32, height: u32) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct V1DrawingApi;

impl DrawingApi for V1DrawingApi {
    fn draw_circle(&self, x: i32, y: i32, radius: u32) -> String {
        format!("[V1] Circle at ({x},{y}) radius {radius}")
    }

    fn draw_rectangle(&self, x: i32, y: i32, width: u32, height: u32) -> String {
        format!("[V1] Rectangle at ({x},{y}) width {width} height {height}")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct V2DrawingApi;

impl DrawingApi for V2DrawingApi {
    fn draw_circle(&self, x: i32, y: i32, radius: u32) -> String {
        format!("[V2] Smooth Circle at ({x},{y}) radius {radius}")
    }

    fn draw_rectangle(&self, x: i32, y: i32, width: u32, height: u32) -> String {
        format!("[V2] Filled Rectangle at ({x},{y}) width {width} height {height}")
    }
}

/// High-level shape, drawn through whichever API it was given.
pub trait Shape {
    fn draw(&self) -> String;
}

/// ```rust
/// use remote_patterns::patterns::bridge::{Circle, Shape, V2DrawingApi};
/// use std::rc::Rc;
///
/// let circle = Circle::new(1, 2, 3, Rc::new(V2DrawingApi));
/// assert_eq!(circle.draw(), "[V2] Smooth Circle at (1,2) radius 3");
/// ```
pub struct Circle {
    x: i32,
    y: i32,
    radius: u32,
    api: Rc<dyn DrawingApi>,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: u32, api: Rc<dyn DrawingApi>) -> Self {
        Self { x, y, radius, api }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        self.api.draw_circle(self.x, self.y, self.radius)
    }
}

pub struct Rectangle {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    api: Rc<dyn DrawingApi>,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: u32, height: u32, api: Rc<dyn DrawingApi>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            api,
        }
    }
}

impl Shape for Rectangle {
    fn draw(&self) -> String {
        self.api
            .draw_rectangle(self.x, self.y, self.width, self.height)
    }
}
