//! Bridge: Shapes and Drawing APIs
//!
//! This example demonstrates separating an abstraction from its implementation.
//!
//! Key concepts:
//! - Shapes know their geometry, not how to draw
//! - Swapping the drawing API changes rendering for every shape
//!
//! Run with: cargo run --example bridge

use remote_patterns::patterns::bridge::{
    Circle, DrawingApi, Rectangle, Shape, V1DrawingApi, V2DrawingApi,
};
use std::rc::Rc;

fn main() {
    println!("{:=^50}", "v1");
    let v1: Rc<dyn DrawingApi> = Rc::new(V1DrawingApi);
    println!("{}", Circle::new(10, 20, 5, Rc::clone(&v1)).draw());
    println!("{}", Rectangle::new(30, 40, 10, 8, v1).draw());

    println!("{:=^50}", "v2");
    let v2: Rc<dyn DrawingApi> = Rc::new(V2DrawingApi);
    println!("{}", Circle::new(100, 150, 25, Rc::clone(&v2)).draw());
    println!("{}", Rectangle::new(200, 250, 70, 40, v2).draw());
}
