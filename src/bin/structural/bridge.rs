// =============================================================================
// Implementation side: how things get colored
// =============================================================================

pub trait Color {
    fn apply_color(&self) -> &'static str;
}

pub struct Red;

impl Color for Red {
    fn apply_color(&self) -> &'static str {
        "Red"
    }
}

pub struct Blue;

impl Color for Blue {
    fn apply_color(&self) -> &'static str {
        "Blue"
    }
}

// =============================================================================
// Abstraction side: shapes hold a color, the two vary independently
// =============================================================================

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle {
    color: Box<dyn Color>,
}

impl Circle {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        format!("Drawing Circle in {}", self.color.apply_color())
    }
}

pub struct Square {
    color: Box<dyn Color>,
}

impl Square {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Shape for Square {
    fn draw(&self) -> String {
        format!("Drawing Square in {}", self.color.apply_color())
    }
}

fn main() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(Box::new(Red))),
        Box::new(Circle::new(Box::new(Blue))),
        Box::new(Square::new(Box::new(Red))),
        Box::new(Square::new(Box::new(Blue))),
    ];

    println!("=== Every shape with every color ===");
    for shape in &shapes {
        println!("{}", shape.draw());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_draws_with_its_color() {
        assert_eq!(Circle::new(Box::new(Red)).draw(), "Drawing Circle in Red");
        assert_eq!(Circle::new(Box::new(Blue)).draw(), "Drawing Circle in Blue");
    }

    #[test]
    fn test_square_draws_with_its_color() {
        assert_eq!(Square::new(Box::new(Blue)).draw(), "Drawing Square in Blue");
    }

    #[test]
    fn test_shapes_and_colors_combine_freely() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(Box::new(Red))),
            Box::new(Square::new(Box::new(Blue))),
        ];
        let drawn: Vec<String> = shapes.iter().map(|s| s.draw()).collect();
        assert_eq!(drawn, vec!["Drawing Circle in Red", "Drawing Square in Blue"]);
    }
}
