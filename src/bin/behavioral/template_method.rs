// =============================================================================
// The recipe skeleton lives in the trait; makers fill in two steps
// =============================================================================

pub trait Beverage {
    fn brew(&self) -> String;
    fn add_condiments(&self) -> String;

    /// The template method: fixed step order, customized steps plugged in.
    fn prepare(&self) -> Vec<String> {
        vec![
            "Boiling water".to_string(),
            self.brew(),
            "Pouring into cup".to_string(),
            self.add_condiments(),
        ]
    }
}

pub struct TeaMaker;

impl Beverage for TeaMaker {
    fn brew(&self) -> String {
        "Steeping the tea".to_string()
    }

    fn add_condiments(&self) -> String {
        "Adding lemon".to_string()
    }
}

pub struct CoffeeMaker;

impl Beverage for CoffeeMaker {
    fn brew(&self) -> String {
        "Dripping coffee through filter".to_string()
    }

    fn add_condiments(&self) -> String {
        "Adding sugar and milk".to_string()
    }
}

fn serve(name: &str, maker: &dyn Beverage) {
    println!("Request - {name}");
    for step in maker.prepare() {
        println!("  {step}");
    }
}

fn main() {
    println!("=== Same recipe, two beverages ===");
    serve("TeaMaker", &TeaMaker);
    println!();
    serve("CoffeeMaker", &CoffeeMaker);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tea_follows_the_skeleton() {
        assert_eq!(
            TeaMaker.prepare(),
            vec![
                "Boiling water",
                "Steeping the tea",
                "Pouring into cup",
                "Adding lemon",
            ]
        );
    }

    #[test]
    fn test_coffee_follows_the_skeleton() {
        assert_eq!(
            CoffeeMaker.prepare(),
            vec![
                "Boiling water",
                "Dripping coffee through filter",
                "Pouring into cup",
                "Adding sugar and milk",
            ]
        );
    }

    #[test]
    fn test_fixed_steps_are_shared() {
        let tea = TeaMaker.prepare();
        let coffee = CoffeeMaker.prepare();
        assert_eq!(tea[0], coffee[0]);
        assert_eq!(tea[2], coffee[2]);
        assert_ne!(tea[1], coffee[1]);
        assert_ne!(tea[3], coffee[3]);
    }
}
