// =============================================================================
// Subsystems the client should not have to know about
// =============================================================================

pub struct SubsystemA;

impl SubsystemA {
    pub fn operation_a(&self) -> String {
        "SubsystemA: Ready!".to_string()
    }

    pub fn operation_b(&self) -> String {
        "SubsystemA: Go!".to_string()
    }
}

pub struct SubsystemB;

impl SubsystemB {
    pub fn operation_c(&self) -> String {
        "SubsystemB: Get ready!".to_string()
    }

    pub fn operation_d(&self) -> String {
        "SubsystemB: Fire!".to_string()
    }
}

// =============================================================================
// The facade: one front door over both subsystems
// =============================================================================

pub struct Launcher {
    subsystem_a: SubsystemA,
    subsystem_b: SubsystemB,
}

impl Launcher {
    pub fn new(subsystem_a: SubsystemA, subsystem_b: SubsystemB) -> Self {
        Self {
            subsystem_a,
            subsystem_b,
        }
    }

    pub fn operation_a(&self) -> String {
        self.subsystem_a.operation_a()
    }

    pub fn operation_b(&self) -> String {
        self.subsystem_a.operation_b()
    }

    pub fn operation_c(&self) -> String {
        self.subsystem_b.operation_c()
    }

    pub fn operation_d(&self) -> String {
        self.subsystem_b.operation_d()
    }

    /// The whole point of the facade: one call runs the full sequence.
    pub fn launch_sequence(&self) -> Vec<String> {
        vec![
            self.operation_a(),
            self.operation_c(),
            self.operation_b(),
            self.operation_d(),
        ]
    }
}

fn main() {
    let launcher = Launcher::new(SubsystemA, SubsystemB);

    println!("=== Individual operations ===");
    println!("{}", launcher.operation_a());
    println!("{}", launcher.operation_d());

    println!("\n=== Full launch sequence ===");
    for line in launcher.launch_sequence() {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_passes_operations_through() {
        let launcher = Launcher::new(SubsystemA, SubsystemB);
        assert_eq!(launcher.operation_a(), "SubsystemA: Ready!");
        assert_eq!(launcher.operation_b(), "SubsystemA: Go!");
        assert_eq!(launcher.operation_c(), "SubsystemB: Get ready!");
        assert_eq!(launcher.operation_d(), "SubsystemB: Fire!");
    }

    #[test]
    fn test_launch_sequence_runs_in_order() {
        let launcher = Launcher::new(SubsystemA, SubsystemB);
        assert_eq!(
            launcher.launch_sequence(),
            vec![
                "SubsystemA: Ready!",
                "SubsystemB: Get ready!",
                "SubsystemA: Go!",
                "SubsystemB: Fire!",
            ]
        );
    }
}
