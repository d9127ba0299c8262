// The interface our clients expect.
pub trait Task {
    fn execute(&self) -> String;
}

// The legacy type with the incompatible call.
pub struct AggregatedTask;

impl AggregatedTask {
    pub fn run_task(&self) -> String {
        "Executing aggregated task".to_string()
    }
}

/// Wraps the legacy task so it fits the `Task` contract.
pub struct TaskAdapter {
    aggregated: AggregatedTask,
}

impl TaskAdapter {
    pub fn new(aggregated: AggregatedTask) -> Self {
        Self { aggregated }
    }
}

impl Task for TaskAdapter {
    fn execute(&self) -> String {
        self.aggregated.run_task()
    }
}

pub fn run(task: &dyn Task) -> String {
    task.execute()
}

fn main() {
    let adapter = TaskAdapter::new(AggregatedTask);

    println!("=== Legacy call, new interface ===");
    println!("direct:  {}", AggregatedTask.run_task());
    println!("adapted: {}", run(&adapter));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_forwards_to_the_legacy_call() {
        let adapter = TaskAdapter::new(AggregatedTask);
        assert_eq!(adapter.execute(), "Executing aggregated task");
    }

    #[test]
    fn test_adapter_satisfies_the_client_contract() {
        let adapter = TaskAdapter::new(AggregatedTask);
        assert_eq!(run(&adapter), AggregatedTask.run_task());
    }
}
